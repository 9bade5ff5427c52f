use std::{env, path::Path};

fn main() {
    let words = include_str!("words.txt")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>();

    string_cache_codegen::AtomType::new("JsWord", "js_word!")
        .atoms(words)
        .atoms([""])
        .write_to_file(&Path::new(&env::var("OUT_DIR").unwrap()).join("js_word.rs"))
        .unwrap();

    println!("cargo:rerun-if-changed=words.txt");
}
