use anyhow::{bail, Context, Result};
use ast::{count_kinds, flatten, json, Node, Program};
use config::{convert_json_err, load_config, Config};
use std::{
    env,
    fs::read_to_string,
    io::{self, Write},
    path::Path,
    process,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

const USAGE: &str = "usage: ast_tool <ast.json> [other.json]";

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("AST_TOOL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_program(content: &str) -> Result<Program> {
    json::parse_program(content).map_err(|e| convert_json_err(e, "ast"))
}

fn load_program(path: &Path) -> Result<Program> {
    let content = read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let program = parse_program(&content)?;
    info!("loaded {} ({} statements)", path.display(), program.statements().len());
    Ok(program)
}

/// Writes kind counts, and nodes and hashes when the config asks for them.
fn report(program: &Program, config: &Config, out: &mut impl Write) -> io::Result<()> {
    let mut counts: Vec<_> = count_kinds(program).into_iter().collect();
    counts.sort();

    for (kind, n) in counts {
        writeln!(out, "{:>32} {}", kind.as_str(), n)?;
    }

    if config.print_nodes {
        for node in flatten(program) {
            if config.print_hashes {
                writeln!(out, "{:016x} {:?}", node.structural_hash(), node)?;
            } else {
                writeln!(out, "{:?}", node)?;
            }
        }
    }

    if config.print_hashes {
        writeln!(out, "hash: {:016x}", program.structural_hash())?;
    }

    Ok(())
}

/// Returns whether the two trees are equal.
fn compare(
    (a, a_name): (&Program, &str),
    (b, b_name): (&Program, &str),
    config: &Config,
    out: &mut impl Write,
) -> io::Result<bool> {
    if config.print_hashes {
        writeln!(out, "{:016x} {}", a.structural_hash(), a_name)?;
        writeln!(out, "{:016x} {}", b.structural_hash(), b_name)?;
    }

    let equal = a == b;
    debug!(equal, "compared {} and {}", a_name, b_name);
    writeln!(out, "{}", if equal { "equal" } else { "different" })?;

    Ok(equal)
}

/// Runs the tool on its file arguments. `Ok(false)` means two trees differ.
fn run(files: &[String], config: &Config, out: &mut impl Write) -> Result<bool> {
    match files {
        [file] => {
            let program = load_program(Path::new(file))?;
            report(&program, config, out)?;
            Ok(true)
        }
        [left, right] => {
            let a = load_program(Path::new(left))?;
            let b = load_program(Path::new(right))?;

            let equal = compare((&a, left.as_str()), (&b, right.as_str()), config, out)?;
            Ok(equal)
        }
        _ => bail!(USAGE),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config = load_config(Path::new("ast_tool.json"))?;
    init_logging(&config);
    debug!(?config, "loaded config");

    let stdout = io::stdout();
    let equal = run(args.get(1..).unwrap_or_default(), &config, &mut stdout.lock())?;

    if !equal {
        process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const A: &str = r#"{
        "type": "Script",
        "statements": [{
            "type": "ExpressionStatement",
            "expression": {
                "type": "StaticMemberExpression",
                "object": { "type": "IdentifierExpression", "name": "a" },
                "property": "b"
            }
        }]
    }"#;

    const B: &str = r#"{
        "type": "Script",
        "statements": [{
            "type": "ExpressionStatement",
            "expression": {
                "type": "StaticMemberExpression",
                "object": { "type": "IdentifierExpression", "name": "a" },
                "property": "c"
            }
        }]
    }"#;

    fn quiet() -> Config {
        Config {
            print_hashes: false,
            ..Config::default()
        }
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> io::Result<bool>) -> (bool, String) {
        let mut out = vec![];
        let result = f(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn report_counts_kinds() {
        let program = parse_program(A).unwrap();
        let (_, text) = output(|out| report(&program, &quiet(), out).map(|_| true));

        let lines: Vec<_> = text.lines().map(str::trim).collect();
        assert_eq!(
            lines,
            [
                "StaticMemberExpression 1",
                "IdentifierExpression 1",
                "Script 1",
                "ExpressionStatement 1",
            ]
        );
    }

    #[test]
    fn report_prints_nodes_and_hash() {
        let program = parse_program(A).unwrap();
        let config = Config {
            print_nodes: true,
            ..Config::default()
        };
        let (_, text) = output(|out| report(&program, &config, out).map(|_| true));

        let hash = format!("hash: {:016x}", program.structural_hash());
        assert_eq!(text.lines().last(), Some(hash.as_str()));
        assert!(text.contains("IdentifierExpression"), "{}", text);
    }

    #[test]
    fn equal_trees() {
        let a = parse_program(A).unwrap();
        let again = parse_program(A).unwrap();

        let (equal, text) = output(|out| compare((&a, "a"), (&again, "b"), &quiet(), out));
        assert!(equal);
        assert_eq!(text, "equal\n");
    }

    #[test]
    fn different_trees() {
        let a = parse_program(A).unwrap();
        let b = parse_program(B).unwrap();

        let (equal, text) = output(|out| compare((&a, "a"), (&b, "b"), &Config::default(), out));
        assert!(!equal);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" a"));
        assert!(lines[1].ends_with(" b"));
        assert_ne!(lines[0][..16], lines[1][..16]);
        assert_eq!(lines[2], "different");
    }

    #[test]
    fn usage_error() {
        let mut out = vec![];

        let err = run(&[], &quiet(), &mut out).unwrap_err();
        assert_eq!(err.to_string(), USAGE);

        let three = ["a".to_string(), "b".into(), "c".into()];
        assert!(run(&three, &quiet(), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut out = vec![];
        let err = run(&["does/not/exist.json".to_string()], &quiet(), &mut out).unwrap_err();

        assert!(err.to_string().starts_with("Failed to read"), "{}", err);
    }

    #[test]
    fn bad_tree_has_position() {
        let err = parse_program(r#"{ "type": "Script", "statements": [{ "type": "Super" }] }"#)
            .unwrap_err();

        assert!(err.to_string().contains("unmatched data: 1:"), "{}", err);
    }
}
