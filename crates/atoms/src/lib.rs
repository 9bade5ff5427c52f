//! Interned identifier and string text used by the ast.
//!
//! `JsWord` compares and hashes by its exact text. Words listed in
//! `words.txt` are static atoms and can be spelled with `js_word!`.

#![allow(clippy::all)]

include!(concat!(env!("OUT_DIR"), "/js_word.rs"));
