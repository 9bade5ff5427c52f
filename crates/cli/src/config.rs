use anyhow::{Context, Error, Result};
use serde::Deserialize;
use serde_json::error::Category;
use std::{fs::read_to_string, path::Path};
use tracing::debug;

#[derive(Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    /// Print every node of a tree, in traversal order.
    pub print_nodes: bool,
    pub print_hashes: bool,
    /// Filter used when `AST_TOOL_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            print_nodes: false,
            print_hashes: true,
            log_level: "warn".into(),
        }
    }
}

/// Wraps a json error with its position, `what` naming the file being read.
pub fn convert_json_err(e: serde_json::Error, what: &str) -> Error {
    let line = e.line();
    let column = e.column();

    let msg = match e.classify() {
        Category::Io => "io error",
        Category::Syntax => "syntax error",
        Category::Data => "unmatched data",
        Category::Eof => "unexpected eof",
    };
    Error::new(e).context(format!(
        "Failed to deserialize {} (json) file: {}: {}:{}",
        what, msg, line, column
    ))
}

pub fn parse_config(content: &str) -> Result<Config> {
    serde_json::from_str::<Config>(content).map_err(|e| convert_json_err(e, "config"))
}

/// Reads the config at `path`, falling back to the defaults when there is no
/// such file.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = read_to_string(path).context("Failed to read config file")?;

    parse_config(&content)
}
