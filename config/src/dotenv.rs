//! Minimal `.env` parser: KEY=VALUE lines, `#` comments, optional quotes.
//!
//! No multiline values or line continuation. Application to the process
//! environment (and the no-overwrite rule) lives in the crate root.

use std::path::Path;

/// Strips one layer of surrounding quotes. Double quotes support the `\"`
/// escape; single quotes are stripped without escape handling.
fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return value[1..value.len() - 1].replace("\\\"", "\"");
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_string();
    }
    value.to_string()
}

/// Parses `.env` content into key-value pairs. Empty lines, `#` comment
/// lines and lines without `=` are skipped; keys and values are trimmed.
fn parse(content: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        out.push((key.to_string(), unquote(value.trim())));
    }
    out
}

/// Reads `.env` from `override_dir` (or the current directory) and parses
/// it. A missing file yields no pairs.
pub(crate) fn load(override_dir: Option<&Path>) -> std::io::Result<Vec<(String, String)>> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(d) => d,
            Err(_) => return Ok(Vec::new()),
        },
    };
    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(parse(&content))
}
