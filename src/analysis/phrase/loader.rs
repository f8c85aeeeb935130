//! Loading phrase lists from files.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! - `.json`: an array of strings, e.g. `["потому что", "в течение"]`
//! - anything else: one phrase per line; blank lines and lines starting with
//!   `#` are skipped, surrounding whitespace is trimmed

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, RusbasicError};

/// Read phrases from `path`.
pub fn load_phrases_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        RusbasicError::phrase(format!(
            "Failed to read phrase file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let phrases = if is_json {
        parse_json_phrases(&content).map_err(|e| {
            RusbasicError::phrase(format!(
                "Failed to parse phrase JSON from '{}': {}",
                path.display(),
                e
            ))
        })?
    } else {
        parse_line_phrases(&content)
    };

    debug!("read {} phrases from {}", phrases.len(), path.display());
    Ok(phrases)
}

/// Parse a JSON array of strings.
pub fn parse_json_phrases(content: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(content)?)
}

/// Parse one phrase per line.
pub fn parse_line_phrases(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
