//! Parser configuration.
//!
//! A [`ParserConfig`] can be built in code or read from a JSON file; missing
//! fields take their defaults.
//!
//! ```json
//! {
//!   "case_sensitive": false,
//!   "split_digits": true,
//!   "default_phrases": true,
//!   "phrase_files": ["phrases/conjunctions.txt"]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RusbasicError};

/// Configuration for [`WordParser`](crate::analysis::parser::WordParser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Match phrases without case folding.
    ///
    /// Only affects matching; output tokens always keep their original case.
    pub case_sensitive: bool,

    /// Emit ASCII digit runs as their own tokens.
    pub split_digits: bool,

    /// Register the built-in list of common conjunction phrases.
    pub default_phrases: bool,

    /// Phrase files to load (plain text or JSON).
    pub phrase_files: Vec<PathBuf>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            split_digits: true,
            default_phrases: false,
            phrase_files: Vec::new(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from a JSON file.
    ///
    /// Relative phrase file paths are resolved against the config file's directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RusbasicError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config: ParserConfig = serde_json::from_str(&content).map_err(|e| {
            RusbasicError::config(format!(
                "Failed to parse config JSON from '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let Some(base) = path.parent() {
            for file in &mut config.phrase_files {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        debug!("loaded parser config from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Check that every phrase file exists.
    pub fn validate(&self) -> Result<()> {
        for file in &self.phrase_files {
            if !file.is_file() {
                return Err(RusbasicError::config(format!(
                    "Phrase file not found: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_split_digits(mut self, split_digits: bool) -> Self {
        self.split_digits = split_digits;
        self
    }

    pub fn with_default_phrases(mut self, default_phrases: bool) -> Self {
        self.default_phrases = default_phrases;
        self
    }

    pub fn with_phrase_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.phrase_files.push(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert!(!config.case_sensitive);
        assert!(config.split_digits);
        assert!(!config.default_phrases);
        assert!(config.phrase_files.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ParserConfig = serde_json::from_str(r#"{"case_sensitive": true}"#).unwrap();
        assert!(config.case_sensitive);
        assert!(config.split_digits);
    }

    #[test]
    fn test_load_resolves_relative_phrase_files() {
        let dir = tempfile::tempdir().unwrap();
        let phrases = dir.path().join("phrases.txt");
        fs::write(&phrases, "потому что\n").unwrap();

        let config_path = dir.path().join("config.json");
        let mut file = fs::File::create(&config_path).unwrap();
        write!(file, r#"{{"default_phrases": true, "phrase_files": ["phrases.txt"]}}"#).unwrap();

        let config = ParserConfig::load_from_file(&config_path).unwrap();
        assert!(config.default_phrases);
        assert_eq!(config.phrase_files, vec![phrases]);
    }

    #[test]
    fn test_missing_phrase_file_fails_validation() {
        let config = ParserConfig::new().with_phrase_file("/nonexistent/phrases.txt");
        match config.validate() {
            Err(RusbasicError::Config(msg)) => assert!(msg.contains("not found")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, "[1, 2").unwrap();
        assert!(ParserConfig::load_from_file(&config_path).is_err());
    }
}
