//! Token types produced by the segmenter.
//!
//! A [`Token`] is an immutable, non-empty run of normalized text. Tokens are
//! the atoms the word builder groups into [`Word`](crate::analysis::word::Word)s;
//! they are never split or rewritten after segmentation.
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::token::{RunKind, Token};
//!
//! let token = Token::with_offsets("слово", 0, 0, 10).with_run_kind(RunKind::Cyrillic);
//! assert_eq!(token.text, "слово");
//! assert_eq!(token.end_offset, 10);
//! assert!(token.is_cyrillic());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the Cyrillic/non-Cyrillic split a run came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunKind {
    /// Letters of the alphabet and their combining marks
    Cyrillic,
    /// ASCII digits, split out when the segmenter is configured to
    Digits,
    /// Everything else: whitespace, punctuation, Latin text, symbols
    Other,
}

/// A contiguous run of normalized text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the normalized text
    pub start_offset: usize,

    /// The byte offset where this token ends in the normalized text
    pub end_offset: usize,

    /// Which run class produced this token
    pub kind: RunKind,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
            kind: RunKind::Other,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            kind: RunKind::Other,
        }
    }

    /// Set the run kind.
    pub fn with_run_kind(mut self, kind: RunKind) -> Self {
        self.kind = kind;
        self
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty. Segmenter output never is.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_cyrillic(&self) -> bool {
        self.kind == RunKind::Cyrillic
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// First character of the token.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the segmenter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("мир", 3);
        assert_eq!(token.text, "мир");
        assert_eq!(token.position, 3);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, "мир".len());
        assert_eq!(token.kind, RunKind::Other);
        assert_eq!(token.first_char(), Some('м'));
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets(", ", 1, 6, 8).with_run_kind(RunKind::Other);
        assert_eq!(token.len(), 2);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 8);
        assert!(!token.is_cyrillic());
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("привет", 0);
        assert_eq!(format!("{token}"), "привет");
        assert_eq!(token.as_ref(), "привет");
    }
}
