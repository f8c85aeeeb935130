//! Segmenter splitting text into Cyrillic and non-Cyrillic runs.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::alphabet::Alphabet;
use crate::analysis::token::{RunKind, Token, TokenStream};
use crate::error::{Result, RusbasicError};

/// Splits text into maximal runs of word characters (letters of the alphabet
/// plus combining marks) and runs of everything else.
///
/// Expects NFKD input: a precomposed stressed vowel is not a letter of the
/// alphabet and would end the run. With `split_digits` enabled (the default),
/// ASCII digit runs are emitted separately from other non-Cyrillic text.
#[derive(Clone, Debug)]
pub struct CyrillicRunTokenizer {
    /// Matches the non-Cyrillic runs; the gaps between matches are Cyrillic runs
    pattern: Arc<Regex>,
    split_digits: bool,
}

impl CyrillicRunTokenizer {
    /// Create a tokenizer for the Russian alphabet with digit splitting.
    pub fn new() -> Result<Self> {
        Self::with_alphabet(Alphabet::russian_ref(), true)
    }

    /// Create a tokenizer for the given alphabet.
    pub fn with_alphabet(alphabet: &Alphabet, split_digits: bool) -> Result<Self> {
        let mut class = String::new();
        for c in alphabet.letters().chain(alphabet.combining_marks()) {
            if c.is_ascii_punctuation() {
                class.push('\\');
            }
            class.push(c);
        }
        if class.is_empty() {
            return Err(RusbasicError::analysis(
                "alphabet must contain at least one letter",
            ));
        }

        let pattern = if split_digits {
            format!("[0-9]+|[^0-9{class}]+")
        } else {
            format!("[^{class}]+")
        };
        let regex = Regex::new(&pattern)
            .map_err(|e| RusbasicError::analysis(format!("Invalid segmenter pattern: {e}")))?;

        Ok(CyrillicRunTokenizer {
            pattern: Arc::new(regex),
            split_digits,
        })
    }

    /// Check if digit runs are split out.
    pub fn split_digits(&self) -> bool {
        self.split_digits
    }

    /// Segment `text` into owned tokens.
    pub fn segment(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        let push = |tokens: &mut Vec<Token>, start: usize, end: usize, kind: RunKind| {
            if start < end {
                let position = tokens.len();
                tokens.push(
                    Token::with_offsets(&text[start..end], position, start, end)
                        .with_run_kind(kind),
                );
            }
        };

        for mat in self.pattern.find_iter(text) {
            push(&mut tokens, last_end, mat.start(), RunKind::Cyrillic);

            let kind = if self.split_digits && mat.as_str().starts_with(|c: char| c.is_ascii_digit())
            {
                RunKind::Digits
            } else {
                RunKind::Other
            };
            push(&mut tokens, mat.start(), mat.end(), kind);
            last_end = mat.end();
        }

        push(&mut tokens, last_end, text.len(), RunKind::Cyrillic);
        tokens
    }
}

impl Default for CyrillicRunTokenizer {
    fn default() -> Self {
        Self::new().expect("Russian alphabet pattern should be valid")
    }
}

impl Tokenizer for CyrillicRunTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.segment(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "cyrillic_run"
    }
}
