//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split normalized text into [`Token`](crate::analysis::token::Token)s.
//! Every tokenizer here is lossless: concatenating the produced tokens gives
//! back the input exactly, and no token is empty.
//!
//! # Available Tokenizers
//!
//! - [`cyrillic_run::CyrillicRunTokenizer`] - Alternating Cyrillic / non-Cyrillic runs
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::tokenizer::Tokenizer;
//! use rusbasic::analysis::tokenizer::cyrillic_run::CyrillicRunTokenizer;
//!
//! let tokenizer = CyrillicRunTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("по-своему.").unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["по", "-", "своему", "."]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a parser can be shared across threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod cyrillic_run;
