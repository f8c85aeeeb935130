//! # Rusbasic
//!
//! Segmentation of Russian text into typed words.
//!
//! ## Features
//!
//! - Lossless segmentation: joining a word list gives back the normalized input
//! - Stress marks and diacritics kept attached to their letters
//! - Hyphenated words (`по-своему`, `из-за`) kept whole
//! - Longest-match grouping of registered multi-word expressions
//! - Phrase dictionaries that can be frozen into an FST and shared across threads
//!
//! ```
//! use rusbasic::prelude::*;
//!
//! let mut parser = WordParser::new().unwrap();
//! parser.register_phrase("несмотря на");
//!
//! let words = parser.parse("Несмотря на дождь").unwrap();
//! assert_eq!(words[0].word_type(), WordType::Mwe);
//! assert_eq!(words.unique(false).len(), 2);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::alphabet::{Alphabet, DEFAULT_PHRASES};
    pub use crate::analysis::parser::WordParser;
    pub use crate::analysis::phrase::{FrozenPhraseIndex, PhraseIndex, PhraseLookup};
    pub use crate::analysis::token::Token;
    pub use crate::analysis::word::{TextOptions, Word, WordList, WordType};
    pub use crate::config::ParserConfig;
    pub use crate::error::{Result, RusbasicError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
