//! Text analysis for Russian word segmentation.
//!
//! Text flows through three stages:
//!
//! - [`normalizer`]: en dashes become hyphens, then NFKD decomposition
//! - [`tokenizer`]: the normalized text is cut into alternating Cyrillic and
//!   non-Cyrillic runs
//! - [`word_builder`]: runs are grouped into typed [`word::Word`]s, joining
//!   hyphenated words and registered multi-word expressions
//!
//! [`parser::WordParser`] wires the stages together.

pub mod alphabet;
pub mod char_filter;
pub mod normalizer;
pub mod parser;
pub mod phrase;
pub mod token;
pub mod tokenizer;
pub mod word;
pub mod word_builder;

pub use parser::WordParser;
pub use token::{RunKind, Token};
pub use word::{TextOptions, Word, WordList, WordType};
