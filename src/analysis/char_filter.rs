//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer. The
//! [`Normalizer`](crate::analysis::normalizer::Normalizer) chains them so that
//! the segmenter only ever sees one dash literal and fully decomposed letters.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Literal replacement (e.g. en dash to hyphen)
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - Unicode normalization (NFC, NFD, NFKC, NFKD)
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::char_filter::CharFilter;
//! use rusbasic::analysis::char_filter::unicode_normalize::{
//!     NormalizationForm, UnicodeNormalizationCharFilter,
//! };
//!
//! let filter = UnicodeNormalizationCharFilter::new(NormalizationForm::NFKD);
//! assert_eq!(filter.filter("ё"), "е\u{0308}");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the rewritten text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
pub mod unicode_normalize;
