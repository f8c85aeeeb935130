//! Text normalization ahead of segmentation.
//!
//! The normalizer folds dash variants into the hyphen and decomposes the text
//! into NFKD so that stressed vowels become a base letter followed by
//! combining marks. Nothing else changes: casing, whitespace and punctuation
//! pass through untouched.
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::alphabet::Alphabet;
//! use rusbasic::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::new(&Alphabet::russian()).unwrap();
//! assert_eq!(normalizer.normalize("по\u{2013}своему"), "по-своему");
//! assert_eq!(normalizer.normalize("ёлка"), "е\u{0308}лка");
//! ```

use std::sync::Arc;

use crate::analysis::alphabet::Alphabet;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::error::Result;

/// An ordered chain of char filters.
#[derive(Clone)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Normalizer {
    /// Dash folding followed by NFKD decomposition.
    pub fn new(alphabet: &Alphabet) -> Result<Self> {
        let dashes = MappingCharFilter::char_to_char(alphabet.en_dash(), alphabet.hyphen())?;
        Ok(Self::empty()
            .add_char_filter(Arc::new(dashes))
            .add_char_filter(Arc::new(UnicodeNormalizationCharFilter::new(
                NormalizationForm::NFKD,
            ))))
    }

    /// A normalizer that returns its input unchanged.
    pub fn empty() -> Self {
        Normalizer {
            char_filters: Vec::new(),
        }
    }

    /// Append a char filter to the chain.
    pub fn add_char_filter(mut self, filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(filter);
        self
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Run every char filter over `text`, in order.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = text.to_string();
        for filter in &self.char_filters {
            current = filter.filter(&current);
        }
        current
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field(
                "char_filters",
                &self.char_filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dashes_and_decomposition() {
        let normalizer = Normalizer::new(&Alphabet::russian()).unwrap();
        let text = "Жила\u{0301}\u{2013}была\u{0301} — й";
        assert_eq!(
            normalizer.normalize(text),
            "Жила\u{0301}-была\u{0301} — и\u{0306}"
        );
    }

    #[test]
    fn test_preserves_case_and_whitespace() {
        let normalizer = Normalizer::new(&Alphabet::russian()).unwrap();
        let text = "Все счастливые семьи,\n\tпохожи!";
        assert_eq!(normalizer.normalize(text), text);
    }

    #[test]
    fn test_empty_normalizer() {
        let normalizer = Normalizer::empty();
        assert_eq!(normalizer.normalize("ё\u{2013}"), "ё\u{2013}");
        assert!(normalizer.char_filters().is_empty());
    }

    #[test]
    fn test_debug_lists_filters() {
        let normalizer = Normalizer::new(&Alphabet::russian()).unwrap();
        let debug = format!("{normalizer:?}");
        assert!(debug.contains("mapping"));
        assert!(debug.contains("unicode_normalization"));
    }
}
