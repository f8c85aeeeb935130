//! Multi-word expression dictionaries.
//!
//! A phrase dictionary answers two questions about a candidate string built
//! from consecutive tokens:
//!
//! - is it exactly a registered phrase ([`PhraseLookup::is_complete`])?
//! - could it still grow into one ([`PhraseLookup::has_extension`])?
//!
//! Two implementations are provided and always agree:
//!
//! - [`index::PhraseIndex`] - a sorted set, open for registration
//! - [`frozen::FrozenPhraseIndex`] - an immutable FST built from a `PhraseIndex`
//!
//! Phrases and candidates share one canonical form, produced by
//! [`phrase_key`]: acute accents removed, NFKC composed and, unless the
//! dictionary is case-sensitive, lowercased.
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::phrase::{PhraseIndex, PhraseLookup};
//!
//! let mut index = PhraseIndex::new(false);
//! index.register("Несмотря на");
//! index.register("несмотря на то, что");
//!
//! assert!(index.is_complete("несмотря на"));
//! assert!(index.has_extension("несмотря на то"));
//! assert!(!index.is_complete("несмотря на то"));
//! assert!(!index.has_extension("несмотря нет"));
//! ```

use crate::analysis::alphabet::{COMBINING_ACUTE, EN_DASH, HYPHEN};
use crate::analysis::char_filter::unicode_normalize::NormalizationForm;

/// Read-only phrase dictionary queried during word building.
pub trait PhraseLookup: Send + Sync {
    /// True iff `candidate` equals a registered phrase.
    fn is_complete(&self, candidate: &str) -> bool;

    /// True iff some registered phrase starts with `candidate`.
    fn has_extension(&self, candidate: &str) -> bool;

    /// Whether candidates keep their case when matched.
    fn case_sensitive(&self) -> bool;

    /// Number of registered phrases.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the name of this dictionary (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Canonical matching form of already decomposed text.
pub fn phrase_key(text: &str, case_sensitive: bool) -> String {
    let unaccented: String = text.chars().filter(|&c| c != COMBINING_ACUTE).collect();
    let composed = NormalizationForm::NFKC.apply(&unaccented);
    if case_sensitive {
        composed
    } else {
        composed.to_lowercase()
    }
}

/// Canonical matching form of a phrase as typed by a user, in any normal form.
///
/// En dashes fold into the hyphen, as they do in parsed text.
pub fn canonical_phrase(phrase: &str, case_sensitive: bool) -> String {
    let folded = phrase.replace(EN_DASH, &HYPHEN.to_string());
    phrase_key(&NormalizationForm::NFKD.apply(&folded), case_sensitive)
}

pub mod frozen;
pub mod index;
pub mod loader;

pub use frozen::FrozenPhraseIndex;
pub use index::PhraseIndex;
