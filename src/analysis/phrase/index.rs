//! Sorted phrase index open for registration.

use std::collections::BTreeSet;
use std::ops::Bound;

use log::debug;

use super::{PhraseLookup, canonical_phrase};
use crate::analysis::phrase::frozen::FrozenPhraseIndex;
use crate::error::Result;

/// Phrase dictionary backed by a sorted set.
///
/// `has_extension` takes the first phrase not less than the candidate and
/// checks whether it starts with the candidate: phrases sharing a prefix are
/// contiguous in sorted order, so that one comparison decides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseIndex {
    phrases: BTreeSet<String>,
    case_sensitive: bool,
}

impl PhraseIndex {
    /// Create an empty index.
    pub fn new(case_sensitive: bool) -> Self {
        PhraseIndex {
            phrases: BTreeSet::new(),
            case_sensitive,
        }
    }

    /// Create an index holding `phrases`.
    pub fn from_phrases<I, S>(phrases: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new(case_sensitive);
        index.register_all(phrases);
        index
    }

    /// Register a phrase. Returns `true` if it was not already present.
    ///
    /// Phrases that are empty after normalization are ignored: an empty entry
    /// would be a prefix of every candidate.
    pub fn register(&mut self, phrase: &str) -> bool {
        let key = canonical_phrase(phrase, self.case_sensitive);
        if key.is_empty() {
            debug!("ignoring empty phrase");
            return false;
        }
        self.phrases.insert(key)
    }

    /// Register every phrase, returning how many were new.
    pub fn register_all<I, S>(&mut self, phrases: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        phrases
            .into_iter()
            .filter(|phrase| self.register(phrase.as_ref()))
            .count()
    }

    /// Iterate registered phrases in canonical form, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Build an immutable FST copy of this index.
    pub fn freeze(&self) -> Result<FrozenPhraseIndex> {
        FrozenPhraseIndex::from_sorted(self.iter(), self.case_sensitive)
    }
}

impl PhraseLookup for PhraseIndex {
    fn is_complete(&self, candidate: &str) -> bool {
        self.phrases.contains(candidate)
    }

    fn has_extension(&self, candidate: &str) -> bool {
        self.phrases
            .range::<str, _>((Bound::Included(candidate), Bound::Unbounded))
            .next()
            .is_some_and(|phrase| phrase.starts_with(candidate))
    }

    fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn len(&self) -> usize {
        self.phrases.len()
    }

    fn name(&self) -> &'static str {
        "sorted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut index = PhraseIndex::new(false);
        assert!(index.register("потому, что"));
        assert!(!index.register("потому, что"));
        assert!(!index.register("ПОТОМУ, ЧТО"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_empty_phrase_never_registered() {
        let mut index = PhraseIndex::new(false);
        assert!(!index.register(""));
        assert!(!index.register("\u{0301}"));
        assert!(index.is_empty());
        assert!(!index.has_extension(""));
    }

    #[test]
    fn test_prefix_queries() {
        let index = PhraseIndex::from_phrases(["до того", "до того как", "перед тем, как"], false);

        assert!(index.has_extension("до"));
        assert!(index.has_extension("до того"));
        assert!(index.has_extension("до того как"));
        assert!(!index.has_extension("до того как "));
        assert!(!index.has_extension("до тех"));
        assert!(index.has_extension("перед тем,"));

        assert!(index.is_complete("до того"));
        assert!(index.is_complete("до того как"));
        assert!(!index.is_complete("до"));
    }

    #[test]
    fn test_case_sensitive_registration() {
        let index = PhraseIndex::from_phrases(["Несмотря на"], true);
        assert!(index.is_complete("Несмотря на"));
        assert!(!index.is_complete("несмотря на"));
        assert!(!index.has_extension("несмотря"));
        assert!(index.case_sensitive());
    }

    #[test]
    fn test_stressed_registration_matches_plain_candidate() {
        let index = PhraseIndex::from_phrases(["в тече\u{0301}ние"], false);
        assert!(index.is_complete("в течение"));
        assert_eq!(index.iter().collect::<Vec<_>>(), vec!["в течение"]);
    }

    #[test]
    fn test_register_all_counts_new_phrases() {
        let mut index = PhraseIndex::new(false);
        let added = index.register_all(["а б", "А Б", "в г", ""]);
        assert_eq!(added, 2);
        assert_eq!(index.name(), "sorted");
    }
}
