//! Immutable FST-backed phrase index.
//!
//! Uses an FST (Finite State Transducer) set: once the phrase list is final
//! it is compact and safe to share across threads without locking.

use std::sync::Arc;

use fst::{IntoStreamer, Set, Streamer};
use log::info;

use super::PhraseLookup;
use crate::error::{Result, RusbasicError};

/// Phrase dictionary frozen into an FST set.
#[derive(Clone, Debug)]
pub struct FrozenPhraseIndex {
    set: Arc<Set<Vec<u8>>>,
    case_sensitive: bool,
}

impl FrozenPhraseIndex {
    /// Build from canonical phrases in strictly increasing order.
    ///
    /// Use [`PhraseIndex::freeze`](super::PhraseIndex::freeze) rather than
    /// calling this directly; it canonicalizes and sorts for you.
    pub fn from_sorted<I, S>(phrases: I, case_sensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let set = Set::from_iter(phrases)
            .map_err(|e| RusbasicError::phrase(format!("FST build error: {e}")))?;
        info!("froze phrase index with {} phrases", set.len());

        Ok(Self {
            set: Arc::new(set),
            case_sensitive,
        })
    }

    /// Iterate the stored phrases in order.
    pub fn phrases(&self) -> Vec<String> {
        let mut stream = self.set.stream();
        let mut phrases = Vec::with_capacity(self.set.len());
        while let Some(key) = stream.next() {
            phrases.push(String::from_utf8_lossy(key).into_owned());
        }
        phrases
    }
}

impl PhraseLookup for FrozenPhraseIndex {
    fn is_complete(&self, candidate: &str) -> bool {
        self.set.contains(candidate)
    }

    fn has_extension(&self, candidate: &str) -> bool {
        let mut stream = self.set.range().ge(candidate).into_stream();
        stream
            .next()
            .is_some_and(|key| key.starts_with(candidate.as_bytes()))
    }

    fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn name(&self) -> &'static str {
        "fst"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::phrase::PhraseIndex;

    #[test]
    fn test_frozen_agrees_with_sorted_index() {
        let index = PhraseIndex::from_phrases(
            [
                "потому же",
                "потому, что",
                "несмотря на",
                "несмотря на то, что",
                "до того",
                "до того как",
            ],
            false,
        );
        let frozen = index.freeze().unwrap();
        assert_eq!(frozen.len(), index.len());

        let candidates = [
            "",
            "п",
            "потому",
            "потому ",
            "потому же",
            "потому же ",
            "потому,",
            "несмотря на то",
            "несмотря на то, что",
            "до того как",
            "до того, как",
            "я",
        ];
        for candidate in candidates {
            assert_eq!(frozen.is_complete(candidate), index.is_complete(candidate), "{candidate:?}");
            assert_eq!(
                frozen.has_extension(candidate),
                index.has_extension(candidate),
                "{candidate:?}"
            );
        }
    }

    #[test]
    fn test_frozen_phrases_round_trip() {
        let index = PhraseIndex::from_phrases(["б в", "а б"], true);
        let frozen = index.freeze().unwrap();
        assert_eq!(frozen.phrases(), vec!["а б".to_string(), "б в".to_string()]);
        assert!(frozen.case_sensitive());
        assert_eq!(frozen.name(), "fst");
    }

    #[test]
    fn test_unsorted_input_rejected() {
        assert!(FrozenPhraseIndex::from_sorted(["б", "а"], false).is_err());
    }

    #[test]
    fn test_empty_frozen_index() {
        let frozen = PhraseIndex::new(false).freeze().unwrap();
        assert!(frozen.is_empty());
        assert!(!frozen.has_extension(""));
        assert!(!frozen.is_complete(""));
    }
}
