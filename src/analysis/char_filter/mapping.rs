use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{Result, RusbasicError};

/// Replaces literal substrings, preferring the longest key at each position.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // Sorted and deduplicated; empty keys would match everywhere.
        let mapping: BTreeMap<String, String> = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();

        let (keys, replacements): (Vec<String>, Vec<String>) = mapping.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| RusbasicError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Map a single character to another, e.g. a dash variant to the hyphen.
    pub fn char_to_char(from: char, to: char) -> Result<Self> {
        Self::new([(from.to_string(), to.to_string())])
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_dash_to_hyphen() {
        let filter = MappingCharFilter::char_to_char('\u{2013}', '-').unwrap();
        assert_eq!(filter.filter("по\u{2013}своему"), "по-своему");
        assert_eq!(filter.filter("без тире"), "без тире");
    }

    #[test]
    fn test_mapping_overlap() {
        let filter = MappingCharFilter::new([("ab", "1"), ("abc", "2")]).unwrap();
        assert_eq!(filter.filter("abc ab"), "2 1");
    }

    #[test]
    fn test_mapping_multibyte_and_deletion() {
        let filter = MappingCharFilter::new([("ъ", ""), ("ё", "е")]).unwrap();
        assert_eq!(filter.filter("подъёмник"), "подемник");
    }

    #[test]
    fn test_empty_key_ignored() {
        let filter = MappingCharFilter::new([("", "x")]).unwrap();
        assert_eq!(filter.filter("текст"), "текст");
        assert_eq!(filter.name(), "mapping");
    }
}
