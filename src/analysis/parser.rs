//! The word parser: normalize, segment, build.
//!
//! [`WordParser`] owns everything a parse needs: the alphabet tables, the
//! normalizer, the segmenter and the phrase dictionary. Phrases are registered
//! while the parser holds a mutable [`PhraseIndex`]; [`WordParser::freeze`]
//! turns it into a parser over a [`FrozenPhraseIndex`] that no longer accepts
//! registrations. Parsing takes `&self` either way, so a finished parser can
//! be shared across threads.
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::parser::WordParser;
//! use rusbasic::analysis::word::WordType;
//!
//! let mut parser = WordParser::new().unwrap();
//! parser.register_phrase("потому, что");
//!
//! let words = parser.parse("Он любил ее не потому, что она").unwrap();
//! assert_eq!(words[8].text(), "потому, что");
//! assert_eq!(words[8].word_type(), WordType::Mwe);
//! assert_eq!(words.to_text(), "Он любил ее не потому, что она");
//! ```

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;

use crate::analysis::alphabet::{Alphabet, DEFAULT_PHRASES};
use crate::analysis::normalizer::Normalizer;
use crate::analysis::phrase::loader::load_phrases_from_file;
use crate::analysis::phrase::{FrozenPhraseIndex, PhraseIndex, PhraseLookup};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::cyrillic_run::CyrillicRunTokenizer;
use crate::analysis::word::{TextOptions, Word, WordList};
use crate::analysis::word_builder::WordBuilder;
use crate::config::ParserConfig;
use crate::error::Result;

/// Segments Russian text into typed words.
#[derive(Clone, Debug)]
pub struct WordParser<P = PhraseIndex> {
    alphabet: Arc<Alphabet>,
    normalizer: Normalizer,
    tokenizer: CyrillicRunTokenizer,
    phrases: P,
    config: ParserConfig,
}

impl WordParser<PhraseIndex> {
    /// Create a parser with the default configuration and no phrases.
    pub fn new() -> Result<Self> {
        Self::from_config(&ParserConfig::default())
    }

    /// Create a parser that matches phrases case-sensitively.
    pub fn case_sensitive() -> Result<Self> {
        Self::from_config(&ParserConfig::default().with_case_sensitive(true))
    }

    /// Create a parser from a configuration, loading its phrase files.
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        Self::with_alphabet(Alphabet::russian(), config)
    }

    /// Create a parser with custom alphabet tables.
    pub fn with_alphabet(alphabet: Alphabet, config: &ParserConfig) -> Result<Self> {
        let normalizer = Normalizer::new(&alphabet)?;
        let tokenizer = CyrillicRunTokenizer::with_alphabet(&alphabet, config.split_digits)?;

        let mut parser = WordParser {
            alphabet: Arc::new(alphabet),
            normalizer,
            tokenizer,
            phrases: PhraseIndex::new(config.case_sensitive),
            config: config.clone(),
        };

        if config.default_phrases {
            parser.register_phrases(DEFAULT_PHRASES.iter().copied());
        }
        for path in &config.phrase_files {
            parser.load_phrases(path)?;
        }

        debug!(
            "created parser with {} phrases (case_sensitive={})",
            parser.phrases.len(),
            config.case_sensitive
        );
        Ok(parser)
    }

    /// Register a multi-word expression. Returns `true` if it was new.
    ///
    /// The phrase goes through the same normalizer as parsed text, so dash
    /// variants fold into the hyphen before matching.
    pub fn register_phrase(&mut self, phrase: &str) -> bool {
        let normalized = self.normalizer.normalize(phrase);
        self.phrases.register(&normalized)
    }

    /// Register several multi-word expressions, returning how many were new.
    pub fn register_phrases<I, S>(&mut self, phrases: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        phrases
            .into_iter()
            .filter(|phrase| self.register_phrase(phrase.as_ref()))
            .count()
    }

    /// Register the phrases listed in a file, returning how many were new.
    pub fn load_phrases<Q: AsRef<Path>>(&mut self, path: Q) -> Result<usize> {
        let path = path.as_ref();
        let phrases = load_phrases_from_file(path)?;
        let added = self.register_phrases(&phrases);
        info!(
            "registered {} of {} phrases from {}",
            added,
            phrases.len(),
            path.display()
        );
        Ok(added)
    }

    /// Freeze the phrase dictionary into an FST; no more phrases can be added.
    pub fn freeze(self) -> Result<WordParser<FrozenPhraseIndex>> {
        let phrases = self.phrases.freeze()?;
        Ok(WordParser {
            alphabet: self.alphabet,
            normalizer: self.normalizer,
            tokenizer: self.tokenizer,
            phrases,
            config: self.config,
        })
    }
}

impl<P: PhraseLookup> WordParser<P> {
    /// Fold dashes and decompose `text` into NFKD.
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// Segment already normalized text into tokens.
    pub fn tokenize(&self, normalized: &str) -> Result<Vec<Token>> {
        Ok(self.tokenizer.tokenize(normalized)?.collect())
    }

    /// Parse `text` into words.
    ///
    /// Joining the raw text of the returned words gives back
    /// [`normalize`](Self::normalize)`(text)` exactly.
    pub fn parse(&self, text: &str) -> Result<WordList> {
        let normalized = self.normalize(text);
        let tokens = self.tokenize(&normalized)?;
        let words = WordBuilder::new(&self.alphabet, &self.phrases).build(tokens);
        debug!("parsed {} bytes into {} words", text.len(), words.len());
        Ok(words)
    }

    /// Parse many texts in parallel against the shared phrase dictionary.
    pub fn parse_batch<S>(&self, texts: &[S]) -> Result<Vec<WordList>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.parse(text.as_ref()))
            .collect()
    }

    /// Render `word` with `options`, stripping punctuation by this parser's alphabet.
    pub fn render(&self, word: &Word, options: TextOptions) -> String {
        word.text_in(options, &self.alphabet)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn phrases(&self) -> &P {
        &self.phrases
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}
