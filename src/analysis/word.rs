//! Typed word units and the ordered list a parse produces.
//!
//! A [`Word`] groups one or more consecutive [`Token`]s under a [`WordType`].
//! A [`WordList`] covers its input completely: joining the raw text of every
//! word reproduces the normalized input byte for byte.
//!
//! Rendering goes through [`TextOptions`], whose transforms always apply in
//! the same order:
//!
//! 1. remove acute accents (stress marks only; breve and diaeresis stay)
//! 2. remove punctuation
//! 3. lowercase
//! 4. trim surrounding whitespace
//! 5. NFKC composition
//!
//! Punctuation removal consults the default Russian tables unless an
//! alphabet is passed explicitly ([`TextOptions::apply_with`],
//! [`Word::text_in`]).
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::word::{TextOptions, Word};
//!
//! let word = Word::from_text("любо\u{0301}вь");
//! assert_eq!(word.text(), "любо\u{0301}вь");
//! assert_eq!(word.text_with(TextOptions::new().remove_accents(true)), "любовь");
//! assert_eq!(word.canonical(), "любовь");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::analysis::alphabet::{Alphabet, COMBINING_ACUTE};
use crate::analysis::char_filter::unicode_normalize::NormalizationForm;
use crate::analysis::token::Token;

/// Classification of a word unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    /// Not classified (words built by hand rather than by the parser)
    #[default]
    Undefined,
    /// A single Cyrillic run
    Word,
    /// Cyrillic run joined to a suffix by a hyphen
    HyphenatedWord,
    /// Registered multi-word expression
    Mwe,
    /// Whitespace only
    Whitespace,
    /// Digits only
    Numeric,
    /// Punctuation only
    Punct,
    /// Anything else (Latin text, mixed symbols, punctuation with spaces)
    Other,
}

impl WordType {
    /// Whether this type is a Russian word unit.
    pub fn is_russian(self) -> bool {
        matches!(
            self,
            WordType::Word | WordType::HyphenatedWord | WordType::Mwe
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WordType::Undefined => "undefined",
            WordType::Word => "word",
            WordType::HyphenatedWord => "hyphenated_word",
            WordType::Mwe => "mwe",
            WordType::Whitespace => "whitespace",
            WordType::Numeric => "numeric",
            WordType::Punct => "punct",
            WordType::Other => "other",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering transforms for [`Word::text_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextOptions {
    pub remove_accents: bool,
    pub remove_punct: bool,
    pub lowercase: bool,
    pub strip_whitespace: bool,
    pub compose: bool,
}

impl TextOptions {
    /// Default rendering: NFKC composition only.
    pub fn new() -> Self {
        TextOptions {
            remove_accents: false,
            remove_punct: false,
            lowercase: false,
            strip_whitespace: false,
            compose: true,
        }
    }

    /// No transforms at all; yields the tokens exactly as segmented.
    pub fn raw() -> Self {
        TextOptions {
            compose: false,
            ..Self::new()
        }
    }

    /// Accents removed, lowercased, trimmed and composed.
    pub fn canonical() -> Self {
        TextOptions {
            remove_accents: true,
            remove_punct: false,
            lowercase: true,
            strip_whitespace: true,
            compose: true,
        }
    }

    pub fn remove_accents(mut self, yes: bool) -> Self {
        self.remove_accents = yes;
        self
    }

    pub fn remove_punct(mut self, yes: bool) -> Self {
        self.remove_punct = yes;
        self
    }

    pub fn lowercase(mut self, yes: bool) -> Self {
        self.lowercase = yes;
        self
    }

    pub fn strip_whitespace(mut self, yes: bool) -> Self {
        self.strip_whitespace = yes;
        self
    }

    pub fn compose(mut self, yes: bool) -> Self {
        self.compose = yes;
        self
    }

    /// Apply the enabled transforms to `text`, in the fixed order.
    pub fn apply(&self, text: &str) -> String {
        self.apply_with(text, Alphabet::russian_ref())
    }

    /// Like [`apply`](Self::apply), taking punctuation from `alphabet`.
    pub fn apply_with(&self, text: &str, alphabet: &Alphabet) -> String {
        let mut text = text.to_string();
        if self.remove_accents {
            text.retain(|c| c != COMBINING_ACUTE);
        }
        if self.remove_punct {
            text.retain(|c| !alphabet.is_punctuation(c));
        }
        if self.lowercase {
            text = text.to_lowercase();
        }
        if self.strip_whitespace {
            text = text.trim().to_string();
        }
        if self.compose {
            text = NormalizationForm::NFKC.apply(&text);
        }
        text
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One or more consecutive tokens with a classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    word_type: WordType,
    tokens: Vec<Token>,
}

impl Word {
    /// Create a word from its tokens. `tokens` must not be empty.
    pub fn new(word_type: WordType, tokens: Vec<Token>) -> Self {
        debug_assert!(!tokens.is_empty(), "a word holds at least one token");
        Word { word_type, tokens }
    }

    /// A single-token word.
    pub fn single(word_type: WordType, token: Token) -> Self {
        Word {
            word_type,
            tokens: vec![token],
        }
    }

    /// An unclassified single-token word over `text`.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self::single(WordType::Undefined, Token::new(text, 0))
    }

    pub fn word_type(&self) -> WordType {
        self.word_type
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token texts, in order.
    pub fn token_texts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::as_str).collect()
    }

    /// Number of tokens in the word.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_russian(&self) -> bool {
        self.word_type.is_russian()
    }

    /// Byte offset of the first token in the normalized text.
    pub fn start_offset(&self) -> usize {
        self.tokens.first().map_or(0, |t| t.start_offset)
    }

    /// Byte offset just past the last token in the normalized text.
    pub fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.end_offset)
    }

    /// Exact concatenation of the token texts.
    pub fn raw_text(&self) -> String {
        self.tokens.iter().map(Token::as_str).collect()
    }

    /// Default rendering (NFKC composed).
    pub fn text(&self) -> String {
        self.text_with(TextOptions::new())
    }

    /// Render with the given transforms.
    pub fn text_with(&self, options: TextOptions) -> String {
        options.apply(&self.raw_text())
    }

    /// Render with the given transforms and punctuation table.
    pub fn text_in(&self, options: TextOptions, alphabet: &Alphabet) -> String {
        options.apply_with(&self.raw_text(), alphabet)
    }

    /// Accents removed, lowercased, trimmed and composed.
    pub fn canonical(&self) -> String {
        self.text_with(TextOptions::canonical())
    }

    pub fn lowercase(&self) -> String {
        self.text().to_lowercase()
    }

    pub fn uppercase(&self) -> String {
        self.text().to_uppercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// The ordered words of one parse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new(words: Vec<Word>) -> Self {
        WordList { words }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Russian word units only.
    pub fn russian_words(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| w.is_russian())
    }

    /// Render every word with `options`.
    pub fn texts(&self, options: TextOptions) -> Vec<String> {
        self.words.iter().map(|w| w.text_with(options)).collect()
    }

    /// Lossless join of all words; equals the normalized input.
    pub fn to_text(&self) -> String {
        self.words.iter().map(Word::raw_text).collect()
    }

    /// Distinct Russian words, accents removed, sorted.
    ///
    /// Unless `case_sensitive`, words are lowercased first so that "Да" and
    /// "да" collapse into one entry.
    pub fn unique(&self, case_sensitive: bool) -> BTreeSet<String> {
        let options = TextOptions::new()
            .remove_accents(true)
            .lowercase(!case_sensitive);
        self.russian_words().map(|w| w.text_with(options)).collect()
    }
}

impl Index<usize> for WordList {
    type Output = Word;

    fn index(&self, index: usize) -> &Word {
        &self.words[index]
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for WordList {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        WordList::new(iter.into_iter().collect())
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
