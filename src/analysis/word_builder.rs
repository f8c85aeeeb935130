//! Grouping tokens into typed words.
//!
//! The builder walks the token queue once, left to right. A token that starts
//! with a letter opens a word, which may then grow in two steps:
//!
//! 1. hyphenation: a following `-` token, plus the Cyrillic run after it, joins
//!    the word (one level only, so `а-б-в` yields `а-б` and then `-`, `в`)
//! 2. phrase lookahead: the longest registered phrase beginning with the word
//!    so far absorbs the tokens it spans
//!
//! Any other token becomes a single-token word classified as whitespace,
//! numeric, punctuation or other.
//!
//! The lookahead only reads the queue; tokens are dequeued once the final
//! match length is known.

use std::collections::VecDeque;

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::alphabet::Alphabet;
use crate::analysis::phrase::{PhraseLookup, phrase_key};
use crate::analysis::token::Token;
use crate::analysis::word::{Word, WordList, WordType};

lazy_static! {
    static ref WHITESPACE_ONLY: Regex = Regex::new(r"^\s+$").unwrap();
    static ref DIGITS_ONLY: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Single-pass word classification state machine.
pub struct WordBuilder<'a> {
    alphabet: &'a Alphabet,
    phrases: &'a dyn PhraseLookup,
}

impl<'a> WordBuilder<'a> {
    pub fn new(alphabet: &'a Alphabet, phrases: &'a dyn PhraseLookup) -> Self {
        WordBuilder { alphabet, phrases }
    }

    /// Consume `tokens` and group them into words.
    pub fn build<I>(&self, tokens: I) -> WordList
    where
        I: IntoIterator<Item = Token>,
    {
        let mut queue: VecDeque<Token> = tokens.into_iter().collect();
        let mut words = Vec::with_capacity(queue.len());

        while let Some(token) = queue.pop_front() {
            words.push(self.next_word(token, &mut queue));
        }

        WordList::new(words)
    }

    fn next_word(&self, token: Token, queue: &mut VecDeque<Token>) -> Word {
        if !self.alphabet.starts_with_letter(&token.text) {
            let word_type = self.classify(&token.text);
            return Word::single(word_type, token);
        }

        let mut tokens = vec![token];
        let mut word_type = WordType::Word;
        if self.group_hyphenated(&mut tokens, queue) {
            word_type = WordType::HyphenatedWord;
        }
        if self.group_phrase(&mut tokens, queue) {
            word_type = WordType::Mwe;
        }
        Word::new(word_type, tokens)
    }

    /// Classify a token that does not start with a letter.
    pub fn classify(&self, text: &str) -> WordType {
        if WHITESPACE_ONLY.is_match(text) {
            WordType::Whitespace
        } else if DIGITS_ONLY.is_match(text) {
            WordType::Numeric
        } else if !text.is_empty() && text.chars().all(|c| self.alphabet.is_punctuation(c)) {
            WordType::Punct
        } else {
            WordType::Other
        }
    }

    /// Pull a `-` and the Cyrillic run after it into `tokens`.
    fn group_hyphenated(&self, tokens: &mut Vec<Token>, queue: &mut VecDeque<Token>) -> bool {
        let hyphen = self.alphabet.hyphen();
        let is_hyphen = queue.front().is_some_and(|next| {
            let mut chars = next.text.chars();
            chars.next() == Some(hyphen) && chars.next().is_none()
        });
        if !is_hyphen {
            return false;
        }

        tokens.extend(queue.pop_front());
        if queue
            .front()
            .is_some_and(|next| self.alphabet.starts_with_letter(&next.text))
        {
            tokens.extend(queue.pop_front());
        }
        true
    }

    /// Extend `tokens` with the longest registered phrase starting at them.
    fn group_phrase(&self, tokens: &mut Vec<Token>, queue: &mut VecDeque<Token>) -> bool {
        if self.phrases.is_empty() {
            return false;
        }

        let case_sensitive = self.phrases.case_sensitive();
        let mut raw: String = tokens.iter().map(Token::as_str).collect();
        let mut matched = None;

        for (index, next) in queue.iter().enumerate() {
            raw.push_str(&next.text);
            let candidate = phrase_key(&raw, case_sensitive);
            if !self.phrases.has_extension(&candidate) {
                break;
            }
            if self.phrases.is_complete(&candidate) {
                matched = Some(index + 1);
            }
        }

        match matched {
            Some(count) => {
                tokens.extend(queue.drain(..count));
                true
            }
            None => false,
        }
    }
}
