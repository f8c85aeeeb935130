//! Character tables for Russian text.
//!
//! The segmenter, normalizer and word builder never hard-code characters;
//! they consult an [`Alphabet`] handed to them at construction. The default
//! table ([`Alphabet::russian`]) covers the 33 letters of the modern Russian
//! alphabet in both cases, the three combining diacritics that appear after
//! NFKD decomposition, and the punctuation used in Russian prose.
//!
//! # Examples
//!
//! ```
//! use rusbasic::analysis::alphabet::Alphabet;
//!
//! let alphabet = Alphabet::russian();
//! assert!(alphabet.is_letter('ё'));
//! assert!(alphabet.is_combining_mark('\u{0301}'));
//! assert!(!alphabet.is_letter('e'));
//! assert!(alphabet.is_punctuation('«'));
//! ```

use std::collections::BTreeSet;

use lazy_static::lazy_static;

/// Hyphen-minus, the literal used to join the parts of a hyphenated word.
pub const HYPHEN: char = '\u{002D}';

/// En dash, rewritten to [`HYPHEN`] before segmentation.
pub const EN_DASH: char = '\u{2013}';

/// Combining acute accent, marks stress.
pub const COMBINING_ACUTE: char = '\u{0301}';

/// Combining breve, part of й after decomposition.
pub const COMBINING_BREVE: char = '\u{0306}';

/// Combining diaeresis, part of ё after decomposition.
pub const COMBINING_DIAERESIS: char = '\u{0308}';

/// Upper/lower pairs of the Russian alphabet, in alphabetical order.
pub const RUSSIAN_LETTERS: &str =
    "АаБбВвГгДдЕеЁёЖжЗзИиЙйКкЛлМмНнОоПпРрСсТтУуФфХхЦцЧчШшЩщЪъЫыЬьЭэЮюЯя";

/// Combining marks that may follow a letter inside a word.
pub const COMBINING_MARKS: [char; 3] = [COMBINING_ACUTE, COMBINING_BREVE, COMBINING_DIAERESIS];

/// ASCII punctuation plus the quotes, dashes and ellipsis of Russian typography.
pub const RUSSIAN_PUNCTUATION: &str =
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~«»„“”‘’‹›\u{2013}\u{2014}…";

/// Common multi-word expressions registered by `default_phrases`.
pub const DEFAULT_PHRASES: &[&str] = &[
    "потому, что",
    ", потому что",
    "потому что",
    "несмотря на то, что",
    "несмотря на",
    "после того как",
    "после того, как",
    "до того как",
    "до того, как",
    "перед тем как",
    "перед тем, как",
    "в течение",
];

lazy_static! {
    static ref RUSSIAN: Alphabet = Alphabet::new(
        RUSSIAN_LETTERS.chars(),
        COMBINING_MARKS,
        RUSSIAN_PUNCTUATION.chars(),
    );
}

/// Immutable character classes used throughout the analysis pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: BTreeSet<char>,
    combining_marks: BTreeSet<char>,
    punctuation: BTreeSet<char>,
    hyphen: char,
    en_dash: char,
}

impl Alphabet {
    /// Create an alphabet from explicit tables, using the standard hyphen and en dash.
    pub fn new<L, M, P>(letters: L, combining_marks: M, punctuation: P) -> Self
    where
        L: IntoIterator<Item = char>,
        M: IntoIterator<Item = char>,
        P: IntoIterator<Item = char>,
    {
        Alphabet {
            letters: letters.into_iter().collect(),
            combining_marks: combining_marks.into_iter().collect(),
            punctuation: punctuation.into_iter().collect(),
            hyphen: HYPHEN,
            en_dash: EN_DASH,
        }
    }

    /// The default Russian tables.
    pub fn russian() -> Self {
        RUSSIAN.clone()
    }

    /// Shared reference to the default Russian tables.
    pub fn russian_ref() -> &'static Alphabet {
        &RUSSIAN
    }

    /// Override the hyphen and the dash that gets folded into it.
    pub fn with_dashes(mut self, hyphen: char, en_dash: char) -> Self {
        self.hyphen = hyphen;
        self.en_dash = en_dash;
        self
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    pub fn is_combining_mark(&self, c: char) -> bool {
        self.combining_marks.contains(&c)
    }

    /// Whether `c` belongs inside a Cyrillic run (letter or combining mark).
    pub fn is_word_char(&self, c: char) -> bool {
        self.is_letter(c) || self.is_combining_mark(c)
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }

    /// Whether the first character of `text` is a letter of this alphabet.
    pub fn starts_with_letter(&self, text: &str) -> bool {
        text.chars().next().is_some_and(|c| self.is_letter(c))
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn combining_marks(&self) -> impl Iterator<Item = char> + '_ {
        self.combining_marks.iter().copied()
    }

    pub fn hyphen(&self) -> char {
        self.hyphen
    }

    pub fn en_dash(&self) -> char {
        self.en_dash
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::russian()
    }
}
