//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::word::{Word, WordList};
use crate::cli::args::{OutputFormat, RusbasicArgs};
use crate::error::Result;

/// One word in command output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub text: String,
    pub word_type: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub tokens: Vec<String>,
}

impl From<&Word> for WordRecord {
    fn from(word: &Word) -> Self {
        WordRecord {
            text: word.text(),
            word_type: word.word_type().to_string(),
            start_offset: word.start_offset(),
            end_offset: word.end_offset(),
            tokens: word.token_texts().into_iter().map(String::from).collect(),
        }
    }
}

/// Result of the `parse` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResult {
    pub words: Vec<WordRecord>,
    pub russian_words: usize,
}

impl ParseResult {
    pub fn new(words: &WordList) -> Self {
        ParseResult {
            words: words.iter().map(WordRecord::from).collect(),
            russian_words: words.russian_words().count(),
        }
    }
}

/// Result of the `unique` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct UniqueResult {
    pub words: Vec<String>,
    pub count: usize,
}

/// Result of the `check` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub ok: bool,
    pub words: usize,
    pub normalized_bytes: usize,
    /// Byte offset of the first difference, if any.
    pub mismatch_at: Option<usize>,
}

/// Print a word list in the selected format.
pub fn output_words(result: &ParseResult, args: &RusbasicArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Tokens => {
            for word in &result.words {
                println!("{}", escape_control(&word.text));
            }
            Ok(())
        }
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Words:");
                println!("══════");
            }
            for (i, word) in result.words.iter().enumerate() {
                println!(
                    "{:>4}  {:<16} {:>5}..{:<5} {}",
                    i,
                    word.word_type,
                    word.start_offset,
                    word.end_offset,
                    escape_control(&word.text)
                );
            }
            if args.verbosity() > 0 {
                println!();
                println!(
                    "Total: {} words ({} Russian)",
                    result.words.len(),
                    result.russian_words
                );
            }
            Ok(())
        }
    }
}

/// Print a list of unique words in the selected format.
pub fn output_unique(result: &UniqueResult, args: &RusbasicArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human | OutputFormat::Tokens => {
            for word in &result.words {
                println!("{word}");
            }
            if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
                println!();
                println!("Unique words: {}", result.count);
            }
            Ok(())
        }
    }
}

/// Print the outcome of a round-trip check.
pub fn output_check(result: &CheckResult, args: &RusbasicArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Human | OutputFormat::Tokens => {
            match result.mismatch_at {
                None => println!(
                    "OK: {} words cover {} bytes",
                    result.words, result.normalized_bytes
                ),
                Some(offset) => println!("MISMATCH at byte {offset}"),
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RusbasicArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Make whitespace runs visible in one-line output.
pub fn escape_control(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
