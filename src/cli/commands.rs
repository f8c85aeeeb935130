//! Command implementations for the rusbasic CLI.

use std::fs;
use std::io::{self, Read};

use log::{debug, info};

use crate::analysis::parser::WordParser;
use crate::analysis::phrase::{FrozenPhraseIndex, PhraseLookup};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, RusbasicError};

/// Execute a CLI command.
pub fn execute_command(args: RusbasicArgs) -> Result<()> {
    match &args.command {
        Command::Parse(parse_args) => parse_text(parse_args, &args),
        Command::Unique(unique_args) => unique_words(unique_args, &args),
        Command::Check(check_args) => check_round_trip(check_args, &args),
    }
}

/// Split text into words and print them.
fn parse_text(args: &ParseArgs, cli_args: &RusbasicArgs) -> Result<()> {
    let parser = build_parser(&args.parser)?;
    let text = read_input(&args.input)?;

    let words = parser.parse(&text)?;
    output_words(&ParseResult::new(&words), cli_args)
}

/// Print the distinct Russian words of a text.
fn unique_words(args: &UniqueArgs, cli_args: &RusbasicArgs) -> Result<()> {
    let parser = build_parser(&args.parser)?;
    let text = read_input(&args.input)?;

    let words = parser.parse(&text)?;
    let unique: Vec<String> = words
        .unique(args.case_sensitive_output)
        .into_iter()
        .collect();
    output_unique(
        &UniqueResult {
            count: unique.len(),
            words: unique,
        },
        cli_args,
    )
}

/// Verify that the words of a text join back into its normalized form.
fn check_round_trip(args: &CheckArgs, cli_args: &RusbasicArgs) -> Result<()> {
    let parser = build_parser(&args.parser)?;
    let text = read_input(&args.input)?;

    let normalized = parser.normalize(&text);
    let words = parser.parse(&text)?;
    let joined = words.to_text();

    let result = CheckResult {
        ok: joined == normalized,
        words: words.len(),
        normalized_bytes: normalized.len(),
        mismatch_at: first_difference(&joined, &normalized),
    };
    output_check(&result, cli_args)?;

    if result.ok {
        Ok(())
    } else {
        Err(RusbasicError::analysis(format!(
            "Round trip failed: {} words do not rebuild the normalized text",
            result.words
        )))
    }
}

/// Build a frozen parser from the command line options.
fn build_parser(args: &ParserArgs) -> Result<WordParser<FrozenPhraseIndex>> {
    let config = args.to_config()?;
    let mut parser = WordParser::from_config(&config)?;

    let added = parser.register_phrases(&args.mwes);
    if added > 0 {
        debug!("registered {added} phrases from the command line");
    }

    let parser = parser.freeze()?;
    info!("parser ready with {} phrases", parser.phrases().len());
    Ok(parser)
}

/// Read input text from the argument, a file, or stdin.
fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        debug!("reading text from {}", path.display());
        return fs::read_to_string(path).map_err(|e| {
            RusbasicError::invalid_argument(format!(
                "Failed to read input file '{}': {}",
                path.display(),
                e
            ))
        });
    }

    debug!("reading text from stdin");
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Byte offset of the first position where `a` and `b` differ.
fn first_difference(a: &str, b: &str) -> Option<usize> {
    if a == b {
        return None;
    }
    let common = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    Some(common)
}
