//! Command line argument parsing for the rusbasic CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::error::Result;

/// Rusbasic - segment Russian text into words
#[derive(Parser, Debug, Clone)]
#[command(name = "rusbasic")]
#[command(about = "Segment Russian text into words and multi-word expressions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RusbasicArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RusbasicArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split text into typed words
    Parse(ParseArgs),

    /// List the distinct Russian words in a text
    Unique(UniqueArgs),

    /// Check that the word list joins back into the normalized text
    Check(CheckArgs),
}

/// Where to read text from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to process (reads stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read text from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Options shared by every command that builds a parser.
#[derive(Args, Debug, Clone, Default)]
pub struct ParserArgs {
    /// Parser configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Register a multi-word expression (repeatable)
    #[arg(long = "mwe", value_name = "PHRASE")]
    pub mwes: Vec<String>,

    /// Load multi-word expressions from a file (repeatable)
    #[arg(long = "phrases", value_name = "PATH")]
    pub phrase_files: Vec<PathBuf>,

    /// Register the built-in conjunction phrases
    #[arg(long)]
    pub default_phrases: bool,

    /// Match phrases case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Keep digit runs inside the surrounding non-Cyrillic run
    #[arg(long)]
    pub no_split_digits: bool,
}

impl ParserArgs {
    /// Build the parser configuration, layering flags over the config file.
    pub fn to_config(&self) -> Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => ParserConfig::load_from_file(path)?,
            None => ParserConfig::default(),
        };

        if self.case_sensitive {
            config.case_sensitive = true;
        }
        if self.no_split_digits {
            config.split_digits = false;
        }
        if self.default_phrases {
            config.default_phrases = true;
        }
        config.phrase_files.extend(self.phrase_files.iter().cloned());
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for parsing text
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub parser: ParserArgs,
}

/// Arguments for listing unique words
#[derive(Parser, Debug, Clone)]
pub struct UniqueArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub parser: ParserArgs,

    /// Keep case when collecting unique words
    #[arg(long)]
    pub case_sensitive_output: bool,
}

/// Arguments for the round-trip check
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub parser: ParserArgs,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    Human,
    /// JSON output
    Json,
    /// One word per line
    Tokens,
}
