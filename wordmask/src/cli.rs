// wordmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordmask
//! application and its arguments.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordmask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask banned keywords in text, evasion-noise tolerant",
    long_about = "Wordmask is a command-line utility for masking a configured list of banned \
keywords inside text. It tolerates deliberate evasion attempts where noise characters \
(punctuation, digits, stray letters, whitespace, certain CJK radical components) are \
inserted between the letters of a banned word, collapsing each detected occurrence to \
mask characters."
)]
pub struct Cli {
    /// Path to a keyword configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "WORDMASK_CONFIG", help = "Path to a keyword configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Extra keywords to mask, merged on top of the configuration file.
    #[arg(long = "keyword", short = 'k', value_delimiter = ',', help = "Extra keywords to mask (comma-separated or repeated).")]
    pub keywords: Vec<String>,

    /// Override the mask character (default '*', or the configured one).
    #[arg(long = "mask-char", short = 'm', value_name = "CHAR", help = "Override the mask character.")]
    pub mask_char: Option<char>,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long = "input", short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write masked output to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Suppress the masking summary.
    #[arg(long = "no-summary", help = "Suppress the masking summary.")]
    pub no_summary: bool,

    /// Disable informational messages.
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run).
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
