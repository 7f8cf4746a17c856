//! CLI argument definitions for mnemo.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mnemo",
    version,
    about = "Encode lines of text deterministically as adjective-noun mnemonics",
    long_about = "Encode lines of text deterministically as adjective-noun mnemonics.\n\n\
                  Each input line is hashed with SHA-256 and mapped onto a versioned\n\
                  word list; the same line and word list always give the same mnemonic.\n\
                  Mnemonics go to stdout, everything else goes to stderr."
)]
pub struct Cli {
    /// File to read, one mnemonic emitted per line ("-" or omitted: stdin).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Prompt for values interactively instead of reading a stream.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Write mnemonics to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Corpus file to load instead of the embedded word list.
    ///
    /// When the file's stored identifier no longer matches its word list
    /// content, the corpus is re-identified and rewritten in place.
    #[arg(long = "wordlist", value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
