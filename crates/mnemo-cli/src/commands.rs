use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use mnemo_corpus::{ActiveWordList, load_active, load_embedded};
use tracing::info;

use mnemo_cli::run::{interactive_session, open_output, run_stream, write_banner};

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let active = load_words(cli.wordlist.as_deref())?;
    info!(
        version_id = %active.version_id,
        adjectives = active.words.adjectives().len(),
        nouns = active.words.nouns().len(),
        combinations = active.words.combinations(),
        "word list ready"
    );
    write_banner(&mut io::stderr(), &active).context("failed to write banner")?;

    if cli.interactive {
        let mut output = open_output(cli.output.as_deref())?;
        let stdin = io::stdin();
        interactive_session(&active.words, stdin.lock(), &mut output, &mut io::stderr())
    } else {
        run_stream(&active.words, cli.input.as_deref(), cli.output.as_deref())
    }
}

fn load_words(path: Option<&Path>) -> Result<ActiveWordList> {
    let active = match path {
        Some(path) => load_active(path)?,
        None => load_embedded()?,
    };
    Ok(active)
}
