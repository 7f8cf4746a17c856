//! Stream and interactive encoding.
//!
//! The loops are generic over readers and writers so tests can drive them
//! in memory; stream mode also has a path-level entry used by the binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use mnemo_core::WordList;
use mnemo_corpus::ActiveWordList;
use tracing::debug;

/// Write the startup banner describing the active word list.
///
/// The banner goes to the control stream (stderr), never to the mnemonic
/// output stream, so piped output stays machine-readable.
pub fn write_banner<C: Write>(control: &mut C, active: &ActiveWordList) -> Result<()> {
    writeln!(control)?;
    writeln!(control, "## mnemo: adjective-noun mnemonic encoder")?;
    writeln!(control, "Word list version: {}", active.version_id)?;
    writeln!(control, " - Adjectives: {}", active.words.adjectives().len())?;
    writeln!(control, " - Nouns: {}", active.words.nouns().len())?;
    writeln!(control, " - Combinations: {}", active.words.combinations())?;
    control.flush()?;
    Ok(())
}

/// Encode each input line, writing one mnemonic per line.
///
/// Trailing whitespace (including the newline) is stripped before encoding;
/// lines that are empty after stripping produce no output line.
pub fn encode_stream<R, W>(words: &WordList, input: R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut encoded = 0_u64;
    let mut skipped = 0_u64;
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        let value = line.trim_end();
        if value.is_empty() {
            skipped += 1;
            continue;
        }
        let mnemonic = words.encode(value)?;
        writeln!(output, "{mnemonic}").context("failed to write mnemonic")?;
        encoded += 1;
    }
    output.flush().context("failed to flush output")?;
    debug!(encoded, skipped, "stream finished");
    Ok(())
}

/// Run stream mode against filesystem paths.
///
/// The input is opened before the output is created, so a bad input path
/// fails without creating or truncating anything at the output path.
pub fn run_stream(words: &WordList, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let input = open_input(input)?;
    let mut output = open_output(output)?;
    encode_stream(words, input, &mut output)
}

/// Input reader for stream mode; `None` or `-` selects stdin.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Mnemonic output writer; `None` selects stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Prompt-driven encoding session.
///
/// Prompts and session chatter go to `control`; mnemonics go to `output`.
/// Entries are encoded exactly as entered, empty entries just re-prompt,
/// and end of input ends the session.
pub fn interactive_session<R, W, C>(
    words: &WordList,
    input: R,
    output: &mut W,
    control: &mut C,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: Write,
{
    writeln!(control)?;
    writeln!(control, "(Ctrl-C to exit.)")?;
    writeln!(control, "What would you like to encode?")?;
    let mut lines = input.lines();
    loop {
        write!(control, "?> ")?;
        control.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let entry = line.context("failed to read entry")?;
        if entry.is_empty() {
            continue;
        }
        let mnemonic = words.encode(entry.as_str())?;
        writeln!(output, "{mnemonic}")?;
        output.flush()?;
    }
    Ok(())
}
