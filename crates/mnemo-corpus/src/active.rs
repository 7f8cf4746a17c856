#![deny(unsafe_code)]

use std::path::Path;

use mnemo_core::WordList;
use tracing::{debug, warn};

use crate::document::{CorpusDocument, WordSet};
use crate::embedded::EMBEDDED_CORPUS;
use crate::error::CorpusError;
use crate::store::{load_corpus, save_corpus};

/// A reconciled word list, frozen for the life of the process.
#[derive(Debug, Clone)]
pub struct ActiveWordList {
    /// Normalized word arrays.
    pub words: WordList,
    /// Identifier the arrays certify; always `words.version_id()`.
    pub version_id: String,
    /// Set when the stored identifier had to be replaced on load.
    pub drift: Option<DriftEvent>,
}

/// The stored identifier no longer matched the word list content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftEvent {
    pub stored: String,
    pub computed: String,
}

/// Load the embedded default corpus.
///
/// The embedded data cannot be rewritten, so unlike [`load_active`] a stale
/// identifier here is an error rather than a drift event.
pub fn load_embedded() -> Result<ActiveWordList, CorpusError> {
    let document: CorpusDocument =
        toml::from_str(EMBEDDED_CORPUS).map_err(|source| CorpusError::InvalidCorpus {
            message: format!("embedded corpus: {source}"),
        })?;
    let (stored, words) = latest_words(&document)?;
    let computed = words.version_id();
    if computed != stored {
        return Err(CorpusError::VersionMismatch { stored, computed });
    }
    debug!(version_id = %computed, "loaded embedded word list");
    Ok(ActiveWordList {
        words,
        version_id: computed,
        drift: None,
    })
}

/// Load a corpus file and verify its latest identifier against its content.
///
/// When they diverge the corpus self-heals: the latest slot is re-identified
/// and the file rewritten in place, preserving historical versions. Callers
/// run this once at startup and keep the returned list for the whole run.
pub fn load_active(path: &Path) -> Result<ActiveWordList, CorpusError> {
    let mut document = load_corpus(path)?;
    let (stored, words) = latest_words(&document)?;
    let computed = words.version_id();
    if computed == stored {
        debug!(
            version_id = %computed,
            path = %path.display(),
            "word list identifier verified"
        );
        return Ok(ActiveWordList {
            words,
            version_id: computed,
            drift: None,
        });
    }
    warn!(
        stored = %stored,
        computed = %computed,
        path = %path.display(),
        "word list content drifted from its stored identifier; rewriting corpus"
    );
    document.replace_latest(
        computed.as_str(),
        WordSet {
            adjectives: words.adjectives().to_vec(),
            nouns: words.nouns().to_vec(),
        },
    );
    save_corpus(path, &document)?;
    Ok(ActiveWordList {
        words,
        version_id: computed.clone(),
        drift: Some(DriftEvent { stored, computed }),
    })
}

fn latest_words(document: &CorpusDocument) -> Result<(String, WordList), CorpusError> {
    let latest = document
        .latest_version()
        .ok_or_else(|| CorpusError::InvalidCorpus {
            message: "no versions listed".to_string(),
        })?;
    let set = document
        .word_lists
        .get(latest)
        .ok_or_else(|| CorpusError::InvalidCorpus {
            message: format!("no word list stored for version {latest}"),
        })?;
    let words = WordList::new(set.adjectives.clone(), set.nouns.clone())?;
    Ok((latest.to_string(), words))
}
