#![deny(unsafe_code)]

use std::path::Path;

use crate::document::CorpusDocument;
use crate::error::CorpusError;

/// Read a corpus document from a TOML file.
pub fn load_corpus(path: &Path) -> Result<CorpusDocument, CorpusError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| CorpusError::read(path, source))?;
    toml::from_str(&contents).map_err(|source| CorpusError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a corpus document to a TOML file.
///
/// Rendering is deterministic: struct field order, sorted map keys, one
/// array element per line. Saving an unchanged document reproduces the
/// same bytes, so rewrites diff minimally.
pub fn save_corpus(path: &Path, document: &CorpusDocument) -> Result<(), CorpusError> {
    let rendered = toml::to_string_pretty(document)?;
    std::fs::write(path, rendered).map_err(|source| CorpusError::write(path, source))
}
