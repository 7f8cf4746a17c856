#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write corpus {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize corpus: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid corpus: {message}")]
    InvalidCorpus { message: String },

    #[error("embedded corpus identifier mismatch (stored {stored}, computed {computed})")]
    VersionMismatch { stored: String, computed: String },

    #[error("invalid word list: {0}")]
    WordList(#[from] mnemo_core::EncodeError),
}

impl CorpusError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
