#![deny(unsafe_code)]

pub mod active;
pub mod document;
pub mod embedded;
pub mod error;
pub mod store;

pub use crate::active::{ActiveWordList, DriftEvent, load_active, load_embedded};
pub use crate::document::{CorpusDocument, WordSet};
pub use crate::error::CorpusError;
pub use crate::store::{load_corpus, save_corpus};
