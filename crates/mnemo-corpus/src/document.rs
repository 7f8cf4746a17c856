#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On-disk corpus document.
///
/// `versions` orders the known identifiers newest first; the first entry
/// names the active word list. `word_lists` stores one word set per
/// identifier, keyed so that historical lists stay resolvable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub versions: Vec<String>,
    pub word_lists: BTreeMap<String, WordSet>,
}

/// Raw stored word arrays. Order and duplicates are not significant here;
/// normalization happens when the arrays become a `WordList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSet {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
}

impl CorpusDocument {
    /// Identifier of the active (latest) version, if any.
    pub fn latest_version(&self) -> Option<&str> {
        self.versions.first().map(String::as_str)
    }

    /// Replace the latest slot with a re-identified word set.
    ///
    /// `versions[0]` becomes `new_id` and the word set stored under the old
    /// identifier is dropped in favor of the new entry. Historical versions
    /// are left untouched.
    pub fn replace_latest(&mut self, new_id: impl Into<String>, words: WordSet) {
        let new_id = new_id.into();
        match self.versions.first().cloned() {
            Some(old_id) => {
                self.word_lists.remove(&old_id);
                self.versions[0] = new_id.clone();
            }
            None => self.versions.push(new_id.clone()),
        }
        self.word_lists.insert(new_id, words);
    }
}
