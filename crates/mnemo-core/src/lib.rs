//! Deterministic adjective-noun mnemonics.
//!
//! A value is reduced to a canonical text form, hashed with SHA-256, and the
//! truncated digest is mapped onto an adjective and a noun from a sorted
//! word list. Equal input and equal word list always give the same mnemonic.

pub mod error;
pub mod hash;
pub mod value;
pub mod wordlist;

pub use error::{EncodeError, Result};
pub use hash::{DIGEST_HEX_LEN, HashOptions, hash, hash_with};
pub use value::Value;
pub use wordlist::{DEFAULT_DIGITS, DEFAULT_SEPARATOR, EncodeOptions, WordList};

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> WordList {
        WordList::new(["keen", "wry", "bold"], ["oak", "elm", "fir"]).expect("word list")
    }

    #[test]
    fn encode_picks_words_from_sorted_lists() {
        let words = tiny();
        assert_eq!(words.adjectives(), ["bold", "keen", "wry"]);
        assert_eq!(words.encode("hello").expect("encode"), "bold_elm");
        assert_eq!(words.encode("world").expect("encode"), "bold_fir");
    }

    #[test]
    fn version_id_encodes_the_list_through_itself() {
        let words = tiny();
        assert_eq!(words.version_id(), "keen_fir");
    }
}
