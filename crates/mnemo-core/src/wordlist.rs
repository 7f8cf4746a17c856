#![deny(unsafe_code)]

use std::collections::BTreeSet;

use crate::error::{EncodeError, Result};
use crate::hash::{HashOptions, hash_with, sha256_hex_prefix};
use crate::value::Value;

/// Default number of leading digest digits sampled when encoding.
pub const DEFAULT_DIGITS: usize = 8;

/// Default separator between the adjective and the noun.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Options for [`WordList::encode_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Separator placed between the adjective and the noun.
    pub separator: String,
    /// Number of leading digest digits to sample, 1 through 64.
    pub digits: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            digits: DEFAULT_DIGITS,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }
}

/// An immutable pair of sorted, deduplicated word arrays.
///
/// Construction normalizes the raw lists once and nothing mutates them
/// afterwards; the index-to-word mapping is what keeps every mnemonic this
/// list ever produced reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

impl WordList {
    /// Build a word list from raw adjective and noun collections.
    ///
    /// Duplicates are dropped and each array is sorted lexicographically,
    /// so any input ordering of the same words produces the same list.
    pub fn new<I, J>(adjectives: I, nouns: J) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        let adjectives = normalize(adjectives);
        let nouns = normalize(nouns);
        if adjectives.is_empty() {
            return Err(EncodeError::EmptyWordList {
                which: "adjectives",
            });
        }
        if nouns.is_empty() {
            return Err(EncodeError::EmptyWordList { which: "nouns" });
        }
        Ok(Self { adjectives, nouns })
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    pub fn nouns(&self) -> &[String] {
        &self.nouns
    }

    /// Number of distinct mnemonics this list can produce.
    pub fn combinations(&self) -> usize {
        self.adjectives.len() * self.nouns.len()
    }

    /// Encode a value with the default separator and digit count.
    pub fn encode(&self, value: impl Into<Value>) -> Result<String> {
        self.encode_with(value, &EncodeOptions::default())
    }

    /// Encode a value as an adjective-noun mnemonic.
    ///
    /// The value's truncated digest is read as a base-16 integer `N`; the
    /// adjective index is `N % adjectives.len()` and the noun index is
    /// `(N / adjectives.len()) % nouns.len()`. Changing the separator never
    /// changes which words are picked.
    pub fn encode_with(&self, value: impl Into<Value>, options: &EncodeOptions) -> Result<String> {
        let hashing = HashOptions::default().with_digits(options.digits);
        let digest = hash_with(&value.into(), &hashing)?;
        Ok(self.mnemonic(&digest, &options.separator))
    }

    /// The identifier that names this word list: the encoding, through the
    /// list itself, of all its words joined by newlines (adjectives first).
    ///
    /// Any change to the words moves the identifier, which is what lets a
    /// stored corpus certify that its content still matches its name.
    pub fn version_id(&self) -> String {
        let mut words: Vec<&str> = Vec::with_capacity(self.adjectives.len() + self.nouns.len());
        words.extend(self.adjectives.iter().map(String::as_str));
        words.extend(self.nouns.iter().map(String::as_str));
        let digest = sha256_hex_prefix(&words.join("\n"), DEFAULT_DIGITS);
        self.mnemonic(&digest, DEFAULT_SEPARATOR)
    }

    fn mnemonic(&self, digest_hex: &str, separator: &str) -> String {
        let (adjective, noun) = index_pair(digest_hex, self.adjectives.len(), self.nouns.len());
        format!(
            "{}{}{}",
            self.adjectives[adjective], separator, self.nouns[noun]
        )
    }
}

fn normalize<I>(words: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let set: BTreeSet<String> = words.into_iter().map(Into::into).collect();
    set.into_iter().collect()
}

/// Map a hex digest onto adjective and noun indices.
///
/// A 64-digit digest exceeds native integer width, so both divisions run as
/// base-16 long division over the hex digits. The first pass produces
/// `N % adjective_count` along with the quotient's base-16 digits (each
/// partial quotient stays below 16 because each accumulator stays below
/// `16 * adjective_count`); the second pass folds those digits modulo
/// `noun_count`.
fn index_pair(digest_hex: &str, adjective_count: usize, noun_count: usize) -> (usize, usize) {
    let a = adjective_count as u128;
    let b = noun_count as u128;
    let mut adjective_rem: u128 = 0;
    let mut quotient = Vec::with_capacity(digest_hex.len());
    for digit in digest_hex.chars().filter_map(|c| c.to_digit(16)) {
        let acc = adjective_rem * 16 + u128::from(digit);
        quotient.push(acc / a);
        adjective_rem = acc % a;
    }
    let mut noun_rem: u128 = 0;
    for digit in quotient {
        noun_rem = (noun_rem * 16 + digit) % b;
    }
    (adjective_rem as usize, noun_rem as usize)
}
