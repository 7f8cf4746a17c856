//! Embedded default corpus.
//!
//! The shipped word list is embedded at compile time using `include_str!()`,
//! so encoding works with no runtime file discovery or install-path lookup.

/// Default corpus document, TOML.
pub const EMBEDDED_CORPUS: &str = include_str!("../data/words.toml");
