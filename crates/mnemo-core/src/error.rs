use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unsupported value kind: {kind}")]
    UnsupportedType { kind: &'static str },

    #[error("digit count must be between 1 and 64, got {0}")]
    InvalidDigitCount(usize),

    #[error("word list has no {which} left after normalization")]
    EmptyWordList { which: &'static str },
}

pub type Result<T> = std::result::Result<T, EncodeError>;
