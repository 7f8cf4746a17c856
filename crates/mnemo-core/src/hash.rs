#![deny(unsafe_code)]

use sha2::Digest;

use crate::error::{EncodeError, Result};
use crate::value::Value;

/// Length of a full SHA-256 digest in hexadecimal digits.
pub const DIGEST_HEX_LEN: usize = 64;

/// Options for [`hash_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashOptions {
    /// Number of leading hex digits to keep, 1 through 64.
    pub digits: usize,
    /// Separator joining stringified sequence elements before hashing.
    pub list_separator: String,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            digits: DIGEST_HEX_LEN,
            list_separator: "\n".to_string(),
        }
    }
}

impl HashOptions {
    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    #[must_use]
    pub fn with_list_separator(mut self, separator: impl Into<String>) -> Self {
        self.list_separator = separator.into();
        self
    }
}

/// Hash a value to its full 64-digit lowercase hex SHA-256 digest.
pub fn hash(value: &Value) -> Result<String> {
    hash_with(value, &HashOptions::default())
}

/// Hash a value, keeping the first `options.digits` hex digits.
///
/// Equal canonical text always yields an equal digest, so the integer `5`
/// and the text `"5"` hash identically while the float `5.0` does not.
pub fn hash_with(value: &Value, options: &HashOptions) -> Result<String> {
    if options.digits == 0 || options.digits > DIGEST_HEX_LEN {
        return Err(EncodeError::InvalidDigitCount(options.digits));
    }
    let text = canonical_text(value, &options.list_separator)?;
    Ok(sha256_hex_prefix(&text, options.digits))
}

/// Canonical text fed to the digest. Scalars stringify directly; a sequence
/// joins the stringified forms of its elements with `list_separator`.
fn canonical_text(value: &Value, list_separator: &str) -> Result<String> {
    match value {
        Value::Sequence(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(item.scalar_string()?);
            }
            Ok(parts.join(list_separator))
        }
        scalar => scalar.scalar_string(),
    }
}

pub(crate) fn sha256_hex_prefix(text: &str, digits: usize) -> String {
    let digest = sha2::Sha256::digest(text.as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(digits);
    hex
}
