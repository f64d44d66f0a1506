//! Manifest text handed to the rule engine.
//!
//! A manifest is the raw text of a build definition. No structure is imposed
//! on it; rules only ever see the full string.

use std::fmt;

use crate::error::InvalidInputError;

/// Immutable text of a build-definition file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    text: String,
}

impl Manifest {
    /// Wrap text that is already known to be a string.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Decode raw bytes into a manifest.
    ///
    /// Fails with [`InvalidInputError`] when the bytes are not UTF-8 or when
    /// they contain a NUL byte. The text is kept verbatim, including any
    /// byte order mark or trailing whitespace.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvalidInputError> {
        let text = std::str::from_utf8(bytes).map_err(|e| InvalidInputError::NotUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;

        if let Some(offset) = text.bytes().position(|b| b == 0) {
            return Err(InvalidInputError::Binary { offset });
        }

        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Manifest {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Manifest {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Manifest {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
