//! Raw and canonical representations of an input sentence

use std::fmt;

/// A sentence exactly as it was entered, minus the line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    raw: String,
}

impl Sentence {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl From<&str> for Sentence {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Sentence {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

/// The lowercase-letters-only derivation of a [`Sentence`].
///
/// Only [`crate::processing::normalizer::normalize`] builds one, so every
/// byte is in `b'a'..=b'z'` and the value is never longer than its source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    pub(crate) fn from_normalized(letters: String) -> Self {
        debug_assert!(letters.bytes().all(|b| b.is_ascii_lowercase()));
        Self(letters)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
