//! Sentence normalization

use crate::processing::sentence::{CanonicalForm, Sentence};

/// Keep only the ASCII letters of `text`, lowercased, in their original order.
///
/// Digits, punctuation, whitespace and anything outside ASCII are dropped
/// rather than replaced, so the result is never longer than the input.
pub fn normalize_str(text: &str) -> CanonicalForm {
    let letters: String = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    CanonicalForm::from_normalized(letters)
}

pub fn normalize(sentence: &Sentence) -> CanonicalForm {
    normalize_str(sentence.as_str())
}
