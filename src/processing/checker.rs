//! Palindrome checking over canonical sentences

use crate::processing::sentence::CanonicalForm;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Palindrome,
    NotPalindrome,
}

impl Verdict {
    /// The result line reported to the user
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Palindrome => "The sentence is a palindrome.",
            Verdict::NotPalindrome => "The sentence is not a palindrome.",
        }
    }
}

impl From<bool> for Verdict {
    fn from(is_palindrome: bool) -> Self {
        if is_palindrome {
            Verdict::Palindrome
        } else {
            Verdict::NotPalindrome
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Two-pointer scan from both ends; stops at the first mismatch.
pub fn is_palindrome(letters: &[u8]) -> bool {
    if letters.len() < 2 {
        return true;
    }

    let mut left = 0;
    let mut right = letters.len() - 1;
    while left < right {
        if letters[left] != letters[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

impl CanonicalForm {
    pub fn is_palindrome(&self) -> bool {
        is_palindrome(self.as_bytes())
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from(self.is_palindrome())
    }
}
