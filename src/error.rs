//! Error handling for the palindrome checker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PalindromeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, PalindromeError>;

/// Convert TOML parse failures to our custom error type
impl From<toml::de::Error> for PalindromeError {
    fn from(err: toml::de::Error) -> Self {
        PalindromeError::Configuration(format!("Failed to parse config: {}", err))
    }
}
