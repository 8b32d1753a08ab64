//! Configuration management for the palindrome checker

use crate::error::{PalindromeError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_PROMPT: &str = "Enter a sentence: ";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: PromptConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub text: String,
    /// Terminate the prompt with a newline instead of leaving the cursor on it
    pub newline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color_output: bool,
    pub show_canonical: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_PROMPT.to_string(),
            newline: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or fall back to defaults when none was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PalindromeError::Configuration(format!(
                "Failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt.text, "Enter a sentence: ");
        assert!(!config.prompt.newline);
        assert!(!config.output.color_output);
        assert!(!config.output.show_canonical);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml("[output]\nshow_canonical = true\n").unwrap();
        assert!(config.output.show_canonical);
        assert!(!config.output.color_output);
        assert_eq!(config.prompt, PromptConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Config::from_toml("[prompt]\ncolour = true\n");
        assert!(matches!(result, Err(PalindromeError::Configuration(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[prompt]\ntext = \"> \"\nnewline = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.prompt.text, "> ");
        assert!(config.prompt.newline);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(&dir.path().join("absent.toml"));

        let err = result.unwrap_err();
        assert!(matches!(err, PalindromeError::Configuration(_)));
        assert!(err.to_string().contains("absent.toml"));
    }
}
