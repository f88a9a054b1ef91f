//! Configuration schema types

use crate::anonymization::Placeholders;
use crate::dictionary::loader::SYSTEM_DICT_DIR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Wordmask configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordmaskConfig {
    /// Anonymizer settings
    #[serde(default)]
    pub anonymizer: AnonymizerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WordmaskConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.anonymizer.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Anonymizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizerConfig {
    /// Language code or installed word-list name; empty selects the default
    #[serde(default)]
    pub language: String,

    /// Placeholder for uppercase letters
    #[serde(default = "default_uppercase")]
    pub uppercase: char,

    /// Placeholder for lowercase and caseless letters
    #[serde(default = "default_lowercase")]
    pub lowercase: char,

    /// Placeholder for digits
    #[serde(default = "default_digit")]
    pub digit: char,

    /// Directory holding system word lists
    #[serde(default = "default_dictionary_dir")]
    pub dictionary_dir: PathBuf,

    /// Word-list file used instead of language resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_list: Option<PathBuf>,
}

impl Default for AnonymizerConfig {
    fn default() -> Self {
        Self {
            language: String::new(),
            uppercase: default_uppercase(),
            lowercase: default_lowercase(),
            digit: default_digit(),
            dictionary_dir: default_dictionary_dir(),
            word_list: None,
        }
    }
}

impl AnonymizerConfig {
    /// Placeholder characters from this configuration
    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digit: self.digit,
        }
    }

    fn validate(&self) -> Result<(), String> {
        self.placeholders().validate().map_err(|e| e.to_string())?;

        if self.language.chars().any(|c| c == '/' || c == '\\') {
            return Err(format!(
                "language '{}' must be a code or word-list name, not a path",
                self.language
            ));
        }

        if let Some(ref path) = self.word_list {
            if !path.is_file() {
                return Err(format!("word_list file not found: {}", path.display()));
            }
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_uppercase() -> char {
    Placeholders::default().uppercase
}

fn default_lowercase() -> char {
    Placeholders::default().lowercase
}

fn default_digit() -> char {
    Placeholders::default().digit
}

fn default_dictionary_dir() -> PathBuf {
    PathBuf::from(SYSTEM_DICT_DIR)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WordmaskConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.anonymizer.placeholders(), Placeholders::default());
        assert_eq!(config.anonymizer.dictionary_dir, PathBuf::from("/usr/share/dict"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: WordmaskConfig = toml::from_str("").unwrap();
        assert_eq!(config.anonymizer.language, "");
        assert_eq!(config.logging.log_level, "info");
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = WordmaskConfig::default();
        config.logging.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = WordmaskConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_placeholder() {
        let mut config = WordmaskConfig::default();
        config.anonymizer.digit = 'q';
        let err = config.validate().unwrap_err();
        assert!(err.contains("digit placeholder"));
    }

    #[test]
    fn test_language_path_rejected() {
        let mut config = WordmaskConfig::default();
        config.anonymizer.language = "../etc/passwd".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_word_list_rejected() {
        let mut config = WordmaskConfig::default();
        config.anonymizer.word_list = Some(PathBuf::from("/nonexistent/words.txt"));
        assert!(config.validate().is_err());
    }
}
