//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::WordmaskConfig;
use crate::domain::errors::MaskError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into WordmaskConfig
/// 4. Applies environment variable overrides (WORDMASK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`MaskError::Configuration`] if any step fails.
///
/// # Examples
///
/// ```no_run
/// use wordmask::config::loader::load_config;
///
/// let config = load_config("wordmask.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<WordmaskConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MaskError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MaskError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: WordmaskConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MaskError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are reported
/// together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MaskError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    cap[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MaskError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using WORDMASK_* prefix
///
/// Environment variables follow the pattern: WORDMASK_<SECTION>_<KEY>
/// For example: WORDMASK_ANONYMIZER_LANGUAGE, WORDMASK_LOGGING_LOG_LEVEL
fn apply_env_overrides(config: &mut WordmaskConfig) -> Result<()> {
    // Anonymizer overrides
    if let Ok(val) = std::env::var("WORDMASK_ANONYMIZER_LANGUAGE") {
        config.anonymizer.language = val;
    }
    if let Ok(val) = std::env::var("WORDMASK_ANONYMIZER_UPPERCASE") {
        config.anonymizer.uppercase = parse_placeholder("WORDMASK_ANONYMIZER_UPPERCASE", &val)?;
    }
    if let Ok(val) = std::env::var("WORDMASK_ANONYMIZER_LOWERCASE") {
        config.anonymizer.lowercase = parse_placeholder("WORDMASK_ANONYMIZER_LOWERCASE", &val)?;
    }
    if let Ok(val) = std::env::var("WORDMASK_ANONYMIZER_DIGIT") {
        config.anonymizer.digit = parse_placeholder("WORDMASK_ANONYMIZER_DIGIT", &val)?;
    }
    if let Ok(val) = std::env::var("WORDMASK_ANONYMIZER_DICTIONARY_DIR") {
        config.anonymizer.dictionary_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("WORDMASK_ANONYMIZER_WORD_LIST") {
        config.anonymizer.word_list = Some(PathBuf::from(val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("WORDMASK_LOGGING_LOG_LEVEL") {
        config.logging.log_level = val;
    }
    if let Ok(val) = std::env::var("WORDMASK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("WORDMASK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_placeholder(var: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MaskError::Configuration(format!(
            "{var} must be exactly one character, got '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("WORDMASK_TEST_LANG", "en");
        let input = "language = \"${WORDMASK_TEST_LANG}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "language = \"en\"\n");
        std::env::remove_var("WORDMASK_TEST_LANG");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("WORDMASK_MISSING_VAR");
        let input = "language = \"${WORDMASK_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("WORDMASK_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("WORDMASK_COMMENTED_VAR");
        let input = "# language = \"${WORDMASK_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(parse_placeholder("V", "█").unwrap(), '█');
        assert!(parse_placeholder("V", "").is_err());
        assert!(parse_placeholder("V", "XY").is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(MaskError::Configuration(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[anonymizer\nlanguage = ").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
