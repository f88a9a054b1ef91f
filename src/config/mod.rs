//! Configuration management for Wordmask.
//!
//! Wordmask uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `WORDMASK_*` environment overrides
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [anonymizer]
//! language = "nl"
//! uppercase = "X"
//! lowercase = "x"
//! digit = "0"
//! dictionary_dir = "/usr/share/dict"
//!
//! [logging]
//! log_level = "info"
//! local_enabled = false
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordmask::anonymization::Anonymizer;
//! use wordmask::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("wordmask.toml")?;
//! let anonymizer = Anonymizer::from_config(&config.anonymizer)?;
//! println!("{}", anonymizer.anonymize("Hoi Albert!"));
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{AnonymizerConfig, LoggingConfig, WordmaskConfig};
