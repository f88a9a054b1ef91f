// Wordmask - Dictionary-driven text anonymization
// Copyright (c) 2025 Wordmask Contributors
// Licensed under the MIT License

//! # Wordmask - Dictionary-driven text anonymization
//!
//! Wordmask redacts personally-identifying words from free text by replacing
//! every word that is not in a known-word dictionary with placeholder
//! characters, keeping punctuation, spacing and case shape intact.
//! It is meant for privacy preprocessing, e.g. before logging or sharing
//! user-submitted text.
//!
//! ## Architecture
//!
//! - [`anonymization`] - Word segmentation, masking decision and masking
//! - [`dictionary`] - Word lists per language, loading and caching
//! - [`domain`] - Error and result types
//! - [`charclass`] - Letter and digit classes
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use wordmask::anonymization::Anonymizer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anonymizer = Anonymizer::with_default_dictionary()?;
//!
//! assert_eq!(anonymizer.anonymize("hoi Albert!"), "hoi Xxxxxx!");
//! assert_eq!(anonymizer.anonymize("Hoi Hoi!"), "Hoi Xxx!");
//! # Ok(())
//! # }
//! ```
//!
//! ## Masking Rules
//!
//! - Every digit becomes the digit placeholder (`0` by default)
//! - A word is a maximal run of letters
//! - A lowercase word is masked when it is not in the dictionary
//! - A capitalized word opening a sentence is looked up with its first
//!   letter lowercased
//! - A capitalized word anywhere else is always masked
//! - Masked letters become `X` (uppercase) or `x` (anything else)
//!
//! ## Fixture Dictionaries
//!
//! The dictionary is an explicit dependency, so tests can inject their own:
//!
//! ```rust
//! use std::sync::Arc;
//! use wordmask::anonymization::Anonymizer;
//! use wordmask::dictionary::Dictionary;
//!
//! let dict = Arc::new(Dictionary::from_words(["the", "cat", "sat"]));
//! let anonymizer = Anonymizer::new(dict);
//! assert_eq!(anonymizer.anonymize("The cat sat on Tom"), "The cat sat xx Xxx");
//! ```
//!
//! ## Error Handling
//!
//! Anonymization never fails. Loading word lists and configuration return
//! [`domain::MaskError`]:
//!
//! ```rust,no_run
//! use wordmask::dictionary::load_dictionary;
//! use wordmask::domain::MaskError;
//!
//! match load_dictionary("de") {
//!     Ok(dict) => println!("{} words", dict.len()),
//!     Err(MaskError::SourceUnavailable { source_name, .. }) => eprintln!("cannot read {source_name}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod anonymization;
pub mod charclass;
pub mod config;
pub mod dictionary;
pub mod domain;
pub mod logging;
