//! Anonymization of free text
//!
//! Replaces every word that is not in a known-word dictionary with
//! placeholder characters, keeping punctuation, spacing and case shape.
//!
//! # Architecture
//!
//! - [`segmenter`] - Splits text into letter runs tagged with sentence starts
//! - [`mask`] - Placeholder characters and masking
//! - [`engine`] - The [`Anonymizer`] tying segmentation, lookup and masking together
//! - [`report`] - Per-call statistics
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use wordmask::anonymization::Anonymizer;
//! use wordmask::dictionary::Dictionary;
//!
//! let dict = Arc::new(Dictionary::from_words(["hallo", "daar"]));
//! let anonymizer = Anonymizer::new(dict);
//! assert_eq!(anonymizer.anonymize("Hallo daar, Marieke"), "Hallo daar, Xxxxxxx");
//! ```

pub mod engine;
pub mod mask;
pub mod report;
pub mod segmenter;

// Re-export main types
pub use engine::{should_anonymize, Anonymizer};
pub use mask::Placeholders;
pub use report::MaskReport;
pub use segmenter::{word_spans, WordSpan, WordSpans};
