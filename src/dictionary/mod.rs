//! Known-word dictionaries
//!
//! A [`Dictionary`] is an immutable exact-match set of admissible words for
//! one language. Words are admissible when every character is a lowercase
//! letter: no uppercase, no digits, no symbols. Anything else found in a word
//! list is skipped during construction, never rejected.
//!
//! # Architecture
//!
//! - [`languages`] - Static language-code table and embedded word lists
//! - [`loader`] - Resolves a language to a word source and builds the dictionary
//! - [`cache`] - Once-per-source memoization, including the process-wide default
//!
//! # Examples
//!
//! ```
//! use wordmask::dictionary::Dictionary;
//!
//! let dict = Dictionary::from_words(["hoi", "Albert", "r2d2", "gaat"]);
//! assert!(dict.contains("hoi"));
//! assert!(!dict.contains("Albert"));
//! assert_eq!(dict.len(), 2);
//! ```

pub mod cache;
pub mod languages;
pub mod loader;

pub use cache::{default_dictionary, DictionaryCache};
pub use loader::{load_dictionary, DictionaryLoader, WordSource};

use crate::charclass::is_lowercase_letter;
use crate::domain::{MaskError, Result};
use std::collections::HashSet;
use std::io::BufRead;

/// Exact-match set of known lowercase words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

/// Outcome of building a dictionary from a word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines stored in the dictionary
    pub accepted: usize,
    /// Lines skipped by the admissibility rule (including blank lines)
    pub skipped: usize,
}

impl Dictionary {
    /// Build a dictionary from candidate words, keeping only admissible ones
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    /// Build a dictionary from newline-separated text
    pub fn from_text(text: &str) -> (Self, LoadStats) {
        let mut dict = Self::default();
        let mut stats = LoadStats::default();
        for line in text.split('\n') {
            dict.record(line.trim_end_matches('\r'), &mut stats);
        }
        (dict, stats)
    }

    /// Build a dictionary from a reader producing one candidate word per line
    ///
    /// Lines that are not valid UTF-8 are skipped like any other
    /// non-conforming line.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::SourceUnavailable`] if reading fails part-way.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        source_name: &str,
    ) -> Result<(Self, LoadStats)> {
        let mut dict = Self::default();
        let mut stats = LoadStats::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| MaskError::source_unavailable(source_name, e))?;
            if read == 0 {
                break;
            }
            match std::str::from_utf8(&buf) {
                Ok(line) => dict.record(line.trim_end_matches(['\n', '\r']), &mut stats),
                Err(_) => stats.skipped += 1,
            }
        }
        Ok((dict, stats))
    }

    /// Check if the exact word is known
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no words are stored
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn insert(&mut self, word: &str) -> bool {
        if is_admissible(word) {
            self.words.insert(word.to_owned());
            true
        } else {
            false
        }
    }

    fn record(&mut self, line: &str, stats: &mut LoadStats) {
        if self.insert(line) {
            stats.accepted += 1;
        } else {
            stats.skipped += 1;
        }
    }
}

/// Check if the given word may be stored in a dictionary.
///
/// Only lowercase letters. No uppercase, no symbols, no digits, not empty.
pub fn is_admissible(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_lowercase_letter)
}
