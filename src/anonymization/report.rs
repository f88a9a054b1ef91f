//! Per-call anonymization statistics

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Counts collected while anonymizing one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskReport {
    /// Letter runs found
    pub words: usize,

    /// Letter runs replaced by placeholders
    pub words_masked: usize,

    /// Letter runs opening a sentence
    pub sentence_initial_words: usize,

    /// Digits replaced by the digit placeholder
    pub digits_replaced: usize,
}

impl MaskReport {
    /// Letter runs left as they were
    pub fn words_kept(&self) -> usize {
        self.words - self.words_masked
    }

    /// Share of words masked, 0.0 when there were no words
    pub fn masked_ratio(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.words_masked as f64 / self.words as f64
        }
    }

    /// Returns true if the text came out unchanged
    pub fn is_unchanged(&self) -> bool {
        self.words_masked == 0 && self.digits_replaced == 0
    }
}

impl AddAssign for MaskReport {
    fn add_assign(&mut self, other: Self) {
        self.words += other.words;
        self.words_masked += other.words_masked;
        self.sentence_initial_words += other.sentence_initial_words;
        self.digits_replaced += other.digits_replaced;
    }
}
