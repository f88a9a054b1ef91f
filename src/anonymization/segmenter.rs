//! Word segmentation with sentence-boundary tracking
//!
//! [`word_spans`] walks a character slice once and yields every maximal run
//! of letters as a [`WordSpan`], tagged with whether it opens a sentence.
//! The first word of the text opens a sentence, and so does any word that
//! follows a sentence terminator (`.`, `?`, `!` and their Unicode
//! equivalents) with only whitespace in between. Any other non-letter,
//! non-whitespace character cancels a pending sentence start.
//!
//! # Examples
//!
//! ```
//! use wordmask::anonymization::segmenter::word_spans;
//!
//! let chars: Vec<char> = "Hi there. Bye, Bob".chars().collect();
//! let words: Vec<(String, bool)> = word_spans(&chars)
//!     .map(|span| (span.text(), span.sentence_initial))
//!     .collect();
//! assert_eq!(
//!     words,
//!     vec![
//!         ("Hi".to_string(), true),
//!         ("there".to_string(), false),
//!         ("Bye".to_string(), true),
//!         ("Bob".to_string(), false),
//!     ]
//! );
//! ```

use crate::charclass::is_letter;

/// One maximal run of letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSpan<'a> {
    /// Index of the first character of the word
    pub start: usize,
    /// Index of the first character after the word
    pub end: usize,
    /// The word in its original case
    pub word: &'a [char],
    /// True if this is the first word of a sentence
    pub sentence_initial: bool,
}

impl WordSpan<'_> {
    /// The word as a string
    pub fn text(&self) -> String {
        self.word.iter().collect()
    }

    /// Number of characters in the word
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: spans are never empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lazy iterator over the word spans of a character slice
///
/// Each call to [`word_spans`] starts from scratch, so iterating the same
/// input twice yields the same spans.
#[derive(Debug, Clone)]
pub struct WordSpans<'a> {
    chars: &'a [char],
    pos: usize,
    run_start: usize,
    run_end: usize,
    sentence_pending: bool,
}

/// Iterate over the word spans of `chars`
pub fn word_spans(chars: &[char]) -> WordSpans<'_> {
    WordSpans {
        chars,
        pos: 0,
        run_start: 0,
        run_end: 0,
        sentence_pending: true,
    }
}

impl<'a> WordSpans<'a> {
    fn take_run(&mut self) -> Option<WordSpan<'a>> {
        if self.run_start >= self.run_end {
            return None;
        }
        let span = WordSpan {
            start: self.run_start,
            end: self.run_end,
            word: &self.chars[self.run_start..self.run_end],
            sentence_initial: self.sentence_pending,
        };
        self.run_start = self.run_end;
        Some(span)
    }
}

impl<'a> Iterator for WordSpans<'a> {
    type Item = WordSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.chars.len() {
            let i = self.pos;
            let c = self.chars[i];
            self.pos += 1;

            if is_letter(c) {
                if self.run_start >= self.run_end {
                    self.run_start = i;
                }
                self.run_end = i + 1;
                continue;
            }

            let span = self.take_run();
            if span.is_some() {
                self.sentence_pending = false;
            }
            if is_sentence_terminal(c) {
                self.sentence_pending = true;
            } else if !c.is_whitespace() {
                self.sentence_pending = false;
            }
            if span.is_some() {
                return span;
            }
        }

        self.take_run()
    }
}

/// Check if the character ends a sentence (Unicode `Sentence_Terminal`).
pub fn is_sentence_terminal(c: char) -> bool {
    let cp = c as u32;
    SENTENCE_TERMINALS
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

// Sentence_Terminal ranges from the Unicode PropList, sorted.
const SENTENCE_TERMINALS: &[(u32, u32)] = &[
    (0x0021, 0x0021),
    (0x002E, 0x002E),
    (0x003F, 0x003F),
    (0x0589, 0x0589),
    (0x061D, 0x061F),
    (0x06D4, 0x06D4),
    (0x0700, 0x0702),
    (0x07F9, 0x07F9),
    (0x0837, 0x0837),
    (0x0839, 0x0839),
    (0x083D, 0x083E),
    (0x0964, 0x0965),
    (0x104A, 0x104B),
    (0x1362, 0x1362),
    (0x1367, 0x1368),
    (0x166E, 0x166E),
    (0x1735, 0x1736),
    (0x17D4, 0x17D5),
    (0x1803, 0x1803),
    (0x1809, 0x1809),
    (0x1944, 0x1945),
    (0x1AA8, 0x1AAB),
    (0x1B5A, 0x1B5B),
    (0x1B5E, 0x1B5F),
    (0x1B7D, 0x1B7E),
    (0x1C3B, 0x1C3C),
    (0x1C7E, 0x1C7F),
    (0x203C, 0x203D),
    (0x2047, 0x2049),
    (0x2E2E, 0x2E2E),
    (0x2E3C, 0x2E3C),
    (0x2E53, 0x2E54),
    (0x3002, 0x3002),
    (0xA4FF, 0xA4FF),
    (0xA60E, 0xA60F),
    (0xA6F3, 0xA6F3),
    (0xA6F7, 0xA6F7),
    (0xA876, 0xA877),
    (0xA8CE, 0xA8CF),
    (0xA92F, 0xA92F),
    (0xA9C8, 0xA9C9),
    (0xAA5D, 0xAA5F),
    (0xAAF0, 0xAAF1),
    (0xABEB, 0xABEB),
    (0xFE52, 0xFE52),
    (0xFE56, 0xFE57),
    (0xFF01, 0xFF01),
    (0xFF0E, 0xFF0E),
    (0xFF1F, 0xFF1F),
    (0xFF61, 0xFF61),
    (0x10A56, 0x10A57),
    (0x10F55, 0x10F59),
    (0x10F86, 0x10F89),
    (0x11047, 0x11048),
    (0x110BE, 0x110C1),
    (0x11141, 0x11143),
    (0x111C5, 0x111C6),
    (0x111CD, 0x111CD),
    (0x111DE, 0x111DF),
    (0x11238, 0x11239),
    (0x1123B, 0x1123C),
    (0x112A9, 0x112A9),
    (0x1144B, 0x1144C),
    (0x115C2, 0x115C3),
    (0x115C9, 0x115D7),
    (0x11641, 0x11642),
    (0x1173C, 0x1173E),
    (0x11944, 0x11944),
    (0x11946, 0x11946),
    (0x11A42, 0x11A43),
    (0x11A9B, 0x11A9C),
    (0x11C41, 0x11C42),
    (0x11EF7, 0x11EF8),
    (0x11F43, 0x11F44),
    (0x16A6E, 0x16A6F),
    (0x16AF5, 0x16AF5),
    (0x16B37, 0x16B38),
    (0x16B44, 0x16B44),
    (0x16E98, 0x16E98),
    (0x1BC9F, 0x1BC9F),
    (0x1DA88, 0x1DA88),
];
