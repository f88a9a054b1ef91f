//! Placeholder characters and in-place masking

use crate::charclass::{is_digit, is_letter};
use crate::domain::{MaskError, Result};
use serde::{Deserialize, Serialize};

/// Characters substituted for masked letters and for digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    /// Replaces uppercase letters
    #[serde(default = "default_uppercase")]
    pub uppercase: char,
    /// Replaces lowercase and caseless letters
    #[serde(default = "default_lowercase")]
    pub lowercase: char,
    /// Replaces every digit
    #[serde(default = "default_digit")]
    pub digit: char,
}

fn default_uppercase() -> char {
    'X'
}

fn default_lowercase() -> char {
    'x'
}

fn default_digit() -> char {
    '0'
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            uppercase: default_uppercase(),
            lowercase: default_lowercase(),
            digit: default_digit(),
        }
    }
}

impl Placeholders {
    /// Block-drawing placeholders, visually distinct from real text
    pub fn blocks() -> Self {
        Self {
            uppercase: '█',
            lowercase: '▄',
            digit: '▒',
        }
    }

    /// Validate the placeholder characters
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Validation`] if a placeholder is a control or
    /// whitespace character, if the digit placeholder is a letter (it would
    /// merge into neighbouring words), or if a letter placeholder has the
    /// opposite case.
    pub fn validate(&self) -> Result<()> {
        for (name, c) in [
            ("uppercase", self.uppercase),
            ("lowercase", self.lowercase),
            ("digit", self.digit),
        ] {
            if c.is_control() || c.is_whitespace() {
                return Err(MaskError::Validation(format!(
                    "{name} placeholder must be printable, got {c:?}"
                )));
            }
        }
        if is_letter(self.digit) {
            return Err(MaskError::Validation(format!(
                "digit placeholder must not be a letter, got {:?}",
                self.digit
            )));
        }
        if self.uppercase.is_lowercase() {
            return Err(MaskError::Validation(format!(
                "uppercase placeholder must not be lowercase, got {:?}",
                self.uppercase
            )));
        }
        if self.lowercase.is_uppercase() {
            return Err(MaskError::Validation(format!(
                "lowercase placeholder must not be uppercase, got {:?}",
                self.lowercase
            )));
        }
        Ok(())
    }

    /// Replace every digit in place, returning how many were replaced
    pub fn substitute_digits(&self, chars: &mut [char]) -> usize {
        let mut replaced = 0;
        for c in chars.iter_mut().filter(|c| is_digit(**c)) {
            *c = self.digit;
            replaced += 1;
        }
        replaced
    }

    /// Mask every character of `chars` keeping its case shape
    pub fn mask(&self, chars: &mut [char]) {
        for c in chars {
            *c = if c.is_uppercase() {
                self.uppercase
            } else {
                self.lowercase
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masked(word: &str, placeholders: Placeholders) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        placeholders.mask(&mut chars);
        chars.into_iter().collect()
    }

    #[test]
    fn test_default_placeholders() {
        let p = Placeholders::default();
        assert_eq!((p.uppercase, p.lowercase, p.digit), ('X', 'x', '0'));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_mask_keeps_case_shape() {
        assert_eq!(masked("MyLoKo", Placeholders::default()), "XxXxXx");
        assert_eq!(masked("Flёur", Placeholders::default()), "Xxxxx");
    }

    #[test]
    fn test_mask_caseless_letters_use_lowercase() {
        assert_eq!(masked("東京", Placeholders::default()), "xx");
    }

    #[test]
    fn test_block_placeholders() {
        let p = Placeholders::blocks();
        assert!(p.validate().is_ok());
        assert_eq!(masked("Ab", p), "█▄");
    }

    #[test]
    fn test_substitute_digits() {
        let mut chars: Vec<char> = "a1 ٣-9".chars().collect();
        let replaced = Placeholders::default().substitute_digits(&mut chars);
        assert_eq!(replaced, 3);
        assert_eq!(chars.into_iter().collect::<String>(), "a0 0-0");
    }

    #[test]
    fn test_substitute_digits_leaves_other_numbers() {
        let mut chars: Vec<char> = "x² ½ Ⅻ 7".chars().collect();
        let replaced = Placeholders::default().substitute_digits(&mut chars);
        assert_eq!(replaced, 1);
        assert_eq!(chars.into_iter().collect::<String>(), "x² ½ Ⅻ 0");
    }

    #[test]
    fn test_validate_rejects_letter_digit() {
        let p = Placeholders {
            digit: 'd',
            ..Placeholders::default()
        };
        assert!(matches!(p.validate(), Err(MaskError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_whitespace_and_control() {
        let p = Placeholders {
            lowercase: ' ',
            ..Placeholders::default()
        };
        assert!(p.validate().is_err());
        let p = Placeholders {
            uppercase: '\u{7}',
            ..Placeholders::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_swapped_case() {
        let p = Placeholders {
            uppercase: 'x',
            lowercase: 'X',
            digit: '0',
        };
        assert!(p.validate().is_err());
    }
}
