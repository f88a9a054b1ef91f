//! Unicode character classes by General_Category
//!
//! Words are runs of letters (`L*`), digits are decimal numbers (`Nd`).
//! The broader std properties (`is_alphabetic`, `is_numeric`) also accept
//! symbols like `Ⓐ`, combining vowel signs, `²` and `Ⅻ`, which must stay
//! untouched.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Check if the character is a Unicode letter (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`)
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Check if the character is a decimal digit (`Nd`) in any script
pub fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Check if the character is a lowercase letter (`Ll`)
pub fn is_lowercase_letter(c: char) -> bool {
    get_general_category(c) == GeneralCategory::LowercaseLetter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        for c in ['a', 'Z', 'ё', '東', 'ǅ', 'ʰ', 'न'] {
            assert!(is_letter(c), "{c:?}");
        }
    }

    #[test]
    fn test_non_letters() {
        // circled letter, roman numeral, devanagari virama and vowel sign, superscript
        for c in ['\u{24B6}', 'Ⅻ', '\u{94D}', '\u{947}', '²', '1', '-', ' '] {
            assert!(!is_letter(c), "{c:?}");
        }
    }

    #[test]
    fn test_digits() {
        for c in ['0', '9', '٣', '९'] {
            assert!(is_digit(c), "{c:?}");
        }
        for c in ['²', '½', 'Ⅻ', 'a'] {
            assert!(!is_digit(c), "{c:?}");
        }
    }

    #[test]
    fn test_lowercase_letters() {
        assert!(is_lowercase_letter('é'));
        assert!(!is_lowercase_letter('É'));
        assert!(!is_lowercase_letter('東'));
        // Other_Lowercase but not a letter
        assert!(!is_lowercase_letter('\u{2170}'));
    }
}
