//! Main anonymization engine
//!
//! This module provides the [`Anonymizer`], which replaces every word that
//! is not in its dictionary with placeholder characters.
//!
//! # Pipeline
//!
//! 1. Every digit becomes the digit placeholder, inside words or not
//! 2. The text is segmented into letter runs with sentence-start tags
//! 3. Each run is looked up in the dictionary, see [`should_anonymize`]
//! 4. Unknown runs are masked letter by letter, keeping case shape
//!
//! The output always has the same number of characters as the input.
//!
//! # Examples
//!
//! ```
//! use wordmask::anonymization::Anonymizer;
//!
//! let anonymizer = Anonymizer::with_default_dictionary()?;
//! assert_eq!(anonymizer.anonymize("Hoi Albert!"), "Hoi Xxxxxx!");
//! assert_eq!(anonymizer.anonymize("12-34"), "00-00");
//! # Ok::<(), wordmask::domain::MaskError>(())
//! ```

use crate::anonymization::mask::Placeholders;
use crate::anonymization::report::MaskReport;
use crate::anonymization::segmenter::{word_spans, WordSpan};
use crate::config::AnonymizerConfig;
use crate::dictionary::loader::load_source;
use crate::dictionary::{
    default_dictionary, Dictionary, DictionaryCache, DictionaryLoader, WordSource,
};
use crate::domain::Result;
use std::sync::Arc;

/// Replaces non-dictionary words with placeholders
///
/// # Thread Safety
///
/// The anonymizer holds no per-call state. One instance can serve any
/// number of threads; the dictionary is shared read-only behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Anonymizer {
    dictionary: Arc<Dictionary>,
    placeholders: Placeholders,
}

impl Anonymizer {
    /// Create an anonymizer over the given dictionary with default placeholders
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            placeholders: Placeholders::default(),
        }
    }

    /// Create an anonymizer over the process-wide default dictionary
    ///
    /// # Errors
    ///
    /// Returns the error of the one-time default dictionary load.
    pub fn with_default_dictionary() -> Result<Self> {
        Ok(Self::new(default_dictionary()?))
    }

    /// Create an anonymizer for a language using the process-wide cache
    pub fn for_language(language: &str) -> Result<Self> {
        Ok(Self::new(DictionaryCache::shared().get(language)?))
    }

    /// Create an anonymizer from configuration
    ///
    /// An explicit `word_list` is loaded directly. Otherwise the language is
    /// resolved against `dictionary_dir`: the process-wide cache serves the
    /// system directory, any other directory gets a dedicated load.
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholders are invalid or the word list
    /// cannot be read.
    pub fn from_config(config: &AnonymizerConfig) -> Result<Self> {
        let placeholders = config.placeholders();
        placeholders.validate()?;

        let dictionary = if let Some(ref path) = config.word_list {
            Arc::new(load_source(&WordSource::File(path.clone()))?)
        } else {
            let cache = DictionaryCache::shared();
            if cache.loader().dict_dir() == config.dictionary_dir.as_path() {
                cache.get(&config.language)?
            } else {
                let loader = DictionaryLoader::new(&config.dictionary_dir);
                Arc::new(loader.load(&config.language)?)
            }
        };

        tracing::debug!(
            language = %config.language,
            words = dictionary.len(),
            "Anonymizer created"
        );

        Ok(Self {
            dictionary,
            placeholders,
        })
    }

    /// Replace the placeholder characters
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::MaskError::Validation`] for unusable placeholders.
    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Result<Self> {
        placeholders.validate()?;
        self.placeholders = placeholders;
        Ok(self)
    }

    /// Dictionary consulted for each word
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Placeholder characters in use
    pub fn placeholders(&self) -> Placeholders {
        self.placeholders
    }

    /// Replace with a placeholder all non-dictionary words in the text.
    pub fn anonymize(&self, text: &str) -> String {
        self.anonymize_with_report(text).0
    }

    /// Anonymize and count what was done
    pub fn anonymize_with_report(&self, text: &str) -> (String, MaskReport) {
        let mut report = MaskReport::default();

        let mut source: Vec<char> = text.chars().collect();
        report.digits_replaced = self.placeholders.substitute_digits(&mut source);

        let mut output = source.clone();
        for span in word_spans(&source) {
            report.words += 1;
            if span.sentence_initial {
                report.sentence_initial_words += 1;
            }
            if should_anonymize(&self.dictionary, &span) {
                self.placeholders.mask(&mut output[span.start..span.end]);
                report.words_masked += 1;
            }
        }

        tracing::trace!(
            chars = source.len(),
            words = report.words,
            words_masked = report.words_masked,
            digits_replaced = report.digits_replaced,
            "Text anonymized"
        );

        (output.into_iter().collect(), report)
    }
}

/// Check if the word in the given span should be anonymized.
///
/// A capitalized word that opens a sentence is looked up with its first
/// letter lowercased. A capitalized word anywhere else is always masked:
/// dictionaries only hold lowercase words, so it could never match.
pub fn should_anonymize(dictionary: &Dictionary, span: &WordSpan<'_>) -> bool {
    let Some((&first, rest)) = span.word.split_first() else {
        return false;
    };

    if !first.is_uppercase() {
        return !dictionary.contains(&span.text());
    }
    if !span.sentence_initial {
        return true;
    }

    // Single-char mapping: 'İ' lowercases to 'i', not "i\u{307}".
    let lower = first.to_lowercase().next().unwrap_or(first);
    let normalized: String = std::iter::once(lower).chain(rest.iter().copied()).collect();
    !dictionary.contains(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn fixture() -> Anonymizer {
        Anonymizer::new(Arc::new(Dictionary::from_words([
            "hoi", "hoe", "gaat", "het", "de", "fiets",
        ])))
    }

    fn span<'a>(word: &'a [char], sentence_initial: bool) -> WordSpan<'a> {
        WordSpan {
            start: 0,
            end: word.len(),
            word,
            sentence_initial,
        }
    }

    #[test_case("Albert", "Xxxxxx" ; "unknown capitalized word")]
    #[test_case("hoi Albert!", "hoi Xxxxxx!" ; "unknown word after known")]
    #[test_case("Hoi Albert!", "Hoi Xxxxxx!" ; "sentence initial known word")]
    #[test_case("Hoi Hoi!", "Hoi Xxx!" ; "mid sentence capital masked")]
    #[test_case("hoe gaat het, asdasd?", "hoe gaat het, xxxxxx?" ; "lowercase unknown word")]
    #[test_case("MyLoKo", "XxXxXx" ; "internal capitals")]
    #[test_case("12 34", "00 00" ; "digits with space")]
    #[test_case("12-34", "00-00" ; "digits with dash")]
    #[test_case("Lelystad", "Xxxxxxxx" ; "place name")]
    #[test_case("Flёur", "Xxxxx" ; "mixed script word")]
    #[test_case("hoi. Fiets!", "hoi. Fiets!" ; "known word after full stop")]
    #[test_case("hoi, Fiets!", "hoi, Xxxxx!" ; "capital after comma")]
    #[test_case("fiets2go", "fiets0xx" ; "digit splits word")]
    #[test_case("", "" ; "empty")]
    fn test_anonymize(input: &str, expected: &str) {
        assert_eq!(fixture().anonymize(input), expected);
    }

    #[test]
    fn test_should_anonymize_lowercase_known() {
        let dict = Dictionary::from_words(["hoi"]);
        let word: Vec<char> = "hoi".chars().collect();
        assert!(!should_anonymize(&dict, &span(&word, false)));
        assert!(!should_anonymize(&dict, &span(&word, true)));
    }

    #[test]
    fn test_should_anonymize_capitalized() {
        let dict = Dictionary::from_words(["hoi"]);
        let word: Vec<char> = "Hoi".chars().collect();
        assert!(!should_anonymize(&dict, &span(&word, true)));
        assert!(should_anonymize(&dict, &span(&word, false)));
    }

    #[test]
    fn test_should_anonymize_only_first_letter_normalized() {
        let dict = Dictionary::from_words(["hoi"]);
        let word: Vec<char> = "HOI".chars().collect();
        assert!(should_anonymize(&dict, &span(&word, true)));
    }

    #[test]
    fn test_dotted_capital_i_normalizes_to_plain_i() {
        let anonymizer = Anonymizer::new(Arc::new(Dictionary::from_words(["istanbul"])));
        assert_eq!(anonymizer.anonymize("İstanbul"), "İstanbul");
        assert_eq!(anonymizer.anonymize("istanbul İstanbul"), "istanbul Xxxxxxxx");
    }

    #[test]
    fn test_symbols_and_other_numbers_untouched() {
        assert_eq!(fixture().anonymize("hoi \u{24B6}"), "hoi \u{24B6}");
        assert_eq!(fixture().anonymize("hoi x² ½ Ⅻ"), "hoi x² ½ Ⅻ");
    }

    #[test]
    fn test_report_counts() {
        let (output, report) = fixture().anonymize_with_report("Hoi Jan. Het is 3 uur");
        assert_eq!(output, "Hoi Xxx. Het xx 0 xxx");
        assert_eq!(report.words, 5);
        assert_eq!(report.words_masked, 3);
        assert_eq!(report.sentence_initial_words, 2);
        assert_eq!(report.digits_replaced, 1);
    }

    #[test]
    fn test_custom_placeholders() {
        let anonymizer = fixture()
            .with_placeholders(Placeholders {
                uppercase: 'A',
                lowercase: 'a',
                digit: '#',
            })
            .unwrap();
        assert_eq!(anonymizer.anonymize("Hoi Piet, 42"), "Hoi Aaaa, ##");
    }

    #[test]
    fn test_invalid_placeholders_rejected() {
        let result = fixture().with_placeholders(Placeholders {
            digit: 'z',
            ..Placeholders::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_no_letters() {
        assert_eq!(fixture().anonymize("!? -- ..."), "!? -- ...");
    }
}
