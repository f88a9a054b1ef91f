//! Language tables
//!
//! Maps short language codes to system word-list names and to the word
//! lists compiled into the crate.

/// Language used when nothing else resolves
pub const DEFAULT_LANGUAGE: &str = "nl";

/// Language codes mapped to word-list names as installed under `/usr/share/dict`
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "american-english"),
    ("no", "bokmaal"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("da", "danish"),
    ("nl", "dutch"),
    ("fo", "faroese"),
    ("fr", "french"),
    ("gl", "galician"),
    ("de", "ngerman"),
    ("it", "italian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("es", "spanish"),
    ("sv", "swedish"),
    ("uk", "ukrainian"),
];

const EMBEDDED: &[(&str, &str)] = &[
    ("nl", include_str!("../../words/nl.txt")),
    ("en", include_str!("../../words/en.txt")),
];

/// System word-list name for a language code
pub fn system_list_name(language: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, name)| *name)
}

/// Embedded word list for a language code
pub fn embedded_words(language: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(code, _)| *code == language)
        .map(|(_, words)| *words)
}

/// Languages with a word list compiled into the crate
pub fn embedded_languages() -> impl Iterator<Item = &'static str> {
    EMBEDDED.iter().map(|(code, _)| *code)
}
