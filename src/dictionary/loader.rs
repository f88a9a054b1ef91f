//! Word-source resolution and dictionary loading
//!
//! Resolution order for a language identifier:
//! 1. Empty identifier: the embedded default list
//! 2. Identifier naming an installed system list: that file
//! 3. Language code mapped to an installed system list: that file
//! 4. Language code with an embedded list: the embedded list
//! 5. Anything else: the embedded default list
//!
//! Unknown languages never fail; only a resolved file that cannot be opened
//! or read produces [`MaskError::SourceUnavailable`].

use super::languages::{embedded_words, system_list_name, DEFAULT_LANGUAGE};
use super::Dictionary;
use crate::domain::{MaskError, Result};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Directory where system word lists are installed
pub const SYSTEM_DICT_DIR: &str = "/usr/share/dict";

/// Where a dictionary's words come from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WordSource {
    /// A word list compiled into the crate, keyed by language code
    Embedded(&'static str),
    /// A newline-separated word list on disk
    File(PathBuf),
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Embedded(lang) => write!(f, "embedded:{lang}"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves language identifiers against a dictionary directory
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    dict_dir: PathBuf,
    installed: HashSet<String>,
}

impl DictionaryLoader {
    /// Create a loader for the given directory, scanning its installed lists
    ///
    /// A missing or unreadable directory is not an error: the loader then
    /// only knows the embedded lists.
    pub fn new(dict_dir: impl Into<PathBuf>) -> Self {
        let dict_dir = dict_dir.into();
        let installed = scan_installed(&dict_dir);
        Self {
            dict_dir,
            installed,
        }
    }

    /// Create a loader for the system dictionary directory
    pub fn system() -> Self {
        Self::new(SYSTEM_DICT_DIR)
    }

    /// Directory scanned for installed lists
    pub fn dict_dir(&self) -> &Path {
        &self.dict_dir
    }

    /// Returns true if a list with this file name is installed
    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.contains(name)
    }

    /// Resolve a language identifier to a word source
    pub fn resolve(&self, language: &str) -> WordSource {
        let source = if language.is_empty() {
            WordSource::Embedded(DEFAULT_LANGUAGE)
        } else if self.is_installed(language) {
            WordSource::File(self.dict_dir.join(language))
        } else if let Some(name) = system_list_name(language).filter(|n| self.is_installed(n)) {
            WordSource::File(self.dict_dir.join(name))
        } else {
            match embedded_code(language) {
                Some(code) => WordSource::Embedded(code),
                None => WordSource::Embedded(DEFAULT_LANGUAGE),
            }
        };

        tracing::debug!(language = %language, source = %source, "Resolved word source");
        source
    }

    /// Resolve and load the dictionary for a language
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::SourceUnavailable`] if the resolved word list
    /// cannot be opened or read.
    pub fn load(&self, language: &str) -> Result<Dictionary> {
        let source = self.resolve(language);
        load_source(&source)
    }
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self::system()
    }
}

/// Load the dictionary for a language from the system directory
///
/// # Examples
///
/// ```
/// use wordmask::dictionary::load_dictionary;
///
/// // An empty language selects the embedded default list
/// let dict = load_dictionary("")?;
/// assert!(dict.contains("hoi"));
/// # Ok::<(), wordmask::domain::MaskError>(())
/// ```
pub fn load_dictionary(language: &str) -> Result<Dictionary> {
    DictionaryLoader::system().load(language)
}

/// Build a dictionary from a resolved word source
pub fn load_source(source: &WordSource) -> Result<Dictionary> {
    let (dict, stats) = match source {
        WordSource::Embedded(lang) => {
            let text = embedded_words(lang).ok_or_else(|| {
                MaskError::source_unavailable(source.to_string(), "no embedded word list")
            })?;
            Dictionary::from_text(text)
        }
        WordSource::File(path) => load_file(path)?,
    };

    tracing::info!(
        source = %source,
        accepted = stats.accepted,
        skipped = stats.skipped,
        "Dictionary loaded"
    );

    Ok(dict)
}

fn load_file(path: &Path) -> Result<(Dictionary, super::LoadStats)> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| MaskError::source_unavailable(&name, e))?;
    Dictionary::from_reader(BufReader::new(file), &name)
}

fn embedded_code(language: &str) -> Option<&'static str> {
    super::languages::embedded_languages().find(|code| *code == language)
}

fn scan_installed(dict_dir: &Path) -> HashSet<String> {
    match std::fs::read_dir(dict_dir) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect(),
        Err(e) => {
            tracing::warn!(
                dict_dir = %dict_dir.display(),
                error = %e,
                "Dictionary directory unreadable, using embedded word lists only"
            );
            HashSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loader_with(files: &[(&str, &str)]) -> (TempDir, DictionaryLoader) {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        let loader = DictionaryLoader::new(dir.path());
        (dir, loader)
    }

    #[test]
    fn test_resolve_empty_uses_embedded_default() {
        let (_dir, loader) = loader_with(&[("words", "hoi\n")]);
        assert_eq!(loader.resolve(""), WordSource::Embedded(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_resolve_installed_list_name() {
        let (dir, loader) = loader_with(&[("british-english", "colour\n")]);
        assert_eq!(
            loader.resolve("british-english"),
            WordSource::File(dir.path().join("british-english"))
        );
    }

    #[test]
    fn test_resolve_language_code_to_installed_list() {
        let (dir, loader) = loader_with(&[("ngerman", "hallo\n")]);
        assert_eq!(
            loader.resolve("de"),
            WordSource::File(dir.path().join("ngerman"))
        );
    }

    #[test]
    fn test_resolve_mapped_but_not_installed_falls_back() {
        let (_dir, loader) = loader_with(&[]);
        assert_eq!(loader.resolve("de"), WordSource::Embedded(DEFAULT_LANGUAGE));
        assert_eq!(loader.resolve("en"), WordSource::Embedded("en"));
    }

    #[test]
    fn test_resolve_unknown_language_falls_back() {
        let (_dir, loader) = loader_with(&[]);
        assert_eq!(loader.resolve("xx"), WordSource::Embedded(DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_missing_directory_is_not_an_error() {
        let loader = DictionaryLoader::new("/nonexistent/wordmask/dict");
        assert!(!loader.is_installed("words"));
        assert!(loader.load("nl").unwrap().contains("gaat"));
    }

    #[test]
    fn test_load_filters_inadmissible_lines() {
        let (_dir, loader) = loader_with(&[("dutch", "hoi\nAmsterdam\n3d\nfiets\n")]);
        let dict = loader.load("nl").unwrap();
        assert!(dict.contains("hoi"));
        assert!(dict.contains("fiets"));
        assert!(!dict.contains("Amsterdam"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_load_unreadable_source_fails() {
        let err = load_source(&WordSource::File(PathBuf::from(
            "/nonexistent/wordmask/dict/dutch",
        )))
        .unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_word_source_display() {
        assert_eq!(WordSource::Embedded("nl").to_string(), "embedded:nl");
        assert_eq!(
            WordSource::File(PathBuf::from("/usr/share/dict/dutch")).to_string(),
            "/usr/share/dict/dutch"
        );
    }
}
