//! Dictionary cache
//!
//! Entries are keyed by the word source a language resolves to, so aliases
//! such as `""`, `"nl"` and unknown codes share one dictionary. Each source
//! is built at most once per cache, even when many threads ask for it at the
//! same time. A failed build is remembered: every caller sees
//! the same error and the load is not retried.

use super::loader::{load_source, DictionaryLoader, WordSource};
use super::Dictionary;
use crate::domain::Result;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

type Cell = Arc<OnceLock<Result<Arc<Dictionary>>>>;

/// Memoizes dictionaries per resolved word source
#[derive(Debug)]
pub struct DictionaryCache {
    loader: DictionaryLoader,
    cells: Mutex<HashMap<WordSource, Cell>>,
}

impl DictionaryCache {
    /// Create an empty cache backed by the given loader
    pub fn new(loader: DictionaryLoader) -> Self {
        Self {
            loader,
            cells: Mutex::new(HashMap::new()),
        }
    }

    /// Process-wide cache over the system dictionary directory
    pub fn shared() -> &'static DictionaryCache {
        static SHARED: OnceLock<DictionaryCache> = OnceLock::new();
        SHARED.get_or_init(|| DictionaryCache::new(DictionaryLoader::system()))
    }

    /// Loader used for cache misses
    pub fn loader(&self) -> &DictionaryLoader {
        &self.loader
    }

    /// Get the dictionary for a language, building it on first use
    ///
    /// # Errors
    ///
    /// Returns the error of the first build attempt for the resolved source.
    pub fn get(&self, language: &str) -> Result<Arc<Dictionary>> {
        let source = self.loader.resolve(language);
        let cell = self.cell(&source);
        if let Some(result) = cell.get() {
            tracing::debug!(language = %language, source = %source, "Dictionary cache hit");
            return result.clone();
        }

        // The map lock is released before building so other sources
        // are not blocked behind a slow load.
        cell.get_or_init(|| {
            let result = load_source(&source).map(Arc::new);
            if let Err(ref e) = result {
                tracing::error!(language = %language, error = %e, "Dictionary load failed");
            }
            result
        })
        .clone()
    }

    /// Number of distinct word sources requested so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been requested yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn cell(&self, source: &WordSource) -> Cell {
        let mut cells = self.lock();
        cells
            .entry(source.clone())
            .or_insert_with(|| Arc::new(OnceLock::new()))
            .clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<WordSource, Cell>> {
        // The map holds no invariant a panicking holder could break.
        self.cells.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Default dictionary from the process-wide cache
///
/// # Examples
///
/// ```
/// let dict = wordmask::dictionary::default_dictionary()?;
/// assert!(dict.contains("gaat"));
/// # Ok::<(), wordmask::domain::MaskError>(())
/// ```
pub fn default_dictionary() -> Result<Arc<Dictionary>> {
    DictionaryCache::shared().get("")
}
