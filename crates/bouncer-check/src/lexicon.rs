//! Word list used by the spelling check

use bouncer_core::{BouncerError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Set of recognized words.
///
/// Entries are lower-cased and stripped of digits when loaded, so lookups are
/// expected to use tokens normalized the same way.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a newline-delimited word list.
    ///
    /// An unreadable file is an error; there is no fallback to an empty dictionary.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BouncerError::DictionaryLoadError(format!(
                "Failed to read word list {}: {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::from_words(content.lines());
        if dictionary.is_empty() {
            tracing::warn!(path = %path.display(), "word list is empty, every name will fail the spelling check");
        } else {
            tracing::info!(path = %path.display(), words = dictionary.len(), "loaded word list");
        }
        Ok(dictionary)
    }

    /// Build a dictionary from raw word list entries
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Check whether a normalized word is recognized
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(entry: &str) -> Option<String> {
    let word: String = entry
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .collect();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}
