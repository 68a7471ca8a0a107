//! Word list loading and selection.
//!
//! The list is loaded once at startup and never fails: a missing or useless
//! file degrades to the built-in fallback set, so session creation always
//! has a word to draw.

use rand::prelude::IndexedRandom;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Built-in fallback used when no external list yields a valid word.
const DEFAULT_WORDS: &[&str] = &[
    "hangman",
    "gallows",
    "frontend",
    "backend",
    "developer",
    "computer",
];

/// Supplies secret words for new sessions.
///
/// Production sources pick uniformly at random; tests substitute
/// deterministic implementations.
pub trait WordSource: Send + Sync {
    /// Returns one word: lowercase, ASCII letters only, non-empty.
    fn pick(&self) -> String;
}

/// An immutable list of lowercase alphabetic words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Loads a list from a file with one word per line.
    ///
    /// Falls back to the built-in set when the file is missing, unreadable,
    /// or contains no valid entries. A valid entry is a line that, after
    /// trimming and lowercasing, is non-empty and made of ASCII lowercase
    /// letters only.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let words = filter_valid(content.lines());
                if words.is_empty() {
                    warn!("word list has no valid entries, using built-in words");
                    Self::fallback()
                } else {
                    info!(count = words.len(), "loaded word list");
                    Self { words }
                }
            }
            Err(err) => {
                info!(error = %err, "no readable word list, using built-in words");
                Self::fallback()
            }
        }
    }

    /// Builds a list from the given words, keeping only valid entries.
    ///
    /// Falls back to the built-in set if nothing survives filtering.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = filter_valid(words);
        if words.is_empty() {
            warn!("no valid entries supplied, using built-in words");
            Self::fallback()
        } else {
            Self { words }
        }
    }

    fn fallback() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Number of words available.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction guarantees at least one word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn pick(&self) -> String {
        self.words
            .choose(&mut rand::rng())
            .cloned()
            .expect("word list is never empty")
    }
}

fn filter_valid<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
        .collect()
}
