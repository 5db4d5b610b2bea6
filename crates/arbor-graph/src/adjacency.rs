use std::collections::HashMap;

use dashmap::DashMap;

use crate::model::AssocEntry;

// ─────────────────────────────────────────────
// AssocIndex
// ─────────────────────────────────────────────

/// In-memory, lock-free word-association index.
///
/// Maps a word to its neighbors ordered by descending relatedness
/// (rank 0 = most related). Backed by `DashMap` so a host can populate
/// it concurrently at load time and issue concurrent sampling reads
/// afterwards — sampling itself never mutates the index.
#[derive(Debug, Default)]
pub struct AssocIndex {
    /// word → ranked neighbor list
    words: DashMap<String, Vec<AssocEntry>>,
}

impl AssocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ──────────────────────────────────────

    /// Register a word with its full ranked neighbor list.
    /// Replaces any previous list for the word.
    pub fn insert(&self, word: impl Into<String>, entries: Vec<AssocEntry>) {
        self.words.insert(word.into(), entries);
    }

    /// Append one neighbor at the back of a word's list (next-worse rank).
    /// Creates the word if it is not indexed yet.
    pub fn push_entry(&self, word: impl Into<String>, entry: AssocEntry) {
        self.words.entry(word.into()).or_default().push(entry);
    }

    /// Clear all entries (used in tests).
    pub fn clear(&self) {
        self.words.clear();
    }

    // ── Queries ────────────────────────────────────────

    /// Ranked neighbor list of a word; empty if the word is not indexed.
    pub fn neighbors(&self, word: &str) -> Vec<AssocEntry> {
        self.words
            .get(word)
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    /// Whether the word has an entry in the index.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of neighbors recorded for a word.
    pub fn degree(&self, word: &str) -> usize {
        self.words.get(word).map(|v| v.len()).unwrap_or(0)
    }

    /// Number of indexed words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Total number of neighbor entries across all words.
    pub fn entry_count(&self) -> usize {
        self.words.iter().map(|kv| kv.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<W: Into<String>> FromIterator<(W, Vec<AssocEntry>)> for AssocIndex {
    fn from_iter<I: IntoIterator<Item = (W, Vec<AssocEntry>)>>(iter: I) -> Self {
        let index = Self::new();
        for (word, entries) in iter {
            index.insert(word, entries);
        }
        index
    }
}

impl From<HashMap<String, Vec<AssocEntry>>> for AssocIndex {
    fn from(map: HashMap<String, Vec<AssocEntry>>) -> Self {
        map.into_iter().collect()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
