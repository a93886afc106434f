//! Word occurrence counts.

use std::sync::Arc;

use ahash::AHashMap;

/// A word together with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    word: Arc<str>,
    count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<Arc<str>>, count: u64) -> WordCount {
        WordCount {
            word: word.into(),
            count,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Mapping from word to occurrence count.
///
/// Every stored count is at least 1. Keys are shared with the ordered views
/// built from the map, so materializing a view does not copy the words.
#[derive(Debug, Default, Clone)]
pub struct FrequencyMap {
    counts: AHashMap<Arc<str>, u64>,
}

impl FrequencyMap {
    pub fn new() -> FrequencyMap {
        Default::default()
    }

    /// Counts one more occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        debug_assert!(!word.is_empty());
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(Arc::from(word), 1);
        }
    }

    /// Returns the count of `word`, or 0 if it was never seen.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Iterates over the entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = WordCount> + '_ {
        self.counts.iter().map(|(word, &count)| WordCount {
            word: word.clone(),
            count,
        })
    }
}
