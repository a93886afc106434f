//! Data generation utilities for testing.
//!
//! Produces synthetic multi-script texts together with the exact word counts
//! a correct tokenizer must find in them.

use std::io::{Seek, SeekFrom, Write};

use ahash::AHashMap;

/// Words used to build synthetic texts. Covers several scripts, mixed case and
/// supplementary-plane letters.
pub const VOCABULARY: &[&str] = &[
    "alpha", "Beta", "GAMMA", "delta", "naïve", "Straße", "ᚠᚩᚱ", "мир", "Привет", "𐊅𐊆𐊇", "你好",
    "שלום", "ænd", "Zoo",
];

/// Separator runs placed between words. None of them contains an alphabetic
/// code point.
pub const SEPARATORS: &[&str] = &[
    " ", ", ", "-", "'", "\n", " 42 ", "... ", "\t", " 🌍 ", "\r\n", "’",
];

/// A generated text and the occurrence count of every word in it.
pub struct GeneratedText {
    pub text: String,
    pub counts: AHashMap<String, u64>,
    pub word_count: u64,
}

impl GeneratedText {
    /// The counts a case-folding ingestion must produce.
    pub fn folded_counts(&self) -> AHashMap<String, u64> {
        let mut folded = AHashMap::new();
        for (word, count) in &self.counts {
            *folded.entry(word.to_lowercase()).or_insert(0) += count;
        }
        folded
    }
}

/// Generates a text of `word_count` words drawn from [`VOCABULARY`], separated
/// by random [`SEPARATORS`]. The same seed always yields the same text.
pub fn generate_text(word_count: usize, seed: u64) -> GeneratedText {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut text = String::new();
    let mut counts = AHashMap::new();

    for _ in 0..word_count {
        if rng.bool() {
            text.push_str(SEPARATORS[rng.usize(..SEPARATORS.len())]);
        }
        let word = VOCABULARY[rng.usize(..VOCABULARY.len())];
        text.push_str(word);
        *counts.entry(word.to_string()).or_insert(0) += 1;
        text.push_str(SEPARATORS[rng.usize(..SEPARATORS.len())]);
    }

    GeneratedText {
        text,
        counts,
        word_count: word_count as u64,
    }
}

/// Writes `text` to a temporary file, positioned at its start.
pub fn write_temp_text(text: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.seek(SeekFrom::Start(0))?;
    Ok(file)
}
