//! Alphabetic word tokenizer.

use std::borrow::Cow;
use std::str::CharIndices;

/// Alphabetic Tokenizer - extracts maximal runs of alphabetic code points.
///
/// A word is the longest contiguous sequence of characters with the Unicode
/// `Alphabetic` property, in any script. Every other code point is a
/// separator: digits, whitespace, punctuation, apostrophes and hyphens
/// included, so `"don't"` yields `"don"` and `"t"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphabeticTokenizer;

impl AlphabeticTokenizer {
    pub fn new() -> Self {
        AlphabeticTokenizer
    }

    /// Extract words from the input string as an iterator of string slices.
    pub fn tokenize<'a>(&self, input: &'a str) -> WordIterator<'a> {
        WordIterator::new(input)
    }
}

/// Iterator that yields word slices from a string input.
pub struct WordIterator<'a> {
    input: &'a str,
    char_indices: CharIndices<'a>,
}

impl<'a> WordIterator<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            char_indices: input.char_indices(),
        }
    }
}

impl<'a> Iterator for WordIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word_start = None;

        for (pos, ch) in self.char_indices.by_ref() {
            if ch.is_alphabetic() {
                if word_start.is_none() {
                    word_start = Some(pos);
                }
            } else if let Some(start) = word_start {
                return Some(&self.input[start..pos]);
            }
        }

        // Word runs to the end of the input.
        word_start.map(|start| &self.input[start..])
    }
}

/// Applies the case-folding policy to a word.
///
/// Folding uses the default, locale-independent lower-case mapping, so the
/// result does not depend on the collation locale.
pub fn fold_word(word: &str, fold_case: bool) -> Cow<'_, str> {
    if fold_case && word.chars().any(|c| !c.is_lowercase()) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
