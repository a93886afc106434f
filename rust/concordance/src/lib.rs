//! Word-frequency concordance over Unicode text.
//!
//! This crate counts the words of arbitrary Unicode texts and serves the
//! counts in two total orders: alphabetic, following the collation rules of a
//! locale, and by descending frequency with an alphabetic tie-break.
//!
//! # Overview
//!
//! - **Tokenization**: a word is a maximal run of code points with the Unicode
//!   `Alphabetic` property, in any script. Everything else separates words,
//!   including apostrophes and hyphens.
//! - **Counting**: words are counted in a hash map, optionally lower-cased
//!   first.
//! - **Ordering**: sorted views are built lazily per order, cached, and
//!   invalidated when new text is ingested or the concordance is cleared.
//!
//! # Quick Start
//!
//! ```rust
//! use concordance::{Concordance, SortKind};
//!
//! let mut concordance = Concordance::new("en").unwrap();
//! concordance.ingest_str("Word word WORD, don't", true);
//!
//! assert_eq!(concordance.frequency("word"), 3);
//! assert_eq!(concordance.frequency("don"), 1);
//!
//! let view = concordance.ordered_view(SortKind::Alphabetic, false);
//! let words: Vec<&str> = view.iter().map(|e| e.word()).collect();
//! assert_eq!(words, vec!["don", "t", "word"]);
//! ```

pub mod collation;
mod concordance;
pub mod frequency;
pub mod tokenizer;
pub mod view;

pub use collation::{Collation, CollationKind, create_collation};
pub use concordance::Concordance;
pub use frequency::WordCount;
pub use tokenizer::AlphabeticTokenizer;
pub use view::{OrderedView, SortKind};
