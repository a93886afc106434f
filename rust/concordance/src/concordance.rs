use std::fmt;
use std::io::BufRead;

use concordance_common::{Result, error::Error};

use crate::collation::{Collation, create_collation};
use crate::frequency::FrequencyMap;
use crate::tokenizer::{AlphabeticTokenizer, fold_word};
use crate::view::{OrderedView, SortKind, ViewCache};

/// Word-frequency index over one or more Unicode texts.
///
/// A `Concordance` counts the maximal alphabetic runs of every ingested text
/// and serves the counts either by lookup or as an [`OrderedView`] in
/// alphabetic or frequency order. Alphabetic comparisons use the collation
/// chosen at construction.
///
/// Sorted views are built on first request and cached per [`SortKind`] until
/// the next [`ingest`](Self::ingest) or [`clear`](Self::clear). The instance is
/// meant for a single thread of control and is not `Sync`.
///
/// ```
/// use concordance::{Concordance, SortKind};
///
/// let mut concordance = Concordance::new("en").unwrap();
/// concordance.ingest_str("the Cat sat on the mat. The cat ran.", true);
///
/// let view = concordance.ordered_view(SortKind::Frequency, false);
/// assert_eq!(view.first().unwrap().word(), "the");
/// assert_eq!(concordance.frequency("THE"), 3);
/// ```
pub struct Concordance {
    collation: Box<dyn Collation>,
    tokenizer: AlphabeticTokenizer,
    fold_case: bool,
    words: FrequencyMap,
    views: ViewCache,
}

impl Concordance {
    /// Creates an empty concordance ordered by the given locale (or built-in
    /// collation name, see [`create_collation`]).
    pub fn new(locale: &str) -> Result<Concordance> {
        Ok(Concordance::with_collation(create_collation(locale)?))
    }

    pub fn with_collation(collation: Box<dyn Collation>) -> Concordance {
        Concordance {
            collation,
            tokenizer: AlphabeticTokenizer::new(),
            fold_case: false,
            words: FrequencyMap::new(),
            views: ViewCache::default(),
        }
    }

    pub fn collation(&self) -> &dyn Collation {
        self.collation.as_ref()
    }

    /// The case-folding policy of the most recent ingestion, applied to
    /// lookups.
    pub fn fold_case(&self) -> bool {
        self.fold_case
    }

    /// Reads `reader` to the end and counts its words.
    ///
    /// Counts are added to the existing ones. With `fold_case` every word is
    /// lower-cased before counting, and the policy is kept for subsequent
    /// [`frequency`](Self::frequency) lookups.
    ///
    /// The reader is consumed line by line; line breaks separate words. Pass
    /// `&mut reader` to keep ownership of the stream.
    ///
    /// # Errors
    /// Returns an IO error if the stream cannot be read or is not valid UTF-8.
    /// Words counted before the failure remain in the concordance.
    pub fn ingest<R: BufRead>(&mut self, mut reader: R, fold_case: bool) -> Result<()> {
        self.views.invalidate();
        self.fold_case = fold_case;

        let mut line = String::new();
        let mut counted = 0u64;
        loop {
            line.clear();
            let read = reader.read_line(&mut line).map_err(|e| {
                log::debug!("ingestion failed after {counted} words: {e}");
                Error::io("read text", e)
            })?;
            if read == 0 {
                break;
            }
            counted += self.count_words(&line, fold_case);
        }

        log::debug!(
            "ingested {counted} words (fold_case: {fold_case}), {} distinct in total",
            self.words.len()
        );
        Ok(())
    }

    /// Counts the words of an in-memory text, same as [`ingest`](Self::ingest).
    pub fn ingest_str(&mut self, text: &str, fold_case: bool) {
        self.views.invalidate();
        self.fold_case = fold_case;
        let counted = self.count_words(text, fold_case);
        log::debug!("ingested {counted} words (fold_case: {fold_case})");
    }

    fn count_words(&mut self, text: &str, fold_case: bool) -> u64 {
        let mut counted = 0;
        for word in self.tokenizer.tokenize(text) {
            self.words.add(&fold_word(word, fold_case));
            counted += 1;
        }
        counted
    }

    /// Returns how often `word` occurred, or 0 if it never did.
    ///
    /// The probe is lower-cased when the last ingestion folded case.
    pub fn frequency(&self, word: &str) -> u64 {
        self.words.get(&fold_word(word, self.fold_case))
    }

    /// Returns all entries in the requested order.
    ///
    /// `reversed` yields the exact mirror of the forward order. The sorted
    /// sequence of each kind is computed once and reused until the
    /// concordance changes.
    pub fn ordered_view(&self, kind: SortKind, reversed: bool) -> OrderedView {
        let entries = self
            .views
            .get_or_build(kind, &self.words, self.collation.as_ref());
        OrderedView::new(entries, kind, reversed)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of counted word occurrences.
    pub fn total_words(&self) -> u64 {
        self.words.total()
    }

    /// Removes all words and cached views.
    pub fn clear(&mut self) {
        log::debug!("clearing {} distinct words", self.words.len());
        self.words.clear();
        self.views.invalidate();
        self.fold_case = false;
    }

    #[cfg(test)]
    pub(crate) fn is_view_materialized(&self, kind: SortKind) -> bool {
        self.views.is_materialized(kind)
    }
}

impl fmt::Debug for Concordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concordance")
            .field("collation", &self.collation.name())
            .field("fold_case", &self.fold_case)
            .field("distinct_words", &self.words.len())
            .field("views", &self.views)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use concordance_common::error::ErrorKind;

    use super::*;
    use crate::frequency::WordCount;

    const SCENARIO: &str = "the Cat sat on the mat. The cat ran.";

    fn words(view: &OrderedView) -> Vec<(&str, u64)> {
        view.iter().map(|e| (e.word(), e.count())).collect()
    }

    #[test]
    fn test_scenario() {
        let mut concordance = Concordance::new("en-US").unwrap();
        concordance.ingest(Cursor::new(SCENARIO), true).unwrap();

        let alphabetic = concordance.ordered_view(SortKind::Alphabetic, false);
        assert_eq!(
            words(&alphabetic),
            vec![
                ("cat", 2),
                ("mat", 1),
                ("on", 1),
                ("ran", 1),
                ("sat", 1),
                ("the", 3)
            ]
        );

        let frequency = concordance.ordered_view(SortKind::Frequency, false);
        assert_eq!(frequency.first(), Some(&WordCount::new("the", 3)));
        assert_eq!(frequency.get(1), Some(&WordCount::new("cat", 2)));
        assert_eq!(frequency.get(2), Some(&WordCount::new("mat", 1)));
        assert_eq!(frequency.last(), Some(&WordCount::new("sat", 1)));
        assert_eq!(concordance.total_words(), 9);
        assert_eq!(concordance.len(), 6);
    }

    #[test]
    fn test_frequency_ties_resolve_alphabetically() {
        let mut concordance = Concordance::new("en").unwrap();
        concordance.ingest_str("the cat sat. The Cat ran.", true);

        let frequency = concordance.ordered_view(SortKind::Frequency, false);
        assert_eq!(
            words(&frequency),
            vec![("cat", 2), ("the", 2), ("ran", 1), ("sat", 1)]
        );
    }

    #[test]
    fn test_case_fold_equivalence() {
        let mut folded = Concordance::new("en").unwrap();
        folded.ingest_str("Word word WORD", true);
        assert_eq!(
            words(&folded.ordered_view(SortKind::Alphabetic, false)),
            vec![("word", 3)]
        );
        assert_eq!(folded.frequency("wOrD"), 3);

        let mut preserved = Concordance::new("en").unwrap();
        preserved.ingest_str("Word word WORD", false);
        assert_eq!(preserved.len(), 3);
        assert_eq!(preserved.frequency("Word"), 1);
        assert_eq!(preserved.frequency("word"), 1);
        assert_eq!(preserved.frequency("WORD"), 1);
        assert_eq!(preserved.frequency("wOrD"), 0);
    }

    #[test]
    fn test_separator_strictness() {
        let mut concordance = Concordance::new("en").unwrap();
        concordance.ingest_str("don't", false);
        assert_eq!(concordance.frequency("don"), 1);
        assert_eq!(concordance.frequency("t"), 1);
        assert_eq!(concordance.frequency("don't"), 0);
        assert_eq!(concordance.len(), 2);
    }

    #[test]
    fn test_line_breaks_separate_words() {
        let mut concordance = Concordance::new("en").unwrap();
        concordance
            .ingest(Cursor::new("end\nstart\r\nlast"), false)
            .unwrap();
        assert_eq!(concordance.frequency("end"), 1);
        assert_eq!(concordance.frequency("start"), 1);
        assert_eq!(concordance.frequency("last"), 1);
        assert_eq!(concordance.frequency("endstart"), 0);
    }

    #[test]
    fn test_ingest_is_additive_and_remembers_fold_policy() {
        let mut concordance = Concordance::new("en").unwrap();
        concordance.ingest_str("Apple apple", true);
        assert!(concordance.fold_case());
        assert_eq!(concordance.frequency("APPLE"), 2);

        concordance.ingest_str("Apple", false);
        assert!(!concordance.fold_case());
        // Both spellings coexist as separate keys.
        assert_eq!(concordance.frequency("apple"), 2);
        assert_eq!(concordance.frequency("Apple"), 1);
        assert_eq!(concordance.total_words(), 3);

        let view = concordance.ordered_view(SortKind::Alphabetic, false);
        assert_eq!(words(&view), vec![("apple", 2), ("Apple", 1)]);
    }

    #[test]
    fn test_views_are_cached_until_mutation() {
        let mut concordance = Concordance::new("en").unwrap();
        concordance.ingest_str("b a c a", false);
        assert!(!concordance.is_view_materialized(SortKind::Alphabetic));
        assert!(!concordance.is_view_materialized(SortKind::Frequency));

        let first = concordance.ordered_view(SortKind::Alphabetic, false);
        assert!(concordance.is_view_materialized(SortKind::Alphabetic));
        assert!(!concordance.is_view_materialized(SortKind::Frequency));

        let second = concordance.ordered_view(SortKind::Alphabetic, true);
        assert!(first.shares_entries(&second));

        concordance.ingest_str("d", false);
        assert!(!concordance.is_view_materialized(SortKind::Alphabetic));

        let third = concordance.ordered_view(SortKind::Alphabetic, false);
        assert!(!first.shares_entries(&third));
        // The earlier snapshot is unaffected by the new word.
        assert_eq!(words(&first), vec![("a", 2), ("b", 1), ("c", 1)]);
        assert_eq!(
            words(&third),
            vec![("a", 2), ("b", 1), ("c", 1), ("d", 1)]
        );
    }

    #[test]
    fn test_reversal_law() {
        let mut concordance = Concordance::new("en").unwrap();
        concordance.ingest_str(SCENARIO, false);

        for kind in [SortKind::Alphabetic, SortKind::Frequency] {
            let mut forward = concordance.ordered_view(kind, false).to_vec();
            let reversed = concordance.ordered_view(kind, true).to_vec();
            forward.reverse();
            assert_eq!(forward, reversed);
        }
    }

    #[test]
    fn test_clear() {
        let mut concordance = Concordance::new("en").unwrap();
        concordance.ingest_str("one two two", true);
        let _ = concordance.ordered_view(SortKind::Frequency, false);

        concordance.clear();
        assert!(concordance.is_empty());
        assert!(!concordance.fold_case());
        assert_eq!(concordance.frequency("two"), 0);
        assert_eq!(concordance.total_words(), 0);
        assert!(!concordance.is_view_materialized(SortKind::Frequency));
        for kind in [SortKind::Alphabetic, SortKind::Frequency] {
            assert!(concordance.ordered_view(kind, false).is_empty());
            assert!(concordance.ordered_view(kind, true).is_empty());
        }
    }

    #[test]
    fn test_empty_concordance() {
        let concordance = Concordance::new("en").unwrap();
        assert_eq!(concordance.frequency("anything"), 0);
        assert!(concordance.ordered_view(SortKind::Alphabetic, false).is_empty());
    }

    #[test]
    fn test_invalid_locale() {
        let err = Concordance::new("not a locale").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidLocale { .. }));
    }

    /// Yields `data`, then fails.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.data.read(buf)?;
            if n == 0 {
                Err(io::Error::other("device unplugged"))
            } else {
                Ok(n)
            }
        }
    }

    #[test]
    fn test_io_failure_keeps_partial_counts() {
        let mut concordance = Concordance::new("en").unwrap();
        let mut reader = BufReader::new(FailingReader {
            data: Cursor::new(b"first line\nsecond line\n".to_vec()),
        });

        let err = concordance.ingest(&mut reader, false).unwrap_err();
        assert!(err.is_io());
        assert_eq!(concordance.frequency("first"), 1);
        assert_eq!(concordance.frequency("line"), 2);
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut concordance = Concordance::new("en").unwrap();
        let err = concordance
            .ingest(Cursor::new(b"ok\n\xff\xfe\n".to_vec()), false)
            .unwrap_err();
        match err.kind() {
            ErrorKind::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData)
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
        assert_eq!(concordance.frequency("ok"), 1);
    }
}
