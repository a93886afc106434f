//! Sorted views over the frequency map.
//!
//! Two total orders are supported, selected by [`SortKind`]:
//!
//! - **Alphabetic**: words ascending by the concordance collation.
//! - **Frequency**: counts descending, ties broken by the alphabetic order.
//!
//! Each order is materialized at most once per generation of the frequency
//! map and cached in a [`ViewCache`]. The map stays the source of truth; the
//! cache is dropped whenever the map changes. Reversed views share the forward
//! sequence and iterate it back to front.

use std::cell::OnceCell;
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use concordance_common::{Result, error::Error};

use crate::collation::Collation;
use crate::frequency::{FrequencyMap, WordCount};

/// The order of an [`OrderedView`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SortKind {
    /// Words ascending by collation.
    Alphabetic,
    /// Counts descending, then words ascending by collation.
    Frequency,
}

impl TryFrom<&str> for SortKind {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        match name {
            "alphabetic" => Ok(SortKind::Alphabetic),
            "frequency" => Ok(SortKind::Frequency),
            _ => Err(Error::invalid_arg(
                "name",
                format!("Unrecognized sort kind: {name}"),
            )),
        }
    }
}

impl SortKind {
    /// Get the name of the sort kind as a static string.
    pub const fn name(&self) -> &'static str {
        match self {
            SortKind::Alphabetic => "alphabetic",
            SortKind::Frequency => "frequency",
        }
    }

    /// Compares two entries under this order.
    ///
    /// Words the collation considers equal are ordered by code point, so the
    /// result is `Equal` only for identical words.
    pub fn compare(
        &self,
        collation: &dyn Collation,
        lhs: &WordCount,
        rhs: &WordCount,
    ) -> Ordering {
        match self {
            SortKind::Alphabetic => collate(collation, lhs.word(), rhs.word()),
            SortKind::Frequency => rhs
                .count()
                .cmp(&lhs.count())
                .then_with(|| collate(collation, lhs.word(), rhs.word())),
        }
    }
}

fn collate(collation: &dyn Collation, lhs: &str, rhs: &str) -> Ordering {
    collation.compare(lhs, rhs).then_with(|| lhs.cmp(rhs))
}

/// Immutable snapshot of the concordance entries in a [`SortKind`] order.
///
/// Cloning is cheap; the entries are shared with the cache of the
/// concordance that produced the view and stay valid after it is mutated.
#[derive(Debug, Clone)]
pub struct OrderedView {
    entries: Arc<[WordCount]>,
    kind: SortKind,
    reversed: bool,
}

impl OrderedView {
    pub(crate) fn new(entries: Arc<[WordCount]>, kind: SortKind, reversed: bool) -> OrderedView {
        OrderedView {
            entries,
            kind,
            reversed,
        }
    }

    pub fn kind(&self) -> SortKind {
        self.kind
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index` in view order.
    pub fn get(&self, index: usize) -> Option<&WordCount> {
        if index >= self.entries.len() {
            return None;
        }
        if self.reversed {
            self.entries.get(self.entries.len() - 1 - index)
        } else {
            self.entries.get(index)
        }
    }

    pub fn first(&self) -> Option<&WordCount> {
        if self.reversed {
            self.entries.last()
        } else {
            self.entries.first()
        }
    }

    pub fn last(&self) -> Option<&WordCount> {
        if self.reversed {
            self.entries.first()
        } else {
            self.entries.last()
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
            reversed: self.reversed,
        }
    }

    pub fn to_vec(&self) -> Vec<WordCount> {
        self.iter().cloned().collect()
    }

    /// Returns `true` if both views share the same materialized sequence.
    pub fn shares_entries(&self, other: &OrderedView) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'a> IntoIterator for &'a OrderedView {
    type Item = &'a WordCount;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`OrderedView`] in view order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, WordCount>,
    reversed: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a WordCount;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next_back()
        } else {
            self.inner.next()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.inner.next()
        } else {
            self.inner.next_back()
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Lazily materialized sorted sequences, one cell per [`SortKind`].
///
/// An empty cell means the order has not been built since the last
/// invalidation.
#[derive(Debug, Default)]
pub(crate) struct ViewCache {
    alphabetic: OnceCell<Arc<[WordCount]>>,
    frequency: OnceCell<Arc<[WordCount]>>,
}

impl ViewCache {
    fn cell(&self, kind: SortKind) -> &OnceCell<Arc<[WordCount]>> {
        match kind {
            SortKind::Alphabetic => &self.alphabetic,
            SortKind::Frequency => &self.frequency,
        }
    }

    /// Returns the cached sequence for `kind`, sorting the map on first use.
    pub fn get_or_build(
        &self,
        kind: SortKind,
        words: &FrequencyMap,
        collation: &dyn Collation,
    ) -> Arc<[WordCount]> {
        self.cell(kind)
            .get_or_init(|| {
                let mut entries: Vec<WordCount> = words.iter().collect();
                entries.sort_unstable_by(|lhs, rhs| kind.compare(collation, lhs, rhs));
                log::debug!(
                    "materialized {} view with {} entries",
                    kind.name(),
                    entries.len()
                );
                entries.into()
            })
            .clone()
    }

    #[cfg(test)]
    pub fn is_materialized(&self, kind: SortKind) -> bool {
        self.cell(kind).get().is_some()
    }

    pub fn invalidate(&mut self) {
        self.alphabetic.take();
        self.frequency.take();
    }
}
