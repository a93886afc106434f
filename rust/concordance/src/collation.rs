//! Collation strategies for ordering words.
//!
//! Every [`Concordance`](crate::Concordance) is bound to exactly one collation
//! at construction time. The collation decides the alphabetic order of the
//! words and breaks ties between words of equal frequency.
//!
//! # Available Collations
//!
//! - **Locale**: CLDR collation rules for a BCP-47 locale identifier (`"en"`,
//!   `"sv-SE"`, `"de-u-co-phonebk"`), backed by ICU4X.
//! - **Unicode Case Preserving** (`"unicode-case-preserving"`): compares
//!   case-insensitively first and falls back to code point order. Needs no
//!   locale data.
//!
//! A collation may report `Ordering::Equal` for two distinct strings (for
//! example canonically equivalent spellings). Ordered views resolve such ties
//! by code point order, see [`SortKind::compare`](crate::SortKind::compare).

use std::cmp::Ordering;

use concordance_common::{Result, error::Error, verify_arg};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

/// Name of the built-in [`UnicodeCasePreservingCollation`].
pub const UNICODE_CASE_PRESERVING: &str = "unicode-case-preserving";

/// Trait defining comparison rules for words.
///
/// The same collation instance is used for the alphabetic order and for the
/// alphabetic tie-break of the frequency order, so both views agree on how two
/// words relate.
pub trait Collation: 'static {
    /// Returns the collation kind for identification.
    fn kind(&self) -> CollationKind;

    /// Returns the name this collation was created from (the canonical locale
    /// identifier for locale collations).
    fn name(&self) -> &str;

    /// Compares two words according to this collation's rules.
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CollationKind {
    /// CLDR collation for a specific locale.
    Locale,
    /// Unicode collation that is case preserving.
    UnicodeCasePreserving,
}

/// Creates a new collation instance based on the provided name.
///
/// `"unicode-case-preserving"` selects the built-in code point collation, any
/// other name is parsed as a BCP-47 locale identifier.
///
/// # Errors
/// Returns an invalid argument error for an empty name and an invalid locale
/// error if the name is not a well-formed locale identifier or no collation
/// data can be loaded for it.
pub fn create_collation(name: &str) -> Result<Box<dyn Collation>> {
    match name {
        UNICODE_CASE_PRESERVING => Ok(Box::new(UnicodeCasePreservingCollation)),
        _ => Ok(Box::new(LocaleCollation::try_new(name)?)),
    }
}

/// Locale-aware collation backed by the ICU4X collator.
///
/// Uses the default collator options (tertiary strength), so accented letters
/// sort next to their base letter and lower case sorts before upper case
/// within otherwise equal words.
pub struct LocaleCollation {
    name: String,
    collator: Collator,
}

impl LocaleCollation {
    /// Creates a collation for the given locale identifier.
    pub fn try_new(locale: &str) -> Result<Self> {
        verify_arg!(locale, !locale.trim().is_empty());
        let parsed = locale
            .parse::<Locale>()
            .map_err(|e| Error::invalid_locale(locale, e.to_string()))?;
        let collator = Collator::try_new(&(&parsed).into(), CollatorOptions::new())
            .map_err(|e| Error::invalid_locale(locale, e.to_string()))?;
        Ok(LocaleCollation {
            name: parsed.to_string(),
            collator,
        })
    }
}

impl Collation for LocaleCollation {
    fn kind(&self) -> CollationKind {
        CollationKind::Locale
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

/// Unicode case-preserving collation that provides case-sensitive sorting with primary ordering
/// by case-insensitive comparison.
///
/// This collation first compares strings case-insensitively using simple Unicode
/// case mappings, and if they are equal, falls back to code point comparison.
/// It never reports two distinct strings as equal.
pub struct UnicodeCasePreservingCollation;

impl Collation for UnicodeCasePreservingCollation {
    fn kind(&self) -> CollationKind {
        CollationKind::UnicodeCasePreserving
    }

    fn name(&self) -> &str {
        UNICODE_CASE_PRESERVING
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        compare_strings(left, right, |&l, &r| to_upper(l).cmp(&to_upper(r)))
            .then_with(|| compare_strings(left, right, char::cmp))
    }
}

/// This function converts a character into its upper case variant, while ignoring special
/// casing characters as described by https://www.unicode.org/Public/UCD/latest/ucd/SpecialCasing.txt
/// document.
///
/// If the character is a special case char (i.e. it's expanded when converted into upper
/// case), the method returns the character itself.
///
/// In addition, the method supports 'ß' (lower Eszett) that translates into 'ẞ'
/// (upper Eszett, which officially exists since 2017).
fn to_upper(c: char) -> char {
    if c == 'ß' {
        'ẞ'
    } else if c.is_lowercase() {
        let mut uppercase_char = c.to_uppercase();
        match (uppercase_char.next(), uppercase_char.next()) {
            (Some(ch), None) => ch,
            _ => c,
        }
    } else {
        c
    }
}

/// Compares two strings character by character using `cmp`.
/// A string that is a proper prefix of the other sorts first.
fn compare_strings<P>(lhs: &str, rhs: &str, cmp: P) -> Ordering
where
    P: Fn(&char, &char) -> Ordering,
{
    // TODO: replace with `lhs.chars().cmp_by(rhs.chars(), cmp)` once `iter_order_by` stabilizes.
    let mut lhs = lhs.chars();
    let mut rhs = rhs.chars();
    loop {
        let lch = match lhs.next() {
            None => {
                if rhs.next().is_none() {
                    return Ordering::Equal;
                } else {
                    return Ordering::Less;
                }
            }
            Some(val) => val,
        };
        let rch = match rhs.next() {
            None => return Ordering::Greater,
            Some(val) => val,
        };
        match cmp(&lch, &rch) {
            Ordering::Equal => (),
            non_eq => return non_eq,
        }
    }
}
