//! Lookup command implementation

use anyhow::Result;
use std::io::Write;

use crate::utils;

/// Run the lookup command
pub fn run(
    files: &[String],
    words: &[String],
    locale: &str,
    fold_case: bool,
    out: &mut impl Write,
) -> Result<()> {
    let concordance = super::load_concordance(files, locale, fold_case)?;
    for word in words {
        utils::write_entry(out, word, concordance.frequency(word))?;
    }
    Ok(())
}
