//! Command implementations for concordance-cmd

use anyhow::{Context, Result};
use concordance::Concordance;
use concordance_common::error::ErrorKind;
use std::fs::File;
use std::io::{self, BufReader};

use crate::utils;

pub mod count;
pub mod lookup;

/// Builds a concordance for `locale` and ingests every file in `files`.
///
/// Reads standard input when `files` is empty.
pub fn load_concordance(files: &[String], locale: &str, fold_case: bool) -> Result<Concordance> {
    let mut concordance = Concordance::new(locale).map_err(|e| {
        let hint = match e.kind() {
            ErrorKind::InvalidLocale { .. } => " (expected a BCP-47 identifier such as en-US)",
            _ => "",
        };
        anyhow::Error::new(e).context(format!("Failed to create collation for '{locale}'{hint}"))
    })?;

    if files.is_empty() {
        log::info!("Reading text from stdin");
        concordance
            .ingest(io::stdin().lock(), fold_case)
            .with_context(|| "Failed to read stdin")?;
        return Ok(concordance);
    }

    for path in files {
        utils::validate_file_exists(path)?;
        log::info!("Reading text from {path}");
        let file = File::open(path).with_context(|| format!("Failed to open file: {path}"))?;
        concordance
            .ingest(BufReader::new(file), fold_case)
            .with_context(|| format!("Failed to read file: {path}"))?;
    }
    log::debug!("Loaded {:?}", concordance);
    Ok(concordance)
}
