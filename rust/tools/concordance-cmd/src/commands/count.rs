//! Count command implementation

use anyhow::Result;
use clap::ValueEnum;
use concordance::{Concordance, SortKind};
use serde::Serialize;
use std::io::Write;

use crate::utils;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word<TAB>count` line per entry
    Text,
    /// Pretty-printed JSON document
    Json,
}

#[derive(Debug, Clone)]
pub struct CountOptions {
    pub locale: String,
    pub fold_case: bool,
    pub sort: SortKind,
    pub reverse: bool,
    pub top: Option<usize>,
    pub format: OutputFormat,
    pub summary: bool,
}

#[derive(Serialize)]
struct CountReport {
    distinct_words: usize,
    total_words: u64,
    entries: Vec<EntryInfo>,
}

#[derive(Serialize)]
struct EntryInfo {
    word: String,
    count: u64,
}

/// Run the count command
pub fn run(files: &[String], options: &CountOptions, out: &mut impl Write) -> Result<()> {
    let concordance = super::load_concordance(files, &options.locale, options.fold_case)?;
    write_report(&concordance, options, out)
}

fn write_report(
    concordance: &Concordance,
    options: &CountOptions,
    out: &mut impl Write,
) -> Result<()> {
    let view = concordance.ordered_view(options.sort, options.reverse);
    let limit = options.top.unwrap_or(usize::MAX);

    match options.format {
        OutputFormat::Text => {
            for entry in view.iter().take(limit) {
                utils::write_entry(out, entry.word(), entry.count())?;
            }
            if options.summary {
                writeln!(out)?;
                match (view.first(), view.last()) {
                    (Some(first), Some(last)) => {
                        write!(out, "first: ")?;
                        utils::write_entry(out, first.word(), first.count())?;
                        write!(out, "last: ")?;
                        utils::write_entry(out, last.word(), last.count())?;
                    }
                    _ => writeln!(out, "no words")?,
                }
                writeln!(out, "distinct words: {}", concordance.len())?;
                writeln!(out, "total words: {}", concordance.total_words())?;
            }
        }
        OutputFormat::Json => {
            let report = CountReport {
                distinct_words: concordance.len(),
                total_words: concordance.total_words(),
                entries: view
                    .iter()
                    .take(limit)
                    .map(|e| EntryInfo {
                        word: e.word().to_string(),
                        count: e.count(),
                    })
                    .collect(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}
