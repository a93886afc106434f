//! Common utilities for concordance-cmd

use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Checks if a file exists and is readable
pub fn validate_file_exists(path: &str) -> Result<()> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a file: {}", path);
    }
    Ok(())
}

/// Writes a `word<TAB>count` line.
pub fn write_entry(out: &mut impl Write, word: &str, count: u64) -> Result<()> {
    writeln!(out, "{word}\t{count}")?;
    Ok(())
}
