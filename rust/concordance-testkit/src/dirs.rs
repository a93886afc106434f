//! Directory and path utilities for test resources.
//!
//! Resolves the sample texts under `$repo_root/test/samples` relative to the
//! source directory of this crate and validates that they exist.

use std::path::PathBuf;

/// The manifest directory of `concordance-testkit`, set at compile time.
pub const TESTKIT_DIR_STR: &str = env!("CARGO_MANIFEST_DIR");

/// Returns the path to the testkit crate directory.
pub fn get_testkit_dir() -> anyhow::Result<PathBuf> {
    let res = PathBuf::from(TESTKIT_DIR_STR);
    if !res.is_dir() {
        anyhow::bail!("{} not found", res.display());
    }
    Ok(res)
}

/// Returns the path to the test samples directory (`$repo_root/test/samples`).
pub fn get_test_samples_dir() -> anyhow::Result<PathBuf> {
    let testkit_dir = get_testkit_dir()?;
    let samples_dir = testkit_dir
        .parent()
        .ok_or_else(|| anyhow::anyhow!("{} parent", testkit_dir.display()))?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("{} parent->parent", testkit_dir.display()))?
        .join("test")
        .join("samples");
    if !samples_dir.is_dir() {
        anyhow::bail!("{} not found", samples_dir.display());
    }
    Ok(samples_dir)
}

/// Returns the path of a sample text (`$repo_root/test/samples/<name>`).
pub fn get_sample_path(name: &str) -> anyhow::Result<PathBuf> {
    let path = get_test_samples_dir()?.join(name);
    if !path.is_file() {
        anyhow::bail!("{} not found", path.display());
    }
    Ok(path)
}
