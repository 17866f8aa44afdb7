//! Read/write CCG reports under the repository's output directory.

use crate::config::DocsConfig;
use crate::schema::{self, CcgReport};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the output directory for a given repository root.
pub fn output_dir(repo_root: &Path, docs: &DocsConfig) -> PathBuf {
    repo_root.join(&docs.output_dir)
}

/// Get the path to the JSON report for a given repository root.
pub fn report_file(repo_root: &Path, docs: &DocsConfig) -> PathBuf {
    output_dir(repo_root, docs).join(&docs.report_name)
}

/// Check if a report exists for the given repository root.
pub fn report_exists(repo_root: &Path, docs: &DocsConfig) -> bool {
    report_file(repo_root, docs).exists()
}

/// Load a report from disk.
pub fn load(repo_root: &Path, docs: &DocsConfig) -> Result<CcgReport> {
    let path = report_file(repo_root, docs);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("failed to read CCG report from {}", path.display()))?;
    schema::from_json(&json)
}

/// Save a report to disk, creating the output directory if needed.
/// Returns the path written.
pub fn save(repo_root: &Path, docs: &DocsConfig, report: &CcgReport) -> Result<PathBuf> {
    let dir = output_dir(repo_root, docs);
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let path = report_file(repo_root, docs);
    let json = schema::to_json(report)?;
    fs::write(&path, json)
        .with_context(|| format!("failed to write CCG report to {}", path.display()))?;

    Ok(path)
}
