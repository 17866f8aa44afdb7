//! Naive README summary: the first few lines of the repository README.

use anyhow::{Context, Result};
use ccg_core::config::DocsConfig;
use std::path::Path;

/// Text used in place of a summary when the repository has no README.
pub const NO_README: &str = "No README found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeSummary {
    /// Leading lines of the first README candidate found.
    Lines(Vec<String>),
    Missing,
}

impl ReadmeSummary {
    /// Render as Markdown body text.
    pub fn to_markdown(&self) -> String {
        match self {
            ReadmeSummary::Lines(lines) => lines.join("\n"),
            ReadmeSummary::Missing => NO_README.to_string(),
        }
    }
}

/// Summarize the README of `repo_dir`, trying `docs.readme_candidates` in order.
pub fn summarize_readme(repo_dir: &Path, docs: &DocsConfig) -> Result<ReadmeSummary> {
    for candidate in &docs.readme_candidates {
        let path = repo_dir.join(candidate);
        if !path.is_file() {
            continue;
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read README {}", path.display()))?;
        tracing::debug!("summarizing {}", path.display());
        let lines = text
            .lines()
            .take(docs.readme_lines)
            .map(String::from)
            .collect();
        return Ok(ReadmeSummary::Lines(lines));
    }
    Ok(ReadmeSummary::Missing)
}
