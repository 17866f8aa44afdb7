//! Generated Markdown document: README summary followed by the CCG results.

use crate::readme::ReadmeSummary;
use anyhow::{Context, Result};
use ccg_core::config::DocsConfig;
use ccg_core::schema::{self, CcgReport};
use ccg_core::storage;
use std::path::{Path, PathBuf};

/// Render the document text.
pub fn render_document(summary: &ReadmeSummary, report: &CcgReport) -> Result<String> {
    let mut out = String::new();
    out.push_str("# Generated Documentation\n\n");

    out.push_str("## README summary\n\n");
    out.push_str(&summary.to_markdown());
    out.push('\n');

    out.push_str("\n## CCG Results\n\n");
    out.push_str("```json\n");
    out.push_str(&schema::to_json(report)?);
    out.push_str("\n```\n");
    Ok(out)
}

/// Write the document under the repository's output directory and return its path.
pub fn write_docs(
    repo_dir: &Path,
    docs: &DocsConfig,
    summary: &ReadmeSummary,
    report: &CcgReport,
) -> Result<PathBuf> {
    let out_dir = storage::output_dir(repo_dir, docs);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let out_path = out_dir.join(&docs.document_name);
    let text = render_document(summary, report)?;
    std::fs::write(&out_path, text)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    tracing::info!(
        files = report.files.len(),
        "wrote documentation to {}",
        out_path.display()
    );
    Ok(out_path)
}
