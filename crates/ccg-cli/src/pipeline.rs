//! Batch analysis of a prioritised file list.

use ccg_core::graph::FileGraph;
use ccg_parser::{Analysis, analyze_files};
use std::path::{Path, PathBuf};

/// Per-run counters for the final summary.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub analysed: usize,
    pub not_applicable: usize,
    /// Files that failed fatally, with the rendered error.
    pub failed: Vec<(PathBuf, String)>,
}

/// Analyse `files` (relative to `root`) in parallel.
///
/// Graphs are returned in input order, labelled with the relative path.
/// Failing files are logged, recorded in the summary, and skipped.
pub fn run_analysis(root: &Path, files: &[PathBuf]) -> (Vec<FileGraph>, RunSummary) {
    let absolute: Vec<PathBuf> = files.iter().map(|f| root.join(f)).collect();
    let outcomes = analyze_files(&absolute);

    let mut graphs = Vec::new();
    let mut summary = RunSummary::default();
    for (rel_path, outcome) in files.iter().zip(outcomes) {
        match outcome.result {
            Ok(Analysis::Graph(graph)) => {
                tracing::debug!(
                    nodes = graph.nodes().len(),
                    edges = graph.edges().len(),
                    "analysed {}",
                    rel_path.display()
                );
                summary.analysed += 1;
                graphs.push(FileGraph {
                    file: rel_path.clone(),
                    graph,
                });
            }
            Ok(Analysis::NotApplicable) => {
                tracing::debug!("skipping {} (not a Python file)", rel_path.display());
                summary.not_applicable += 1;
            }
            Err(e) => {
                tracing::warn!("skipping {}: {}", rel_path.display(), e);
                summary.failed.push((rel_path.clone(), e.to_string()));
            }
        }
    }
    (graphs, summary)
}
