//! File-level entry points: eligibility, scoped read, parse, build.

use crate::builder::build_call_graph;
use crate::languages::Language;
use crate::treesitter::parse_source;
use ccg_core::error::AnalysisError;
use ccg_core::graph::CallGraph;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome of analysing one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// The file was parsed and its call graph built.
    Graph(CallGraph),
    /// The extension is outside the analyzer's scope; nothing was read.
    NotApplicable,
}

impl Analysis {
    pub fn into_graph(self) -> Option<CallGraph> {
        match self {
            Analysis::Graph(graph) => Some(graph),
            Analysis::NotApplicable => None,
        }
    }
}

/// Analyse a file on disk.
///
/// Ineligible extensions return [`Analysis::NotApplicable`] without touching
/// the filesystem. The whole text is read and the handle released before
/// parsing starts.
pub fn analyze_file(path: &Path) -> Result<Analysis, AnalysisError> {
    let Some(language) = Language::from_path(path) else {
        return Ok(Analysis::NotApplicable);
    };
    if !path.exists() {
        return Err(AnalysisError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let source = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AnalysisError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnalysisError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    build(path, &source, language).map(Analysis::Graph)
}

/// Analyse source text that is already in memory. `path` only decides
/// eligibility and labels errors.
pub fn analyze_source(path: &Path, source: &str) -> Result<Analysis, AnalysisError> {
    match Language::from_path(path) {
        Some(language) => build(path, source, language).map(Analysis::Graph),
        None => Ok(Analysis::NotApplicable),
    }
}

fn build(path: &Path, source: &str, language: Language) -> Result<CallGraph, AnalysisError> {
    let tree = parse_source(path, source, language)?;
    Ok(build_call_graph(&tree, source))
}

/// Result of analysing one file as part of a batch.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Analysis, AnalysisError>,
}

/// Analyse independent files in parallel. Outcomes keep the input order;
/// a failure in one file does not affect the others.
pub fn analyze_files(paths: &[PathBuf]) -> Vec<FileOutcome> {
    paths
        .par_iter()
        .map(|path| FileOutcome {
            path: path.clone(),
            result: analyze_file(path),
        })
        .collect()
}
