//! Versioned JSON report of an analysis run, with invariant validation on load.

use crate::graph::FileGraph;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CURRENT_VERSION: &str = "1.0.0";

/// Graphs for every analysed file of one run, in analysis order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CcgReport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    /// Where the analysed files came from (local path or clone URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub files: Vec<FileGraph>,
}

impl CcgReport {
    pub fn new(source: Option<String>, files: Vec<FileGraph>) -> Self {
        Self {
            version: CURRENT_VERSION.to_string(),
            generated_at: Utc::now(),
            source,
            files,
        }
    }

    pub fn total_nodes(&self) -> usize {
        self.files.iter().map(|f| f.graph.nodes().len()).sum()
    }

    pub fn total_edges(&self) -> usize {
        self.files.iter().map(|f| f.graph.edges().len()).sum()
    }
}

/// Validate a report's schema version.
pub fn validate_version(report: &CcgReport) -> Result<()> {
    if report.version != CURRENT_VERSION {
        anyhow::bail!(
            "CCG report version mismatch: expected {}, found {}",
            CURRENT_VERSION,
            report.version
        );
    }
    Ok(())
}

/// Check node and edge uniqueness for every file in the report.
pub fn validate_graphs(report: &CcgReport) -> Result<()> {
    for file in &report.files {
        if let Some(node) = file.graph.duplicate_node() {
            anyhow::bail!("duplicate node {:?} in {}", node, file.file.display());
        }
        if let Some(edge) = file.graph.duplicate_edge() {
            anyhow::bail!(
                "duplicate edge ({:?}, {:?}) in {}",
                edge.caller,
                edge.callee,
                file.file.display()
            );
        }
    }
    Ok(())
}

/// Serialize a report to a pretty-printed JSON string.
pub fn to_json(report: &CcgReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize CCG report to JSON")
}

/// Deserialize a report from a JSON string.
pub fn from_json(json: &str) -> Result<CcgReport> {
    let report: CcgReport =
        serde_json::from_str(json).context("failed to deserialize CCG report from JSON")?;
    validate_version(&report)?;
    validate_graphs(&report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CallGraphBuilder;
    use std::path::PathBuf;

    fn sample_report() -> CcgReport {
        let mut builder = CallGraphBuilder::new();
        builder.add_node("main");
        builder.add_edge("main", "print");
        builder.add_node("print");
        CcgReport::new(
            Some("/tmp/repo".to_string()),
            vec![FileGraph {
                file: PathBuf::from("main.py"),
                graph: builder.finish(),
            }],
        )
    }

    #[test]
    fn test_json_roundtrip() {
        let report = sample_report();
        let json = to_json(&report).unwrap();
        let loaded = from_json(&json).unwrap();
        assert_eq!(loaded.files, report.files);
        assert_eq!(loaded.source.as_deref(), Some("/tmp/repo"));
        assert_eq!(loaded.total_nodes(), 2);
        assert_eq!(loaded.total_edges(), 1);
    }

    #[test]
    fn test_version_mismatch_rejected() {
        let mut report = sample_report();
        report.version = "0.1.0".to_string();
        let json = to_json(&report).unwrap();
        let err = from_json(&json).unwrap_err();
        assert!(err.to_string().contains("version mismatch"));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let json = format!(
            r#"{{"version":"{}","generated_at":"2024-01-01T00:00:00Z","files":[{{"file":"a.py","nodes":["a","b"],"edges":[["a","b"],["a","b"]]}}]}}"#,
            CURRENT_VERSION
        );
        let err = from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate edge"));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let json = format!(
            r#"{{"version":"{}","generated_at":"2024-01-01T00:00:00Z","files":[{{"file":"a.py","nodes":["a","a"],"edges":[]}}]}}"#,
            CURRENT_VERSION
        );
        let err = from_json(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate node"));
    }
}
