//! Call graph data model for a single analysed source file.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Caller identifier for calls that no declaration encloses.
pub const MODULE_SCOPE: &str = "<module>";

/// A caller → callee relationship. Serialized as a `["caller", "callee"]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct CallEdge {
    pub caller: String,
    pub callee: String,
}

impl CallEdge {
    pub fn new(caller: impl Into<String>, callee: impl Into<String>) -> Self {
        Self {
            caller: caller.into(),
            callee: callee.into(),
        }
    }
}

impl From<(String, String)> for CallEdge {
    fn from((caller, callee): (String, String)) -> Self {
        Self { caller, callee }
    }
}

impl From<CallEdge> for (String, String) {
    fn from(edge: CallEdge) -> Self {
        (edge.caller, edge.callee)
    }
}

/// The Code Context Graph of one file: declared and referenced symbols plus
/// the calls between them, both in first-seen order without duplicates.
///
/// A `CallGraph` only comes out of [`CallGraphBuilder::finish`] (or a
/// validated report), so it is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallGraph {
    nodes: Vec<String>,
    edges: Vec<CallEdge>,
}

impl CallGraph {
    /// Node names in first-seen order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in first-seen order.
    pub fn edges(&self) -> &[CallEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n == name)
    }

    pub fn contains_edge(&self, caller: &str, callee: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.caller == caller && e.callee == callee)
    }

    /// First node name that appears more than once, if any.
    pub fn duplicate_node(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .find(|n| !seen.insert(n.as_str()))
            .map(String::as_str)
    }

    /// First (caller, callee) pair that appears more than once, if any.
    pub fn duplicate_edge(&self) -> Option<&CallEdge> {
        let mut seen = HashSet::new();
        self.edges.iter().find(|e| !seen.insert(*e))
    }
}

/// Accumulates nodes and edges with exact-duplicate suppression while
/// preserving insertion order.
#[derive(Debug, Default)]
pub struct CallGraphBuilder {
    nodes: Vec<String>,
    edges: Vec<CallEdge>,
    seen_nodes: HashSet<String>,
    seen_edges: HashSet<CallEdge>,
}

impl CallGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Returns `false` if it was already present.
    pub fn add_node(&mut self, name: &str) -> bool {
        if self.seen_nodes.contains(name) {
            return false;
        }
        self.seen_nodes.insert(name.to_string());
        self.nodes.push(name.to_string());
        true
    }

    /// Register an edge. Returns `false` if the pair was already present.
    pub fn add_edge(&mut self, caller: &str, callee: &str) -> bool {
        let edge = CallEdge::new(caller, callee);
        if self.seen_edges.contains(&edge) {
            return false;
        }
        self.seen_edges.insert(edge.clone());
        self.edges.push(edge);
        true
    }

    /// Freeze the accumulated graph.
    pub fn finish(self) -> CallGraph {
        CallGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

/// A call graph together with the file it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGraph {
    pub file: PathBuf,
    #[serde(flatten)]
    pub graph: CallGraph,
}
