//! Export a call graph as DOT (Graphviz) or Mermaid flowchart.

use ccg_core::graph::{CallGraph, MODULE_SCOPE};
use std::fmt::Write;

/// Export format for graph visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Dot,
    Mermaid,
}

impl ExportFormat {
    /// Parse a user-supplied format name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dot" | "graphviz" => Some(Self::Dot),
            "mermaid" | "md" => Some(Self::Mermaid),
            _ => None,
        }
    }
}

/// Export the graph as a DOT (Graphviz) string.
pub fn export_dot(graph: &CallGraph) -> String {
    let mut out = String::new();
    writeln!(out, "digraph CCG {{").unwrap();
    writeln!(out, "  rankdir=LR;").unwrap();
    writeln!(out, "  node [shape=box, fontsize=10];").unwrap();
    writeln!(out).unwrap();

    // The module scope only appears as a caller, never as a node.
    if graph.edges().iter().any(|e| e.caller == MODULE_SCOPE) {
        writeln!(
            out,
            "  \"{}\" [shape=component, style=filled, fillcolor=\"#e0e0ff\"];",
            dot_escape(MODULE_SCOPE)
        )
        .unwrap();
    }

    for node in graph.nodes() {
        let shape = if node.contains('.') { "ellipse" } else { "box" };
        writeln!(out, "  \"{}\" [shape={}];", dot_escape(node), shape).unwrap();
    }

    writeln!(out).unwrap();

    for edge in graph.edges() {
        writeln!(
            out,
            "  \"{}\" -> \"{}\";",
            dot_escape(&edge.caller),
            dot_escape(&edge.callee)
        )
        .unwrap();
    }

    writeln!(out, "}}").unwrap();
    out
}

/// Export the graph as a Mermaid flowchart string.
pub fn export_mermaid(graph: &CallGraph) -> String {
    let mut out = String::new();
    writeln!(out, "flowchart LR").unwrap();

    if graph.edges().iter().any(|e| e.caller == MODULE_SCOPE) {
        writeln!(
            out,
            "  {}[[\"{}\"]]",
            mermaid_safe_id(MODULE_SCOPE),
            MODULE_SCOPE
        )
        .unwrap();
    }
    for node in graph.nodes() {
        writeln!(out, "  {}[\"{}\"]", mermaid_safe_id(node), node).unwrap();
    }

    for edge in graph.edges() {
        writeln!(
            out,
            "  {} --> {}",
            mermaid_safe_id(&edge.caller),
            mermaid_safe_id(&edge.callee)
        )
        .unwrap();
    }

    out
}

fn dot_escape(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Make an ID safe for Mermaid. `_` is the escape character, so distinct
/// names always map to distinct ids (`os.path` is `n_os_dpath`, `os_path` is
/// `n_os__path`).
fn mermaid_safe_id(id: &str) -> String {
    let mut safe = String::with_capacity(id.len() + 2);
    // `end` is reserved in flowcharts.
    safe.push_str("n_");
    for ch in id.chars() {
        match ch {
            '_' => safe.push_str("__"),
            '.' => safe.push_str("_d"),
            '<' => safe.push_str("_l"),
            '>' => safe.push_str("_g"),
            ':' => safe.push_str("_c"),
            '/' => safe.push_str("_s"),
            '-' => safe.push_str("_h"),
            ' ' => safe.push_str("_w"),
            c => safe.push(c),
        }
    }
    safe
}

/// Export the graph in the specified format.
pub fn export(graph: &CallGraph, format: ExportFormat) -> String {
    match format {
        ExportFormat::Dot => export_dot(graph),
        ExportFormat::Mermaid => export_mermaid(graph),
    }
}
