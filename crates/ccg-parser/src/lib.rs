//! Tree-sitter based call graph extraction for a single Python file.
//!
//! Parses the file, walks the syntax tree while tracking the enclosing
//! declaration, resolves call targets to dotted names, and returns the
//! deduplicated [`ccg_core::graph::CallGraph`].

pub mod analyze;
pub mod builder;
pub mod languages;
pub mod resolve;
pub mod scope;
pub mod syntax;
pub mod treesitter;

pub use analyze::{Analysis, FileOutcome, analyze_file, analyze_files, analyze_source};
