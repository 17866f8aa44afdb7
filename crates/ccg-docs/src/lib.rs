//! Documentation output for Code Context Graph results.
//!
//! Summarizes the repository README, writes the generated Markdown document,
//! and renders single-file graphs as DOT or Mermaid.

pub mod export;
pub mod markdown;
pub mod readme;
