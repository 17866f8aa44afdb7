//! Core types and storage for the Code Context Graph (CCG).
//!
//! Provides the per-file call graph model ([`graph::CallGraph`]), the analysis
//! error taxonomy, the versioned JSON report, and project configuration.

pub mod config;
pub mod error;
pub mod graph;
pub mod schema;
pub mod storage;
