//! Fatal per-file analysis errors.
//!
//! An unsupported extension is not an error (it is reported as a
//! "not applicable" outcome by the analyzer) and neither is a call target
//! that cannot be resolved.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The path has an eligible extension but does not exist.
    #[error("source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },
    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The text does not conform to the grammar. `line` and `column` are
    /// 1-based and point at the first error in document order.
    #[error("syntax error in {} at line {line}, column {column}", path.display())]
    Grammar {
        path: PathBuf,
        line: usize,
        column: usize,
    },
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    GrammarUnavailable {
        language: &'static str,
        message: String,
    },
}
