//! Tree-sitter integration: parse source text and reject malformed input.

use crate::languages::Language;
use ccg_core::error::AnalysisError;
use std::path::Path;
use tree_sitter::{Node, Point};

/// Parse source text into a tree-sitter tree.
///
/// Tree-sitter recovers from syntax errors by inserting `ERROR` and `MISSING`
/// nodes, and the grammar also accepts some Python 2 forms. A tree containing
/// either is rejected with the position of the first offending node, so
/// callers never see a partial tree.
pub fn parse_source(
    path: &Path,
    source: &str,
    language: Language,
) -> Result<tree_sitter::Tree, AnalysisError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.ts_language())
        .map_err(|e| AnalysisError::GrammarUnavailable {
            language: language.name(),
            message: e.to_string(),
        })?;
    let tree = parser
        .parse(source.as_bytes(), None)
        .ok_or_else(|| AnalysisError::GrammarUnavailable {
            language: language.name(),
            message: format!("parser produced no tree for {}", path.display()),
        })?;

    let root = tree.root_node();
    let error_at = first_error(root).or_else(|| root.has_error().then(|| root.start_position()));
    if let Some(point) = error_at {
        return Err(AnalysisError::Grammar {
            path: path.to_path_buf(),
            line: point.row + 1,
            column: point.column + 1,
        });
    }
    Ok(tree)
}

/// Position of the first `ERROR`, `MISSING` or rejected node in document order.
fn first_error(node: Node) -> Option<Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    if let Some(point) = rejected_construct(node) {
        return Some(point);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(point) = first_error(child) {
            return Some(point);
        }
    }
    None
}

/// Constructs the grammar parses but Python 3 does not accept.
fn rejected_construct(node: Node) -> Option<Point> {
    match node.kind() {
        // `print >>f, x` is also a valid Python 3 expression statement.
        "print_statement" => {
            let mut cursor = node.walk();
            let has_chevron = node.children(&mut cursor).any(|c| c.kind() == "chevron");
            (!has_chevron).then(|| node.start_position())
        }
        "exec_statement" => Some(node.start_position()),
        // `except A, e:`
        "except_clause" => {
            let mut cursor = node.walk();
            node.children_by_field_name("value", &mut cursor)
                .nth(1)
                .map(|value| value.start_position())
        }
        "argument_list" => misordered_argument(node),
        _ => None,
    }
}

/// Positional arguments may not follow keyword arguments or `**` unpacking,
/// and `*` unpacking may not follow `**` unpacking.
fn misordered_argument(list: Node) -> Option<Point> {
    let mut seen_keyword = false;
    let mut seen_dict_splat = false;
    let mut cursor = list.walk();
    for arg in list.named_children(&mut cursor) {
        match arg.kind() {
            "comment" => {}
            "keyword_argument" => seen_keyword = true,
            "dictionary_splat" => seen_dict_splat = true,
            "list_splat" => {
                if seen_dict_splat {
                    return Some(arg.start_position());
                }
            }
            _ => {
                if seen_keyword || seen_dict_splat {
                    return Some(arg.start_position());
                }
            }
        }
    }
    None
}
