//! Classification of tree-sitter-python node kinds relevant to call graphs.

use tree_sitter::Node;

/// The constructs the traversal treats specially. Everything else is
/// [`SyntaxKind::Other`] and is only descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxKind {
    /// `class Name(...): ...`
    Class,
    /// `def name(...): ...` and `async def name(...): ...`
    Function,
    /// One or more `@decorator` lines followed by a class or function.
    Decorated,
    /// `target(arguments)`
    Call,
    Other,
}

impl SyntaxKind {
    pub fn of(node: &Node) -> Self {
        match node.kind() {
            "class_definition" => SyntaxKind::Class,
            "function_definition" => SyntaxKind::Function,
            "decorated_definition" => SyntaxKind::Decorated,
            "call" => SyntaxKind::Call,
            _ => SyntaxKind::Other,
        }
    }
}

/// The function definition behind `node`, looking through decorators.
pub fn as_function<'tree>(node: Node<'tree>) -> Option<Node<'tree>> {
    match SyntaxKind::of(&node) {
        SyntaxKind::Function => Some(node),
        SyntaxKind::Decorated => node
            .child_by_field_name("definition")
            .filter(|def| SyntaxKind::of(def) == SyntaxKind::Function),
        _ => None,
    }
}

/// Source text covered by `node`.
pub fn text<'s>(node: Node, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}
