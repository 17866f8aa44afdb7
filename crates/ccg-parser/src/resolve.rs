//! Call target resolution: turn the callee sub-expression of a call into a
//! readable dotted name.
//!
//! - `foo(...)` → `foo`
//! - `obj.method(...)` → `obj.method`
//! - `a.b.c(...)` → `a.b.c`
//! - `make().run(...)` → `run` (members are kept, the non-name base is dropped)
//! - lambdas, subscripts, literals, call results → unresolved

use crate::syntax::text;
use tree_sitter::Node;

/// Resolve a call target, or `None` if no identifier can be derived.
pub fn resolve_callee(target: Node, source: &str) -> Option<String> {
    let target = strip_parens(target);
    match target.kind() {
        "identifier" => Some(text(target, source).to_string()),
        "attribute" => {
            let mut parts = Vec::new();
            let mut current = target;
            while current.kind() == "attribute" {
                parts.push(text(current.child_by_field_name("attribute")?, source));
                current = strip_parens(current.child_by_field_name("object")?);
            }
            if current.kind() == "identifier" {
                parts.push(text(current, source));
            }
            parts.reverse();
            Some(parts.join("."))
        }
        _ => None,
    }
}

/// Parentheses only group; `(a.b)` names the same thing as `a.b`.
fn strip_parens(mut node: Node) -> Node {
    while node.kind() == "parenthesized_expression" {
        match node.named_child(0) {
            Some(inner) if inner.kind() != "comment" => node = inner,
            _ => break,
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::Language;
    use crate::treesitter::parse_source;
    use std::path::Path;

    /// Resolve the target of the outermost call in a one-line snippet.
    fn resolve(snippet: &str) -> Option<String> {
        let tree = parse_source(Path::new("t.py"), snippet, Language::Python).unwrap();
        let call = find_call(tree.root_node()).expect("snippet has a call");
        let target = call.child_by_field_name("function").unwrap();
        resolve_callee(target, snippet)
    }

    fn find_call(node: Node) -> Option<Node> {
        if node.kind() == "call" {
            return Some(node);
        }
        let mut cursor = node.walk();
        node.children(&mut cursor).find_map(find_call)
    }

    #[test]
    fn test_bare_identifier() {
        assert_eq!(resolve("foo()\n").as_deref(), Some("foo"));
    }

    #[test]
    fn test_attribute_chain() {
        assert_eq!(resolve("a.b.c()\n").as_deref(), Some("a.b.c"));
        assert_eq!(resolve("self.qux()\n").as_deref(), Some("self.qux"));
        assert_eq!(resolve("os.path.join('a', 'b')\n").as_deref(), Some("os.path.join"));
    }

    #[test]
    fn test_parenthesized_target() {
        assert_eq!(resolve("(a.b)()\n").as_deref(), Some("a.b"));
        assert_eq!(resolve("(foo)()\n").as_deref(), Some("foo"));
    }

    #[test]
    fn test_chain_on_call_result_keeps_members() {
        assert_eq!(resolve("make().run()\n").as_deref(), Some("run"));
        assert_eq!(resolve("''.join(parts)\n").as_deref(), Some("join"));
    }

    #[test]
    fn test_chain_on_subscript_keeps_members() {
        assert_eq!(resolve("items[0].close()\n").as_deref(), Some("close"));
    }

    #[test]
    fn test_unresolvable_targets() {
        assert_eq!(resolve("(lambda: 0)()\n"), None);
        assert_eq!(resolve("handlers[0]()\n"), None);
        assert_eq!(resolve("factory()()\n"), None);
    }
}
