//! Depth-first traversal that turns a syntax tree into a [`CallGraph`].
//!
//! Per construct:
//! - class: register `Class` and every direct method as `Class.method`
//!   before any body is visited, then visit bases, body and decorators
//!   without changing scope;
//! - function: register its bare name, push it as the current scope,
//!   visit parameters, body, decorators and return annotation, pop;
//! - call: resolve the target and record `(current scope, callee)` plus the
//!   callee node, then descend into target and arguments;
//! - anything else: descend.
//!
//! Calls are attributed to the bare name of the enclosing function even when
//! that function is a method registered as `Class.method`.

use crate::resolve::resolve_callee;
use crate::scope::ScopeStack;
use crate::syntax::{SyntaxKind, as_function, text};
use ccg_core::graph::{CallGraph, CallGraphBuilder};
use tree_sitter::{Node, Tree};

/// Build the call graph of a successfully parsed file.
pub fn build_call_graph(tree: &Tree, source: &str) -> CallGraph {
    let mut traversal = Traversal::new(source);
    traversal.visit(tree.root_node());
    traversal.graph.finish()
}

/// Traversal state threaded through the recursive walk.
struct Traversal<'s> {
    source: &'s str,
    scope: ScopeStack,
    graph: CallGraphBuilder,
}

impl<'s> Traversal<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            scope: ScopeStack::new(),
            graph: CallGraphBuilder::new(),
        }
    }

    fn text(&self, node: Node) -> &'s str {
        text(node, self.source)
    }

    fn visit(&mut self, node: Node) {
        match SyntaxKind::of(&node) {
            SyntaxKind::Class => self.visit_class(node, None),
            SyntaxKind::Function => self.visit_function(node, None),
            SyntaxKind::Decorated => self.visit_decorated(node),
            SyntaxKind::Call => self.visit_call(node),
            SyntaxKind::Other => self.visit_children(node),
        }
    }

    fn visit_children(&mut self, node: Node) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child);
        }
    }

    fn visit_field(&mut self, node: Node, field: &str) {
        if let Some(child) = node.child_by_field_name(field) {
            self.visit(child);
        }
    }

    fn visit_decorators(&mut self, decorated: Node) {
        let mut cursor = decorated.walk();
        for decorator in decorated
            .children(&mut cursor)
            .filter(|c| c.kind() == "decorator")
        {
            self.visit(decorator);
        }
    }

    /// `decorated` is the enclosing `decorated_definition`; its decorators
    /// run in the enclosing scope after the class body.
    fn visit_class(&mut self, node: Node, decorated: Option<Node>) {
        if let Some(name_node) = node.child_by_field_name("name") {
            let class_name = self.text(name_node);
            self.graph.add_node(class_name);

            if let Some(body) = node.child_by_field_name("body") {
                let mut cursor = body.walk();
                for member in body.named_children(&mut cursor) {
                    if let Some(method) = as_function(member)
                        && let Some(method_name) = method.child_by_field_name("name")
                    {
                        let qualified = format!("{}.{}", class_name, self.text(method_name));
                        self.graph.add_node(&qualified);
                    }
                }
            }
        }
        self.visit_field(node, "superclasses");
        self.visit_field(node, "body");
        if let Some(decorated) = decorated {
            self.visit_decorators(decorated);
        }
        self.visit_field(node, "type_parameters");
    }

    /// `decorated` is the enclosing `decorated_definition`, whose decorator
    /// expressions belong to the function's own scope and follow its body.
    fn visit_function(&mut self, node: Node, decorated: Option<Node>) {
        let Some(name_node) = node.child_by_field_name("name") else {
            self.visit_children(node);
            return;
        };
        let name = self.text(name_node);
        self.graph.add_node(name);

        self.scope.enter(name);
        self.visit_field(node, "parameters");
        self.visit_field(node, "body");
        if let Some(decorated) = decorated {
            self.visit_decorators(decorated);
        }
        self.visit_field(node, "return_type");
        self.visit_field(node, "type_parameters");
        self.scope.exit();
    }

    fn visit_decorated(&mut self, node: Node) {
        match node.child_by_field_name("definition") {
            Some(definition) => match SyntaxKind::of(&definition) {
                SyntaxKind::Function => self.visit_function(definition, Some(node)),
                SyntaxKind::Class => self.visit_class(definition, Some(node)),
                _ => self.visit_children(node),
            },
            None => self.visit_children(node),
        }
    }

    fn visit_call(&mut self, node: Node) {
        if let Some(target) = node.child_by_field_name("function")
            && let Some(callee) = resolve_callee(target, self.source)
        {
            let caller = self.scope.current();
            self.graph.add_edge(caller, &callee);
            self.graph.add_node(&callee);
        }
        self.visit_children(node);
    }
}
