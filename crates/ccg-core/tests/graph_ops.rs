use ccg_core::graph::*;

fn build(steps: &[(&str, &str)]) -> CallGraph {
    let mut builder = CallGraphBuilder::new();
    for (caller, callee) in steps {
        builder.add_edge(caller, callee);
        builder.add_node(callee);
    }
    builder.finish()
}

#[test]
fn test_first_seen_order_is_kept() {
    let graph = build(&[("main", "load"), ("main", "save"), ("load", "open")]);
    assert_eq!(graph.nodes(), ["load", "save", "open"]);
    assert_eq!(graph.edges()[0], CallEdge::new("main", "load"));
    assert_eq!(graph.edges()[2], CallEdge::new("load", "open"));
}

#[test]
fn test_repeated_pairs_collapse() {
    let graph = build(&[
        ("main", "load"),
        ("main", "load"),
        (MODULE_SCOPE, "main"),
        ("main", "load"),
    ]);
    assert_eq!(graph.edges().len(), 2);
    assert_eq!(graph.nodes().len(), 2);
    assert!(graph.duplicate_edge().is_none());
    assert!(graph.duplicate_node().is_none());
}

#[test]
fn test_same_callee_from_different_callers_is_kept() {
    let graph = build(&[("a", "log"), ("b", "log")]);
    assert_eq!(graph.edges().len(), 2);
    assert_eq!(graph.nodes(), ["log"]);
    assert!(graph.contains_edge("a", "log"));
    assert!(graph.contains_edge("b", "log"));
}

#[test]
fn test_builders_do_not_share_state() {
    let mut first = CallGraphBuilder::new();
    first.add_node("shared");
    let mut second = CallGraphBuilder::new();
    assert!(second.add_node("shared"));
    assert_eq!(first.finish(), second.finish());
}

#[test]
fn test_empty_graph() {
    let graph = CallGraphBuilder::new().finish();
    assert!(graph.is_empty());
    assert!(!graph.contains_node(MODULE_SCOPE));
}
