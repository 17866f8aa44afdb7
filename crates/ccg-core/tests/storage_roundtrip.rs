use ccg_core::config::DocsConfig;
use ccg_core::graph::{CallGraphBuilder, FileGraph};
use ccg_core::schema::CcgReport;
use ccg_core::storage;
use std::path::PathBuf;
use tempfile::TempDir;

fn make_file_graph(file: &str, caller: &str, callee: &str) -> FileGraph {
    let mut builder = CallGraphBuilder::new();
    builder.add_node(caller);
    builder.add_edge(caller, callee);
    builder.add_node(callee);
    FileGraph {
        file: PathBuf::from(file),
        graph: builder.finish(),
    }
}

#[test]
fn test_save_and_load_roundtrip() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let docs = DocsConfig::default();

    let report = CcgReport::new(
        None,
        vec![
            make_file_graph("main.py", "main", "run"),
            make_file_graph("pkg/util.py", "run", "os.path.join"),
        ],
    );

    let path = storage::save(root, &docs, &report).unwrap();
    assert_eq!(path, root.join("outputs").join("ccg.json"));
    assert!(storage::report_exists(root, &docs));

    let loaded = storage::load(root, &docs).unwrap();
    assert_eq!(loaded.files.len(), 2);
    assert_eq!(loaded.files[1].file, PathBuf::from("pkg/util.py"));
    assert!(loaded.files[1].graph.contains_edge("run", "os.path.join"));
    assert_eq!(loaded.total_edges(), 2);
}

#[test]
fn test_custom_output_dir() {
    let tmp = TempDir::new().unwrap();
    let docs = DocsConfig {
        output_dir: "build/docs".to_string(),
        ..DocsConfig::default()
    };
    let report = CcgReport::new(None, Vec::new());

    storage::save(tmp.path(), &docs, &report).unwrap();
    assert!(tmp.path().join("build/docs/ccg.json").exists());
}

#[test]
fn test_report_exists_false() {
    let tmp = TempDir::new().unwrap();
    assert!(!storage::report_exists(tmp.path(), &DocsConfig::default()));
}

#[test]
fn test_load_missing_report_fails() {
    let tmp = TempDir::new().unwrap();
    let result = storage::load(tmp.path(), &DocsConfig::default());
    assert!(result.is_err(), "loading from empty dir should fail");
}
