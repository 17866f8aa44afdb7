//! Repository file tree discovery and entry-point prioritisation.

use anyhow::{Context, Result};
use ccg_core::config::DiscoveryConfig;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Compile repeatable `--include` / `--exclude` patterns. `None` when empty.
pub fn build_globset(patterns: &[String], flag: &str) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for p in patterns {
        builder.add(Glob::new(p).with_context(|| format!("invalid {} glob: {}", flag, p))?);
    }
    Ok(Some(
        builder
            .build()
            .with_context(|| format!("invalid {} glob set", flag))?,
    ))
}

/// Path filters applied on top of the configured extensions.
#[derive(Debug, Default)]
pub struct FileFilter {
    pub include: Option<GlobSet>,
    pub exclude: Option<GlobSet>,
    /// Directories (relative to the root) skipped entirely, e.g. our own output.
    pub skip_paths: Vec<PathBuf>,
}

impl FileFilter {
    fn accepts(&self, rel_path: &Path) -> bool {
        if let Some(ref inc) = self.include
            && !inc.is_match(rel_path)
        {
            return false;
        }
        if let Some(ref exc) = self.exclude
            && exc.is_match(rel_path)
        {
            return false;
        }
        true
    }
}

/// List candidate files under `root` as sorted root-relative paths.
///
/// Hidden entries and git-ignored paths are skipped, as are directories named
/// in `discovery.skip_dirs` and everything under `filter.skip_paths`.
pub fn build_file_tree(
    root: &Path,
    discovery: &DiscoveryConfig,
    filter: &FileFilter,
) -> Vec<PathBuf> {
    let skip_names: HashSet<String> = discovery.skip_dirs.iter().cloned().collect();
    let skip_paths: Vec<PathBuf> = filter.skip_paths.iter().map(|p| root.join(p)).collect();

    let walker = ignore::WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .add_custom_ignore_filename(".ccgignore")
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !skip_names.contains(name.as_ref()) && !skip_paths.iter().any(|p| p == entry.path())
        })
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !discovery.extensions.contains(&ext) {
            continue;
        }
        let rel_path = path.strip_prefix(root).unwrap_or(path);
        if !filter.accepts(rel_path) {
            continue;
        }
        files.push(rel_path.to_path_buf());
    }
    files.sort();
    files
}

/// Move entry points to the front: for each configured entry point in order,
/// every file with that name (in current order); then the rest unchanged.
pub fn prioritise_files(files: Vec<PathBuf>, entry_points: &[String]) -> Vec<PathBuf> {
    let mut ordered: Vec<PathBuf> = Vec::with_capacity(files.len());
    let mut taken: HashSet<PathBuf> = HashSet::new();

    for entry in entry_points {
        for file in &files {
            let matches = file
                .file_name()
                .is_some_and(|name| name.to_string_lossy() == entry.as_str());
            if matches && taken.insert(file.clone()) {
                ordered.push(file.clone());
            }
        }
    }
    for file in files {
        if !taken.contains(&file) {
            ordered.push(file);
        }
    }
    ordered
}
