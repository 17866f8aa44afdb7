//! Fetch a remote repository into a fresh temporary directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Clone `url` into a new `codebase_gen_*` directory under the system temp
/// dir. On success the directory outlives the process so the generated
/// documentation can be inspected; on failure it is removed.
pub fn clone_repo(url: &str) -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix("codebase_gen_")
        .tempdir()
        .context("failed to create clone directory")?;

    tracing::info!("cloning {} into {}", url, dir.path().display());
    git2::Repository::clone(url, dir.path())
        .with_context(|| format!("failed to clone {}", url))?;
    Ok(dir.keep())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn init_repo_with_file(dir: &Path, name: &str, content: &str) {
        let repo = git2::Repository::init(dir).unwrap();
        std::fs::write(dir.join(name), content).unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("ccg", "ccg@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
    }

    #[test]
    fn test_clone_local_repository() {
        let origin = tempfile::tempdir().unwrap();
        init_repo_with_file(origin.path(), "main.py", "print('hi')\n");

        let url = origin.path().to_string_lossy().to_string();
        let cloned = clone_repo(&url).unwrap();

        assert!(cloned.join("main.py").is_file());
        let name = cloned.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("codebase_gen_"));
        std::fs::remove_dir_all(cloned).unwrap();
    }

    #[test]
    fn test_clone_missing_repository_fails() {
        let missing = tempfile::tempdir().unwrap().path().join("nope");
        let err = clone_repo(&missing.to_string_lossy()).unwrap_err();
        assert!(err.to_string().contains("failed to clone"));
    }
}
