//! Language detection and tree-sitter grammar loading.

use std::path::Path;

/// Languages whose grammar the analyzer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
}

impl Language {
    /// Infer language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "py" => Some(Language::Python),
            _ => None,
        }
    }

    /// Infer language from a file path. Paths without an extension are never eligible.
    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
        }
    }

    /// The tree-sitter grammar for this language.
    pub fn ts_language(self) -> tree_sitter::Language {
        match self {
            Language::Python => tree_sitter_python::LANGUAGE.into(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("js"), None);
        assert_eq!(Language::from_extension("pyc"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path(Path::new("src/app.py")), Some(Language::Python));
        assert_eq!(Language::from_path(Path::new("README.md")), None);
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
        assert_eq!(Language::from_path(Path::new("notes.py.txt")), None);
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        assert_eq!(Language::from_path(Path::new("LEGACY.PY")), None);
    }
}
