//! Configuration for discovery and documentation output.
//!
//! Load order: `.ccg/config.toml` → environment variables → defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level CCG configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CcgConfig {
    pub discovery: DiscoveryConfig,
    pub docs: DocsConfig,
}

/// Repository walking and file ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// File extensions (without the dot) listed in the file tree.
    /// Only the analyzable ones produce a graph; the rest are reported as
    /// not applicable.
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    /// File names moved to the front of the analysis order, in this order.
    pub entry_points: Vec<String>,
}

/// Generated document layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// README file names tried in order.
    pub readme_candidates: Vec<String>,
    /// Number of README lines kept as the summary.
    pub readme_lines: usize,
    /// Output directory, relative to the analysed repository.
    pub output_dir: String,
    pub document_name: String,
    pub report_name: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: ["py", "jac", "md", "js", "java"]
                .map(String::from)
                .to_vec(),
            skip_dirs: [".git", "node_modules", "__pycache__"]
                .map(String::from)
                .to_vec(),
            entry_points: ["main.py", "app.py", "server.py", "index.js", "main.jac"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            readme_candidates: ["README.md", "README.MD", "readme.md"]
                .map(String::from)
                .to_vec(),
            readme_lines: 10,
            output_dir: "outputs".to_string(),
            document_name: "docs.md".to_string(),
            report_name: "ccg.json".to_string(),
        }
    }
}

/// Helper to parse an env var and apply it to a config field.
fn env_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    target: &mut T,
) {
    if let Some(v) = lookup(var)
        && let Ok(n) = v.parse()
    {
        *target = n;
    }
}

impl CcgConfig {
    /// Load config from `.ccg/config.toml` in the project root, with env var overrides.
    /// Falls back to defaults if no config file exists.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".ccg").join("config.toml");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|var| std::env::var(var).ok());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Apply `CCG_*` overrides resolved through `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        env_override(&lookup, "CCG_README_LINES", &mut self.docs.readme_lines);
        env_override(&lookup, "CCG_OUTPUT_DIR", &mut self.docs.output_dir);
    }

    /// Strip leading dots and lowercase configured extensions.
    pub fn normalize(&mut self) {
        for ext in &mut self.discovery.extensions {
            *ext = ext.trim_start_matches('.').to_lowercase();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.docs.readme_lines == 0 {
            anyhow::bail!("docs.readme_lines must be greater than zero");
        }
        if self.discovery.extensions.is_empty() {
            anyhow::bail!("discovery.extensions must list at least one extension");
        }
        if self.docs.output_dir.trim().is_empty() {
            anyhow::bail!("docs.output_dir must not be empty");
        }
        Ok(())
    }
}
