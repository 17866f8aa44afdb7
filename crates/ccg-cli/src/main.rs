//! CLI binary for CCG: extract call graphs from Python sources and generate docs.

mod clone;
mod discovery;
mod pipeline;

use anyhow::{Context, Result};
use ccg_core::config::CcgConfig;
use ccg_core::graph::FileGraph;
use clap::{Parser, Subcommand};
use discovery::FileFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ccg", about = "Code Context Graph extractor")]
struct Cli {
    /// Project root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the call graph of a single file
    Analyze {
        /// Source file (relative paths resolve against the project root)
        file: PathBuf,

        /// Output format: json, dot, mermaid
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// List the prioritised file tree of the project
    Tree {
        /// Glob patterns to include files (repeatable)
        #[arg(long)]
        include: Vec<String>,

        /// Glob patterns to exclude files (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// Analyse a repository and write the generated documentation
    Docs {
        /// Clone this repository instead of using the project root
        #[arg(long)]
        url: Option<String>,

        /// Glob patterns to include files (repeatable)
        #[arg(long)]
        include: Vec<String>,

        /// Glob patterns to exclude files (repeatable)
        #[arg(long)]
        exclude: Vec<String>,
    },
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;

    match cli.command {
        Commands::Analyze { file, format } => cmd_analyze(&project_root, &file, &format),
        Commands::Tree { include, exclude } => cmd_tree(&project_root, &include, &exclude),
        Commands::Docs {
            url,
            include,
            exclude,
        } => cmd_docs(&project_root, url.as_deref(), &include, &exclude),
    }
}

/// Discover candidate files under `repo_root` and order entry points first.
fn collect_files(
    repo_root: &Path,
    config: &CcgConfig,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<PathBuf>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let filter = FileFilter {
        include: discovery::build_globset(include, "--include")?,
        exclude: discovery::build_globset(exclude, "--exclude")?,
        skip_paths: vec![PathBuf::from(&config.docs.output_dir)],
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    spinner.set_message("Scanning files...");
    spinner.tick();

    let files = discovery::build_file_tree(repo_root, &config.discovery, &filter);
    spinner.finish_and_clear();

    Ok(discovery::prioritise_files(
        files,
        &config.discovery.entry_points,
    ))
}

fn cmd_analyze(project_root: &Path, file: &Path, format: &str) -> Result<()> {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        project_root.join(file)
    };

    let export_format = match format {
        "json" => None,
        other => Some(ccg_docs::export::ExportFormat::from_name(other).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown output format: {}. Use 'json', 'dot' or 'mermaid'.",
                other
            )
        })?),
    };

    let analysis = ccg_parser::analyze_file(&path)?;
    let Some(graph) = analysis.into_graph() else {
        eprintln!(
            "{} is not a Python source file; nothing to analyse.",
            file.display()
        );
        return Ok(());
    };
    if graph.is_empty() {
        eprintln!("{} has no declarations or calls.", file.display());
    }

    match export_format {
        Some(fmt) => print!("{}", ccg_docs::export::export(&graph, fmt)),
        None => {
            let file_graph = FileGraph {
                file: file.to_path_buf(),
                graph,
            };
            println!("{}", serde_json::to_string_pretty(&file_graph)?);
        }
    }
    Ok(())
}

fn cmd_tree(project_root: &Path, include: &[String], exclude: &[String]) -> Result<()> {
    let config = CcgConfig::load(project_root)?;
    let files = collect_files(project_root, &config, include, exclude)?;

    for file in &files {
        println!("{}", file.display());
    }
    eprintln!("{} files", files.len());
    Ok(())
}

fn cmd_docs(
    project_root: &Path,
    url: Option<&str>,
    include: &[String],
    exclude: &[String],
) -> Result<()> {
    let (repo_root, source) = match url {
        Some(url) => (clone::clone_repo(url)?, url.to_string()),
        None => (
            project_root.to_path_buf(),
            project_root.display().to_string(),
        ),
    };

    let config = CcgConfig::load(&repo_root)?;
    let files = collect_files(&repo_root, &config, include, exclude)?;
    tracing::info!("discovered {} files in {}", files.len(), repo_root.display());

    if ccg_core::storage::report_exists(&repo_root, &config.docs) {
        tracing::info!(
            "replacing existing report {}",
            ccg_core::storage::report_file(&repo_root, &config.docs).display()
        );
    }

    let (graphs, summary) = pipeline::run_analysis(&repo_root, &files);
    let report = ccg_core::schema::CcgReport::new(Some(source), graphs);
    let report_path = ccg_core::storage::save(&repo_root, &config.docs, &report)?;

    let readme = ccg_docs::readme::summarize_readme(&repo_root, &config.docs)?;
    let doc_path = ccg_docs::markdown::write_docs(&repo_root, &config.docs, &readme, &report)?;

    eprintln!("CCG complete:");
    eprintln!("  Files analysed:  {}", summary.analysed);
    eprintln!("  Not applicable:  {}", summary.not_applicable);
    eprintln!("  Skipped (error): {}", summary.failed.len());
    eprintln!("  Nodes:           {}", report.total_nodes());
    eprintln!("  Edges:           {}", report.total_edges());
    eprintln!("  Report:          {}", report_path.display());
    for (path, err) in &summary.failed {
        eprintln!("    {}: {}", path.display(), err);
    }

    println!("{}", doc_path.display());
    Ok(())
}
