//! unsaved: find git repositories with uncommitted or unpushed work

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

use goobits_unsaved::core::{
    create_progress_bar, find_repositories, inspection_concurrency, scan_repositories,
};
use goobits_unsaved::git::InspectOptions;
use goobits_unsaved::report::{
    render_failure, render_header, render_report, render_summary, ReportOptions,
};
use goobits_unsaved::utils::PathFormatter;

#[derive(Parser, Debug)]
#[command(
    name = "unsaved",
    version,
    about = "Find git repositories with uncommitted changes or unpushed commits"
)]
struct Cli {
    /// Directories to search for repositories (defaults to the current directory)
    paths: Vec<PathBuf>,

    /// Print absolute paths instead of paths relative to the current directory
    #[arg(short, long)]
    absolute: bool,

    /// One line per repository
    #[arg(short, long)]
    compact: bool,

    /// Fetch all remotes before checking for unpushed commits
    #[arg(short, long)]
    fetch: bool,

    /// Maximum number of repositories inspected at once (default: no limit)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cwd = std::env::current_dir()
        .context("failed to read the current directory")?
        .canonicalize()
        .context("failed to resolve the current directory")?;
    let formatter = PathFormatter::new(&cwd, cli.absolute);

    let roots = if cli.paths.is_empty() {
        vec![cwd.clone()]
    } else {
        cli.paths.clone()
    };

    let search_roots = roots.clone();
    let repos = tokio::task::spawn_blocking(move || find_repositories(&search_roots))
        .await
        .context("repository discovery panicked")??;
    debug!("discovered {} repositories", repos.len());

    let display_roots: Vec<PathBuf> = roots
        .iter()
        .map(|r| r.canonicalize().unwrap_or_else(|_| r.clone()))
        .collect();
    println!("{}", render_header(repos.len(), &display_roots, &formatter));

    let concurrency = inspection_concurrency(cli.jobs, repos.len());
    let progress = create_progress_bar(repos.len())?;
    let mut outcome = scan_repositories(
        repos,
        InspectOptions { fetch: cli.fetch },
        concurrency,
        &progress,
    )
    .await;
    progress.finish_and_clear();
    outcome.snapshots.sort_by(|a, b| a.path.cmp(&b.path));

    for failure in &outcome.failures {
        eprintln!("{}", render_failure(&failure.path, &failure.error, &formatter));
    }

    println!("{}", render_summary(outcome.snapshots.len()));
    if !outcome.snapshots.is_empty() {
        let options = ReportOptions {
            compact: cli.compact,
        };
        println!("{}", render_report(&outcome.snapshots, options, &formatter));
    }

    Ok(())
}
