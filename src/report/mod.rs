//! Text rendering of scan results
//!
//! Renderers return strings rather than printing so the CLI decides where
//! output goes. Styling comes from `colored` and honors its global override.

use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::git::RepoSnapshot;
use crate::utils::PathFormatter;

const NO_REMOTE: &str = "no remote";

/// Report layout options
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    /// One line per repository instead of a block
    pub compact: bool,
}

/// Line printed before inspection starts
pub fn render_header(total_repos: usize, roots: &[PathBuf], formatter: &PathFormatter) -> String {
    let roots = roots
        .iter()
        .map(|r| formatter.format(r))
        .collect::<Vec<_>>()
        .join(", ");
    let repo_word = if total_repos == 1 { "repository" } else { "repositories" };
    format!("Checking {total_repos} {repo_word} in {roots}")
}

/// Line printed before the per-repository report
pub fn render_summary(dirty_repos: usize) -> String {
    let repo_word = if dirty_repos == 1 { "repository" } else { "repositories" };
    let suffix = if dirty_repos > 0 { ":" } else { "" };
    format!("Found {dirty_repos} {repo_word} with unsaved work{suffix}")
}

/// Per-repository error line for stderr
pub fn render_failure(path: &Path, error: &anyhow::Error, formatter: &PathFormatter) -> String {
    format!("Error checking {}: {error:#}", formatter.format(path).bold())
}

/// One line: path, remote marker, ahead and untracked branches, change codes
pub fn render_compact(repo: &RepoSnapshot, formatter: &PathFormatter) -> String {
    let mut parts = vec![format!("{}:", formatter.format(&repo.path).bold())];

    if !repo.has_remote {
        parts.push(NO_REMOTE.to_string());
    }

    let ahead: Vec<String> = repo
        .ahead_branches()
        .map(|b| format!("{}: {} ahead", b.name, b.ahead))
        .collect();
    if !ahead.is_empty() {
        parts.push(format!("({})", ahead.join(", ")));
    }

    let untracked: Vec<String> = repo
        .untracked_branches()
        .map(|b| format!("{}: untracked", b.name))
        .collect();
    if !untracked.is_empty() {
        parts.push(format!("({})", untracked.join(", ")));
    }

    if !repo.changes.is_empty() {
        parts.push(format!("[{}]", repo.change_codes()));
    }

    parts.join(" ")
}

/// A block per repository, starting with a blank line
pub fn render_verbose(repo: &RepoSnapshot, formatter: &PathFormatter) -> String {
    let mut lines = vec![String::new(), formatter.format(&repo.path).bold().to_string()];

    if !repo.has_remote {
        lines.push(format!("  {}", NO_REMOTE.italic()));
    }

    if !repo.changes.is_empty() {
        let header = format!("uncommitted changes ({})", repo.changes.len());
        lines.push(format!("  {}", header.italic()));
        for change in &repo.changes {
            lines.push(format!("    {} {}", change.kind.as_str().bold(), change.path));
        }
    }

    let unpushed: Vec<_> = repo.unpushed_branches().collect();
    if !unpushed.is_empty() {
        let header = format!("unpushed commits ({})", unpushed.len());
        lines.push(format!("  {}", header.italic()));
        for branch in unpushed {
            lines.push(format!("    {} ({})", branch.name.as_str().bold(), branch.ahead));
            for commit in &branch.commits {
                lines.push(format!("      {}", commit.as_str().dimmed()));
            }
        }
    }

    let untracked: Vec<_> = repo.untracked_branches().collect();
    if !untracked.is_empty() {
        let header = format!("untracked branches ({})", untracked.len());
        lines.push(format!("  {}", header.italic()));
        for branch in untracked {
            lines.push(format!("    {}", branch.name.as_str().bold()));
            for commit in &branch.commits {
                lines.push(format!("      {}", commit.as_str().dimmed()));
            }
        }
    }

    lines.join("\n")
}

/// Renders every snapshot in the chosen layout
pub fn render_report(
    repos: &[RepoSnapshot],
    options: ReportOptions,
    formatter: &PathFormatter,
) -> String {
    repos
        .iter()
        .map(|repo| {
            if options.compact {
                render_compact(repo, formatter)
            } else {
                render_verbose(repo, formatter)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
