//! Per-repository inspection
//!
//! Runs the read-only git queries for one repository and folds their output
//! into a [`RepoSnapshot`]. Any failing query fails the whole inspection; there
//! is no partial snapshot.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use super::operations::{
    branch_states, fetch_all, has_remote, status_porcelain, unpushed_commits,
};
use super::parse::{parse_ahead, parse_branch_lines, parse_commit_summaries, parse_status};
use super::snapshot::{Branch, RepoSnapshot};

/// Options shared by every inspection in a run
#[derive(Clone, Copy, Debug, Default)]
pub struct InspectOptions {
    /// Fetch all remotes before reading tracking state
    pub fetch: bool,
}

/// Inspects one repository
///
/// Returns `Ok(None)` when the repository is clean: it has a remote, no
/// working tree changes and no branch that is untracked or ahead.
pub async fn inspect_repository(
    path: &Path,
    options: &InspectOptions,
) -> Result<Option<RepoSnapshot>> {
    let has_remote = has_remote(path).await?;

    if has_remote && options.fetch {
        fetch_all(path).await?;
    }

    let changes = parse_status(&status_porcelain(path).await?);
    let branches = collect_branches(path).await?;

    let snapshot = RepoSnapshot {
        path: path.to_path_buf(),
        has_remote,
        changes,
        branches,
    };

    if snapshot.is_interesting() {
        debug!(
            "{}: {} changes, {} branches, remote: {}",
            path.display(),
            snapshot.changes.len(),
            snapshot.branches.len(),
            has_remote
        );
        Ok(Some(snapshot))
    } else {
        debug!("{}: clean", path.display());
        Ok(None)
    }
}

/// Reads every local branch and keeps the ones that are untracked or ahead
async fn collect_branches(path: &Path) -> Result<Vec<Branch>> {
    let mut branches = Vec::new();

    for line in parse_branch_lines(&branch_states(path).await?) {
        let mut branch = Branch {
            tracked: line.upstream.is_some(),
            ahead: parse_ahead(line.tracking.as_deref()),
            name: line.name,
            commits: Vec::new(),
        };

        if !branch.is_retained() {
            continue;
        }

        // Only an upstream gives something to diff against
        if let Some(upstream) = line.upstream.as_deref().filter(|_| branch.ahead > 0) {
            let log = unpushed_commits(path, &branch.name, upstream).await?;
            branch.commits = parse_commit_summaries(&log);
        }

        branches.push(branch);
    }

    Ok(branches)
}
