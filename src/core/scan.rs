//! Concurrent inspection of every discovered repository

use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::git::{inspect_repository, InspectOptions, RepoSnapshot};

/// A repository whose inspection failed
#[derive(Debug)]
pub struct RepoFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Results of a scan, in completion order
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Repositories with unsaved work
    pub snapshots: Vec<RepoSnapshot>,
    /// Repositories that could not be inspected
    pub failures: Vec<RepoFailure>,
    /// Repositories that were inspected and found clean
    pub clean: usize,
}

/// Inspects every repository concurrently
///
/// At most `concurrency` inspections run at once. A failing repository is
/// recorded in `failures` and never affects its siblings. Results are gathered
/// from the finished futures, so no state is shared between inspections.
pub async fn scan_repositories(
    repos: impl IntoIterator<Item = PathBuf>,
    options: InspectOptions,
    concurrency: usize,
    progress: &ProgressBar,
) -> ScanOutcome {
    let semaphore = Semaphore::new(concurrency.max(1));
    let semaphore = &semaphore;
    let options = &options;

    let mut futures = FuturesUnordered::new();
    for path in repos {
        futures.push(async move {
            // The semaphore is never closed
            let _permit = semaphore.acquire().await.ok();
            let result = inspect_repository(&path, options).await;
            (path, result)
        });
    }

    let mut outcome = ScanOutcome::default();
    while let Some((path, result)) = futures.next().await {
        progress.inc(1);
        match result {
            Ok(Some(snapshot)) => outcome.snapshots.push(snapshot),
            Ok(None) => outcome.clean += 1,
            Err(error) => {
                debug!("{}: inspection failed: {error:#}", path.display());
                outcome.failures.push(RepoFailure { path, error });
            }
        }
    }

    outcome
}
