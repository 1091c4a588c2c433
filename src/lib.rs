//! # goobits-unsaved
//!
//! `goobits-unsaved` finds git repositories holding work that could be lost:
//! uncommitted changes, commits that were never pushed, branches without an
//! upstream, and repositories with no remote at all. It powers the `unsaved`
//! CLI tool.
//!
//! ## Pipeline
//!
//! - **Discovery**: parallel directory walking with `ignore`, pruning `node_modules`.
//! - **Inspection**: read-only `git` queries per repository, parsed into snapshots.
//! - **Scanning**: every repository inspected concurrently; failures stay isolated.
//! - **Reporting**: compact or verbose text with relative or absolute paths.
//!
//! ## Example
//!
//! ```rust,no_run
//! use goobits_unsaved::core::{create_progress_bar, find_repositories, scan_repositories};
//! use goobits_unsaved::git::InspectOptions;
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repos = find_repositories(&[PathBuf::from(".")])?;
//!     let progress = create_progress_bar(repos.len())?;
//!     let outcome = scan_repositories(repos, InspectOptions::default(), 8, &progress).await;
//!     for repo in outcome.snapshots {
//!         println!("{}: {} changes", repo.path.display(), repo.changes.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod git;
pub mod report;
pub mod utils;

pub use error::{ScanError, ScanResult};
