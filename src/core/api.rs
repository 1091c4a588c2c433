//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Repository discovery
//! - Concurrent scanning
//! - Progress reporting
//!
//! Internal implementation details are not exposed through this API.

// Discovery
pub use super::discovery::{ensure_directory, find_repos_from_path, find_repositories};

// Scanning
pub use super::scan::{scan_repositories, RepoFailure, ScanOutcome};

// Progress
pub use super::progress::create_progress_bar;

// Configuration
pub use super::config::{inspection_concurrency, SKIP_DIRECTORIES};
