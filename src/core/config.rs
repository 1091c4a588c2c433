//! Configuration constants and settings

// Repository metadata directory (or file, for worktrees and submodules)
pub const GIT_DIR_NAME: &str = ".git";

// Marker line inside a `.git` file pointing at the real git directory
pub const GITDIR_PREFIX: &str = "gitdir:";

// Directories never descended into during repository search
pub const SKIP_DIRECTORIES: &[&str] = &["node_modules"];

// Repository discovery configuration
pub const MAX_WALK_THREADS: usize = 8; // Upper bound for parallel directory walking
pub const ESTIMATED_REPO_COUNT: usize = 50; // Pre-allocation hint for collections

// Progress bar configuration
pub const PROGRESS_TEMPLATE: &str = "{spinner} {pos}/{len} {wide_msg}";
pub const PROGRESS_MESSAGE: &str = "checking repositories...";

/// Resolves the number of repositories inspected at once
///
/// `None` means no cap: every repository is dispatched immediately.
/// An explicit cap is always at least 1.
pub fn inspection_concurrency(jobs: Option<usize>, total_repos: usize) -> usize {
    match jobs {
        Some(n) => n.max(1),
        None => total_repos.max(1),
    }
}
