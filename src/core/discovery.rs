//! Repository discovery utilities

use dashmap::DashSet;
use ignore::{WalkBuilder, WalkState};
use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::config::{
    ESTIMATED_REPO_COUNT, GITDIR_PREFIX, GIT_DIR_NAME, MAX_WALK_THREADS, SKIP_DIRECTORIES,
};
use crate::error::{ScanError, ScanResult};

/// Check if a .git file (for submodules/worktrees) contains gitdir reference
/// Only reads the first 5 lines for efficiency
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => BufReader::new(file)
            .lines()
            .take(5)
            .map_while(Result::ok)
            .any(|line| line.trim_start().starts_with(GITDIR_PREFIX)),
        Err(_) => false,
    }
}

/// Checks that `path` is an existing directory and returns its canonical form
pub fn ensure_directory(path: impl AsRef<Path>) -> ScanResult<PathBuf> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }

    path.canonicalize().map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Recursively searches for git repositories below `search_path`
///
/// Uses the parallel walker from `ignore` with every ignore-file filter turned
/// off. `node_modules` and hidden directories are pruned from the walk, and the
/// walk never descends into a `.git` entry. Returned paths are unique but
/// unordered.
pub fn find_repos_from_path(search_path: impl AsRef<Path>) -> Vec<PathBuf> {
    let search_path = search_path.as_ref();
    let found = Arc::new(DashSet::with_capacity(ESTIMATED_REPO_COUNT));
    let found_clone = Arc::clone(&found);

    let walker = WalkBuilder::new(search_path)
        .standard_filters(false)
        .follow_links(false)
        .threads(num_cpus::get().min(MAX_WALK_THREADS))
        .filter_entry(move |entry| {
            let file_name = entry.file_name().to_str().unwrap_or("");

            if file_name == GIT_DIR_NAME {
                let is_git_repo = if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    true
                } else {
                    is_git_file(entry.path())
                };

                if is_git_repo {
                    if let Some(repo_path) = entry.path().parent() {
                        if !found_clone.contains(repo_path) {
                            found_clone.insert(repo_path.to_path_buf());
                        }
                    }
                }
                // Don't descend into .git
                return false;
            }

            if SKIP_DIRECTORIES.contains(&file_name) {
                return false;
            }

            // Hidden directories below the root are not searched
            if entry.depth() > 0 && file_name.starts_with('.') {
                return false;
            }

            true
        })
        .build_parallel();

    walker.run(|| {
        Box::new(|result| {
            if let Err(e) = result {
                debug!("skipping unreadable entry: {e}");
            }
            WalkState::Continue
        })
    });

    let repos: Vec<PathBuf> = match Arc::try_unwrap(found) {
        Ok(set) => set.into_iter().collect(),
        Err(shared) => shared.iter().map(|p| p.key().clone()).collect(),
    };
    debug!(
        "found {} repositories under {}",
        repos.len(),
        search_path.display()
    );
    repos
}

/// Validates every root, then unions the repositories found under each
///
/// Validation happens before any walking, so a bad argument aborts the run
/// without partial work.
pub fn find_repositories(roots: &[PathBuf]) -> ScanResult<BTreeSet<PathBuf>> {
    let roots = roots
        .iter()
        .map(ensure_directory)
        .collect::<ScanResult<Vec<_>>>()?;

    let mut repos = BTreeSet::new();
    for root in &roots {
        repos.extend(find_repos_from_path(root));
    }
    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_repo(path: &Path) {
        fs::create_dir_all(path.join(GIT_DIR_NAME)).unwrap();
    }

    #[test]
    fn test_finds_nested_repositories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fake_repo(&root.join("a"));
        fake_repo(&root.join("group").join("b"));
        fake_repo(&root.join("group").join("deeper").join("c"));

        let repos = find_repos_from_path(root);
        assert_eq!(repos.len(), 3);
        assert!(repos.contains(&root.join("group").join("b")));
    }

    #[test]
    fn test_root_itself_is_a_repository() {
        let temp_dir = TempDir::new().unwrap();
        fake_repo(temp_dir.path());

        let repos = find_repos_from_path(temp_dir.path());
        assert_eq!(repos, vec![temp_dir.path().to_path_buf()]);
    }

    #[test]
    fn test_node_modules_is_pruned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fake_repo(&root.join("app"));
        fake_repo(&root.join("node_modules").join("left-pad"));
        fake_repo(&root.join("app").join("node_modules").join("nested"));

        let repos = find_repos_from_path(root);
        assert_eq!(repos, vec![root.join("app")]);
    }

    #[test]
    fn test_gitdir_file_counts_as_repository() {
        let temp_dir = TempDir::new().unwrap();
        let worktree = temp_dir.path().join("worktree");
        fs::create_dir(&worktree).unwrap();
        fs::write(worktree.join(GIT_DIR_NAME), "gitdir: /elsewhere/.git/worktrees/wt\n").unwrap();

        let stray = temp_dir.path().join("stray");
        fs::create_dir(&stray).unwrap();
        fs::write(stray.join(GIT_DIR_NAME), "not a pointer\n").unwrap();

        let repos = find_repos_from_path(temp_dir.path());
        assert_eq!(repos, vec![worktree]);
    }

    #[test]
    fn test_git_internals_are_not_searched() {
        let temp_dir = TempDir::new().unwrap();
        let repo = temp_dir.path().join("repo");
        fake_repo(&repo);
        fake_repo(&repo.join(GIT_DIR_NAME).join("modules").join("sub"));

        let repos = find_repos_from_path(temp_dir.path());
        assert_eq!(repos, vec![repo]);
    }

    #[test]
    fn test_overlapping_roots_are_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fake_repo(&root.join("outer").join("inner"));
        fake_repo(&root.join("other"));

        let roots = vec![root.to_path_buf(), root.join("outer")];
        let repos = find_repositories(&roots).unwrap();
        assert_eq!(repos.len(), 2);
    }

    #[test]
    fn test_file_argument_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();

        let err = find_repositories(&[temp_dir.path().to_path_buf(), file.clone()]).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(ref p) if p == &file));
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = ensure_directory(&missing).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }
}
