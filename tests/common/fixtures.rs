//! Test fixtures and builders

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git::{
    add_git_remote, create_bare_remote, create_test_commit, git, push_with_upstream,
    setup_git_repo,
};

/// A working repository, plus its bare remote when one was requested
///
/// Both live inside one temporary directory that is removed on drop.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    pub remote: Option<PathBuf>,
}

impl TestRepo {
    /// Get the path to the working repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or overwrite a file without committing it
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.path().join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Write `name` with the message as its content and commit it, without pushing
    pub fn commit_file(&self, name: &str, message: &str) -> Result<()> {
        create_test_commit(self.path(), name, message, message)
    }

    /// Create a local branch at HEAD without an upstream
    pub fn create_branch(&self, name: &str) -> Result<()> {
        git(self.path(), &["branch", name])?;
        Ok(())
    }
}

/// Builder for creating test repositories
pub struct TestRepoBuilder {
    name: String,
    with_remote: bool,
}

impl TestRepoBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            with_remote: false,
        }
    }

    /// Add a bare `origin` and push `main` to it with tracking set up
    pub fn with_remote(mut self) -> Self {
        self.with_remote = true;
        self
    }

    pub fn build(self) -> Result<TestRepo> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(&self.name);
        std::fs::create_dir(&path)?;
        setup_git_repo(&path)?;

        create_test_commit(&path, "README.md", "# Test Repo", "Initial commit")?;

        let remote = if self.with_remote {
            let remote_path = temp_dir.path().join("origin.git");
            create_bare_remote(&remote_path)?;
            add_git_remote(&path, "origin", &remote_path.to_string_lossy())?;
            push_with_upstream(&path, "origin", "main")?;
            Some(remote_path)
        } else {
            None
        };

        Ok(TestRepo {
            temp_dir,
            path,
            remote,
        })
    }
}
