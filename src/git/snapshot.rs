//! Repository state model produced by inspection

use std::path::PathBuf;

/// Status code git uses for untracked files in porcelain output
pub const RAW_UNTRACKED_CODE: &str = "??";
/// Normalized status code for untracked files
pub const UNTRACKED_CODE: &str = "?";

/// One working tree modification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Porcelain status code, with `??` normalized to `?`
    pub kind: String,
    /// Path relative to the repository root
    pub path: String,
}

/// One local branch that carries unsaved work
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    /// Whether an upstream branch is configured
    pub tracked: bool,
    /// Commits on this branch that are not on its upstream
    pub ahead: u32,
    /// `subject (date)` lines for the unpushed commits, newest first
    pub commits: Vec<String>,
}

impl Branch {
    /// A branch is worth reporting when it has no upstream or is ahead of it
    pub fn is_retained(&self) -> bool {
        !self.tracked || self.ahead > 0
    }

    /// Tracked and ahead of its upstream
    pub fn has_unpushed_commits(&self) -> bool {
        self.tracked && self.ahead > 0
    }
}

/// Everything unsaved about a single repository
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoSnapshot {
    pub path: PathBuf,
    pub has_remote: bool,
    pub changes: Vec<Change>,
    pub branches: Vec<Branch>,
}

impl RepoSnapshot {
    /// Returns true if the repository should appear in the report
    ///
    /// A repository without any remote is always reported.
    pub fn is_interesting(&self) -> bool {
        !self.has_remote || !self.changes.is_empty() || !self.branches.is_empty()
    }

    /// Branches that are ahead of something, tracked or not
    pub fn ahead_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| b.ahead > 0)
    }

    /// Tracked branches with commits waiting to be pushed
    pub fn unpushed_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| b.has_unpushed_commits())
    }

    /// Branches without an upstream
    pub fn untracked_branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter().filter(|b| !b.tracked)
    }

    /// Concatenated change codes, e.g. `MM?`
    pub fn change_codes(&self) -> String {
        self.changes.iter().map(|c| c.kind.as_str()).collect()
    }
}
