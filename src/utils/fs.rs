//! File system path display utilities

use std::path::{Path, PathBuf};

/// Computes `target` relative to `base`, walking up with `..` where needed
///
/// Both paths are expected to be absolute. Equal paths yield an empty path.
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base: Vec<_> = base.components().collect();
    let target: Vec<_> = target.components().collect();
    let common = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &target[common..] {
        relative.push(component);
    }
    relative
}

/// Formats repository paths for display
#[derive(Clone, Debug)]
pub struct PathFormatter {
    cwd: PathBuf,
    absolute: bool,
}

impl PathFormatter {
    /// `cwd` is the invocation directory that relative paths are based on
    pub fn new(cwd: impl Into<PathBuf>, absolute: bool) -> Self {
        Self {
            cwd: cwd.into(),
            absolute,
        }
    }

    /// Formats a path either unchanged or relative to the invocation directory
    ///
    /// Relative paths always start with `.`; the invocation directory itself
    /// is shown as `./ (<name>)`.
    pub fn format(&self, path: &Path) -> String {
        if self.absolute {
            return path.display().to_string();
        }

        let relative = relative_path(&self.cwd, path);
        if relative.as_os_str().is_empty() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            return format!("./ ({name})");
        }

        let relative = relative.display().to_string();
        if relative.starts_with('.') {
            relative
        } else {
            format!("./{relative}")
        }
    }
}
