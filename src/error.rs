//! Error types for input validation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole run
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("`{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to resolve `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Alias for Result using ScanError
pub type ScanResult<T> = Result<T, ScanError>;
