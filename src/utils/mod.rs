pub(crate) mod fs;

// Public API - utilities used by the report and the CLI
pub use fs::{relative_path, PathFormatter};
