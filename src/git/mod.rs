pub mod inspect;
pub mod operations;
pub mod parse;
pub mod snapshot;

// Re-export commonly used items
pub use inspect::{inspect_repository, InspectOptions};
pub use snapshot::{Branch, Change, RepoSnapshot};
