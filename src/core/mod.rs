//! Core infrastructure for repository processing
//!
//! This module provides:
//! - Repository discovery and input validation
//! - Concurrent inspection of discovered repositories
//! - Progress bar management
//! - Configuration constants

pub mod config;
pub mod discovery;
pub mod progress;
pub mod scan;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
