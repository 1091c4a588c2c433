//! Progress bar management

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::config::{PROGRESS_MESSAGE, PROGRESS_TEMPLATE};

const PROGRESS_TICK_MILLIS: u64 = 100;

/// Creates a progress style configuration
pub(crate) fn create_progress_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner().template(PROGRESS_TEMPLATE)?)
}

/// Creates the transient progress bar shown while repositories are inspected
///
/// Draws on stderr and stays invisible when stderr is not a terminal.
pub fn create_progress_bar(total_repos: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_repos as u64);
    pb.set_style(create_progress_style()?);
    pb.set_message(PROGRESS_MESSAGE);
    pb.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MILLIS));
    Ok(pb)
}
