//! Read-only git queries
//!
//! Every function takes the repository root explicitly and runs git with that
//! directory as its working directory. Nothing here changes repository state
//! except `fetch_all`, which only updates remote-tracking refs.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

// Git command arguments
const GIT_REMOTE_ARGS: &[&str] = &["remote"];
const GIT_FETCH_ALL_ARGS: &[&str] = &["fetch", "--all", "--quiet"];
const GIT_STATUS_PORCELAIN_ARGS: &[&str] = &["status", "--porcelain"];
const GIT_BRANCH_STATE_ARGS: &[&str] = &[
    "for-each-ref",
    "--format=%(refname:short) %(upstream:short) %(upstream:track)",
    "refs/heads/",
];
const GIT_LOG_FORMAT_ARGS: &[&str] = &["--pretty=format:%s (%ad)", "--date=short"];

// Concurrent fetches must fail instead of prompting for credentials
const GIT_TERMINAL_PROMPT_VAR: &str = "GIT_TERMINAL_PROMPT";

/// Builds a git command for `path` that never prompts on the terminal
fn git_command(path: &Path, args: &[&str]) -> Command {
    let mut command = Command::new("git");
    command
        .args(args)
        .current_dir(path)
        .env(GIT_TERMINAL_PROMPT_VAR, "0")
        .stdin(Stdio::null());
    command
}

/// Runs a git command in the specified directory
/// Returns (success, stdout, stderr)
///
/// Output is not trimmed; porcelain formats are whitespace-sensitive.
pub async fn run_git(path: &Path, args: &[&str]) -> Result<(bool, String, String)> {
    debug!("git {} (in {})", args.join(" "), path.display());

    let output = git_command(path, args)
        .output()
        .await
        .context("failed to run git")?;

    Ok((
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    ))
}

/// Runs a git command and returns its stdout, failing on a non-zero exit
///
/// The error message is git's own stderr when it printed one.
pub async fn git_output(path: &Path, args: &[&str]) -> Result<String> {
    let (success, stdout, stderr) = run_git(path, args).await?;
    if !success {
        let stderr = stderr.trim();
        if stderr.is_empty() {
            anyhow::bail!("git {} exited with an error", args.join(" "));
        }
        anyhow::bail!("{stderr}");
    }
    Ok(stdout)
}

/// Returns true if the repository has at least one configured remote
pub async fn has_remote(path: &Path) -> Result<bool> {
    let remotes = git_output(path, GIT_REMOTE_ARGS)
        .await
        .context("failed to list remotes")?;
    Ok(!remotes.trim().is_empty())
}

/// Fetches all remotes quietly so tracking counts reflect the remote tips
pub async fn fetch_all(path: &Path) -> Result<()> {
    git_output(path, GIT_FETCH_ALL_ARGS)
        .await
        .context("failed to fetch remotes")?;
    Ok(())
}

/// Gets the short-format working tree status
pub async fn status_porcelain(path: &Path) -> Result<String> {
    git_output(path, GIT_STATUS_PORCELAIN_ARGS)
        .await
        .context("failed to read working tree status")
}

/// Lists every local branch as `name upstream tracking`, one per line
pub async fn branch_states(path: &Path) -> Result<String> {
    git_output(path, GIT_BRANCH_STATE_ARGS)
        .await
        .context("failed to list branches")
}

/// Lists commits on `branch` that are not on `upstream`, newest first,
/// one `subject (date)` line per commit
pub async fn unpushed_commits(path: &Path, branch: &str, upstream: &str) -> Result<String> {
    let range = format!("{upstream}..refs/heads/{branch}");
    let mut args = vec!["log", range.as_str()];
    args.extend_from_slice(GIT_LOG_FORMAT_ARGS);

    git_output(path, &args)
        .await
        .with_context(|| format!("failed to list unpushed commits on {branch}"))
}
