//! Parsers for git's textual output
//!
//! All parsers are lenient: blank or malformed lines are skipped and missing
//! fields fall back to "not tracked" / zero instead of producing errors.

use super::snapshot::{Change, RAW_UNTRACKED_CODE, UNTRACKED_CODE};

const AHEAD_MARKER: &str = "ahead ";

/// One line of `for-each-ref` branch output
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchLine {
    pub name: String,
    pub upstream: Option<String>,
    pub tracking: Option<String>,
}

/// Parses one `git status --porcelain` line into a change
///
/// The line is trimmed, split on spaces with empty tokens dropped; the first
/// token is the status code and the second the path.
pub fn parse_status_line(line: &str) -> Option<Change> {
    let mut tokens = line.trim().split(' ').filter(|t| !t.is_empty());
    let code = tokens.next()?;
    let path = tokens.next().unwrap_or_default();

    Some(Change {
        kind: code.replace(RAW_UNTRACKED_CODE, UNTRACKED_CODE),
        path: path.to_string(),
    })
}

/// Parses full `git status --porcelain` output, in git's order
pub fn parse_status(output: &str) -> Vec<Change> {
    output.lines().filter_map(parse_status_line).collect()
}

/// Parses one `name upstream tracking` line
///
/// The name is required; the upstream and the tracking annotation (the rest
/// of the line, e.g. `[ahead 2, behind 1]`) are optional.
pub fn parse_branch_line(line: &str) -> Option<BranchLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    };

    let (upstream, tracking) = match rest.split_once(char::is_whitespace) {
        Some((upstream, tracking)) => (upstream, tracking.trim_start()),
        None => (rest, ""),
    };

    Some(BranchLine {
        name: name.to_string(),
        upstream: non_empty(upstream),
        tracking: non_empty(tracking),
    })
}

/// Parses every non-blank line of branch state output
pub fn parse_branch_lines(output: &str) -> Vec<BranchLine> {
    output.lines().filter_map(parse_branch_line).collect()
}

/// Extracts N from the first `ahead N` in a tracking annotation
///
/// Any `behind` clause is ignored. Missing or unparsable counts are 0.
pub fn parse_ahead(tracking: Option<&str>) -> u32 {
    let Some(tracking) = tracking else {
        return 0;
    };
    let Some(start) = tracking.find(AHEAD_MARKER) else {
        return 0;
    };

    let digits: String = tracking[start + AHEAD_MARKER.len()..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Splits `git log` output into trimmed, non-empty commit summaries
pub fn parse_commit_summaries(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
