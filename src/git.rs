//! # Git Module
//!
//! Reads the current branch straight from `.git/HEAD` rather than linking a
//! repository library; the statusline only needs the symbolic ref name.

use std::fs;
use std::path::Path;

/// Branch name from `<dir>/.git/HEAD`, or `None` when the directory is not
/// a repository, the ref is unreadable, or HEAD is detached (raw commit id
/// instead of a `ref:` line).
pub fn read_git_branch(dir: &Path) -> Option<String> {
    let head = fs::read_to_string(dir.join(".git").join("HEAD")).ok()?;
    head.trim()
        .strip_prefix("ref: refs/heads/")
        .filter(|b| !b.is_empty())
        .map(str::to_owned)
}
