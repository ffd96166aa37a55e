//! Loose-object queries via `git cat-file`

use std::path::Path;

use super::git_command;
use crate::error::Result;

/// Object kind (`blob`, `tree`, `commit`, `tag`) for a hash.
pub fn object_kind(repo: &Path, hash: &str) -> Result<String> {
    git_command(repo, &["cat-file", "-t", hash])
}

/// Pretty-printed object content for a hash.
pub fn object_content(repo: &Path, hash: &str) -> Result<String> {
    git_command(repo, &["cat-file", "-p", hash])
}
