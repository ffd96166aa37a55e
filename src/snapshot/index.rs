//! Staging-index snapshot readers

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::error::Result;
use crate::git::{self, IndexEntry};
use crate::paths;

use super::model::RepoFile;

/// Parsed staged entries for the repository at `root`.
pub fn index_entries(root: &Path) -> Result<Vec<IndexEntry>> {
    git::stage_entries(root)
}

/// The staging index as a pseudo-file for raw display: path and
/// modification time of `.git/index`, content from `git ls-files --stage`.
///
/// `Ok(None)` when no index file exists yet.
pub fn index_snapshot(root: &Path) -> Result<Option<RepoFile>> {
    let path = paths::index_file(root);
    let meta = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(_) => return Ok(None),
    };

    let content = git::stage_listing(root)?;
    Ok(Some(RepoFile {
        path,
        name: "index".to_string(),
        content,
        mod_time: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
    }))
}
