//! Tracked-file and HEAD snapshot readers

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{EngineError, Result};
use crate::paths::{self, GIT_DIR, SWAP_SUFFIX};

use super::model::{sort_by_mod_time, RepoFile};

/// List every regular file under `root`, sorted by modification time
/// ascending.
///
/// The `.git` directory is skipped without descending into it, and names
/// ending in `.swp` are hidden. Per-entry walk errors are skipped; an
/// unreadable root fails the whole call with [`EngineError::RepoUnreadable`].
pub fn list_files(root: &Path) -> Result<Vec<RepoFile>> {
    let entries = fs::read_dir(root).map_err(|e| EngineError::RepoUnreadable {
        path: format!("{}: {}", root.display(), e),
    })?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        visit(entry.path(), &mut files);
    }

    sort_by_mod_time(&mut files, |f| f.mod_time);
    Ok(files)
}

fn visit(path: PathBuf, files: &mut Vec<RepoFile>) {
    let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
        return;
    };
    // Entries that vanish or fail to stat mid-walk are skipped.
    let Ok(meta) = fs::symlink_metadata(&path) else {
        return;
    };

    if meta.is_dir() {
        if name == GIT_DIR {
            return;
        }
        let Ok(entries) = fs::read_dir(&path) else {
            return;
        };
        for entry in entries.flatten() {
            visit(entry.path(), files);
        }
    } else if meta.is_file() {
        if name.ends_with(SWAP_SUFFIX) {
            return;
        }
        files.push(read_repo_file(path, name, &meta));
    }
}

/// Read the single HEAD pointer file. `Ok(None)` when it does not exist.
pub fn read_head(root: &Path) -> Result<Option<RepoFile>> {
    let path = paths::head_file(root);
    let meta = match fs::metadata(&path) {
        Ok(meta) => meta,
        Err(_) => return Ok(None),
    };
    Ok(Some(read_repo_file(path, "HEAD".to_string(), &meta)))
}

/// Build a [`RepoFile`] record for a regular file. An unreadable body
/// yields empty content rather than failing the walk.
pub(crate) fn read_repo_file(path: PathBuf, name: String, meta: &fs::Metadata) -> RepoFile {
    let content = fs::read(&path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();
    let mod_time = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);

    RepoFile {
        path,
        name,
        content,
        mod_time,
    }
}
