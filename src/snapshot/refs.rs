//! Branch-head ref snapshot reader

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::paths;

use super::files::read_repo_file;
use super::model::{sort_by_mod_time, RepoFile};

/// List every branch-head ref file under `.git/refs/heads`, sorted by
/// modification time ascending.
///
/// Branch names may contain slashes, so the walk recurses. A missing heads
/// directory yields an empty listing, not a failure.
pub fn list_refs(root: &Path) -> Result<Vec<RepoFile>> {
    let heads = paths::heads_dir(root);
    let entries = match fs::read_dir(&heads) {
        Ok(entries) => entries,
        Err(_) => return Ok(Vec::new()),
    };

    let mut refs = Vec::new();
    for entry in entries.flatten() {
        visit(entry.path(), &mut refs);
    }

    sort_by_mod_time(&mut refs, |f| f.mod_time);
    Ok(refs)
}

fn visit(path: PathBuf, refs: &mut Vec<RepoFile>) {
    let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_owned) else {
        return;
    };
    let Ok(meta) = fs::symlink_metadata(&path) else {
        return;
    };

    if meta.is_dir() {
        let Ok(entries) = fs::read_dir(&path) else {
            return;
        };
        for entry in entries.flatten() {
            visit(entry.path(), refs);
        }
    } else if meta.is_file() {
        refs.push(read_repo_file(path, name, &meta));
    }
}
