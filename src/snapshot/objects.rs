//! Loose-object snapshot reader

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{EngineError, Result};
use crate::git;
use crate::paths;

use super::model::{sort_by_mod_time, LooseObject};

/// List every loose object under `.git/objects`, sorted by modification
/// time ascending.
///
/// Only two-hex-character fan-out directories are descended into; `pack/`
/// and `info/` hold no loose objects. Each hash is reconstructed as the
/// fan-out directory name plus the filename, then classified and
/// materialized with `git cat-file`. A cat-file failure fails the whole
/// listing.
pub fn list_objects(root: &Path) -> Result<Vec<LooseObject>> {
    let dir = paths::objects_dir(root);
    let entries = fs::read_dir(&dir).map_err(|e| EngineError::RepoUnreadable {
        path: format!("{}: {}", dir.display(), e),
    })?;

    let mut objects = Vec::new();
    for entry in entries.flatten() {
        let fan_out = entry.path();
        let Some(prefix) = fan_out.file_name().and_then(|n| n.to_str()).map(str::to_owned)
        else {
            continue;
        };
        if !is_fan_out_dir(&prefix) || !fan_out.is_dir() {
            continue;
        }

        let Ok(children) = fs::read_dir(&fan_out) else {
            continue;
        };
        for child in children.flatten() {
            let path = child.path();
            let Some(rest) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Ok(meta) = fs::symlink_metadata(&path) else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }

            let hash = format!("{}{}", prefix, rest);
            let kind = git::object_kind(root, &hash)?;
            let content = git::object_content(root, &hash)?;
            objects.push(LooseObject {
                hash,
                kind,
                content,
                mod_time: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            });
        }
    }

    sort_by_mod_time(&mut objects, |o| o.mod_time);
    Ok(objects)
}

fn is_fan_out_dir(name: &str) -> bool {
    name.len() == 2 && name.chars().all(|c| c.is_ascii_hexdigit())
}
