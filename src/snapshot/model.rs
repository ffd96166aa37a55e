//! Snapshot record types

use std::path::PathBuf;
use std::time::SystemTime;

use serde::{Serialize, Serializer};

/// One regular file captured by a snapshot walk.
///
/// The same shape serves tracked files, branch-head refs, the HEAD pointer
/// and the staging-index pseudo-file. Records are created fresh on every
/// snapshot call and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RepoFile {
    /// Absolute path of the file
    pub path: PathBuf,
    /// File name without directory components
    pub name: String,
    /// Full file body, read eagerly
    pub content: String,
    /// Last modification time
    #[serde(serialize_with = "rfc3339")]
    pub mod_time: SystemTime,
}

/// One loose object from the two-level fan-out store.
///
/// `kind` and `content` come from `git cat-file`, never from the raw bytes
/// on disk.
#[derive(Debug, Clone, Serialize)]
pub struct LooseObject {
    /// 40-character object hash: fan-out directory name + filename
    pub hash: String,
    /// Object kind reported by `cat-file -t` (`blob`, `tree`, `commit`, `tag`)
    pub kind: String,
    /// Pretty-printed content from `cat-file -p`
    pub content: String,
    /// Last modification time of the object file
    #[serde(serialize_with = "rfc3339")]
    pub mod_time: SystemTime,
}

/// Stable sort ascending by modification time. Entries with equal
/// timestamps keep their original order.
pub(crate) fn sort_by_mod_time<T, F>(items: &mut [T], mod_time: F)
where
    F: FnMut(&T) -> SystemTime,
{
    items.sort_by_key(mod_time);
}

fn rfc3339<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    let datetime: chrono::DateTime<chrono::Utc> = (*time).into();
    serializer.serialize_str(&datetime.to_rfc3339())
}
