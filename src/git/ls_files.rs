//! Staging-index listing via `git ls-files --stage`
//!
//! The staging index is consumed only through git's listing output, never
//! from its binary layout on disk.

use std::path::Path;

use serde::Serialize;

use super::git_command;
use crate::error::{EngineError, Result};

/// One staged entry, parsed from a `git ls-files --stage` line.
///
/// Line format: `<mode> <hash> <slot><TAB><filename>`, with mode, hash and
/// slot space-separated before the tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// File mode, e.g. `100644`
    pub mode: String,
    /// 40-character object hash
    pub hash: String,
    /// Merge-conflict slot, 0 outside a conflict
    pub slot: u32,
    /// Path of the staged file, relative to the repository root
    pub filename: String,
}

/// Raw staged listing with the trailing newline trimmed.
pub fn stage_listing(repo: &Path) -> Result<String> {
    git_command(repo, &["ls-files", "--stage"])
}

/// Parsed staged entries.
///
/// A malformed line fails the whole call with [`EngineError::IndexParse`].
pub fn stage_entries(repo: &Path) -> Result<Vec<IndexEntry>> {
    let listing = stage_listing(repo)?;
    listing.lines().map(parse_stage_line).collect()
}

/// Parse one `ls-files --stage` line.
pub fn parse_stage_line(line: &str) -> Result<IndexEntry> {
    let malformed = || EngineError::IndexParse {
        line: line.to_string(),
    };

    let (meta, filename) = line.split_once('\t').ok_or_else(malformed)?;
    if filename.is_empty() {
        return Err(malformed());
    }

    let mut fields = meta.split(' ');
    let mode = fields.next().filter(|m| !m.is_empty()).ok_or_else(malformed)?;
    let hash = fields.next().ok_or_else(malformed)?;
    let slot = fields.next().ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    let slot: u32 = slot.parse().map_err(|_| malformed())?;

    Ok(IndexEntry {
        mode: mode.to_string(),
        hash: hash.to_string(),
        slot,
        filename: filename.to_string(),
    })
}
