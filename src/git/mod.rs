//! Git subprocess integration
//!
//! All git object-model semantics are delegated to the external `git`
//! binary invoked as a subprocess. The engine never parses git's on-disk
//! formats itself; it only consumes git's text output.

mod cat_file;
mod ls_files;

pub use cat_file::{object_content, object_kind};
pub use ls_files::{parse_stage_line, stage_entries, stage_listing, IndexEntry};

use std::path::Path;
use std::process::Command;

use crate::error::{EngineError, Result};

/// Run a git command with the repository root as working directory and
/// return stdout as UTF-8 text with one trailing newline stripped.
///
/// A spawn failure or non-zero exit is a [`EngineError::Git`] for the
/// calling operation.
pub fn git_command(repo: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .map_err(|e| EngineError::Git {
            message: format!("failed to execute git: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(EngineError::Git {
            message: format!("git {} failed: {}", args.join(" "), stderr.trim()),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    Ok(stdout
        .strip_suffix('\n')
        .map(str::to_owned)
        .unwrap_or(stdout))
}

/// Check whether `repo` is inside a git work tree.
pub fn is_git_repo(repo: &Path) -> bool {
    git_command(repo, &["rev-parse", "--is-inside-work-tree"])
        .map(|out| out == "true")
        .unwrap_or(false)
}
