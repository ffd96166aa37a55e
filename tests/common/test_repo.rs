//! TestRepo builder for integration tests
//!
//! Creates temporary repositories driven by the real `git` binary, matching
//! how the engine itself talks to git.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Builder for creating temporary test repositories
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty test repository (not yet `git init`-ed)
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the test repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content, creating parent directories
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Initialize as a git repository with a deterministic default branch
    pub fn init_git(&self) -> &Self {
        self.git(&["init", "-b", "main"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test User"]);
        self
    }

    /// Stage everything
    pub fn add_all(&self) -> &Self {
        self.git(&["add", "-A"]);
        self
    }

    /// Create a git commit with all files
    pub fn commit(&self, message: &str) -> &Self {
        self.add_all();
        self.git(&["commit", "-m", message]);
        self
    }

    /// Run a git command in the repository and return its output
    pub fn git(&self, args: &[&str]) -> Output {
        let output = Command::new("git")
            .current_dir(self.path())
            .args(args)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Run a git command and return trimmed stdout
    pub fn git_stdout(&self, args: &[&str]) -> String {
        let output = self.git(args);
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
