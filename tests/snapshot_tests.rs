//! Integration tests for the snapshot readers

mod common;

use std::thread;
use std::time::Duration;

use common::TestRepo;
use gitview_engine::{is_git_repo, snapshot, EngineError};

// Filesystem modification times need to differ between writes for the
// ordering assertions; ext4 and tmpfs both give nanosecond stamps, so a
// short pause is enough.
const MTIME_GAP: Duration = Duration::from_millis(50);

#[test]
fn test_is_git_repo() {
    let repo = TestRepo::new();
    assert!(!is_git_repo(repo.path()));

    repo.init_git();
    assert!(is_git_repo(repo.path()));
}

#[test]
fn test_list_files_skips_git_dir_and_swap_files() {
    let repo = TestRepo::new();
    repo.init_git()
        .add_file("a.txt", "alpha\n")
        .add_file("src/b.txt", "beta\n")
        .add_file("src/.b.txt.swp", "swap\n")
        .commit("initial");

    let files = snapshot::list_files(repo.path()).unwrap();

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"a.txt"));
    assert!(names.contains(&"b.txt"));
    assert!(!names.iter().any(|n| n.ends_with(".swp")));
    for f in &files {
        assert!(
            !f.path.components().any(|c| c.as_os_str() == ".git"),
            "{} lies under .git",
            f.path.display()
        );
    }
}

#[test]
fn test_list_files_reads_content_eagerly() {
    let repo = TestRepo::new();
    repo.add_file("a.txt", "alpha\n");

    let files = snapshot::list_files(repo.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].content, "alpha\n");
}

#[test]
fn test_list_files_sorted_by_mod_time_ascending() {
    let repo = TestRepo::new();
    repo.add_file("a.txt", "first\n");
    thread::sleep(MTIME_GAP);
    repo.add_file("b.txt", "second\n");

    let files = snapshot::list_files(repo.path()).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.txt", "b.txt"]);

    // Rewriting a.txt moves it to the end of the listing.
    thread::sleep(MTIME_GAP);
    repo.add_file("a.txt", "first, updated\n");

    let files = snapshot::list_files(repo.path()).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["b.txt", "a.txt"]);
}

#[test]
fn test_list_files_unreadable_root_is_fatal() {
    let err = snapshot::list_files("/nonexistent/gitview/test/root".as_ref()).unwrap_err();
    assert!(matches!(err, EngineError::RepoUnreadable { .. }));
}

#[test]
fn test_list_refs_empty_before_first_commit() {
    let repo = TestRepo::new();
    repo.init_git();

    let refs = snapshot::list_refs(repo.path()).unwrap();
    assert!(refs.is_empty());
}

#[test]
fn test_list_refs_missing_heads_dir_is_empty() {
    let repo = TestRepo::new();
    // Not a git repository at all.
    let refs = snapshot::list_refs(repo.path()).unwrap();
    assert!(refs.is_empty());
}

#[test]
fn test_list_refs_after_commit() {
    let repo = TestRepo::new();
    repo.init_git().add_file("a.txt", "alpha\n").commit("initial");

    let refs = snapshot::list_refs(repo.path()).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].name, "main");

    let head_sha = repo.git_stdout(&["rev-parse", "HEAD"]);
    assert_eq!(refs[0].content.trim(), head_sha);
}

#[test]
fn test_read_head() {
    let repo = TestRepo::new();
    repo.init_git();

    let head = snapshot::read_head(repo.path()).unwrap().unwrap();
    assert_eq!(head.name, "HEAD");
    assert!(head.content.contains("refs/heads/main"));
}

#[test]
fn test_read_head_absent() {
    let repo = TestRepo::new();
    let head = snapshot::read_head(repo.path()).unwrap();
    assert!(head.is_none());
}

#[test]
fn test_list_objects_reconstructs_hashes() {
    let repo = TestRepo::new();
    repo.init_git().add_file("a.txt", "alpha\n").commit("initial");

    let objects = snapshot::list_objects(repo.path()).unwrap();
    // At least the blob, the tree and the commit.
    assert!(objects.len() >= 3);

    for o in &objects {
        assert_eq!(o.hash.len(), 40, "hash {:?} is not 40 characters", o.hash);
        assert!(["blob", "tree", "commit", "tag"].contains(&o.kind.as_str()));
    }

    let blob_sha = repo.git_stdout(&["hash-object", "a.txt"]);
    let blob = objects
        .iter()
        .find(|o| o.hash == blob_sha)
        .expect("blob for a.txt not listed");
    assert_eq!(blob.kind, "blob");
    assert_eq!(blob.content, "alpha");
}

#[test]
fn test_list_objects_missing_store_is_fatal() {
    let repo = TestRepo::new();
    // No .git at all: the object store root is unreadable.
    let err = snapshot::list_objects(repo.path()).unwrap_err();
    assert!(matches!(err, EngineError::RepoUnreadable { .. }));
}

#[test]
fn test_index_entries_for_staged_empty_file() {
    let repo = TestRepo::new();
    repo.init_git().add_file("README.md", "").add_all();

    let entries = snapshot::index_entries(repo.path()).unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.mode, "100644");
    // The well-known hash of the empty blob.
    assert_eq!(entry.hash, "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
    assert_eq!(entry.slot, 0);
    assert_eq!(entry.filename, "README.md");
}

#[test]
fn test_index_entries_empty_when_nothing_staged() {
    let repo = TestRepo::new();
    repo.init_git();

    let entries = snapshot::index_entries(repo.path()).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_index_snapshot() {
    let repo = TestRepo::new();
    repo.init_git();

    // Nothing has been staged: no index file yet.
    assert!(snapshot::index_snapshot(repo.path()).unwrap().is_none());

    repo.add_file("a.txt", "alpha\n").add_all();

    let index = snapshot::index_snapshot(repo.path()).unwrap().unwrap();
    assert_eq!(index.name, "index");
    assert!(index.content.contains("a.txt"));
    assert!(index.path.ends_with(".git/index"));
}
