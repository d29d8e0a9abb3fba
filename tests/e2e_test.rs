use git2::{DiffFormat, DiffOptions, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use diff_slicer::{Diff, change_group_patch, parse_hunks};

/// Test fixture for a git repository
struct Fixture {
    dir: TempDir,
    repo: Repository,
}

impl Fixture {
    /// Create a new empty repo with deterministic config
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("Failed to init repo");

        // Deterministic config
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        Self { dir, repo }
    }

    /// Write a file to the repo
    fn write_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Stage a file
    fn stage_file(&self, name: &str) {
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    /// Create a commit
    fn commit(&self, message: &str) {
        let sig = Signature::new(
            "Test User",
            "test@example.com",
            &git2::Time::new(1234567890, 0),
        )
        .unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        if self.repo.head().is_ok() {
            let parent = self.repo.head().unwrap().peel_to_commit().unwrap();
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
                .unwrap();
        } else {
            self.repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap();
        }
    }

    /// Render the HEAD-to-workdir diff as unified patch text
    fn workdir_diff(&self) -> String {
        let head = self.repo.head().unwrap().peel_to_tree().unwrap();
        let mut opts = DiffOptions::new();
        opts.context_lines(1);
        let diff = self
            .repo
            .diff_tree_to_workdir(Some(&head), Some(&mut opts))
            .unwrap();

        let mut text = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            if matches!(line.origin(), '+' | '-' | ' ') {
                text.push(line.origin());
            }
            text.push_str(std::str::from_utf8(line.content()).unwrap());
            true
        })
        .unwrap();
        text
    }
}

#[test]
fn mid_file_replacement_round_trips() {
    let fixture = Fixture::new();
    fixture.write_file("numbers.txt", "one\ntwo\nthree\nfour\nfive\n");
    fixture.stage_file("numbers.txt");
    fixture.commit("initial");

    fixture.write_file("numbers.txt", "one\ntwo\ntrois\nfour\nfive\n");
    let text = fixture.workdir_diff();

    let diff = Diff::parse(&text);
    assert_eq!(diff.files.len(), 1);
    assert_eq!(diff.files[0].path, "numbers.txt");

    let hunks = parse_hunks(&diff.files[0].patch);
    assert_eq!(hunks.len(), 1);
    let hunk = &hunks[0];
    assert_eq!(hunk.old_start_line, 2);
    assert_eq!(hunk.start_line, 2);
    assert_eq!(hunk.change_groups.len(), 1);

    let group = &hunk.change_groups[0];
    assert_eq!(group.old_start_line, 3);
    assert_eq!(group.new_start_line, 3);
    assert_eq!(group.end_deletion_line, Some(3));
    assert_eq!(group.end_addition_line, Some(4));

    let patch = change_group_patch(&diff, "numbers.txt", 0, 0).unwrap();
    assert!(patch.contains("@@ -2,2 +2,2 @@"));
    assert!(patch.contains("-three\n+trois\n"));
    assert!(patch.ends_with(" four\n"));
}

#[test]
fn multi_file_diff_preserves_order_and_lookup() {
    let fixture = Fixture::new();
    fixture.write_file("a.txt", "alpha\n");
    fixture.write_file("b.txt", "beta\n");
    fixture.stage_file("a.txt");
    fixture.stage_file("b.txt");
    fixture.commit("initial");

    fixture.write_file("a.txt", "alpha\nalpha two\n");
    fixture.write_file("b.txt", "beta prime\n");
    let text = fixture.workdir_diff();

    let diff = Diff::parse(&text);
    let paths: Vec<&str> = diff.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, ["a.txt", "b.txt"]);

    let b_patch = diff.file_patch("b.txt").unwrap();
    assert!(b_patch.starts_with("diff --git a/b.txt b/b.txt\n"));
    assert!(b_patch.contains("-beta\n+beta prime\n"));
    assert!(diff.file_patch("c.txt").is_none());

    // Concatenating the per-file patches reproduces the original text.
    assert_eq!(diff.to_string(), text);
}

#[test]
fn missing_trailing_newline_keeps_its_marker() {
    let fixture = Fixture::new();
    fixture.write_file("tail.txt", "alpha\nbeta");
    fixture.stage_file("tail.txt");
    fixture.commit("initial");

    fixture.write_file("tail.txt", "alpha\ngamma");
    let text = fixture.workdir_diff();
    assert!(text.contains("\\ No newline at end of file"));

    let diff = Diff::parse(&text);
    let hunks = parse_hunks(&diff.files[0].patch);
    assert_eq!(hunks.len(), 1);
    let hunk = &hunks[0];

    // The deletion and the addition are split by the marker line.
    assert_eq!(hunk.change_groups.len(), 2);
    assert_eq!(hunk.change_groups[0].end_deletion_line, Some(2));
    assert_eq!(hunk.change_groups[1].end_addition_line, Some(3));

    let patch = change_group_patch(&diff, "tail.txt", 0, 0).unwrap();
    assert!(patch.contains("@@ -1,2 +1,1 @@"));
    assert!(patch.ends_with("\\ No newline at end of file\n"));
}
