//! Parse unified diffs and slice them into standalone patches.
//!
//! The parsing layer ([`Diff::parse`]) splits raw `git diff` output into
//! per-file chunks, indexes every hunk, and annotates each hunk with its
//! change groups (maximal runs of added/removed lines). The
//! reconstruction layer builds minimal standalone patches for a single
//! hunk or a single change group, suitable for `git apply` or any diff
//! viewer.
//!
//! Parsing never fails: malformed chunks are dropped (optionally
//! reported through [`Diff::parse_with_diagnostics`]) and unknown lines
//! inside hunks are retained verbatim. Errors only surface at this
//! facade, when a requested file, hunk, or group does not exist.
//!
//! # Example
//!
//! ```
//! use diff_slicer::{change_group_patch, Diff};
//!
//! let text = "diff --git a/foo.txt b/foo.txt\n\
//! --- a/foo.txt\n\
//! +++ b/foo.txt\n\
//! @@ -1,2 +1,2 @@\n\
//! \x20unchanged\n\
//! -old\n\
//! +new\n";
//!
//! let diff = Diff::parse(text);
//! let patch = change_group_patch(&diff, "foo.txt", 0, 0)?;
//! assert_eq!(patch, text);
//! # Ok::<(), diff_slicer::DiffSlicerError>(())
//! ```

pub mod parse;

mod diff;
mod patch;

pub use diff::{format_diff, parse_hunks, ChangeGroup, Diff, FileDiff, Hunk, SkippedChunk};
pub use patch::{create_change_group_patch, create_hunk_patch};

use error_set::error_set;

error_set! {
    /// Errors surfaced when addressing a file, hunk, or change group
    /// that the parsed diff does not contain.
    DiffSlicerError := {
        /// Requested path matched no file chunk in the diff
        #[display("No diff for file '{path}'")]
        UnknownFile { path: String },
        /// Hunk index past the end of the file's hunk list
        #[display("File '{path}' has no hunk {index}")]
        HunkOutOfRange { path: String, index: usize },
        /// Change group index past the end of the hunk's group list
        #[display("Hunk {hunk} of '{path}' has no change group {index}")]
        GroupOutOfRange { path: String, hunk: usize, index: usize },
    }
}

/// Build a standalone patch for one hunk of one file in `diff`.
pub fn hunk_patch(diff: &Diff, path: &str, index: usize) -> Result<String, DiffSlicerError> {
    let patch = diff
        .file_patch(path)
        .ok_or_else(|| DiffSlicerError::UnknownFile {
            path: path.to_string(),
        })?;

    let hunks = parse_hunks(patch);
    let hunk = hunks.get(index).ok_or_else(|| DiffSlicerError::HunkOutOfRange {
        path: path.to_string(),
        index,
    })?;

    Ok(create_hunk_patch(path, hunk, patch))
}

/// Build a minimal standalone patch for one change group of one hunk.
pub fn change_group_patch(
    diff: &Diff,
    path: &str,
    hunk_index: usize,
    group_index: usize,
) -> Result<String, DiffSlicerError> {
    let patch = diff
        .file_patch(path)
        .ok_or_else(|| DiffSlicerError::UnknownFile {
            path: path.to_string(),
        })?;

    let hunks = parse_hunks(patch);
    let hunk = hunks
        .get(hunk_index)
        .ok_or_else(|| DiffSlicerError::HunkOutOfRange {
            path: path.to_string(),
            index: hunk_index,
        })?;

    let group = hunk
        .change_groups
        .get(group_index)
        .ok_or_else(|| DiffSlicerError::GroupOutOfRange {
            path: path.to_string(),
            hunk: hunk_index,
            index: group_index,
        })?;

    Ok(create_change_group_patch(path, hunk, group, patch))
}
