//! Per-file chunks of a multi-file diff.

use crate::parse;

/// One file's slice of a multi-file diff.
///
/// `patch` keeps the chunk byte-exact, `diff --git` header included, so
/// per-file patches concatenate back into the well-formed subset of the
/// original input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Destination (`b/`) path from the `diff --git` line.
    pub path: String,
    /// The full chunk text: file header plus hunks.
    pub patch: String,
}

impl FileDiff {
    /// Parse one `diff --git` chunk.
    ///
    /// Returns `None` when the first line does not carry extractable
    /// `a/... b/...` paths. Chunks without hunks (binary files, mode
    /// changes) are kept as opaque patches.
    #[must_use]
    pub fn parse(chunk: &str) -> Option<Self> {
        let first_line = chunk.lines().next()?;
        let (_, (_, path)) = parse::file_header_paths(first_line).ok()?;

        Some(FileDiff {
            path: path.to_string(),
            patch: chunk.to_string(),
        })
    }
}
