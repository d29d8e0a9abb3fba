//! Per-file hunk splitting.

use super::group::{self, ChangeGroup};
use crate::parse::{self, HunkHeader};

/// A single hunk from a unified diff, with line-number bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// The full `@@ ... @@` header line; always equals `lines[0]`.
    pub header: String,
    /// New-file start line declared by the header.
    pub start_line: u32,
    /// Old-file start line declared by the header.
    pub old_start_line: u32,
    /// New-file counter value recorded at the hunk's last `+` line.
    pub last_addition_line: Option<u32>,
    /// Old-file counter value recorded at the hunk's last `-` line.
    pub last_deletion_line: Option<u32>,
    /// Maximal contiguous runs of change lines, in index order.
    pub change_groups: Vec<ChangeGroup>,
    /// Raw lines, header first.
    pub lines: Vec<String>,
}

impl Hunk {
    /// The hunk's text, header included.
    #[must_use]
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of raw lines, header included.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Split one file's patch text into hunks.
///
/// A line parsing as a hunk header starts a new hunk; every following
/// line up to the next header (or end of input) lands in that hunk's
/// line buffer verbatim. Lines before the first header (the `diff
/// --git`/`index`/`---`/`+++` block) are skipped. Empty or
/// whitespace-only input yields an empty list; declared counts in the
/// header are accepted without validation.
#[must_use]
pub fn parse_hunks(patch: &str) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut current: Option<(HunkHeader, Vec<String>)> = None;

    for line in patch.lines() {
        if let Ok((_, header)) = parse::hunk_header(line) {
            if let Some((done, lines)) = current.take() {
                hunks.push(finish_hunk(done, lines));
            }
            current = Some((header, vec![line.to_string()]));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line.to_string());
        }
    }

    if let Some((done, lines)) = current.take() {
        hunks.push(finish_hunk(done, lines));
    }

    hunks
}

fn finish_hunk(header: HunkHeader, lines: Vec<String>) -> Hunk {
    let analysis = group::analyze(&lines, header.old_start, header.new_start);

    Hunk {
        header: lines[0].clone(),
        start_line: header.new_start,
        old_start_line: header.old_start,
        last_addition_line: analysis.last_addition_line,
        last_deletion_line: analysis.last_deletion_line,
        change_groups: analysis.groups,
        lines,
    }
}
