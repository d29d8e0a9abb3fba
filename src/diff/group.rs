//! Change-group detection over a hunk's lines.
//!
//! A change group is a maximal run of `+`/`-` lines uninterrupted by a
//! context line. The walk keeps independent old-file and new-file line
//! counters so every group carries the coordinates needed to slice it
//! out into a standalone patch later.

/// A maximal contiguous run of added/removed lines within one hunk.
///
/// `start_index`/`end_index` point into the owning hunk's `lines`
/// buffer (the header at index 0 never participates in grouping).
/// `old_start_line`/`new_start_line` are the running counters' values
/// at the moment the group opened, before the opening line's own
/// increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeGroup {
    pub start_index: usize,
    pub end_index: usize,
    pub old_start_line: u32,
    pub new_start_line: u32,
    pub end_addition_line: Option<u32>,
    pub end_deletion_line: Option<u32>,
}

impl ChangeGroup {
    fn open_at(index: usize, old_line: u32, new_line: u32) -> Self {
        ChangeGroup {
            start_index: index,
            end_index: index,
            old_start_line: old_line,
            new_start_line: new_line,
            end_addition_line: None,
            end_deletion_line: None,
        }
    }
}

/// Result of the line-number walk over one hunk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HunkAnalysis {
    /// New-file counter value recorded at the last `+` line, if any.
    pub last_addition_line: Option<u32>,
    /// Old-file counter value recorded at the last `-` line, if any.
    pub last_deletion_line: Option<u32>,
    pub groups: Vec<ChangeGroup>,
}

/// Walk a hunk's lines once, skipping the header at index 0.
///
/// Counter rules: additions advance the new-file counter and record the
/// advanced value; deletions record the old-file counter and then
/// advance it; context lines advance both. Any other line (the
/// `\ No newline at end of file` marker included) closes an open group
/// without moving either counter.
pub fn analyze(lines: &[String], old_start: u32, new_start: u32) -> HunkAnalysis {
    let mut old_line = old_start;
    let mut new_line = new_start;
    let mut analysis = HunkAnalysis::default();
    let mut open: Option<ChangeGroup> = None;

    for (index, line) in lines.iter().enumerate().skip(1) {
        if line.starts_with('+') {
            let group = open.get_or_insert_with(|| ChangeGroup::open_at(index, old_line, new_line));
            new_line += 1;
            group.end_index = index;
            group.end_addition_line = Some(new_line);
            analysis.last_addition_line = Some(new_line);
        } else if line.starts_with('-') {
            let group = open.get_or_insert_with(|| ChangeGroup::open_at(index, old_line, new_line));
            group.end_index = index;
            group.end_deletion_line = Some(old_line);
            analysis.last_deletion_line = Some(old_line);
            old_line += 1;
        } else if line.starts_with(' ') {
            if let Some(group) = open.take() {
                analysis.groups.push(group);
            }
            old_line += 1;
            new_line += 1;
        } else if let Some(group) = open.take() {
            analysis.groups.push(group);
        }
    }

    if let Some(group) = open.take() {
        analysis.groups.push(group);
    }

    analysis
}
