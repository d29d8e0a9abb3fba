//! Reconstruction of minimal standalone patches.
//!
//! Hunks do not retain their file-level header (the `diff --git`/
//! `index`/`---`/`+++` block), so both operations take the original
//! full patch along to recover it; when the original has no header to
//! offer, a minimal one is synthesized instead of failing.

use crate::diff::{ChangeGroup, Hunk};
use crate::parse;

/// Build a standalone single-hunk patch for one file.
///
/// The output re-parses into a structurally identical hunk and is
/// consumable by any standard diff viewer.
pub fn create_hunk_patch(file_path: &str, hunk: &Hunk, full_patch: &str) -> String {
    format!("{}\n{}", file_header(file_path, full_patch), hunk.content())
}

/// Build a minimal standalone patch containing a single change group.
///
/// The group's lines are framed by at most one leading and one trailing
/// context line from the owning hunk, and the `@@` header is recomputed
/// from the group's captured coordinates: start lines shift back by one
/// when a leading context line is present, and the declared counts
/// cover the leading context plus the group's own lines. A
/// `\ No newline at end of file` marker directly following the last
/// included hunk line is carried over verbatim.
pub fn create_change_group_patch(
    file_path: &str,
    hunk: &Hunk,
    group: &ChangeGroup,
    full_patch: &str,
) -> String {
    let header = file_header(file_path, full_patch);

    let leading_context = hunk.lines[1..group.start_index]
        .iter()
        .rev()
        .find(|line| line.starts_with(' '));

    let mut lines: Vec<&str> = Vec::new();
    lines.extend(leading_context.map(String::as_str));
    for line in &hunk.lines[group.start_index..=group.end_index] {
        if line.starts_with(' ') || line.starts_with('+') || line.starts_with('-') {
            lines.push(line);
        }
    }

    let hunk_header = recompute_hunk_header(group, leading_context.is_some(), &lines);

    let mut last_included = group.end_index;
    if let Some(offset) = hunk.lines[group.end_index + 1..]
        .iter()
        .position(|line| line.starts_with(' '))
    {
        let index = group.end_index + 1 + offset;
        lines.push(&hunk.lines[index]);
        last_included = index;
    }

    if let Some(marker) = hunk
        .lines
        .get(last_included + 1)
        .filter(|line| line.starts_with('\\'))
    {
        lines.push(marker);
    }

    format!("{}\n{}\n{}\n", header, hunk_header, lines.join("\n"))
}

/// Recompute `@@` coordinates for a sliced-out group.
///
/// Called before the trailing context line is appended: the declared
/// counts describe the leading context and the group's lines only.
fn recompute_hunk_header(group: &ChangeGroup, has_leading_context: bool, lines: &[&str]) -> String {
    let mut context = 0u32;
    let mut additions = 0u32;
    let mut deletions = 0u32;

    for line in lines {
        if line.starts_with(' ') {
            context += 1;
        } else if line.starts_with('+') {
            additions += 1;
        } else if line.starts_with('-') {
            deletions += 1;
        }
    }

    let mut old_start = group.old_start_line;
    let mut new_start = group.new_start_line;
    if has_leading_context {
        // The context line occupies one earlier position in both files.
        old_start = old_start.saturating_sub(1);
        new_start = new_start.saturating_sub(1);
    }

    format!(
        "@@ -{},{} +{},{} @@",
        old_start,
        context + deletions,
        new_start,
        context + additions
    )
}

/// The file-level header for a standalone patch: everything before the
/// first hunk header of `full_patch`, or a synthesized minimal header
/// when nothing usable is there.
fn file_header(file_path: &str, full_patch: &str) -> String {
    extract_file_header(full_patch)
        .filter(|header| !header.trim().is_empty())
        .map(|header| header.trim_end_matches('\n').to_string())
        .unwrap_or_else(|| synthesize_file_header(file_path))
}

fn extract_file_header(full_patch: &str) -> Option<&str> {
    let mut offset = 0;
    for line in full_patch.lines() {
        if parse::hunk_header(line).is_ok() {
            return Some(&full_patch[..offset]);
        }
        offset += line.len() + 1;
    }
    None
}

fn synthesize_file_header(file_path: &str) -> String {
    format!("diff --git a/{p} b/{p}\n--- a/{p}\n+++ b/{p}", p = file_path)
}
