pub mod file;
pub mod full;
pub mod group;
pub mod hunk;

pub use file::FileDiff;
pub use full::{Diff, SkippedChunk};
pub use group::ChangeGroup;
pub use hunk::{Hunk, parse_hunks};

/// Format a parsed diff for user display with explicit line numbers.
pub fn format_diff(diff: &Diff) -> String {
    let mut result = String::new();

    for file in &diff.files {
        result.push_str(&file.path);
        result.push_str(":\n");

        for hunk in parse_hunks(&file.patch) {
            let mut old_line = hunk.old_start_line;
            let mut new_line = hunk.start_line;

            for line in hunk.lines.iter().skip(1) {
                if let Some(content) = line.strip_prefix('+') {
                    result.push_str(&format!("  +{}:\t{}\n", new_line, content));
                    new_line += 1;
                } else if let Some(content) = line.strip_prefix('-') {
                    result.push_str(&format!("  -{}:\t{}\n", old_line, content));
                    old_line += 1;
                } else if line.starts_with(' ') {
                    old_line += 1;
                    new_line += 1;
                }
            }

            result.push('\n');
        }
    }

    // Remove trailing newline if present
    if result.ends_with("\n\n") {
        result.pop();
    }

    result
}
