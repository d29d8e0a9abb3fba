//! Splitting a multi-file diff into per-file patches.

use super::file::FileDiff;

/// A complete multi-file diff, split into per-file patches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub files: Vec<FileDiff>,
}

/// A chunk dropped during splitting because its `diff --git` line did
/// not yield a usable path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChunk {
    /// Position of the chunk in the raw input, counting every chunk.
    pub chunk_index: usize,
    /// The chunk's first line, for reporting.
    pub first_line: String,
}

impl Diff {
    /// Split raw diff text into per-file patches, silently dropping
    /// malformed chunks. Text before the first `diff --git` line is
    /// ignored.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_with_diagnostics(text).0
    }

    /// Like [`Diff::parse`], additionally reporting dropped chunks.
    ///
    /// The primary result is identical to [`Diff::parse`]; the side
    /// list exists for callers that want to surface what was skipped.
    #[must_use]
    pub fn parse_with_diagnostics(text: &str) -> (Self, Vec<SkippedChunk>) {
        let mut files = Vec::new();
        let mut skipped = Vec::new();
        let starts = chunk_starts(text);

        for (index, &start) in starts.iter().enumerate() {
            let end = starts.get(index + 1).copied().unwrap_or(text.len());
            let chunk = &text[start..end];

            match FileDiff::parse(chunk) {
                Some(file) => files.push(file),
                None => skipped.push(SkippedChunk {
                    chunk_index: index,
                    first_line: chunk.lines().next().unwrap_or_default().to_string(),
                }),
            }
        }

        (Diff { files }, skipped)
    }

    /// Linear path lookup over the split output.
    #[must_use]
    pub fn file_patch(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.patch.as_str())
    }
}

/// Byte offsets of every line beginning `diff --git `.
fn chunk_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    if text.starts_with("diff --git ") {
        starts.push(0);
    }

    let mut from = 0;
    while let Some(position) = text[from..].find("\ndiff --git ") {
        let line_start = from + position + 1;
        starts.push(line_start);
        from = line_start;
    }

    starts
}

impl std::fmt::Display for Diff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for file in &self.files {
            write!(f, "{}", file.patch)?;
        }
        Ok(())
    }
}
