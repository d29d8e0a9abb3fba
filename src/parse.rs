//! Parsers for the structural markers of unified diff text.
//!
//! Two line shapes matter to the engine: the `diff --git a/... b/...`
//! line that introduces a per-file chunk, and the `@@ -old[,count]
//! +new[,count] @@` header that introduces a hunk. Both are recognized
//! here with [`nom`]; a failed parse is an ordinary `Err` that callers
//! treat as "not a marker", never as a fatal condition.

use nom::IResult;
use nom::Parser;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, space1, u32 as line_number};
use nom::combinator::{opt, rest, verify};
use nom::sequence::preceded;

/// Coordinates declared by a `@@ -old[,count] +new[,count] @@` header.
///
/// The counts are parsed so the header is recognized in full, but they
/// are carried as-is and never validated against hunk content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: u32,
    pub old_count: Option<u32>,
    pub new_start: u32,
    pub new_count: Option<u32>,
}

/// Parse a hunk header at the start of a line.
///
/// Trailing text after the closing `@@` (git's function context) is
/// left unconsumed and does not affect the match.
///
/// # Examples
///
/// ```
/// use diff_slicer::parse::{HunkHeader, hunk_header};
///
/// let (_, header) = hunk_header("@@ -10,3 +10,4 @@ fn main() {").unwrap();
/// assert_eq!(
///     header,
///     HunkHeader {
///         old_start: 10,
///         old_count: Some(3),
///         new_start: 10,
///         new_count: Some(4),
///     }
/// );
/// ```
pub fn hunk_header(input: &str) -> IResult<&str, HunkHeader> {
    let (input, _) = tag("@@").parse(input)?;
    let (input, _) = space1(input)?;
    let (input, _) = char('-').parse(input)?;
    let (input, old_start) = line_number(input)?;
    let (input, old_count) = opt(preceded(char(','), line_number)).parse(input)?;
    let (input, _) = space1(input)?;
    let (input, _) = char('+').parse(input)?;
    let (input, new_start) = line_number(input)?;
    let (input, new_count) = opt(preceded(char(','), line_number)).parse(input)?;
    let (input, _) = space1(input)?;
    let (input, _) = tag("@@").parse(input)?;

    Ok((
        input,
        HunkHeader {
            old_start,
            old_count,
            new_start,
            new_count,
        },
    ))
}

/// Extract the `(old, new)` paths from a `diff --git a/... b/...` line.
///
/// The split happens at the first `" b/"` occurrence after the `a/`
/// prefix, with trailing whitespace trimmed off the old path. Paths
/// that themselves contain the literal `" b/"` therefore mis-split;
/// this matches the historical behavior and is deliberately not fixed
/// here.
pub fn file_header_paths(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = tag("diff --git ").parse(input)?;
    let (input, _) = tag("a/").parse(input)?;
    let (input, old) =
        verify(take_until(" b/"), |path: &str| !path.trim_end().is_empty()).parse(input)?;
    let (input, _) = space1(input)?;
    let (input, _) = tag("b/").parse(input)?;
    let (input, new) = verify(rest, |path: &str| !path.is_empty()).parse(input)?;

    Ok((input, (old.trim_end(), new)))
}
