//! Whitespace measurement and trimming over blocks of sample lines.
//!
//! Only the space character counts as indentation. Tabs are left alone.

use std::path::Path;

/// Number of leading spaces in `line`.
pub fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ').count()
}

/// Smallest leading-space count across `lines`, or 0 for an empty block.
///
/// Blank lines count as zero indentation.
pub fn min_whitespace<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|l| leading_whitespace(l.as_ref()))
        .min()
        .unwrap_or(0)
}

/// Strip at most `max` leading spaces from `line`.
pub fn trim_leading_whitespace(line: &str, max: usize) -> &str {
    let n = leading_whitespace(line).min(max);
    &line[n..]
}

/// Shift every line left by `max_trim` spaces and join with `\n`.
/// No trailing newline is added.
pub fn format_sample_text<S: AsRef<str>>(lines: &[S], max_trim: usize) -> String {
    lines
        .iter()
        .map(|l| trim_leading_whitespace(l.as_ref(), max_trim))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Dedent a block by its own minimum indentation.
pub fn dedent<S: AsRef<str>>(lines: &[S]) -> String {
    format_sample_text(lines, min_whitespace(lines))
}

/// Whether `path`'s file name ends in `.<extension>` after a non-empty stem.
/// A bare dotfile such as `.java` does not match `java`.
pub fn file_matches_extension(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    match name.rfind('.') {
        Some(i) if i > 0 => &name[i + 1..] == extension,
        _ => false,
    }
}
