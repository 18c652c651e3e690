//! Phase 1: Comment stripping.
//!
//! CDL has two comment forms:
//! - `C ` to end of line (the marker is the capital letter C followed by a
//!   space, anywhere in a physical line)
//! - `--[[` ... `]]` blocks, which may span newlines
//!
//! Both are removed before any line is interpreted. The `C ` marker is a
//! plain textual marker, not a lexical token: it also fires inside quoted
//! strings. That is a documented limitation of the language, kept as-is.

/// Strip line and block comments from raw source text.
///
/// Line comments are removed first, per physical line, then block comments
/// are spliced out up to the nearest following `]]`. The splice does not
/// reinsert a newline, so text before `--[[` and after `]]` ends up on one
/// line. An unterminated `--[[` is left untouched; stripping never fails.
pub fn strip_comments(source: &str) -> String {
    let mut text: String = source
        .lines()
        .map(|line| match line.find("C ") {
            Some(at) => &line[..at],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n");

    while let Some(start) = text.find("--[[") {
        match text[start..].find("]]") {
            Some(offset) => text.replace_range(start..start + offset + 2, ""),
            None => break,
        }
    }

    text
}
