//! Compiled patterns used by the scanners.
//!
//! The anchored patterns are matched against the buffer tail starting at an
//! offset; the closers are searched for anywhere after it. All helpers return
//! absolute offsets into the buffer.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// A declaration name: a letter, then letters, digits, `-`, `_` or `.`,
/// then any trailing whitespace.
static DECL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z][-_.a-zA-Z0-9]*\s*").expect("declaration name pattern")
});

/// A single- or double-quoted literal plus trailing whitespace.
static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:'[^']*'|"[^"]*")\s*"#).expect("string literal pattern")
});

/// Two or more dashes, optional whitespace, `>`.
static COMMENT_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}\s*>").expect("comment close pattern"));

/// `]]>` with optional whitespace between the tokens.
static MARKED_SECTION_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\s*\]\s*>").expect("marked section close pattern"));

/// `]>` with optional whitespace, used by MS-Office conditional sections.
static MS_MARKED_SECTION_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\s*>").expect("MS marked section close pattern"));

/// End offset of a declaration name (including trailing whitespace) at `at`.
pub(super) fn match_decl_name(buf: &str, at: usize) -> Option<usize> {
    anchored(&DECL_NAME, buf, at)
}

/// End offset of a quoted literal (including trailing whitespace) at `at`.
pub(super) fn match_string_literal(buf: &str, at: usize) -> Option<usize> {
    anchored(&STRING_LITERAL, buf, at)
}

/// Span of the first comment closer at or after `from`.
pub(super) fn find_comment_close(buf: &str, from: usize) -> Option<Range<usize>> {
    search(&COMMENT_CLOSE, buf, from)
}

/// Span of the first `]]>` closer at or after `from`.
pub(super) fn find_marked_section_close(buf: &str, from: usize) -> Option<Range<usize>> {
    search(&MARKED_SECTION_CLOSE, buf, from)
}

/// Span of the first `]>` closer at or after `from`.
pub(super) fn find_ms_marked_section_close(buf: &str, from: usize) -> Option<Range<usize>> {
    search(&MS_MARKED_SECTION_CLOSE, buf, from)
}

fn anchored(pattern: &Regex, buf: &str, at: usize) -> Option<usize> {
    let tail = buf.get(at..)?;
    pattern.find(tail).map(|m| at + m.end())
}

fn search(pattern: &Regex, buf: &str, from: usize) -> Option<Range<usize>> {
    if from > buf.len() {
        return None;
    }
    pattern.find_at(buf, from).map(|m| m.range())
}
