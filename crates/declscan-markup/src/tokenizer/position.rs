//! Line/column position of the scan cursor.

use std::fmt;

use serde::Serialize;

/// A `(line, column)` pair. Lines start at 1, columns at 0; columns count
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 0-based column, in characters from the start of the line.
    pub column: usize,
}

impl Position {
    /// The position at the start of a document.
    pub const START: Self = Self { line: 1, column: 0 };

    /// Advance over `span`, counting its newlines.
    ///
    /// With no newline the column grows by the span's length; otherwise the
    /// column becomes the distance from the last newline to the end of the span.
    pub fn advance(&mut self, span: &str) {
        match span.rfind('\n') {
            Some(last) => {
                self.line += span.matches('\n').count();
                self.column = span[last + 1..].chars().count();
            }
            None => self.column += span.chars().count(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
