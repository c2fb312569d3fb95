//! Top-level declaration scanners.
//!
//! Each call is a self-contained scan from a caller-supplied offset into a
//! borrowed buffer. Nothing but the position survives between calls.

use super::error::{MalformedDeclaration, MalformedKind};
use super::handler::DeclarationHandler;
use super::kind::{DeclarationKind, MarkedSectionKeyword};
use super::patterns;
use super::position::Position;
use super::{Scan, ScanResult};

/// Declaration names whose `[` is reported as unsupported rather than unexpected.
const BRACKETLESS_DECLARATIONS: [&str; 4] = ["attlist", "linktype", "link", "element"];

/// Number of characters from the declaration start quoted in name errors.
const NAME_ERROR_CONTEXT: usize = 20;

/// Scans `<!...>` declarations and reports them to a [`DeclarationHandler`].
///
/// The tokenizer never owns the input: every scanner takes the buffer and a
/// start offset and returns the offset just past what it recognized.
pub struct DeclarationTokenizer<H> {
    handler: H,
    position: Position,
    /// Characters skipped inside non-DOCTYPE declarations.
    extra_name_chars: String,
}

impl<H: DeclarationHandler> DeclarationTokenizer<H> {
    /// Create a tokenizer reporting to `handler`.
    #[must_use]
    pub fn new(handler: H) -> Self {
        Self::with_extra_name_chars(handler, String::new())
    }

    /// Create a tokenizer that additionally skips any of `chars` between the
    /// tokens of a non-DOCTYPE declaration.
    #[must_use]
    pub fn with_extra_name_chars(handler: H, chars: impl Into<String>) -> Self {
        Self {
            handler,
            position: Position::START,
            extra_name_chars: chars.into(),
        }
    }

    /// Current line/column position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Return the position to line 1, column 0.
    pub const fn reset(&mut self) {
        self.position = Position::START;
    }

    /// Borrow the handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutably borrow the handler.
    pub const fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the tokenizer and return its handler.
    #[must_use]
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Advance the position over `buf[i..j]` and return `j`.
    ///
    /// Does nothing when `j <= i`. `j` is clamped to the buffer length; both
    /// offsets must fall on char boundaries.
    pub fn update_position(&mut self, buf: &str, i: usize, j: usize) -> usize {
        debug_assert!(
            buf.is_char_boundary(i.min(buf.len())) && buf.is_char_boundary(j.min(buf.len())),
            "update_position offsets {i}..{j} must fall on char boundaries"
        );
        if j > i {
            let end = j.min(buf.len());
            if let Some(span) = buf.get(i.min(end)..end) {
                self.position.advance(span);
            }
        }
        j
    }

    /// Scan the declaration starting with `<!` at `i`.
    ///
    /// Dispatches on what follows `<!`: `>` is an empty declaration, `--` a
    /// comment, `[` a marked section, and anything else a named declaration.
    /// A lone `-` or the end of the buffer means the construct can't be
    /// classified yet.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDeclaration`] if the declaration is structurally invalid.
    pub fn parse_declaration(&mut self, buf: &str, i: usize) -> ScanResult {
        if !starts_with_at(buf, i, "<!") {
            return self.fail(MalformedKind::UnexpectedCall("parse_declaration"));
        }
        let bytes = buf.as_bytes();
        let mut j = i + 2;
        match bytes.get(j) {
            Some(b'>') => return Ok(Scan::Complete(j + 1)),
            None => return Ok(Scan::Incomplete),
            Some(b'-') => {
                if bytes.get(j + 1) == Some(&b'-') {
                    return self.parse_comment(buf, i, true);
                }
                return Ok(Scan::Incomplete);
            }
            Some(b'[') => return self.parse_marked_section(buf, i, true),
            Some(_) => {}
        }

        let (decl_type, next) = complete!(self.scan_name(buf, j, i));
        j = next;
        let is_doctype = decl_type.parse::<DeclarationKind>() == Ok(DeclarationKind::Doctype);

        while let Some(c) = char_at(buf, j) {
            match c {
                '>' => {
                    let data = &buf[i + 2..j];
                    if is_doctype {
                        self.handler.handle_decl(data);
                    } else {
                        self.handler.unknown_decl(data);
                    }
                    return Ok(Scan::Complete(j + 1));
                }
                '"' | '\'' => match patterns::match_string_literal(buf, j) {
                    Some(end) => j = end,
                    None => return Ok(Scan::Incomplete),
                },
                c if c.is_ascii_alphabetic() => {
                    let (_, next) = complete!(self.scan_name(buf, j, i));
                    j = next;
                }
                c if self.is_extra_name_char(c, is_doctype) => j += c.len_utf8(),
                '[' => {
                    if is_doctype {
                        j = complete!(self.parse_doctype_subset(buf, j + 1, i));
                    } else if BRACKETLESS_DECLARATIONS.contains(&decl_type.as_str()) {
                        return self.fail(MalformedKind::UnsupportedBracket(decl_type));
                    } else {
                        return self.fail(MalformedKind::UnexpectedBracket);
                    }
                }
                other => return self.fail(MalformedKind::UnexpectedChar(other)),
            }
        }
        Ok(Scan::Incomplete)
    }

    /// Scan the comment starting with `<!--` at `i`.
    ///
    /// When `report` is set, the text between the opener and the closer goes
    /// to [`DeclarationHandler::handle_comment`].
    ///
    /// # Errors
    ///
    /// Returns [`MalformedKind::UnexpectedCall`] if `buf` has no `<!--` at `i`.
    pub fn parse_comment(&mut self, buf: &str, i: usize, report: bool) -> ScanResult {
        if !starts_with_at(buf, i, "<!--") {
            return self.fail(MalformedKind::UnexpectedCall("parse_comment"));
        }
        let Some(close) = patterns::find_comment_close(buf, i + 4) else {
            return Ok(Scan::Incomplete);
        };
        if report {
            self.handler.handle_comment(&buf[i + 4..close.start]);
        }
        Ok(Scan::Complete(close.end))
    }

    /// Scan the marked section starting with `<![` at `i`.
    ///
    /// The status keyword picks the closer: `]]>` for TEMP, CDATA, IGNORE,
    /// INCLUDE and RCDATA, `]>` for the MS-Office IF, ELSE and ENDIF. When
    /// `report` is set, the text between `<![` and the closer goes to
    /// [`DeclarationHandler::unknown_decl`].
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDeclaration`] for an unknown status keyword, before
    /// any closer is searched for.
    pub fn parse_marked_section(&mut self, buf: &str, i: usize, report: bool) -> ScanResult {
        if !starts_with_at(buf, i, "<![") {
            return self.fail(MalformedKind::UnexpectedCall("parse_marked_section"));
        }
        let (name, j) = complete!(self.scan_name(buf, i + 3, i));
        let Ok(keyword) = name.parse::<MarkedSectionKeyword>() else {
            let raw = buf[i + 3..j].to_string();
            return self.fail(MalformedKind::UnknownStatusKeyword(raw));
        };
        let Some(close) = keyword.find_close(buf, i + 3) else {
            return Ok(Scan::Incomplete);
        };
        if report {
            self.handler.unknown_decl(&buf[i + 3..close.start]);
        }
        Ok(Scan::Complete(close.end))
    }

    /// Scan a name token at `i`, returning it lower-cased together with the
    /// offset past its trailing whitespace.
    ///
    /// A name that runs into the end of the buffer is [`Scan::Incomplete`]:
    /// more input could extend it.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedKind::ExpectedName`] if no name starts at `i`. The
    /// position is first advanced from `decl_start` to `i`.
    pub fn scan_name(
        &mut self,
        buf: &str,
        i: usize,
        decl_start: usize,
    ) -> ScanResult<(String, usize)> {
        if i >= buf.len() {
            return Ok(Scan::Incomplete);
        }
        match patterns::match_decl_name(buf, i) {
            Some(end) if end == buf.len() => Ok(Scan::Incomplete),
            Some(end) => {
                let name = buf[i..end].trim_end().to_ascii_lowercase();
                Ok(Scan::Complete((name, end)))
            }
            None => {
                let _ = self.update_position(buf, decl_start, i);
                let context = buf
                    .get(decl_start..)
                    .unwrap_or_default()
                    .chars()
                    .take(NAME_ERROR_CONTEXT)
                    .collect();
                self.fail(MalformedKind::ExpectedName(context))
            }
        }
    }

    /// Report `kind` to the handler and return it as an error.
    pub(super) fn fail<T>(&mut self, kind: MalformedKind) -> Result<T, MalformedDeclaration> {
        let error = MalformedDeclaration {
            kind,
            position: self.position,
        };
        self.handler.error(&error);
        Err(error)
    }

    fn is_extra_name_char(&self, c: char, is_doctype: bool) -> bool {
        !is_doctype && self.extra_name_chars.contains(c)
    }
}

/// The character starting at byte offset `i`, if any.
pub(super) fn char_at(buf: &str, i: usize) -> Option<char> {
    buf.get(i..)?.chars().next()
}

/// Offset of the first non-whitespace character at or after `i`.
pub(super) fn skip_whitespace(buf: &str, i: usize) -> usize {
    buf.get(i..).map_or(i, |tail| buf.len() - tail.trim_start().len())
}

fn starts_with_at(buf: &str, i: usize, prefix: &str) -> bool {
    buf.get(i..).is_some_and(|tail| tail.starts_with(prefix))
}
