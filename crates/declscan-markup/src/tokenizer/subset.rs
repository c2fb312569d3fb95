//! Scanners for the `[ ... ]` internal subset of a DOCTYPE declaration.
//!
//! Content models, attribute types and entity values are skipped over, not
//! validated; the scanners only find where each declaration ends.

use super::error::MalformedKind;
use super::handler::DeclarationHandler;
use super::kind::DeclarationKind;
use super::patterns;
use super::scanner::{DeclarationTokenizer, char_at, skip_whitespace};
use super::{Scan, ScanResult};

/// Scanner for one `<!NAME ...>` inside a subset. Starts after the name and
/// returns the offset past the closing `>`.
type SubsetScanner<H> = fn(&mut DeclarationTokenizer<H>, &str, usize, usize) -> ScanResult;

impl<H: DeclarationHandler> DeclarationTokenizer<H> {
    /// Scan an internal subset whose body starts at `i`.
    ///
    /// Returns the offset of the `>` that closes the DOCTYPE, leaving it for
    /// the declaration scanner to consume.
    pub(super) fn parse_doctype_subset(
        &mut self,
        buf: &str,
        i: usize,
        decl_start: usize,
    ) -> ScanResult {
        let bytes = buf.as_bytes();
        let mut j = i;
        while let Some(c) = char_at(buf, j) {
            match c {
                '<' => {
                    match bytes.get(j + 1) {
                        None => return Ok(Scan::Incomplete),
                        Some(b'!') => {}
                        Some(_) => {
                            let _ = self.update_position(buf, decl_start, j + 1);
                            let markup = buf[j..].chars().take(2).collect();
                            return self.fail(MalformedKind::UnexpectedSubsetMarkup(markup));
                        }
                    }
                    if j + 4 > buf.len() {
                        return Ok(Scan::Incomplete);
                    }
                    if buf[j..].starts_with("<!--") {
                        j = complete!(self.parse_comment(buf, j, false));
                        continue;
                    }
                    let (name, next) = complete!(self.scan_name(buf, j + 2, decl_start));
                    let Some(scanner) = Self::subset_scanner(&name) else {
                        let _ = self.update_position(buf, decl_start, j + 2);
                        return self.fail(MalformedKind::UnknownSubsetDeclaration(name));
                    };
                    j = complete!(scanner(self, buf, next, decl_start));
                }
                '%' => {
                    // Parameter entity reference: %name; with optional ';'
                    if j + 1 == buf.len() {
                        return Ok(Scan::Incomplete);
                    }
                    let (_, next) = complete!(self.scan_name(buf, j + 1, decl_start));
                    j = next;
                    if bytes.get(j) == Some(&b';') {
                        j += 1;
                    }
                }
                ']' => {
                    j = skip_whitespace(buf, j + 1);
                    return match char_at(buf, j) {
                        Some('>') => Ok(Scan::Complete(j)),
                        Some(_) => {
                            let _ = self.update_position(buf, decl_start, j);
                            self.fail(MalformedKind::UnexpectedAfterSubset)
                        }
                        None => Ok(Scan::Incomplete),
                    };
                }
                c if c.is_whitespace() => j += c.len_utf8(),
                other => {
                    let _ = self.update_position(buf, decl_start, j);
                    return self.fail(MalformedKind::UnexpectedSubsetChar(other));
                }
            }
        }
        Ok(Scan::Incomplete)
    }

    /// The sub-scanner for a subset declaration name, if it is one of
    /// ELEMENT, ATTLIST, ENTITY or NOTATION.
    fn subset_scanner(name: &str) -> Option<SubsetScanner<H>> {
        let scanner: SubsetScanner<H> = match name.parse::<DeclarationKind>().ok()? {
            DeclarationKind::Element => Self::parse_doctype_element,
            DeclarationKind::Attlist => Self::parse_doctype_attlist,
            DeclarationKind::Entity => Self::parse_doctype_entity,
            DeclarationKind::Notation => Self::parse_doctype_notation,
            DeclarationKind::Doctype
            | DeclarationKind::Comment
            | DeclarationKind::MarkedSection => return None,
        };
        Some(scanner)
    }

    /// `<!ELEMENT name content-model>`; the content model is skipped up to `>`.
    fn parse_doctype_element(&mut self, buf: &str, i: usize, decl_start: usize) -> ScanResult {
        let (_, j) = complete!(self.scan_name(buf, i, decl_start));
        Ok(buf[j..]
            .find('>')
            .map_or(Scan::Incomplete, |k| Scan::Complete(j + k + 1)))
    }

    /// `<!ATTLIST element (name type [default] [#keyword])* >`
    fn parse_doctype_attlist(&mut self, buf: &str, i: usize, decl_start: usize) -> ScanResult {
        let (_, mut j) = complete!(self.scan_name(buf, i, decl_start));
        match char_at(buf, j) {
            None => return Ok(Scan::Incomplete),
            Some('>') => return Ok(Scan::Complete(j + 1)),
            Some(_) => {}
        }
        loop {
            // Attribute name.
            let (_, next) = complete!(self.scan_name(buf, j, decl_start));
            j = next;

            // Type: an enumerated group or a name.
            let Some(c) = char_at(buf, j) else {
                return Ok(Scan::Incomplete);
            };
            if c == '(' {
                let Some(close) = buf[j..].find(')') else {
                    return Ok(Scan::Incomplete);
                };
                j = skip_whitespace(buf, j + close + 1);
                if j == buf.len() {
                    return Ok(Scan::Incomplete);
                }
            } else {
                let (_, next) = complete!(self.scan_name(buf, j, decl_start));
                j = next;
            }

            // Optional default value.
            let Some(mut c) = char_at(buf, j) else {
                return Ok(Scan::Incomplete);
            };
            if c == '\'' || c == '"' {
                let Some(end) = patterns::match_string_literal(buf, j) else {
                    return Ok(Scan::Incomplete);
                };
                j = end;
                let Some(next) = char_at(buf, j) else {
                    return Ok(Scan::Incomplete);
                };
                c = next;
            }

            // Optional #REQUIRED, #IMPLIED, #FIXED ...
            if c == '#' {
                if j + 1 == buf.len() {
                    return Ok(Scan::Incomplete);
                }
                let (_, next) = complete!(self.scan_name(buf, j + 1, decl_start));
                j = next;
                let Some(next) = char_at(buf, j) else {
                    return Ok(Scan::Incomplete);
                };
                c = next;
            }

            if c == '>' {
                return Ok(Scan::Complete(j + 1));
            }
        }
    }

    /// `<!NOTATION name (literal | name)* >`
    fn parse_doctype_notation(&mut self, buf: &str, i: usize, decl_start: usize) -> ScanResult {
        let (_, j) = complete!(self.scan_name(buf, i, decl_start));
        self.scan_literals_and_names(buf, j, decl_start)
    }

    /// `<!ENTITY [% ] name (literal | name)* >`
    fn parse_doctype_entity(&mut self, buf: &str, i: usize, decl_start: usize) -> ScanResult {
        let mut j = i;
        if buf.as_bytes().get(i) == Some(&b'%') {
            j = skip_whitespace(buf, i + 1);
            if j == buf.len() {
                return Ok(Scan::Incomplete);
            }
            if j == i + 1 {
                let _ = self.update_position(buf, decl_start, j);
                return self.fail(MalformedKind::ExpectedWhitespace);
            }
        }
        let (_, j) = complete!(self.scan_name(buf, j, decl_start));
        self.scan_literals_and_names(buf, j, decl_start)
    }

    /// Skip quoted literals and name tokens up to and including `>`.
    fn scan_literals_and_names(
        &mut self,
        buf: &str,
        mut j: usize,
        decl_start: usize,
    ) -> ScanResult {
        loop {
            match char_at(buf, j) {
                None => return Ok(Scan::Incomplete),
                Some('>') => return Ok(Scan::Complete(j + 1)),
                Some('\'' | '"') => match patterns::match_string_literal(buf, j) {
                    Some(end) => j = end,
                    None => return Ok(Scan::Incomplete),
                },
                Some(_) => {
                    let (_, next) = complete!(self.scan_name(buf, j, decl_start));
                    j = next;
                }
            }
        }
    }
}
