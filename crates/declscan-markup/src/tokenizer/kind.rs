//! Declaration kinds and marked-section status keywords.

use std::ops::Range;

use strum_macros::{Display, EnumString};

use super::patterns;

/// The kind of a `<!...>` construct. Determines which sub-scanner runs.
///
/// Parses from the lower-cased declaration name (`"doctype"`, `"entity"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DeclarationKind {
    /// `<!DOCTYPE ...>`
    Doctype,
    /// `<!-- ... -->`
    Comment,
    /// `<![KEYWORD[ ... ]]>`
    #[strum(serialize = "marked-section")]
    MarkedSection,
    /// `<!ENTITY ...>`
    Entity,
    /// `<!ELEMENT ...>`
    Element,
    /// `<!ATTLIST ...>`
    Attlist,
    /// `<!NOTATION ...>`
    Notation,
}

/// Status keyword of a marked section, e.g. the `CDATA` in `<![CDATA[...]]>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MarkedSectionKeyword {
    /// `TEMP`
    Temp,
    /// `CDATA`
    Cdata,
    /// `IGNORE`
    Ignore,
    /// `INCLUDE`
    Include,
    /// `RCDATA`
    Rcdata,
    /// MS-Office conditional `<![if ...]>`
    If,
    /// MS-Office conditional `<![else]>`
    Else,
    /// MS-Office conditional `<![endif]>`
    Endif,
}

impl MarkedSectionKeyword {
    /// Whether this keyword uses the MS-Office `]>` closer instead of `]]>`.
    #[must_use]
    pub const fn is_ms_office(self) -> bool {
        matches!(self, Self::If | Self::Else | Self::Endif)
    }

    /// Find the closer for a section with this keyword, searching from `from`.
    pub(crate) fn find_close(self, buf: &str, from: usize) -> Option<Range<usize>> {
        if self.is_ms_office() {
            patterns::find_ms_marked_section_close(buf, from)
        } else {
            patterns::find_marked_section_close(buf, from)
        }
    }
}
