//! Malformed-declaration errors.
//!
//! Running out of input is not an error (see [`Scan::Incomplete`]); everything
//! here is fatal to the current parse attempt.
//!
//! [`Scan::Incomplete`]: super::Scan::Incomplete

use thiserror::Error;

use super::position::Position;

/// What was wrong with a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedKind {
    /// A scanner was called at an offset that does not start its construct.
    #[error("unexpected call to {0}()")]
    UnexpectedCall(&'static str),
    /// A marked section used a keyword outside the known set.
    #[error("unknown status keyword {0:?} in marked section")]
    UnknownStatusKeyword(String),
    /// `[` inside a declaration kind that cannot carry a subset.
    #[error("unsupported '[' char in {0} declaration")]
    UnsupportedBracket(String),
    /// `[` inside an unrecognized declaration.
    #[error("unexpected '[' char in declaration")]
    UnexpectedBracket,
    /// A character that cannot appear in a declaration.
    #[error("unexpected {0:?} char in declaration")]
    UnexpectedChar(char),
    /// `<` in an internal subset not followed by `!`.
    #[error("unexpected char in internal subset (in {0:?})")]
    UnexpectedSubsetMarkup(String),
    /// `<!NAME` in an internal subset with an unsupported name.
    #[error("unknown declaration {0:?} in internal subset")]
    UnknownSubsetDeclaration(String),
    /// Something other than `>` after the subset's closing `]`.
    #[error("unexpected char after internal subset")]
    UnexpectedAfterSubset,
    /// A stray character in an internal subset.
    #[error("unexpected char {0:?} in internal subset")]
    UnexpectedSubsetChar(char),
    /// `<!ENTITY %` not followed by whitespace.
    #[error("expected whitespace after '%' in entity declaration")]
    ExpectedWhitespace,
    /// A name token was required here. Carries up to 20 characters from the
    /// start of the declaration.
    #[error("expected name token at {0:?}")]
    ExpectedName(String),
}

/// A structural violation in a declaration, with the position it was raised at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({position})")]
pub struct MalformedDeclaration {
    /// What went wrong.
    pub kind: MalformedKind,
    /// Tokenizer position when the error was raised.
    pub position: Position,
}
