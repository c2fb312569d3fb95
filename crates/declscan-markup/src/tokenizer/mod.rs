//! Declaration tokenizer module.
//!
//! Recognizes `<!...>` constructs in a borrowed buffer. Every scan either
//! completes with the offset just past the construct, reports that the buffer
//! ended too early ([`Scan::Incomplete`]), or fails with a
//! [`MalformedDeclaration`].

/// Unwrap a [`ScanResult`], returning `Ok(Scan::Incomplete)` from the
/// enclosing function when the inner scan ran out of input.
macro_rules! complete {
    ($scan:expr) => {
        match $scan? {
            $crate::tokenizer::Scan::Complete(value) => value,
            $crate::tokenizer::Scan::Incomplete => {
                return Ok($crate::tokenizer::Scan::Incomplete);
            }
        }
    };
}

/// Malformed-declaration error types.
pub mod error;
/// Callback interface implemented by the embedding parser.
pub mod handler;
/// Declaration kinds and marked-section keywords.
pub mod kind;
/// Compiled pattern singletons shared by all scanners.
mod patterns;
/// Line/column tracking.
pub mod position;
/// Top-level declaration, comment and marked-section scanners.
pub mod scanner;
/// DOCTYPE internal subset scanners.
mod subset;

pub use error::{MalformedDeclaration, MalformedKind};
pub use handler::DeclarationHandler;
pub use kind::{DeclarationKind, MarkedSectionKeyword};
pub use position::Position;
pub use scanner::DeclarationTokenizer;

/// Outcome of a scan that did not hit a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan<T = usize> {
    /// The construct was fully recognized. For offsets, this is the index just
    /// past its last character.
    Complete(T),
    /// A valid prefix was seen but the buffer ended before the construct
    /// closed. Retry from the same offset once more input is available.
    Incomplete,
}

/// Result of every scanner: a [`Scan`] or a fatal syntax error.
pub type ScanResult<T = usize> = Result<Scan<T>, MalformedDeclaration>;
