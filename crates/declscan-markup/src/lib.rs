//! SGML/HTML declaration tokenizer for the declscan workspace.
//!
//! # Scope
//!
//! This crate implements:
//! - **Declaration Tokenizer** ([`DeclarationTokenizer`])
//!   - Comments, `<!DOCTYPE ...>` and other `<!NAME ...>` declarations
//!   - Marked sections, including the MS-Office `<![if ...]>` form
//!   - DOCTYPE internal subsets (ELEMENT, ATTLIST, ENTITY, NOTATION,
//!     parameter-entity references)
//!   - Line/column position tracking
//!
//! - **Embedding helpers**
//!   - [`DeclarationCollector`], a handler that records every callback
//!   - [`DeclarationStream`], which feeds chunked input through the tokenizer
//!     and retries declarations that were cut off by a chunk boundary
//!
//! # Not Implemented
//!
//! - Start/end tags and character data (the embedding parser owns those)
//! - Content-model validation of ELEMENT declarations

/// Event collector implementing the handler interface.
pub mod collector;
/// Chunked input driver built on the tokenizer.
pub mod stream;
/// Declaration tokenizer and its supporting types.
pub mod tokenizer;

pub use collector::{DeclarationCollector, DeclarationEvent};
pub use stream::{DeclarationStream, StreamError};
pub use tokenizer::{
    DeclarationHandler, DeclarationKind, DeclarationTokenizer, MalformedDeclaration,
    MalformedKind, MarkedSectionKeyword, Position, Scan, ScanResult,
};
