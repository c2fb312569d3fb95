//! Callback interface between the tokenizer and the parser embedding it.

use super::error::MalformedDeclaration;

/// Receives the constructs recognized by a
/// [`DeclarationTokenizer`](super::DeclarationTokenizer).
///
/// The tokenizer is generic over this trait and cannot run without one.
/// Every callback gets a slice of the caller's buffer; copy it if it must
/// outlive the call.
pub trait DeclarationHandler {
    /// Called once per DOCTYPE declaration with the text between `<!` and `>`.
    fn handle_decl(&mut self, data: &str);

    /// Called for every other `<!NAME ...>` declaration (text between `<!`
    /// and `>`) and for marked sections (text between `<![` and the closer).
    fn unknown_decl(&mut self, _data: &str) {}

    /// Called once per reported comment with the unstripped text between
    /// `<!--` and the closer.
    fn handle_comment(&mut self, data: &str);

    /// Called before a malformed declaration is returned as `Err`.
    ///
    /// The error is propagated regardless of what this does; implementations
    /// decide whether to log it, record it, or abort the whole document.
    fn error(&mut self, error: &MalformedDeclaration);
}
