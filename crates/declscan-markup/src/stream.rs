//! Chunked input driver.
//!
//! Markup often arrives in pieces (network reads, file blocks). The stream
//! buffers what it has been fed, scans every complete declaration, and keeps
//! an unfinished one around until the next chunk arrives. Text between
//! declarations is skipped but still counted for position tracking.

use thiserror::Error;

use crate::tokenizer::{
    DeclarationHandler, DeclarationTokenizer, MalformedDeclaration, Position, Scan,
};

/// Errors from [`DeclarationStream`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// A declaration was structurally invalid.
    #[error(transparent)]
    Malformed(#[from] MalformedDeclaration),
    /// The input ended inside a declaration.
    #[error("unterminated declaration starting at {position}")]
    Truncated {
        /// Where the unfinished declaration starts.
        position: Position,
    },
}

/// Feeds chunks of markup through a [`DeclarationTokenizer`].
///
/// After a [`StreamError::Malformed`] the stream should be discarded: the
/// failing declaration stays buffered and the position points inside it.
///
/// A `<!-` not followed by a second `-` can't be classified, so scanning
/// stalls there: everything after it is buffered unreported and
/// [`finish`](Self::finish) returns [`StreamError::Truncated`] at its start.
pub struct DeclarationStream<H> {
    tokenizer: DeclarationTokenizer<H>,
    /// Unscanned input. Everything before `cursor` has been consumed.
    buffer: String,
    cursor: usize,
}

impl<H: DeclarationHandler> DeclarationStream<H> {
    /// Create a stream reporting to `handler`.
    #[must_use]
    pub fn new(handler: H) -> Self {
        Self::with_tokenizer(DeclarationTokenizer::new(handler))
    }

    /// Create a stream around an already configured tokenizer.
    #[must_use]
    pub const fn with_tokenizer(tokenizer: DeclarationTokenizer<H>) -> Self {
        Self {
            tokenizer,
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Position just past the last consumed input.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.tokenizer.position()
    }

    /// Borrow the handler.
    #[must_use]
    pub const fn handler(&self) -> &H {
        self.tokenizer.handler()
    }

    /// Mutably borrow the handler, e.g. to drain what it has collected
    /// between chunks.
    pub const fn handler_mut(&mut self) -> &mut H {
        self.tokenizer.handler_mut()
    }

    /// Buffered input that has not been consumed yet.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buffer[self.cursor..]
    }

    /// Append `chunk` and scan every declaration it completes.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Malformed`] if a declaration is structurally invalid.
    pub fn feed(&mut self, chunk: &str) -> Result<(), StreamError> {
        self.buffer.push_str(chunk);
        self.scan()?;
        Ok(())
    }

    /// End the input and return the handler.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Truncated`] if a declaration is still unfinished.
    pub fn finish(mut self) -> Result<H, StreamError> {
        self.scan()?;
        if self.pending().starts_with("<!") {
            return Err(StreamError::Truncated {
                position: self.position(),
            });
        }
        Ok(self.tokenizer.into_handler())
    }

    fn scan(&mut self) -> Result<(), MalformedDeclaration> {
        loop {
            let rest = &self.buffer[self.cursor..];
            let Some(offset) = rest.find("<!") else {
                // A trailing '<' may be the start of the next declaration.
                let keep = usize::from(rest.ends_with('<'));
                self.advance_to(self.buffer.len() - keep);
                break;
            };
            let start = self.cursor + offset;
            self.advance_to(start);
            let scan = if self.buffer[start..].starts_with("<!--") {
                self.tokenizer.parse_comment(&self.buffer, start, true)?
            } else {
                self.tokenizer.parse_declaration(&self.buffer, start)?
            };
            match scan {
                Scan::Complete(end) => self.advance_to(end),
                Scan::Incomplete => break,
            }
        }
        self.buffer.replace_range(..self.cursor, "");
        self.cursor = 0;
        Ok(())
    }

    fn advance_to(&mut self, end: usize) {
        self.cursor = self.tokenizer.update_position(&self.buffer, self.cursor, end);
    }
}
