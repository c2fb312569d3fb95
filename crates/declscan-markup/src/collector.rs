//! A handler that records what the tokenizer reports.
//!
//! Malformed declarations are kept as issues and logged through the
//! declscan-common warning system, the same way for every embedding.

use declscan_common::warning::warn_once;
use serde::Serialize;

use crate::tokenizer::{DeclarationHandler, MalformedDeclaration};

/// One callback received from the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum DeclarationEvent {
    /// A DOCTYPE declaration body.
    Doctype(String),
    /// Any other declaration or a marked section.
    Declaration(String),
    /// A comment body.
    Comment(String),
}

impl DeclarationEvent {
    /// The text carried by the event.
    #[must_use]
    pub fn data(&self) -> &str {
        match self {
            Self::Doctype(data) | Self::Declaration(data) | Self::Comment(data) => data,
        }
    }
}

/// Records every event and every malformed declaration, in order.
#[derive(Debug, Default)]
pub struct DeclarationCollector {
    events: Vec<DeclarationEvent>,
    issues: Vec<MalformedDeclaration>,
}

impl DeclarationCollector {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    #[must_use]
    pub fn events(&self) -> &[DeclarationEvent] {
        &self.events
    }

    /// Malformed declarations reported so far.
    #[must_use]
    pub fn issues(&self) -> &[MalformedDeclaration] {
        &self.issues
    }

    /// Remove and return the events received so far.
    pub fn take_events(&mut self) -> Vec<DeclarationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Consume the collector and return its events.
    #[must_use]
    pub fn into_events(self) -> Vec<DeclarationEvent> {
        self.events
    }
}

impl DeclarationHandler for DeclarationCollector {
    fn handle_decl(&mut self, data: &str) {
        self.events.push(DeclarationEvent::Doctype(data.to_string()));
    }

    fn unknown_decl(&mut self, data: &str) {
        self.events.push(DeclarationEvent::Declaration(data.to_string()));
    }

    fn handle_comment(&mut self, data: &str) {
        self.events.push(DeclarationEvent::Comment(data.to_string()));
    }

    fn error(&mut self, error: &MalformedDeclaration) {
        let _ = warn_once("Markup", &error.to_string());
        self.issues.push(error.clone());
    }
}
