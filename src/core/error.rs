use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading a source document or producing XR output.
///
/// Field-level problems (such as an unparseable date) are never raised
/// through this type; they are reported as [`Diagnostic`] values instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XinvoiceError {
    /// XML could not be read or written.
    #[error("XML error: {0}")]
    Xml(String),

    /// The document is not one of the recognised source syntaxes.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A report could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A field-level finding recorded while normalizing a document.
///
/// The transformation always completes; diagnostics let an operator find
/// the offending source node through its canonical `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// EN 16931 business term of the affected field (e.g. "BT-2").
    pub term: String,
    /// Canonical path of the source node (e.g. "/ubl:Invoice/cbc:IssueDate").
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.term, self.path, self.message)
    }
}

impl Diagnostic {
    pub fn new(
        term: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::new(
            "BT-2",
            "/ubl:Invoice/cbc:IssueDate",
            "ILLEGAL DATE FORMAT of \"2024-13-01\".",
        );
        assert_eq!(
            d.to_string(),
            "[BT-2] /ubl:Invoice/cbc:IssueDate: ILLEGAL DATE FORMAT of \"2024-13-01\"."
        );
    }
}
