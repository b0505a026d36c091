//! The field-level contract: one source node in, one normalized value out.

use super::date::{CanonicalDate, IllegalDate, normalize_date};
use super::document::SourceNode;
use super::identifier::{CodedValue, extract_identifier, extract_scoped_identifier};
use super::scalar::{BinaryObject, ScalarKind, ScalarValue, binary_object, passthrough};

/// How a source node is turned into an intermediate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Code,
    Amount,
    Percentage,
    Quantity,
    UnitPrice,
    Date,
    /// Coded value with scheme and version from the node's own attributes.
    Identifier,
    /// Coded value whose scheme may be replaced by the given default.
    ScopedIdentifier(Option<&'static str>),
    /// Attached document with MIME type and filename.
    Binary,
}

/// A normalized field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(ScalarValue),
    Date(Result<CanonicalDate, IllegalDate>),
    Identifier(CodedValue),
    Binary(BinaryObject),
}

impl FieldValue {
    /// Apply `kind` to `node`.
    ///
    /// Attribute nodes have no attributes of their own, so identifier and
    /// binary kinds applied to them yield the bare value.
    pub fn evaluate(kind: FieldKind, node: &SourceNode<'_>) -> Self {
        match (kind, node) {
            (FieldKind::Text, _) => Self::Scalar(passthrough(node, ScalarKind::Text)),
            (FieldKind::Code, _) => Self::Scalar(passthrough(node, ScalarKind::Code)),
            (FieldKind::Amount, _) => Self::Scalar(passthrough(node, ScalarKind::Amount)),
            (FieldKind::Percentage, _) => Self::Scalar(passthrough(node, ScalarKind::Percentage)),
            (FieldKind::Quantity, _) => Self::Scalar(passthrough(node, ScalarKind::Quantity)),
            (FieldKind::UnitPrice, _) => Self::Scalar(passthrough(node, ScalarKind::UnitPrice)),
            (FieldKind::Date, _) => Self::Date(normalize_date(node.text())),
            (FieldKind::Identifier, SourceNode::Element(el)) => {
                Self::Identifier(extract_identifier(el))
            }
            (FieldKind::ScopedIdentifier(default), SourceNode::Element(el)) => {
                Self::Identifier(extract_scoped_identifier(el, default))
            }
            (FieldKind::Binary, SourceNode::Element(el)) => Self::Binary(binary_object(el)),
            (FieldKind::Identifier | FieldKind::ScopedIdentifier(_), SourceNode::Attribute(_)) => {
                Self::Identifier(CodedValue::new(node.text()))
            }
            (FieldKind::Binary, SourceNode::Attribute(_)) => Self::Binary(BinaryObject {
                value: node.text().to_string(),
                ..Default::default()
            }),
        }
    }

    /// Text content to write.
    pub fn text(&self) -> String {
        match self {
            Self::Scalar(v) => v.value.clone(),
            Self::Date(Ok(date)) => date.to_string(),
            Self::Date(Err(illegal)) => illegal.to_string(),
            Self::Identifier(v) => v.value.clone(),
            Self::Binary(v) => v.value.clone(),
        }
    }

    /// Metadata attributes to write.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Identifier(v) => v.attributes(),
            Self::Binary(v) => v.attributes(),
            Self::Scalar(_) | Self::Date(_) => Vec::new(),
        }
    }

    /// The date failure, if this is an illegal date.
    pub fn illegal_date(&self) -> Option<&IllegalDate> {
        match self {
            Self::Date(Err(illegal)) => Some(illegal),
            _ => None,
        }
    }
}
