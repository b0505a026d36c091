//! Passthrough fields: values copied to the intermediate document unchanged.

use serde::{Deserialize, Serialize};

use super::document::{Element, SourceNode};

/// Kind of a passthrough value. Only affects how the field is described,
/// never how its text is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Amount,
    Percentage,
    Quantity,
    UnitPrice,
    Text,
    Code,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Percentage => "percentage",
            Self::Quantity => "quantity",
            Self::UnitPrice => "unit price",
            Self::Text => "text",
            Self::Code => "code",
        }
    }
}

/// A copied value together with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarValue {
    pub kind: ScalarKind,
    pub value: String,
}

/// Copy the text of an element, or the value of an attribute.
pub fn passthrough(node: &SourceNode<'_>, kind: ScalarKind) -> ScalarValue {
    ScalarValue {
        kind,
        value: node.text().to_string(),
    }
}

/// BT-125 attached document: base64 content plus MIME type and filename.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BinaryObject {
    pub value: String,
    pub mime_code: Option<String>,
    pub filename: Option<String>,
}

impl BinaryObject {
    /// XR attributes to write alongside the content.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let mut attrs = Vec::new();
        if let Some(mime) = &self.mime_code {
            attrs.push(("mime_code", mime.as_str()));
        }
        if let Some(filename) = &self.filename {
            attrs.push(("filename", filename.as_str()));
        }
        attrs
    }
}

/// Copy a binary object element with its `mimeCode` and `filename` attributes.
pub fn binary_object(el: &Element<'_>) -> BinaryObject {
    BinaryObject {
        value: el.text().to_string(),
        mime_code: el.attribute("mimeCode").map(str::to_string),
        filename: el.attribute("filename").map(str::to_string),
    }
}
