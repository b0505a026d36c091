//! Coded values: element text tagged with its code list / identification scheme.
//!
//! UBL and CII spell the same concept with different attribute names
//! (`listID` on codes, `schemeID` on identifiers). Each concept has a fixed
//! list of candidate attribute names and the first one present wins.

use serde::{Deserialize, Serialize};

use super::document::Element;

/// Attributes naming the code list or identification scheme, in priority order.
pub const SCHEME_ID_ATTRIBUTES: &[&str] = &["listID", "schemeID"];

/// Attributes naming the code list or scheme version, in priority order.
pub const SCHEME_VERSION_ATTRIBUTES: &[&str] = &["listVersionID", "schemeVersionID"];

/// Text value plus optional scheme metadata.
///
/// A field is `None` when the source carries no matching attribute; it is
/// never an empty string standing in for "absent".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodedValue {
    pub value: String,
    pub scheme_identifier: Option<String>,
    pub scheme_version_identifier: Option<String>,
}

impl CodedValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// XR attributes to write alongside the value.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let mut attrs = Vec::new();
        if let Some(id) = &self.scheme_identifier {
            attrs.push(("scheme_identifier", id.as_str()));
        }
        if let Some(version) = &self.scheme_version_identifier {
            attrs.push(("scheme_version_identifier", version.as_str()));
        }
        attrs
    }
}

/// First value present among `candidates`, in order.
pub fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().next()
}

/// Value of the first attribute in `names` that `el` carries.
pub fn first_attribute<'a>(el: &Element<'a>, names: &[&str]) -> Option<&'a str> {
    first_present(names.iter().map(|name| el.attribute(name)))
}

/// Text of `el` with scheme and version taken from its own attributes.
///
/// `listID` is preferred over `schemeID`, `listVersionID` over
/// `schemeVersionID`.
pub fn extract_identifier(el: &Element<'_>) -> CodedValue {
    CodedValue {
        value: el.text().to_string(),
        scheme_identifier: first_attribute(el, SCHEME_ID_ATTRIBUTES).map(str::to_string),
        scheme_version_identifier: first_attribute(el, SCHEME_VERSION_ATTRIBUTES)
            .map(str::to_string),
    }
}

/// Text of `el` with a scheme identifier that may be overridden by the caller.
///
/// A scheme identifier is attached only when `el` has its own `schemeID`
/// attribute. Its value is the first present of `default_scheme`, `listID`,
/// `schemeID`. No version is ever attached.
pub fn extract_scoped_identifier(el: &Element<'_>, default_scheme: Option<&str>) -> CodedValue {
    let scheme_identifier = el.attribute("schemeID").and_then(|own| {
        first_present([default_scheme, el.attribute("listID"), Some(own)]).map(str::to_string)
    });

    CodedValue {
        value: el.text().to_string(),
        scheme_identifier,
        scheme_version_identifier: None,
    }
}
