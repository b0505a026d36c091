use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::core::XinvoiceError;

/// Options for producing XR documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Write `xr:src` with the canonical source path on every XR element.
    pub provenance: bool,
    /// Spaces per nesting level; `None` for single-line output.
    pub indent: Option<usize>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            provenance: true,
            indent: Some(2),
        }
    }
}

impl TransformConfig {
    /// Load a configuration from JSON. Missing keys take their defaults.
    ///
    /// ```
    /// # #[cfg(feature = "json")] {
    /// use xinvoice::xr::TransformConfig;
    ///
    /// let config = TransformConfig::from_json(r#"{ "indent": null }"#).unwrap();
    /// assert!(config.provenance);
    /// assert_eq!(config.indent, None);
    /// # }
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, XinvoiceError> {
        serde_json::from_str(json).map_err(|e| XinvoiceError::Config(format!("invalid JSON: {e}")))
    }
}

/// Builder for [`TransformConfig`].
///
/// # Example
///
/// ```
/// use xinvoice::xr::TransformConfigBuilder;
///
/// let config = TransformConfigBuilder::new()
///     .provenance(false)
///     .compact()
///     .build();
/// assert_eq!(config.indent, None);
/// ```
#[derive(Debug, Default)]
pub struct TransformConfigBuilder {
    config: TransformConfig,
}

impl TransformConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable `xr:src` attributes.
    pub fn provenance(mut self, enabled: bool) -> Self {
        self.config.provenance = enabled;
        self
    }

    /// Indent nested elements by `spaces`.
    pub fn indent(mut self, spaces: usize) -> Self {
        self.config.indent = Some(spaces);
        self
    }

    /// Write the document on a single line.
    pub fn compact(mut self) -> Self {
        self.config.indent = None;
        self
    }

    pub fn build(self) -> TransformConfig {
        self.config
    }
}
