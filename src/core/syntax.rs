//! Detection of the source syntax from the document element.

use serde::{Deserialize, Serialize};

use super::document::SourceDocument;
use super::error::XinvoiceError;

/// UBL 2.1 and CII namespace URIs.
pub mod ns {
    pub const UBL_INVOICE: &str = "urn:oasis:names:specification:ubl:schema:xsd:Invoice-2";
    pub const UBL_CREDIT_NOTE: &str = "urn:oasis:names:specification:ubl:schema:xsd:CreditNote-2";
    pub const CII_RSM: &str = "urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100";
}

/// The recognised source invoice syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceSyntax {
    /// OASIS UBL 2.1 `Invoice`.
    UblInvoice,
    /// OASIS UBL 2.1 `CreditNote`.
    UblCreditNote,
    /// UN/CEFACT `CrossIndustryInvoice` D16B.
    Cii,
}

impl SourceSyntax {
    /// Match a root element local name (prefix already removed).
    pub fn from_root_name(local_name: &str) -> Option<Self> {
        match local_name {
            "Invoice" => Some(Self::UblInvoice),
            "CreditNote" => Some(Self::UblCreditNote),
            "CrossIndustryInvoice" => Some(Self::Cii),
            _ => None,
        }
    }

    /// Detect the syntax of a parsed document from its root element.
    ///
    /// The namespace is not required to match; an undeclared or unexpected
    /// namespace is only logged.
    pub fn detect(doc: &SourceDocument) -> Result<Self, XinvoiceError> {
        let root = doc.root();
        let syntax = Self::from_root_name(root.local_name()).ok_or_else(|| {
            XinvoiceError::Syntax(format!(
                "unrecognised root element <{}>; expected Invoice, CreditNote or CrossIndustryInvoice",
                root.name()
            ))
        })?;

        match root.namespace_uri() {
            Some(uri) if uri == syntax.namespace() => {}
            other => tracing::debug!(
                root = root.name(),
                namespace = other.unwrap_or(""),
                expected = syntax.namespace(),
                "root element namespace differs from the {} namespace",
                syntax.name()
            ),
        }

        Ok(syntax)
    }

    /// Namespace URI of the root element.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::UblInvoice => ns::UBL_INVOICE,
            Self::UblCreditNote => ns::UBL_CREDIT_NOTE,
            Self::Cii => ns::CII_RSM,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UblInvoice => "UBL Invoice",
            Self::UblCreditNote => "UBL CreditNote",
            Self::Cii => "CII",
        }
    }

    pub fn is_ubl(&self) -> bool {
        matches!(self, Self::UblInvoice | Self::UblCreditNote)
    }
}

impl std::fmt::Display for SourceSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
