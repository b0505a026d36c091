//! # xinvoice
//!
//! Normalizes UBL Invoice, UBL CreditNote and UN/CEFACT Cross Industry
//! Invoice documents into the KoSIT XRechnung visualization ("XR") schema,
//! the intermediate form that invoice stylesheets render to HTML and PDF.
//!
//! Every field is traced back to its source: dates are strictly reformatted
//! to `YYYY-MM-DD` (or replaced by a readable failure message), coded values
//! keep their code list / scheme, and each output element records the
//! canonical path of the node it was taken from.
//!
//! ## Quick Start
//!
//! ```rust
//! use xinvoice::core::*;
//!
//! let doc = SourceDocument::parse(r#"<ubl:Invoice xmlns:ubl="urn:oasis:names:specification:ubl:schema:xsd:Invoice-2"
//!     xmlns:cbc="urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2">
//!   <cbc:IssueDate>2024-06-31</cbc:IssueDate>
//!   <cbc:DueDate>2024-7-15</cbc:DueDate>
//! </ubl:Invoice>"#).unwrap();
//!
//! let issue = doc.root().select_elements(&["IssueDate"])[0];
//! assert_eq!(date_text(issue.text()), "2024-06-31");
//!
//! let due = doc.root().select_elements(&["DueDate"])[0];
//! assert_eq!(date_text(due.text()), "ILLEGAL DATE FORMAT of \"2024-7-15\".");
//! assert_eq!(due.path(), "/ubl:Invoice/cbc:DueDate");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `xr` (default) | XR document generation |
//! | `json` | JSON configuration and diagnostics export |
//! | `all` | Everything |

pub mod core;

#[cfg(feature = "xr")]
pub mod xr;

// Re-export core types at crate root for convenience
pub use crate::core::*;
