//! Intermediate XR documents (KoSIT XRechnung visualization schema).
//!
//! The XR schema is a flat, syntax-neutral view of an EN 16931 invoice
//! that downstream stylesheets render to HTML and PDF. Each element
//! written here carries `xr:src`, the canonical path of the source node it
//! came from, unless provenance is switched off.
//!
//! # Example
//!
//! ```
//! use xinvoice::xr;
//!
//! let cii = r#"<rsm:CrossIndustryInvoice
//!     xmlns:rsm="urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100"
//!     xmlns:ram="urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100"
//!     xmlns:udt="urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100">
//!   <rsm:ExchangedDocument>
//!     <ram:ID>RE-2024-001</ram:ID>
//!     <ram:IssueDateTime><udt:DateTimeString format="102">20240615</udt:DateTimeString></ram:IssueDateTime>
//!   </rsm:ExchangedDocument>
//! </rsm:CrossIndustryInvoice>"#;
//!
//! let xml = xr::to_xr_xml(cii).unwrap();
//! assert!(xml.contains(">2024-06-15</xr:Invoice_issue_date>"));
//! ```

mod config;
mod mapping;
mod transform;
mod xml_utils;

pub use config::{TransformConfig, TransformConfigBuilder};
pub use mapping::{FieldMapping, GROUPS, GroupMapping, HEADER_FIELDS, SourcePaths, XR_ROOT};
pub use transform::{Transformation, Transformer, all_paths, to_xr_xml};

/// XR namespace URI.
pub const XR_NS: &str = "urn:ce.eu:en16931:2017:xoev-de:kosit:standard:xrechnung-1";
