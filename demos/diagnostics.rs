use xinvoice::xr::{TransformConfig, Transformer};
use xinvoice::{SourceDocument, XinvoiceError};

const INVOICE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ubl:Invoice xmlns:ubl="urn:oasis:names:specification:ubl:schema:xsd:Invoice-2"
             xmlns:cac="urn:oasis:names:specification:ubl:schema:xsd:CommonAggregateComponents-2"
             xmlns:cbc="urn:oasis:names:specification:ubl:schema:xsd:CommonBasicComponents-2">
  <cbc:ID>RE-2024-042</cbc:ID>
  <cbc:IssueDate>15.06.2024</cbc:IssueDate>
  <cbc:DueDate>2024-07-15</cbc:DueDate>
  <cac:InvoiceLine>
    <cbc:ID>1</cbc:ID>
    <cac:InvoicePeriod><cbc:StartDate>2024-6-1</cbc:StartDate></cac:InvoicePeriod>
  </cac:InvoiceLine>
  <cac:InvoiceLine>
    <cbc:ID>2</cbc:ID>
    <cac:InvoicePeriod><cbc:EndDate>2024-13-01</cbc:EndDate></cac:InvoicePeriod>
  </cac:InvoiceLine>
</ubl:Invoice>"#;

fn main() {
    // ── 1. Configuration from JSON ────────────────────────────────────
    let config = TransformConfig::from_json(r#"{ "indent": null }"#).expect("valid config");
    println!("=== Config ===\n  {config:?}\n");

    // ── 2. Diagnostics report ─────────────────────────────────────────
    let result = Transformer::new(config)
        .transform(INVOICE)
        .expect("transformation failed");
    println!("=== Diagnostics ===");
    println!("{}\n", result.diagnostics_json().expect("serializable"));

    // ── 3. Locating the offending nodes ───────────────────────────────
    let doc = SourceDocument::parse(INVOICE).expect("well-formed");
    println!("=== Source paths ===");
    for path in xinvoice::xr::all_paths(&doc) {
        let flagged = result.diagnostics.iter().any(|d| d.path == path);
        println!("  {} {path}", if flagged { "!" } else { " " });
    }

    // ── 4. Hard errors ────────────────────────────────────────────────
    println!("\n=== Errors ===");
    for input in ["<Order/>", "<Invoice><ID>1</Invoice>"] {
        match Transformer::default().transform(input) {
            Err(XinvoiceError::Syntax(msg)) => println!("  syntax: {msg}"),
            Err(e) => println!("  {e}"),
            Ok(_) => println!("  unexpectedly accepted"),
        }
    }
}
