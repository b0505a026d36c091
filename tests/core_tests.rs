//! Integration tests for the field operations on real-world shaped documents.

use std::fs;
use std::path::Path;

use xinvoice::core::*;

fn fixture_doc(name: &str) -> SourceDocument {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let xml = fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    SourceDocument::parse(&xml).unwrap()
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[test]
fn line_paths_are_indexed_only_where_repeated() {
    let doc = fixture_doc("ubl_invoice.xml");
    let lines = doc.root().select_elements(&["InvoiceLine"]);
    assert_eq!(lines.len(), 2);

    let ids: Vec<String> = lines
        .iter()
        .flat_map(|line| line.select_elements(&["ID"]))
        .map(|id| id.path())
        .collect();
    assert_eq!(
        ids,
        [
            "/ubl:Invoice/cac:InvoiceLine[1]/cbc:ID",
            "/ubl:Invoice/cac:InvoiceLine[2]/cbc:ID",
        ]
    );

    let percent = lines[0].select_elements(&["Item", "ClassifiedTaxCategory", "Percent"]);
    assert_eq!(
        percent[0].path(),
        "/ubl:Invoice/cac:InvoiceLine[1]/cac:Item/cac:ClassifiedTaxCategory/cbc:Percent"
    );
}

#[test]
fn attribute_paths_extend_owner_path() {
    let doc = fixture_doc("cii_invoice.xml");
    let nodes = doc.root().select(&[
        "ExchangedDocument",
        "IssueDateTime",
        "DateTimeString",
        "@format",
    ]);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].text(), "102");
    assert_eq!(
        path(&nodes[0]),
        "/rsm:CrossIndustryInvoice/rsm:ExchangedDocument/ram:IssueDateTime/udt:DateTimeString/@format"
    );
}

#[test]
fn element_paths_are_unique_across_document() {
    for name in ["ubl_invoice.xml", "ubl_creditnote.xml", "cii_invoice.xml"] {
        let doc = fixture_doc(name);
        let mut paths: Vec<String> = doc.elements().map(|el| el.path()).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total, "{name}");
    }
}

#[test]
fn path_of_root_is_its_qualified_name() {
    assert_eq!(fixture_doc("ubl_invoice.xml").root().path(), "/ubl:Invoice");
    assert_eq!(fixture_doc("ubl_creditnote.xml").root().path(), "/CreditNote");
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn fixture_dates_normalize() {
    let doc = fixture_doc("cii_invoice.xml");
    let issue = doc
        .root()
        .select_elements(&["ExchangedDocument", "IssueDateTime", "DateTimeString"])[0];
    let date = normalize_date(issue.text()).unwrap();
    assert_eq!(date, CanonicalDate { year: 2024, month: 6, day: 15 });
    assert_eq!(date.to_naive_date(), chrono::NaiveDate::from_ymd_opt(2024, 6, 15));
}

#[test]
fn impossible_calendar_day_passes_range_check() {
    let doc = fixture_doc("ubl_invoice.xml");
    let end = doc.root().select_elements(&["InvoicePeriod", "EndDate"])[0];
    let date = normalize_date(end.text()).unwrap();
    assert_eq!(date.to_string(), "2024-06-31");
    assert_eq!(date.to_naive_date(), None);
}

#[test]
fn illegal_date_quotes_raw_input() {
    let doc = fixture_doc("ubl_creditnote.xml");
    let due = doc.root().select_elements(&["PaymentMeans", "PaymentDueDate"])[0];
    let err = normalize_date(due.text()).unwrap_err();
    assert_eq!(err.raw, "2024-06-3O");
    assert_eq!(date_text(due.text()), "ILLEGAL DATE FORMAT of \"2024-06-3O\".");
}

// ---------------------------------------------------------------------------
// Coded values
// ---------------------------------------------------------------------------

#[test]
fn identifier_prefers_list_attributes() {
    let doc = fixture_doc("cii_invoice.xml");
    let code = doc.root().select_elements(&[
        "SupplyChainTradeTransaction",
        "IncludedSupplyChainTradeLineItem",
        "SpecifiedTradeProduct",
        "DesignatedProductClassification",
        "ClassCode",
    ])[0];

    let value = extract_identifier(&code);
    assert_eq!(value.value, "0721-880X");
    assert_eq!(value.scheme_identifier.as_deref(), Some("IB"));
    assert_eq!(value.scheme_version_identifier.as_deref(), Some("88"));
}

#[test]
fn identifier_without_attributes_has_no_scheme() {
    let doc = fixture_doc("ubl_invoice.xml");
    let id = doc
        .root()
        .select_elements(&["PaymentMeans", "PayeeFinancialAccount", "ID"])[0];
    assert_eq!(extract_identifier(&id), CodedValue::new("DE89370400440532013000"));
}

#[test]
fn scoped_identifier_on_fixture() {
    let doc = fixture_doc("ubl_invoice.xml");
    let company = doc.root().select_elements(&[
        "AccountingSupplierParty",
        "Party",
        "PartyLegalEntity",
        "CompanyID",
    ])[0];

    assert_eq!(
        extract_scoped_identifier(&company, None).scheme_identifier.as_deref(),
        Some("HRB")
    );
    assert_eq!(
        extract_scoped_identifier(&company, Some("SEPA"))
            .scheme_identifier
            .as_deref(),
        Some("SEPA")
    );

    // No own schemeID: the default is not applied
    let vat = doc
        .root()
        .select_elements(&["AccountingSupplierParty", "Party", "PartyTaxScheme", "CompanyID"])[0];
    assert_eq!(extract_scoped_identifier(&vat, Some("VA")).scheme_identifier, None);
}

// ---------------------------------------------------------------------------
// Passthrough
// ---------------------------------------------------------------------------

#[test]
fn amounts_are_copied_verbatim() {
    let doc = fixture_doc("ubl_invoice.xml");
    let payable = doc.root().select(&["LegalMonetaryTotal", "PayableAmount"]);
    let value = passthrough(&payable[0], ScalarKind::Amount);
    assert_eq!(value.value, "11483.38");
    assert_eq!(value.kind.name(), "amount");
}

#[test]
fn unit_code_attribute_passthrough() {
    let doc = fixture_doc("ubl_creditnote.xml");
    let unit = doc
        .root()
        .select(&["CreditNoteLine", "CreditedQuantity", "@unitCode"]);
    assert_eq!(passthrough(&unit[0], ScalarKind::Code).value, "C62");
}

#[test]
fn binary_object_metadata() {
    let doc = fixture_doc("ubl_invoice.xml");
    let object = doc.root().select_elements(&[
        "AdditionalDocumentReference",
        "Attachment",
        "EmbeddedDocumentBinaryObject",
    ])[0];
    let binary = binary_object(&object);
    assert_eq!(binary.value, "JVBERi0xLjQK");
    assert_eq!(
        binary.attributes(),
        [("mime_code", "application/pdf"), ("filename", "timesheet.pdf")]
    );
}

// ---------------------------------------------------------------------------
// Syntax detection
// ---------------------------------------------------------------------------

#[test]
fn fixture_syntaxes() {
    assert_eq!(
        SourceSyntax::detect(&fixture_doc("ubl_invoice.xml")).unwrap(),
        SourceSyntax::UblInvoice
    );
    assert_eq!(
        SourceSyntax::detect(&fixture_doc("ubl_creditnote.xml")).unwrap(),
        SourceSyntax::UblCreditNote
    );
    let cii = SourceSyntax::detect(&fixture_doc("cii_invoice.xml")).unwrap();
    assert_eq!(cii, SourceSyntax::Cii);
    assert!(!cii.is_ubl());
    assert_eq!(cii.namespace(), ns::CII_RSM);
}
