//! Field table from UBL / CII source structures to XR elements.
//!
//! Paths are relative, made of local names (prefixes are ignored when
//! matching). A final `@name` step selects an attribute. `None` means the
//! business term has no counterpart in that syntax; an empty path selects
//! the group element itself.

use crate::core::{FieldKind, SourceSyntax};

// CII container elements
const STT: &str = "SupplyChainTradeTransaction";
const AGREEMENT: &str = "ApplicableHeaderTradeAgreement";
const SETTLEMENT: &str = "ApplicableHeaderTradeSettlement";

type Steps = Option<&'static [&'static str]>;

/// Source location of a field or group in each syntax.
#[derive(Debug, Clone, Copy)]
pub struct SourcePaths {
    pub invoice: Steps,
    pub credit_note: Steps,
    pub cii: Steps,
}

impl SourcePaths {
    /// Same path in UBL Invoice and UBL CreditNote.
    const fn ubl_cii(ubl: Steps, cii: Steps) -> Self {
        Self {
            invoice: ubl,
            credit_note: ubl,
            cii,
        }
    }

    const fn each(invoice: Steps, credit_note: Steps, cii: Steps) -> Self {
        Self {
            invoice,
            credit_note,
            cii,
        }
    }

    pub fn for_syntax(&self, syntax: SourceSyntax) -> Steps {
        match syntax {
            SourceSyntax::UblInvoice => self.invoice,
            SourceSyntax::UblCreditNote => self.credit_note,
            SourceSyntax::Cii => self.cii,
        }
    }
}

/// One XR field.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    /// EN 16931 business term (e.g. "BT-2").
    pub term: &'static str,
    /// XR element name.
    pub element: &'static str,
    pub kind: FieldKind,
    pub source: SourcePaths,
}

/// An XR group, emitted once per matching source element.
#[derive(Debug, Clone, Copy)]
pub struct GroupMapping {
    /// EN 16931 business group (e.g. "BG-25").
    pub term: &'static str,
    pub element: &'static str,
    pub source: SourcePaths,
    /// Field paths relative to the group's source element.
    pub fields: &'static [FieldMapping],
}

const fn field(
    term: &'static str,
    element: &'static str,
    kind: FieldKind,
    source: SourcePaths,
) -> FieldMapping {
    FieldMapping {
        term,
        element,
        kind,
        source,
    }
}

/// Root element of the XR document.
pub const XR_ROOT: &str = "xr:invoice";

/// Document-level fields, relative to the source root element.
pub static HEADER_FIELDS: &[FieldMapping] = &[
    field(
        "BT-1",
        "xr:Invoice_number",
        FieldKind::Text,
        SourcePaths::ubl_cii(Some(&["ID"]), Some(&["ExchangedDocument", "ID"])),
    ),
    field(
        "BT-2",
        "xr:Invoice_issue_date",
        FieldKind::Date,
        SourcePaths::ubl_cii(
            Some(&["IssueDate"]),
            Some(&["ExchangedDocument", "IssueDateTime", "DateTimeString"]),
        ),
    ),
    field(
        "BT-3",
        "xr:Invoice_type_code",
        FieldKind::Code,
        SourcePaths::each(
            Some(&["InvoiceTypeCode"]),
            Some(&["CreditNoteTypeCode"]),
            Some(&["ExchangedDocument", "TypeCode"]),
        ),
    ),
    field(
        "BT-5",
        "xr:Invoice_currency_code",
        FieldKind::Code,
        SourcePaths::ubl_cii(
            Some(&["DocumentCurrencyCode"]),
            Some(&[STT, SETTLEMENT, "InvoiceCurrencyCode"]),
        ),
    ),
    field(
        "BT-6",
        "xr:VAT_accounting_currency_code",
        FieldKind::Code,
        SourcePaths::ubl_cii(
            Some(&["TaxCurrencyCode"]),
            Some(&[STT, SETTLEMENT, "TaxCurrencyCode"]),
        ),
    ),
    field(
        "BT-7",
        "xr:Value_added_tax_point_date",
        FieldKind::Date,
        SourcePaths::ubl_cii(
            Some(&["TaxPointDate"]),
            Some(&[STT, SETTLEMENT, "ApplicableTradeTax", "TaxPointDate", "DateString"]),
        ),
    ),
    field(
        "BT-9",
        "xr:Payment_due_date",
        FieldKind::Date,
        SourcePaths::each(
            Some(&["DueDate"]),
            Some(&["PaymentMeans", "PaymentDueDate"]),
            Some(&[
                STT,
                SETTLEMENT,
                "SpecifiedTradePaymentTerms",
                "DueDateDateTime",
                "DateTimeString",
            ]),
        ),
    ),
    field(
        "BT-10",
        "xr:Buyer_reference",
        FieldKind::Text,
        SourcePaths::ubl_cii(
            Some(&["BuyerReference"]),
            Some(&[STT, AGREEMENT, "BuyerReference"]),
        ),
    ),
    field(
        "BT-13",
        "xr:Purchase_order_reference",
        FieldKind::Text,
        SourcePaths::ubl_cii(
            Some(&["OrderReference", "ID"]),
            Some(&[STT, AGREEMENT, "BuyerOrderReferencedDocument", "IssuerAssignedID"]),
        ),
    ),
    field(
        "BT-20",
        "xr:Payment_terms",
        FieldKind::Text,
        SourcePaths::ubl_cii(
            Some(&["PaymentTerms", "Note"]),
            Some(&[STT, SETTLEMENT, "SpecifiedTradePaymentTerms", "Description"]),
        ),
    ),
];

/// Business groups in XR document order.
pub static GROUPS: &[GroupMapping] = &[
    GroupMapping {
        term: "BG-1",
        element: "xr:INVOICE_NOTE",
        source: SourcePaths::ubl_cii(Some(&["Note"]), Some(&["ExchangedDocument", "IncludedNote"])),
        fields: &[
            field(
                "BT-21",
                "xr:Invoice_note_subject_code",
                FieldKind::Code,
                SourcePaths::ubl_cii(None, Some(&["SubjectCode"])),
            ),
            field(
                "BT-22",
                "xr:Invoice_note",
                FieldKind::Text,
                SourcePaths::ubl_cii(Some(&[]), Some(&["Content"])),
            ),
        ],
    },
    GroupMapping {
        term: "BG-4",
        element: "xr:SELLER",
        source: SourcePaths::ubl_cii(
            Some(&["AccountingSupplierParty", "Party"]),
            Some(&[STT, AGREEMENT, "SellerTradeParty"]),
        ),
        fields: &[
            field(
                "BT-27",
                "xr:Seller_name",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["PartyLegalEntity", "RegistrationName"]),
                    Some(&["Name"]),
                ),
            ),
            field(
                "BT-28",
                "xr:Seller_trading_name",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["PartyName", "Name"]),
                    Some(&["SpecifiedLegalOrganization", "TradingBusinessName"]),
                ),
            ),
            field(
                "BT-29",
                "xr:Seller_identifier",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(Some(&["PartyIdentification", "ID"]), Some(&["ID"])),
            ),
            field(
                "BT-29",
                "xr:Seller_identifier",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(None, Some(&["GlobalID"])),
            ),
            field(
                "BT-30",
                "xr:Seller_legal_registration_identifier",
                FieldKind::ScopedIdentifier(None),
                SourcePaths::ubl_cii(
                    Some(&["PartyLegalEntity", "CompanyID"]),
                    Some(&["SpecifiedLegalOrganization", "ID"]),
                ),
            ),
            field(
                "BT-31",
                "xr:Seller_VAT_identifier",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["PartyTaxScheme", "CompanyID"]),
                    Some(&["SpecifiedTaxRegistration", "ID"]),
                ),
            ),
            field(
                "BT-34",
                "xr:Seller_electronic_address",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(
                    Some(&["EndpointID"]),
                    Some(&["URIUniversalCommunication", "URIID"]),
                ),
            ),
        ],
    },
    GroupMapping {
        term: "BG-7",
        element: "xr:BUYER",
        source: SourcePaths::ubl_cii(
            Some(&["AccountingCustomerParty", "Party"]),
            Some(&[STT, AGREEMENT, "BuyerTradeParty"]),
        ),
        fields: &[
            field(
                "BT-44",
                "xr:Buyer_name",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["PartyLegalEntity", "RegistrationName"]),
                    Some(&["Name"]),
                ),
            ),
            field(
                "BT-46",
                "xr:Buyer_identifier",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(Some(&["PartyIdentification", "ID"]), Some(&["ID"])),
            ),
            field(
                "BT-47",
                "xr:Buyer_legal_registration_identifier",
                FieldKind::ScopedIdentifier(None),
                SourcePaths::ubl_cii(
                    Some(&["PartyLegalEntity", "CompanyID"]),
                    Some(&["SpecifiedLegalOrganization", "ID"]),
                ),
            ),
            field(
                "BT-48",
                "xr:Buyer_VAT_identifier",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["PartyTaxScheme", "CompanyID"]),
                    Some(&["SpecifiedTaxRegistration", "ID"]),
                ),
            ),
            field(
                "BT-49",
                "xr:Buyer_electronic_address",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(
                    Some(&["EndpointID"]),
                    Some(&["URIUniversalCommunication", "URIID"]),
                ),
            ),
        ],
    },
    GroupMapping {
        term: "BG-14",
        element: "xr:INVOICING_PERIOD",
        source: SourcePaths::ubl_cii(
            Some(&["InvoicePeriod"]),
            Some(&[STT, SETTLEMENT, "BillingSpecifiedPeriod"]),
        ),
        fields: &[
            field(
                "BT-73",
                "xr:Invoicing_period_start_date",
                FieldKind::Date,
                SourcePaths::ubl_cii(
                    Some(&["StartDate"]),
                    Some(&["StartDateTime", "DateTimeString"]),
                ),
            ),
            field(
                "BT-74",
                "xr:Invoicing_period_end_date",
                FieldKind::Date,
                SourcePaths::ubl_cii(Some(&["EndDate"]), Some(&["EndDateTime", "DateTimeString"])),
            ),
        ],
    },
    GroupMapping {
        term: "BG-16",
        element: "xr:PAYMENT_INSTRUCTIONS",
        source: SourcePaths::ubl_cii(
            Some(&["PaymentMeans"]),
            Some(&[STT, SETTLEMENT, "SpecifiedTradeSettlementPaymentMeans"]),
        ),
        fields: &[
            field(
                "BT-81",
                "xr:Payment_means_type_code",
                FieldKind::Code,
                SourcePaths::ubl_cii(Some(&["PaymentMeansCode"]), Some(&["TypeCode"])),
            ),
            field(
                "BT-82",
                "xr:Payment_means_text",
                FieldKind::Text,
                SourcePaths::ubl_cii(Some(&["PaymentMeansCode", "@name"]), Some(&["Information"])),
            ),
            field(
                "BT-83",
                "xr:Remittance_information",
                FieldKind::Text,
                SourcePaths::ubl_cii(Some(&["PaymentID"]), None),
            ),
            field(
                "BT-84",
                "xr:Payment_account_identifier",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(
                    Some(&["PayeeFinancialAccount", "ID"]),
                    Some(&["PayeePartyCreditorFinancialAccount", "IBANID"]),
                ),
            ),
        ],
    },
    GroupMapping {
        term: "BG-22",
        element: "xr:DOCUMENT_TOTALS",
        source: SourcePaths::ubl_cii(
            Some(&["LegalMonetaryTotal"]),
            Some(&[STT, SETTLEMENT, "SpecifiedTradeSettlementHeaderMonetarySummation"]),
        ),
        fields: &[
            field(
                "BT-106",
                "xr:Sum_of_Invoice_line_net_amount",
                FieldKind::Amount,
                SourcePaths::ubl_cii(Some(&["LineExtensionAmount"]), Some(&["LineTotalAmount"])),
            ),
            field(
                "BT-109",
                "xr:Invoice_total_amount_without_VAT",
                FieldKind::Amount,
                SourcePaths::ubl_cii(Some(&["TaxExclusiveAmount"]), Some(&["TaxBasisTotalAmount"])),
            ),
            field(
                "BT-110",
                "xr:Invoice_total_VAT_amount",
                FieldKind::Amount,
                SourcePaths::ubl_cii(None, Some(&["TaxTotalAmount"])),
            ),
            field(
                "BT-112",
                "xr:Invoice_total_amount_with_VAT",
                FieldKind::Amount,
                SourcePaths::ubl_cii(Some(&["TaxInclusiveAmount"]), Some(&["GrandTotalAmount"])),
            ),
            field(
                "BT-113",
                "xr:Paid_amount",
                FieldKind::Amount,
                SourcePaths::ubl_cii(Some(&["PrepaidAmount"]), Some(&["TotalPrepaidAmount"])),
            ),
            field(
                "BT-115",
                "xr:Amount_due_for_payment",
                FieldKind::Amount,
                SourcePaths::ubl_cii(Some(&["PayableAmount"]), Some(&["DuePayableAmount"])),
            ),
        ],
    },
    GroupMapping {
        term: "BG-23",
        element: "xr:VAT_BREAKDOWN",
        source: SourcePaths::ubl_cii(
            Some(&["TaxTotal", "TaxSubtotal"]),
            Some(&[STT, SETTLEMENT, "ApplicableTradeTax"]),
        ),
        fields: &[
            field(
                "BT-116",
                "xr:VAT_category_taxable_amount",
                FieldKind::Amount,
                SourcePaths::ubl_cii(Some(&["TaxableAmount"]), Some(&["BasisAmount"])),
            ),
            field(
                "BT-117",
                "xr:VAT_category_tax_amount",
                FieldKind::Amount,
                SourcePaths::ubl_cii(Some(&["TaxAmount"]), Some(&["CalculatedAmount"])),
            ),
            field(
                "BT-118",
                "xr:VAT_category_code",
                FieldKind::Code,
                SourcePaths::ubl_cii(Some(&["TaxCategory", "ID"]), Some(&["CategoryCode"])),
            ),
            field(
                "BT-119",
                "xr:VAT_category_rate",
                FieldKind::Percentage,
                SourcePaths::ubl_cii(
                    Some(&["TaxCategory", "Percent"]),
                    Some(&["RateApplicablePercent"]),
                ),
            ),
            field(
                "BT-120",
                "xr:VAT_exemption_reason_text",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["TaxCategory", "TaxExemptionReason"]),
                    Some(&["ExemptionReason"]),
                ),
            ),
        ],
    },
    GroupMapping {
        term: "BG-24",
        element: "xr:ADDITIONAL_SUPPORTING_DOCUMENTS",
        source: SourcePaths::ubl_cii(
            Some(&["AdditionalDocumentReference"]),
            Some(&[STT, AGREEMENT, "AdditionalReferencedDocument"]),
        ),
        fields: &[
            field(
                "BT-122",
                "xr:Supporting_document_reference",
                FieldKind::Text,
                SourcePaths::ubl_cii(Some(&["ID"]), Some(&["IssuerAssignedID"])),
            ),
            field(
                "BT-123",
                "xr:Supporting_document_description",
                FieldKind::Text,
                SourcePaths::ubl_cii(Some(&["DocumentDescription"]), Some(&["Name"])),
            ),
            field(
                "BT-124",
                "xr:External_document_location",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["Attachment", "ExternalReference", "URI"]),
                    Some(&["URIID"]),
                ),
            ),
            field(
                "BT-125",
                "xr:Attached_document",
                FieldKind::Binary,
                SourcePaths::ubl_cii(
                    Some(&["Attachment", "EmbeddedDocumentBinaryObject"]),
                    Some(&["AttachmentBinaryObject"]),
                ),
            ),
        ],
    },
    GroupMapping {
        term: "BG-25",
        element: "xr:INVOICE_LINE",
        source: SourcePaths::each(
            Some(&["InvoiceLine"]),
            Some(&["CreditNoteLine"]),
            Some(&[STT, "IncludedSupplyChainTradeLineItem"]),
        ),
        fields: &[
            field(
                "BT-126",
                "xr:Invoice_line_identifier",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["ID"]),
                    Some(&["AssociatedDocumentLineDocument", "LineID"]),
                ),
            ),
            field(
                "BT-127",
                "xr:Invoice_line_note",
                FieldKind::Text,
                SourcePaths::ubl_cii(
                    Some(&["Note"]),
                    Some(&["AssociatedDocumentLineDocument", "IncludedNote", "Content"]),
                ),
            ),
            field(
                "BT-129",
                "xr:Invoiced_quantity",
                FieldKind::Quantity,
                SourcePaths::each(
                    Some(&["InvoicedQuantity"]),
                    Some(&["CreditedQuantity"]),
                    Some(&["SpecifiedLineTradeDelivery", "BilledQuantity"]),
                ),
            ),
            field(
                "BT-130",
                "xr:Invoiced_quantity_unit_of_measure_code",
                FieldKind::Code,
                SourcePaths::each(
                    Some(&["InvoicedQuantity", "@unitCode"]),
                    Some(&["CreditedQuantity", "@unitCode"]),
                    Some(&["SpecifiedLineTradeDelivery", "BilledQuantity", "@unitCode"]),
                ),
            ),
            field(
                "BT-131",
                "xr:Invoice_line_net_amount",
                FieldKind::Amount,
                SourcePaths::ubl_cii(
                    Some(&["LineExtensionAmount"]),
                    Some(&[
                        "SpecifiedLineTradeSettlement",
                        "SpecifiedTradeSettlementLineMonetarySummation",
                        "LineTotalAmount",
                    ]),
                ),
            ),
            field(
                "BT-134",
                "xr:Invoice_line_period_start_date",
                FieldKind::Date,
                SourcePaths::ubl_cii(
                    Some(&["InvoicePeriod", "StartDate"]),
                    Some(&[
                        "SpecifiedLineTradeSettlement",
                        "BillingSpecifiedPeriod",
                        "StartDateTime",
                        "DateTimeString",
                    ]),
                ),
            ),
            field(
                "BT-135",
                "xr:Invoice_line_period_end_date",
                FieldKind::Date,
                SourcePaths::ubl_cii(
                    Some(&["InvoicePeriod", "EndDate"]),
                    Some(&[
                        "SpecifiedLineTradeSettlement",
                        "BillingSpecifiedPeriod",
                        "EndDateTime",
                        "DateTimeString",
                    ]),
                ),
            ),
            field(
                "BT-146",
                "xr:Item_net_price",
                FieldKind::UnitPrice,
                SourcePaths::ubl_cii(
                    Some(&["Price", "PriceAmount"]),
                    Some(&["SpecifiedLineTradeAgreement", "NetProductTradePrice", "ChargeAmount"]),
                ),
            ),
            field(
                "BT-151",
                "xr:Invoiced_item_VAT_category_code",
                FieldKind::Code,
                SourcePaths::ubl_cii(
                    Some(&["Item", "ClassifiedTaxCategory", "ID"]),
                    Some(&["SpecifiedLineTradeSettlement", "ApplicableTradeTax", "CategoryCode"]),
                ),
            ),
            field(
                "BT-152",
                "xr:Invoiced_item_VAT_rate",
                FieldKind::Percentage,
                SourcePaths::ubl_cii(
                    Some(&["Item", "ClassifiedTaxCategory", "Percent"]),
                    Some(&[
                        "SpecifiedLineTradeSettlement",
                        "ApplicableTradeTax",
                        "RateApplicablePercent",
                    ]),
                ),
            ),
            field(
                "BT-153",
                "xr:Item_name",
                FieldKind::Text,
                SourcePaths::ubl_cii(Some(&["Item", "Name"]), Some(&["SpecifiedTradeProduct", "Name"])),
            ),
            field(
                "BT-157",
                "xr:Item_standard_identifier",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(
                    Some(&["Item", "StandardItemIdentification", "ID"]),
                    Some(&["SpecifiedTradeProduct", "GlobalID"]),
                ),
            ),
            field(
                "BT-158",
                "xr:Item_classification_identifier",
                FieldKind::Identifier,
                SourcePaths::ubl_cii(
                    Some(&["Item", "CommodityClassification", "ItemClassificationCode"]),
                    Some(&[
                        "SpecifiedTradeProduct",
                        "DesignatedProductClassification",
                        "ClassCode",
                    ]),
                ),
            ),
            field(
                "BT-159",
                "xr:Item_country_of_origin",
                FieldKind::Code,
                SourcePaths::ubl_cii(
                    Some(&["Item", "OriginCountry", "IdentificationCode"]),
                    Some(&["SpecifiedTradeProduct", "OriginTradeCountry", "ID"]),
                ),
            ),
        ],
    },
];
