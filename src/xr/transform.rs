use crate::core::{
    Diagnostic, Element, FieldValue, SourceDocument, SourceNode, SourceSyntax, XinvoiceError,
};

use super::XR_NS;
use super::config::TransformConfig;
use super::mapping::{FieldMapping, GROUPS, HEADER_FIELDS, XR_ROOT};
use super::xml_utils::XmlWriter;

/// Result of normalizing one source document.
#[derive(Debug, Clone)]
pub struct Transformation {
    /// Detected source syntax.
    pub syntax: SourceSyntax,
    /// The XR document.
    pub xml: String,
    /// Field-level findings, in document order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of XR fields written.
    pub field_count: usize,
}

impl Transformation {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics as a pretty-printed JSON array.
    #[cfg(feature = "json")]
    pub fn diagnostics_json(&self) -> Result<String, XinvoiceError> {
        serde_json::to_string_pretty(&self.diagnostics)
            .map_err(|e| XinvoiceError::Serialization(format!("diagnostics: {e}")))
    }
}

/// Normalizes UBL and CII documents into the XR schema.
///
/// # Example
///
/// ```
/// use xinvoice::xr::{TransformConfig, Transformer};
///
/// let ubl = r#"<Invoice xmlns="urn:oasis:names:specification:ubl:schema:xsd:Invoice-2">
///   <ID>RE-1</ID><IssueDate>2024-13-01</IssueDate></Invoice>"#;
///
/// let result = Transformer::new(TransformConfig::default()).transform(ubl).unwrap();
/// assert_eq!(result.diagnostics.len(), 1);
/// assert_eq!(result.diagnostics[0].path, "/Invoice/IssueDate");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: TransformConfig,
}

struct Emitted<'a> {
    mapping: &'a FieldMapping,
    path: String,
    value: FieldValue,
}

impl Transformer {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Parse `xml` and normalize it.
    pub fn transform(&self, xml: &str) -> Result<Transformation, XinvoiceError> {
        let doc = SourceDocument::parse(xml)?;
        self.transform_document(&doc)
    }

    /// Normalize an already parsed document.
    pub fn transform_document(
        &self,
        doc: &SourceDocument,
    ) -> Result<Transformation, XinvoiceError> {
        let syntax = SourceSyntax::detect(doc)?;
        tracing::debug!(%syntax, elements = doc.len(), "transforming document");

        let root = doc.root();
        let mut w = XmlWriter::new(self.config.indent)?;
        let mut diagnostics = Vec::new();
        let mut field_count = 0;

        let root_path = root.path();
        let mut root_attrs = vec![("xmlns:xr", XR_NS)];
        if self.config.provenance {
            root_attrs.push(("xr:src", root_path.as_str()));
        }
        w.start_element_with_attrs(XR_ROOT, &root_attrs)?;

        let header = collect_fields(root, HEADER_FIELDS, syntax);
        field_count += header.len();
        self.write_fields(&mut w, &header, &mut diagnostics)?;

        for group in GROUPS {
            let Some(steps) = group.source.for_syntax(syntax) else {
                continue;
            };
            for instance in root.select_elements(steps) {
                let fields = collect_fields(instance, group.fields, syntax);
                if fields.is_empty() {
                    tracing::debug!(group = group.term, path = %instance.path(), "skipping empty group");
                    continue;
                }
                field_count += fields.len();

                let group_path = instance.path();
                let mut attrs = Vec::new();
                if self.config.provenance {
                    attrs.push(("xr:src", group_path.as_str()));
                }
                w.start_element_with_attrs(group.element, &attrs)?;
                self.write_fields(&mut w, &fields, &mut diagnostics)?;
                w.end_element(group.element)?;
            }
        }

        w.end_element(XR_ROOT)?;
        let xml = w.into_string()?;

        tracing::info!(
            %syntax,
            fields = field_count,
            diagnostics = diagnostics.len(),
            "transformation complete"
        );

        Ok(Transformation {
            syntax,
            xml,
            diagnostics,
            field_count,
        })
    }

    fn write_fields(
        &self,
        w: &mut XmlWriter,
        fields: &[Emitted<'_>],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(), XinvoiceError> {
        for field in fields {
            if let Some(illegal) = field.value.illegal_date() {
                tracing::warn!(term = field.mapping.term, path = %field.path, "{illegal}");
                diagnostics.push(Diagnostic::new(
                    field.mapping.term,
                    field.path.clone(),
                    illegal.to_string(),
                ));
            }

            let mut attrs = Vec::new();
            if self.config.provenance {
                attrs.push(("xr:src", field.path.as_str()));
            }
            attrs.extend(field.value.attributes());
            w.text_element_with_attrs(field.mapping.element, &field.value.text(), &attrs)?;
        }
        Ok(())
    }
}

/// Evaluate every mapping against `context`, in table order, then document order.
fn collect_fields<'m>(
    context: Element<'_>,
    mappings: &'m [FieldMapping],
    syntax: SourceSyntax,
) -> Vec<Emitted<'m>> {
    let mut out = Vec::new();
    for mapping in mappings {
        let Some(steps) = mapping.source.for_syntax(syntax) else {
            continue;
        };
        for node in context.select(steps) {
            out.push(Emitted {
                mapping,
                path: node.path(),
                value: FieldValue::evaluate(mapping.kind, &node),
            });
        }
    }
    out
}

/// Normalize `xml` with the default configuration and return the XR document.
pub fn to_xr_xml(xml: &str) -> Result<String, XinvoiceError> {
    Transformer::default().transform(xml).map(|t| t.xml)
}

/// Canonical paths of every node in `doc` (elements and attributes), in
/// document order. Useful for building diagnostic reports.
pub fn all_paths(doc: &SourceDocument) -> Vec<String> {
    let mut out = Vec::new();
    for el in doc.elements() {
        out.push(el.path());
        out.extend(el.attributes().map(|a| SourceNode::Attribute(a).path()));
    }
    out
}
