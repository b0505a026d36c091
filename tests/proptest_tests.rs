//! Property-based tests for date normalization, canonical paths and the
//! XR transformer.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "xr")]

use proptest::prelude::*;
use xinvoice::core::*;
use xinvoice::xr::{self, Transformer};

fn canonical(y: u16, m: u8, d: u8) -> String {
    format!("{y:04}-{m:02}-{d:02}")
}

fn looks_canonical(s: &str) -> bool {
    s.len() == 10
        && s.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        })
}

/// Child element names drawn from a small alphabet so repeats are common.
fn arb_children() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "p:a", "c"]), 1..12)
}

proptest! {
    /// Every in-range date is accepted with and without hyphens.
    #[test]
    fn valid_dates_normalize(y in 1u16..=9999, m in 1u8..=12, d in 1u8..=31) {
        let expected = canonical(y, m, d);
        prop_assert_eq!(date_text(&expected), expected.clone());
        prop_assert_eq!(date_text(&format!("{y:04}{m:02}{d:02}")), expected);
    }

    /// Months above 12 are always rejected.
    #[test]
    fn out_of_range_month_rejected(y in 1u16..=9999, m in 13u8..=99, d in 1u8..=31) {
        let raw = format!("{y:04}-{m:02}-{d:02}");
        prop_assert!(normalize_date(&raw).is_err());
    }

    /// The output is either a canonical date or the failure message quoting the input.
    #[test]
    fn output_is_date_or_failure(raw in "\\PC{0,16}") {
        let text = date_text(&raw);
        let failure = format!("ILLEGAL DATE FORMAT of \"{raw}\".");
        prop_assert!(looks_canonical(&text) || text == failure, "{}", text);
    }

    /// Normalizing a canonical date yields the same date.
    #[test]
    fn normalization_is_idempotent(raw in "[0-9 -]{6,14}") {
        if let Ok(date) = normalize_date(&raw) {
            prop_assert_eq!(normalize_date(&date.to_string()), Ok(date));
        }
    }

    /// Sibling paths are unique, and indexed exactly when the name repeats.
    #[test]
    fn sibling_paths_index_repeated_names(children in arb_children()) {
        let body: String = children.iter().map(|n| format!("<{n}/>")).collect();
        let doc = SourceDocument::parse(&format!(r#"<r xmlns:p="urn:p">{body}</r>"#)).unwrap();

        let paths: Vec<String> = doc.root().children().map(|c| c.path()).collect();
        prop_assert_eq!(paths.len(), children.len());

        for (i, name) in children.iter().enumerate() {
            let total = children.iter().filter(|n| *n == name).count();
            let ordinal = children[..=i].iter().filter(|n| *n == name).count();
            let expected = if total > 1 {
                format!("/r/{name}[{ordinal}]")
            } else {
                format!("/r/{name}")
            };
            prop_assert_eq!(&paths[i], &expected);
        }

        let mut unique = paths.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), paths.len());
    }

    /// An attribute path is its owner's path plus `/@name`.
    #[test]
    fn attribute_path_extends_owner(
        children in arb_children(),
        attr in "[a-zA-Z][a-zA-Z0-9]{0,7}",
    ) {
        prop_assume!(attr != "xmlns");
        let body: String = children
            .iter()
            .map(|n| format!(r#"<{n} {attr}="v"/>"#))
            .collect();
        let doc = SourceDocument::parse(&format!(r#"<r xmlns:p="urn:p">{body}</r>"#)).unwrap();

        for child in doc.root().children() {
            let node = child.attribute_node(&attr).unwrap();
            prop_assert_eq!(node.path(), format!("{}/@{attr}", child.path()));
        }
    }

    /// The transformer never fails on a well-formed invoice and reports one
    /// diagnostic per illegal date.
    #[test]
    fn transform_reports_each_illegal_date(
        issue in "[0-9A-Za-z. :-]{0,12}",
        due in "[0-9A-Za-z. :-]{0,12}",
    ) {
        let xml = format!(
            r#"<Invoice xmlns="urn:oasis:names:specification:ubl:schema:xsd:Invoice-2"><ID>1</ID><IssueDate>{issue}</IssueDate><DueDate>{due}</DueDate></Invoice>"#
        );
        let t = Transformer::default().transform(&xml).unwrap();

        let expected = [&issue, &due]
            .iter()
            .filter(|raw| normalize_date(raw).is_err())
            .count();
        prop_assert_eq!(t.diagnostics.len(), expected);
        prop_assert_eq!(t.field_count, 3);
        for d in &t.diagnostics {
            prop_assert!(d.message.starts_with("ILLEGAL DATE FORMAT of \""));
        }
    }

    /// Every xr:src in the output names a node of the source document.
    #[test]
    fn provenance_paths_exist(notes in prop::collection::vec("[a-z ]{1,10}", 0..6)) {
        let body: String = notes.iter().map(|n| format!("<Note>{n}</Note>")).collect();
        let xml = format!(
            r#"<Invoice xmlns="urn:oasis:names:specification:ubl:schema:xsd:Invoice-2">{body}</Invoice>"#
        );
        let doc = SourceDocument::parse(&xml).unwrap();
        let paths = xr::all_paths(&doc);

        let t = Transformer::default().transform_document(&doc).unwrap();
        prop_assert_eq!(t.field_count, notes.len());

        let out = SourceDocument::parse(&t.xml).unwrap();
        for el in out.elements() {
            if let Some(src) = el.attribute("xr:src") {
                prop_assert!(paths.iter().any(|p| p == src), "{} missing", src);
            }
        }
    }
}
