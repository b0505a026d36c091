//! Canonical structural paths for source nodes.
//!
//! A path names every element from the document root down to the node,
//! e.g. `/ubl:Invoice/cac:InvoiceLine[2]/cbc:ID`. An element gets a
//! positional index only when its parent has more than one child with the
//! same qualified name; the index counts same-name siblings only and starts
//! at 1. Attribute nodes end in `/@name`.
//!
//! Paths are computed on demand and are only unique within the document
//! they were computed for.

use super::document::{Attribute, Element, SourceNode};

/// Canonical path of any source node.
pub fn path(node: &SourceNode<'_>) -> String {
    match node {
        SourceNode::Element(el) => element_path(el),
        SourceNode::Attribute(attr) => attribute_path(attr),
    }
}

/// Canonical path of an element.
pub fn element_path(el: &Element<'_>) -> String {
    let mut chain: Vec<Element<'_>> = el.ancestors_or_self().collect();
    chain.reverse();

    let mut out = String::new();
    for step in &chain {
        out.push('/');
        out.push_str(step.name());
        if let Some(index) = sibling_index(step) {
            out.push_str(&format!("[{index}]"));
        }
    }
    out
}

/// Canonical path of an attribute: its owner's path followed by `/@name`.
pub fn attribute_path(attr: &Attribute<'_>) -> String {
    format!("{}/@{}", element_path(&attr.owner()), attr.name())
}

/// 1-based position among same-name siblings, or `None` if the name is unique.
fn sibling_index(el: &Element<'_>) -> Option<usize> {
    let name = el.name();
    let preceding = el.preceding_siblings().filter(|s| s.name() == name).count();
    if preceding > 0 || el.following_siblings().any(|s| s.name() == name) {
        Some(preceding + 1)
    } else {
        None
    }
}

impl Element<'_> {
    /// Canonical path of this element, see [`element_path`].
    pub fn path(&self) -> String {
        element_path(self)
    }
}

impl Attribute<'_> {
    /// Canonical path of this attribute, see [`attribute_path`].
    pub fn path(&self) -> String {
        attribute_path(self)
    }
}

impl SourceNode<'_> {
    /// Canonical path of this node, see [`path`].
    pub fn path(&self) -> String {
        path(self)
    }
}
