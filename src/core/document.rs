//! Read-only element tree for source invoices.
//!
//! Elements live in an arena owned by [`SourceDocument`] and are addressed
//! by [`NodeId`]. Qualified names are kept exactly as written in the source,
//! so `cbc:ID` and `ID` are distinct names even if both map to the same
//! namespace.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::XinvoiceError;

/// Index of an element inside a [`SourceDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct ElementData {
    name: String,
    attributes: Vec<(String, String)>,
    // (prefix, uri); the default namespace uses an empty prefix
    namespaces: Vec<(String, String)>,
    text: String,
    parent: Option<NodeId>,
    position: usize,
    children: Vec<NodeId>,
}

/// A parsed source document (UBL Invoice, UBL CreditNote or CII).
#[derive(Debug, Clone)]
pub struct SourceDocument {
    nodes: Vec<ElementData>,
    root: NodeId,
}

fn xml_err(reader: &Reader<&[u8]>, e: impl std::fmt::Display) -> XinvoiceError {
    XinvoiceError::Xml(format!(
        "parse error at position {}: {e}",
        reader.buffer_position()
    ))
}

impl SourceDocument {
    /// Parse XML text into an element tree.
    pub fn parse(xml: &str) -> Result<Self, XinvoiceError> {
        let mut reader = Reader::from_str(xml);

        let mut nodes: Vec<ElementData> = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut root: Option<NodeId> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let id = open_element(&mut nodes, &stack, &mut root, e, &reader)?;
                    stack.push(id);
                }
                Ok(Event::Empty(ref e)) => {
                    open_element(&mut nodes, &stack, &mut root, e, &reader)?;
                }
                Ok(Event::End(_)) => {
                    stack.pop();
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(&current) = stack.last() {
                        let text = e.unescape().map_err(|err| xml_err(&reader, err))?;
                        nodes[current.0].text.push_str(&text);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(&current) = stack.last() {
                        let text = std::str::from_utf8(e).map_err(|err| xml_err(&reader, err))?;
                        nodes[current.0].text.push_str(text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(xml_err(&reader, e)),
                _ => {}
            }
        }

        if let Some(&open) = stack.last() {
            return Err(XinvoiceError::Xml(format!(
                "unclosed element <{}>",
                nodes[open.0].name
            )));
        }

        let root = root.ok_or_else(|| XinvoiceError::Xml("document has no root element".into()))?;
        Ok(Self { nodes, root })
    }

    /// The document (root) element.
    pub fn root(&self) -> Element<'_> {
        Element {
            doc: self,
            id: self.root,
        }
    }

    /// Look up an element by id. Returns `None` for ids from another document.
    pub fn element(&self, id: NodeId) -> Option<Element<'_>> {
        (id.0 < self.nodes.len()).then_some(Element { doc: self, id })
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        (0..self.nodes.len()).map(move |i| Element {
            doc: self,
            id: NodeId(i),
        })
    }
}

fn open_element(
    nodes: &mut Vec<ElementData>,
    stack: &[NodeId],
    root: &mut Option<NodeId>,
    e: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<NodeId, XinvoiceError> {
    let name = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| xml_err(reader, err))?
        .to_string();

    let mut attributes = Vec::new();
    let mut namespaces = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_err(reader, err))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|err| xml_err(reader, err))?;
        let value = attr
            .unescape_value()
            .map_err(|err| xml_err(reader, err))?
            .to_string();
        if key == "xmlns" {
            namespaces.push((String::new(), value));
        } else if let Some(prefix) = key.strip_prefix("xmlns:") {
            namespaces.push((prefix.to_string(), value));
        } else {
            attributes.push((key.to_string(), value));
        }
    }

    let id = NodeId(nodes.len());
    let parent = stack.last().copied();
    let position = match parent {
        Some(p) => {
            let siblings = &mut nodes[p.0].children;
            siblings.push(id);
            siblings.len() - 1
        }
        None => {
            if root.is_some() {
                return Err(XinvoiceError::Xml(format!(
                    "second root element <{name}> at position {}",
                    reader.buffer_position()
                )));
            }
            *root = Some(id);
            0
        }
    };

    nodes.push(ElementData {
        name,
        attributes,
        namespaces,
        text: String::new(),
        parent,
        position,
        children: Vec::new(),
    });
    Ok(id)
}

/// Borrowed handle to an element of a [`SourceDocument`].
#[derive(Clone, Copy)]
pub struct Element<'a> {
    doc: &'a SourceDocument,
    id: NodeId,
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Element<'_> {}

impl<'a> Element<'a> {
    fn data(&self) -> &'a ElementData {
        &self.doc.nodes[self.id.0]
    }

    fn handle(&self, id: NodeId) -> Element<'a> {
        Element { doc: self.doc, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &'a SourceDocument {
        self.doc
    }

    /// Qualified name as written in the source (e.g. `cbc:IssueDate`).
    pub fn name(&self) -> &'a str {
        &self.data().name
    }

    /// Name without namespace prefix.
    pub fn local_name(&self) -> &'a str {
        let name = self.name();
        name.split_once(':').map_or(name, |(_, local)| local)
    }

    pub fn prefix(&self) -> Option<&'a str> {
        self.name().split_once(':').map(|(prefix, _)| prefix)
    }

    /// Namespace URI bound to this element's prefix, if declared.
    pub fn namespace_uri(&self) -> Option<&'a str> {
        let prefix = self.prefix().unwrap_or("");
        self.ancestors_or_self().find_map(|el| {
            el.data()
                .namespaces
                .iter()
                .find(|(p, _)| p == prefix)
                .map(|(_, uri)| uri.as_str())
        })
    }

    /// Character data directly inside this element, unmodified.
    pub fn text(&self) -> &'a str {
        &self.data().text
    }

    /// Attribute value by exact (qualified) name.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.data()
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = Attribute<'a>> + use<'a> {
        let owner = *self;
        (0..self.data().attributes.len()).map(move |index| Attribute { owner, index })
    }

    /// Attribute handle by exact name, usable as a path-locator target.
    pub fn attribute_node(&self, name: &str) -> Option<Attribute<'a>> {
        self.data()
            .attributes
            .iter()
            .position(|(k, _)| k == name)
            .map(|index| Attribute {
                owner: *self,
                index,
            })
    }

    pub fn parent(&self) -> Option<Element<'a>> {
        self.data().parent.map(|p| self.handle(p))
    }

    pub fn children(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| Element { doc, id })
    }

    fn siblings(&self) -> &'a [NodeId] {
        match self.data().parent {
            Some(p) => &self.doc.nodes[p.0].children,
            None => &[],
        }
    }

    /// Siblings before this element, in document order.
    pub fn preceding_siblings(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        let doc = self.doc;
        let siblings = self.siblings();
        let end = siblings.len().min(self.data().position);
        siblings[..end].iter().map(move |&id| Element { doc, id })
    }

    /// Siblings after this element, in document order.
    pub fn following_siblings(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        let doc = self.doc;
        let siblings = self.siblings();
        let start = siblings.len().min(self.data().position + 1);
        siblings[start..].iter().map(move |&id| Element { doc, id })
    }

    /// This element followed by its ancestors up to the root.
    pub fn ancestors_or_self(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        std::iter::successors(Some(*self), |el| el.parent())
    }

    /// Select nodes by a relative path of local names.
    ///
    /// A final step of the form `@name` selects that attribute on every
    /// matched element. Results are in document order.
    pub fn select(&self, steps: &[&str]) -> Vec<SourceNode<'a>> {
        let (attr, element_steps) = match steps.split_last() {
            Some((last, rest)) if last.starts_with('@') => (Some(&last[1..]), rest),
            _ => (None, steps),
        };

        let elements = self.select_elements(element_steps);
        match attr {
            Some(name) => elements
                .iter()
                .filter_map(|el| el.attribute_node(name))
                .map(SourceNode::Attribute)
                .collect(),
            None => elements.into_iter().map(SourceNode::Element).collect(),
        }
    }

    /// Select descendant elements by a relative path of local names.
    pub fn select_elements(&self, steps: &[&str]) -> Vec<Element<'a>> {
        let mut current = vec![*self];
        for step in steps {
            current = current
                .iter()
                .flat_map(|el| el.children())
                .filter(|child| child.local_name() == *step)
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

/// Borrowed handle to an attribute of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    owner: Element<'a>,
    index: usize,
}

impl<'a> Attribute<'a> {
    pub fn owner(&self) -> Element<'a> {
        self.owner
    }

    pub fn name(&self) -> &'a str {
        &self.owner.data().attributes[self.index].0
    }

    pub fn value(&self) -> &'a str {
        &self.owner.data().attributes[self.index].1
    }
}

/// Any node a field operation or the path locator can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceNode<'a> {
    Element(Element<'a>),
    Attribute(Attribute<'a>),
}

impl<'a> SourceNode<'a> {
    /// Element text, or the attribute value.
    pub fn text(&self) -> &'a str {
        match self {
            Self::Element(el) => el.text(),
            Self::Attribute(attr) => attr.value(),
        }
    }

    /// The element itself, or the attribute's owning element.
    pub fn element(&self) -> Element<'a> {
        match self {
            Self::Element(el) => *el,
            Self::Attribute(attr) => attr.owner(),
        }
    }
}

impl<'a> From<Element<'a>> for SourceNode<'a> {
    fn from(el: Element<'a>) -> Self {
        Self::Element(el)
    }
}

impl<'a> From<Attribute<'a>> for SourceNode<'a> {
    fn from(attr: Attribute<'a>) -> Self {
        Self::Attribute(attr)
    }
}
