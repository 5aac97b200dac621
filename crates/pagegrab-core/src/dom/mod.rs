//! Typed document tree for page markup.
//!
//! The rewriter works on a tree of tagged node variants rather than on raw
//! markup text; attributes are a name-to-value mapping, so any attribute can
//! be read or overwritten without re-scanning the source.

mod parse;
mod serialize;

pub use parse::parse_document;

use std::collections::BTreeMap;

/// Attribute map for one element. Names are lowercased by the parser; a
/// `None` value is a value-less (boolean) attribute. The sorted map gives
/// serialization a stable attribute order.
pub type Attrs = BTreeMap<String, Option<String>>;

/// One node of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Raw text span, kept verbatim (entities are not decoded).
    Text(String),
    /// Comment or markup declaration (doctype included), kept verbatim.
    Comment(String),
}

/// An element node: lowercased tag name, attributes, child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Attrs,
    pub children: Vec<Node>,
}

impl Element {
    /// Value of attribute `name`, if present with a value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(|v| v.as_deref())
    }

    /// Sets attribute `name` to `value`, inserting or overwriting.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), Some(value.to_string()));
    }
}

/// A parsed page: the top-level node sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    /// Serializes the tree back to markup text.
    pub fn to_html(&self) -> String {
        serialize::serialize(self)
    }
}
