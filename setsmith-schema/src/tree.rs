//! Attribute-merged XML tree.
//!
//! This module parses structure and set files into a generic,
//! order-preserving tree. Attributes and child elements merge into a single
//! field table per node, and every field always holds an array of values, so
//! downstream consumers never distinguish a single item from a list.

use crate::error::ParseError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::path::Path;

/// A parsed XML element with merged attributes and children.
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// Element tag name.
    name: String,
    /// Trimmed text content, if any.
    text: Option<String>,
    /// Fields in first-appearance order.
    fields: Vec<Field>,
    /// Field lookup map.
    index: HashMap<String, usize>,
}

/// Values collected under one field name.
#[derive(Debug, Clone, Default)]
struct Field {
    name: String,
    scalars: Vec<String>,
    nodes: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates a new node with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the element tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Appends text content to the node.
    pub fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Adds a scalar value under the given field name.
    pub fn push_scalar(&mut self, name: &str, value: impl Into<String>) {
        self.field_mut(name).scalars.push(value.into());
    }

    /// Adds a child node under its own tag name.
    pub fn push_node(&mut self, child: XmlNode) {
        let name = child.name.clone();
        self.field_mut(&name).nodes.push(child);
    }

    fn field_mut(&mut self, name: &str) -> &mut Field {
        if let Some(&idx) = self.index.get(name) {
            return &mut self.fields[idx];
        }
        let idx = self.fields.len();
        self.fields.push(Field {
            name: name.to_string(),
            ..Field::default()
        });
        self.index.insert(name.to_string(), idx);
        &mut self.fields[idx]
    }

    /// Returns true if a field with the given name exists.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns every scalar value under a field name.
    ///
    /// Attribute values come first, followed by the text of child elements
    /// that carry text and nothing else.
    #[must_use]
    pub fn scalars(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        let field = &self.fields[idx];
        let mut values: Vec<&str> = field.scalars.iter().map(String::as_str).collect();
        for node in &field.nodes {
            if node.fields.is_empty() {
                if let Some(text) = node.text() {
                    values.push(text);
                }
            }
        }
        values
    }

    /// Returns the first scalar value under a field name.
    #[must_use]
    pub fn first_scalar(&self, name: &str) -> Option<&str> {
        self.scalars(name).first().copied()
    }

    /// Returns the child nodes under a field name.
    #[must_use]
    pub fn nodes(&self, name: &str) -> &[XmlNode] {
        match self.index.get(name) {
            Some(&idx) => &self.fields[idx].nodes,
            None => &[],
        }
    }

    /// Iterates over every child node, grouped by tag in field order.
    pub fn child_nodes(&self) -> impl Iterator<Item = &XmlNode> {
        self.fields.iter().flat_map(|f| f.nodes.iter())
    }
}

/// Parses an XML document into its root node.
///
/// # Arguments
/// * `xml` - XML document content
///
/// # Returns
/// The attribute-merged root node.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or has no root element.
pub fn parse_document(xml: &str) -> Result<XmlNode, ParseError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let mut root = node_from_start(e)?;
                parse_children(&mut reader, &mut root)?;
                return Ok(root);
            }
            Ok(Event::Empty(ref e)) => return node_from_start(e),
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: "no root element found".to_string(),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }
}

/// Parses an XML document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_file(path: &Path) -> Result<XmlNode, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_document(&xml)
}

/// Builds a node from a start tag, merging its attributes as scalar fields.
fn node_from_start(e: &BytesStart<'_>) -> Result<XmlNode, ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let name = std::str::from_utf8(&name_bytes)?;
    let mut node = XmlNode::new(name);

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        node.push_scalar(key, value);
    }

    Ok(node)
}

/// Reads events until the node's end tag, merging children and text.
fn parse_children(reader: &mut Reader<&[u8]>, node: &mut XmlNode) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let mut child = node_from_start(e)?;
                parse_children(reader, &mut child)?;
                node.push_node(child);
            }
            Ok(Event::Empty(ref e)) => {
                node.push_node(node_from_start(e)?);
            }
            Ok(Event::Text(ref t)) => {
                let text = std::str::from_utf8(t.as_ref())?.trim();
                if !text.is_empty() {
                    node.append_text(text);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
