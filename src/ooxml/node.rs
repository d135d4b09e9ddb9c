//! Attributed element tree for DrawingML fragments.
//!
//! The resolvers only ever read a shape's `spPr`, a theme's `clrScheme`, or
//! a master's `clrMap`. These are small, so they are materialized into a
//! plain owned tree keyed by local names (namespace prefixes dropped), which
//! the readers in [`super::drawingml`] walk without touching the parser.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::common::num::parse_number;
use crate::common::{Error, Result};

/// Deepest element nesting accepted by [`XmlNode::parse`].
pub const MAX_DEPTH: usize = 256;

/// An element: local name, attributes in document order, child elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Parse the first root element of `xml`.
    ///
    /// Text, comments, and processing instructions are dropped. Input nested
    /// deeper than [`MAX_DEPTH`] elements is rejected as invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapepaint::ooxml::XmlNode;
    ///
    /// let node = XmlNode::parse(br#"<a:srgbClr val="FF0000"><a:alpha val="50000"/></a:srgbClr>"#).unwrap();
    /// assert_eq!(node.name, "srgbClr");
    /// assert_eq!(node.attr("val"), Some("FF0000"));
    /// assert_eq!(node.child("alpha").and_then(|a| a.attr_f64("val")), Some(50000.0));
    /// ```
    pub fn parse(xml: &[u8]) -> Result<XmlNode> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlNode> = Vec::new();

        loop {
            buf.clear();
            let event = reader.read_event_into(&mut buf)?;
            if matches!(event, Event::Start(_) | Event::Empty(_)) && stack.len() >= MAX_DEPTH {
                return Err(Error::InvalidFormat(format!("element nesting exceeds {MAX_DEPTH} levels")));
            }
            match event {
                Event::Start(ref e) => stack.push(Self::from_start(e)?),
                Event::Empty(ref e) => {
                    let node = Self::from_start(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                },
                Event::End(_) => {
                    let Some(node) = stack.pop() else {
                        return Err(Error::Xml("unexpected closing tag".to_string()));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Err(Error::InvalidFormat("document has no complete root element".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<XmlNode> {
        let name = std::str::from_utf8(e.local_name().as_ref())
            .map_err(|err| Error::Xml(err.to_string()))?
            .to_string();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.local_name().as_ref())
                .map_err(|err| Error::Xml(err.to_string()))?
                .to_string();
            let raw = std::str::from_utf8(&attr.value).map_err(|err| Error::Xml(err.to_string()))?;
            let value = quick_xml::escape::unescape(raw)
                .map_err(|err| Error::Xml(err.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }
        Ok(XmlNode {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    /// Attribute value by local name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute parsed as a number.
    pub fn attr_f64(&self, name: &str) -> Option<f64> {
        self.attr(name).and_then(parse_number)
    }

    /// Attribute pairs as borrowed strings.
    pub fn attr_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First direct child with local name `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children with local name `name`.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First element named `name` in depth-first order, including `self`.
    pub fn descendant(&self, name: &str) -> Option<&XmlNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.descendant(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_tree() {
        let xml = br#"<?xml version="1.0"?>
            <p:spPr xmlns:a="urn:a" xmlns:p="urn:p">
                <a:xfrm><a:off x="0" y="0"/><a:ext cx="914400" cy="457200"/></a:xfrm>
                <a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom>
            </p:spPr>"#;
        let node = XmlNode::parse(xml).unwrap();
        assert_eq!(node.name, "spPr");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.descendant("ext").and_then(|e| e.attr_f64("cx")), Some(914400.0));
        assert_eq!(node.child("prstGeom").and_then(|g| g.attr("prst")), Some("roundRect"));
        assert!(node.child("custGeom").is_none());
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let node = XmlNode::parse(br#"<gd name="adj" fmla="val &amp; 1"/>"#).unwrap();
        assert_eq!(node.attr("fmla"), Some("val & 1"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(XmlNode::parse(b"<a><b></a>"), Err(Error::Xml(_))));
        assert!(matches!(XmlNode::parse(b""), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let deep = format!("{}{}", "<a>".repeat(200_000), "</a>".repeat(200_000));
        assert!(matches!(XmlNode::parse(deep.as_bytes()), Err(Error::InvalidFormat(_))));

        let at_limit = format!("{}<b/>{}", "<a>".repeat(MAX_DEPTH - 1), "</a>".repeat(MAX_DEPTH - 1));
        let node = XmlNode::parse(at_limit.as_bytes()).unwrap();
        assert!(node.descendant("b").is_some());
    }

    #[test]
    fn test_children_named() {
        let node = XmlNode::new("pathLst")
            .with_child(XmlNode::new("path").with_attr("w", "10"))
            .with_child(XmlNode::new("other"))
            .with_child(XmlNode::new("path").with_attr("w", "20"));
        let widths: Vec<_> = node.children_named("path").filter_map(|p| p.attr_f64("w")).collect();
        assert_eq!(widths, vec![10.0, 20.0]);
    }
}
