//! Element tree for datamodel documents.
//!
//! Children are grouped by element name. A name seen once is held as
//! [`Nodes::One`], a repeated name as [`Nodes::Many`], the same loose shape a
//! generic markup-to-object conversion produces. Callers never match on the
//! shape directly; they go through [`to_sequence`].

use std::slice;

use quick_xml::{Reader, events::BytesStart, events::Event};
use serde_json::{Map, Value};

/// One element with its attributes, text and grouped children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Qualified name as written, e.g. `field` or `xsi:type`
    pub name: String,
    /// Attributes in document order, names qualified
    pub attributes: Vec<(String, String)>,
    /// Text and CDATA chunks joined without a separator.
    ///
    /// Text chunks are whitespace-trimmed and CDATA is kept as is, so
    /// `a <![CDATA[b]]> c` reads `abc`.
    pub text: String,
    /// Children grouped by name, in order of first appearance
    pub children: Vec<(String, Nodes)>,
}

/// One or more children sharing a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nodes {
    One(Box<Element>),
    Many(Vec<Element>),
}

impl Nodes {
    /// View the group as a slice regardless of its shape.
    pub fn as_slice(&self) -> &[Element] {
        match self {
            Nodes::One(element) => slice::from_ref(element.as_ref()),
            Nodes::Many(elements) => elements,
        }
    }

    fn push(&mut self, element: Element) {
        match self {
            Nodes::One(first) => {
                let first = std::mem::take(first.as_mut());
                *self = Nodes::Many(vec![first, element]);
            }
            Nodes::Many(elements) => elements.push(element),
        }
    }
}

/// Normalize an optional child group to a sequence.
///
/// Absent groups are empty.
pub fn to_sequence(nodes: Option<&Nodes>) -> &[Element] {
    nodes.map(Nodes::as_slice).unwrap_or(&[])
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attribute value by qualified name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute value by local name, ignoring any namespace prefix.
    pub fn attribute_local(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| local_name(key) == local)
            .map(|(_, value)| value.as_str())
    }

    /// The `id` attribute, empty when missing.
    pub fn id(&self) -> &str {
        self.attribute("id").unwrap_or_default()
    }

    /// The `xsi:type` attribute, falling back to any `type` attribute.
    pub fn xsi_type(&self) -> &str {
        self.attribute("xsi:type")
            .or_else(|| self.attribute_local("type"))
            .unwrap_or_default()
    }

    /// The child group with this name.
    pub fn child(&self, name: &str) -> Option<&Nodes> {
        self.children
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, nodes)| nodes)
    }

    /// All children with this name.
    pub fn children_named(&self, name: &str) -> &[Element] {
        to_sequence(self.child(name))
    }

    /// Every element reached by following `path` from this element.
    ///
    /// Each step fans out over all same-named children.
    pub fn select(&self, path: &[&str]) -> Vec<&Element> {
        let mut current = vec![self];
        for step in path {
            current = current
                .into_iter()
                .flat_map(|element| element.children_named(step))
                .collect();
        }
        current
    }

    /// Returns true if the element has neither attributes nor children.
    pub fn is_leaf(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }

    /// Compact JSON rendering of the element.
    ///
    /// Leaves render as their text. Otherwise attributes become `@name` keys,
    /// repeated children become arrays and any text is kept under `#text`.
    pub fn to_json(&self) -> Value {
        if self.is_leaf() {
            return Value::String(self.text.clone());
        }

        let mut map = Map::new();
        for (name, value) in &self.attributes {
            map.insert(format!("@{}", name), Value::String(value.clone()));
        }
        for (name, nodes) in &self.children {
            map.insert(name.clone(), nodes_to_json(nodes));
        }
        if !self.text.is_empty() {
            map.insert("#text".to_string(), Value::String(self.text.clone()));
        }
        Value::Object(map)
    }

    fn append_child(&mut self, child: Element) {
        match self.children.iter_mut().find(|(key, _)| *key == child.name) {
            Some((_, nodes)) => nodes.push(child),
            None => self
                .children
                .push((child.name.clone(), Nodes::One(Box::new(child)))),
        }
    }

    fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// JSON rendering of a child group.
pub fn nodes_to_json(nodes: &Nodes) -> Value {
    match nodes {
        Nodes::One(element) => element.to_json(),
        Nodes::Many(elements) => Value::Array(elements.iter().map(Element::to_json).collect()),
    }
}

fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

/// A well-formedness error with its byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub offset: usize,
    pub message: String,
}

impl SyntaxError {
    fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

fn to_offset(position: impl TryInto<usize>) -> usize {
    position.try_into().unwrap_or(usize::MAX)
}

/// Parse a document into its root element.
pub fn parse(src: &str) -> Result<Element, SyntaxError> {
    let mut reader = Reader::from_str(src);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = to_offset(reader.buffer_position());
        let event = reader
            .read_event()
            .map_err(|e| SyntaxError::new(to_offset(reader.error_position()), e.to_string()))?;

        match event {
            Event::Start(ref e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(SyntaxError::new(position, "more than one root element"));
                }
                stack.push(start_element(e, position)?);
            }
            Event::Empty(ref e) => {
                let element = start_element(e, position)?;
                match stack.last_mut() {
                    Some(parent) => parent.append_child(element),
                    None if root.is_none() => root = Some(element),
                    None => return Err(SyntaxError::new(position, "more than one root element")),
                }
            }
            Event::End(_) => {
                let Some(element) = stack.pop() else {
                    return Err(SyntaxError::new(position, "unexpected end tag"));
                };
                match stack.last_mut() {
                    Some(parent) => parent.append_child(element),
                    None => root = Some(element),
                }
            }
            Event::Text(ref t) => {
                let text = t
                    .unescape()
                    .map_err(|e| SyntaxError::new(position, e.to_string()))?;
                match stack.last_mut() {
                    Some(element) => element.append_text(&text),
                    None => return Err(SyntaxError::new(position, "text outside the root element")),
                }
            }
            Event::CData(ref c) => {
                if let Some(element) = stack.last_mut() {
                    element.append_text(&String::from_utf8_lossy(c));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SyntaxError::new(
            src.len(),
            format!("element <{}> is never closed", open.name),
        ));
    }

    root.ok_or_else(|| SyntaxError::new(0, "document has no root element"))
}

fn start_element(e: &BytesStart<'_>, position: usize) -> Result<Element, SyntaxError> {
    let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()));

    for attr in e.attributes() {
        let attr = attr.map_err(|err| SyntaxError::new(position, err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| SyntaxError::new(position, err.to_string()))?;
        element.attributes.push((key, value.into_owned()));
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_repeated_children() {
        let root = parse(
            r#"<root>
                <one id="a"/>
                <many id="x"/>
                <many id="y"/>
            </root>"#,
        )
        .unwrap();

        assert!(matches!(root.child("one"), Some(Nodes::One(_))));
        assert!(matches!(root.child("many"), Some(Nodes::Many(_))));

        let ids: Vec<_> = root.children_named("many").iter().map(Element::id).collect();
        assert_eq!(ids, ["x", "y"]);
        assert_eq!(root.children_named("one").len(), 1);
        assert!(root.children_named("none").is_empty());
    }

    #[test]
    fn test_to_sequence() {
        assert!(to_sequence(None).is_empty());

        let one = Nodes::One(Box::new(Element::new("a")));
        assert_eq!(to_sequence(Some(&one)).len(), 1);
    }

    #[test]
    fn test_text_and_cdata() {
        let root = parse("<code>  <![CDATA[if (a < b) {}]]>  </code>").unwrap();
        assert_eq!(root.text, "if (a < b) {}");

        let root = parse("<action id=\"action:read\">\n  allow\n</action>").unwrap();
        assert_eq!(root.text, "allow");
    }

    #[test]
    fn test_text_around_cdata() {
        let root = parse("<code>a <![CDATA[b]]> c</code>").unwrap();
        assert_eq!(root.text, "abc");

        let root = parse("<code><![CDATA[ b ]]></code>").unwrap();
        assert_eq!(root.text, " b ");
    }

    #[test]
    fn test_escaped_values() {
        let root = parse(r#"<oql name="a &amp; b">x &lt; 3</oql>"#).unwrap();
        assert_eq!(root.attribute("name"), Some("a & b"));
        assert_eq!(root.text, "x < 3");
    }

    #[test]
    fn test_xsi_type() {
        let root = parse(r#"<field id="a" xsi:type="AttributeString"/>"#).unwrap();
        assert_eq!(root.xsi_type(), "AttributeString");

        let root = parse(r#"<field id="a" type="AttributeEnum"/>"#).unwrap();
        assert_eq!(root.xsi_type(), "AttributeEnum");

        assert_eq!(Element::new("field").xsi_type(), "");
    }

    #[test]
    fn test_select_fans_out() {
        let root = parse(
            r#"<design>
                <profiles><profile id="a"/></profiles>
                <profiles><profile id="b"/><profile id="c"/></profiles>
            </design>"#,
        )
        .unwrap();

        let ids: Vec<_> = root
            .select(&["profiles", "profile"])
            .into_iter()
            .map(Element::id)
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_to_json() {
        let root = parse(
            r#"<params>
                <limit>10</limit>
                <hosts><host>a</host><host>b</host></hosts>
                <flag enabled="true"/>
            </params>"#,
        )
        .unwrap();

        assert_eq!(root.children_named("limit")[0].to_json(), Value::from("10"));
        assert_eq!(
            root.children_named("hosts")[0].to_json().to_string(),
            r#"{"host":["a","b"]}"#
        );
        assert_eq!(
            root.children_named("flag")[0].to_json().to_string(),
            r#"{"@enabled":"true"}"#
        );
    }

    #[test]
    fn test_mismatched_end_tag() {
        let err = parse("<a><b></a>").unwrap_err();
        assert!(err.offset > 0);
    }

    #[test]
    fn test_unclosed_element() {
        assert!(parse("<a><b></b>").is_err());
    }

    #[test]
    fn test_empty_document() {
        let err = parse("  ").unwrap_err();
        assert_eq!(err.message, "document has no root element");
    }

    #[test]
    fn test_second_root() {
        let err = parse("<a/><b/>").unwrap_err();
        assert!(err.message.contains("root"));
    }
}
