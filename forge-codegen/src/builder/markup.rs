//! Markup builder for generating properly indented element trees.

use itopforge_core::{Escaping, cdata_section, escape_attribute, escape_text};

use super::Indent;

/// Fluent API for building markup with one element per line.
///
/// Open elements are tracked on a stack, so [`close`](Self::close) always
/// emits the matching end tag. Text and attribute values go through the
/// configured [`Escaping`]; tag and attribute names are written as given.
///
/// # Example
///
/// ```
/// use itopforge_codegen::builder::{Indent, MarkupBuilder};
/// use itopforge_core::Escaping;
///
/// let doc = MarkupBuilder::new(Indent::TWO, Escaping::Markup)
///     .element("fields", &[], |b| {
///         b.element("field", &[("id", "name")], |b| b.leaf("sql", &[], "name"))
///     })
///     .build();
///
/// assert_eq!(
///     doc,
///     "<fields>\n  <field id=\"name\">\n    <sql>name</sql>\n  </field>\n</fields>\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MarkupBuilder {
    indent: Indent,
    escaping: Escaping,
    open: Vec<String>,
    buffer: String,
}

impl MarkupBuilder {
    /// Create a new builder with the given indentation and escaping.
    pub fn new(indent: Indent, escaping: Escaping) -> Self {
        Self {
            indent,
            escaping,
            open: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Add a raw line at the current depth.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Open an element and indent its content.
    pub fn open(mut self, tag: &str, attrs: &[(&str, &str)]) -> Self {
        let mut line = self.start_tag(tag, attrs);
        line.push('>');
        self.push_line(&line);
        self.open.push(tag.to_string());
        self
    }

    /// Close the innermost open element.
    ///
    /// Does nothing when no element is open.
    pub fn close(mut self) -> Self {
        if let Some(tag) = self.open.pop() {
            self.push_line(&format!("</{}>", tag));
        }
        self
    }

    /// Add an element whose content is produced by `f`.
    pub fn element<F>(self, tag: &str, attrs: &[(&str, &str)], f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        f(self.open(tag, attrs)).close()
    }

    /// Add an element holding only text, on a single line.
    pub fn leaf(mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> Self {
        let mut line = self.start_tag(tag, attrs);
        line.push('>');
        line.push_str(&escape_text(text, self.escaping));
        line.push_str("</");
        line.push_str(tag);
        line.push('>');
        self.push_line(&line);
        self
    }

    /// Add a self-closing element.
    pub fn empty(mut self, tag: &str, attrs: &[(&str, &str)]) -> Self {
        let mut line = self.start_tag(tag, attrs);
        line.push_str("/>");
        self.push_line(&line);
        self
    }

    /// Add an element holding a literal CDATA block.
    pub fn cdata_leaf(mut self, tag: &str, content: &str) -> Self {
        let line = format!(
            "<{tag}>{}</{tag}>",
            cdata_section(content, self.escaping),
            tag = tag
        );
        self.push_line(&line);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder, closing any element still open.
    pub fn build(mut self) -> String {
        while !self.open.is_empty() {
            self = self.close();
        }
        self.buffer
    }

    fn start_tag(&self, tag: &str, attrs: &[(&str, &str)]) -> String {
        let mut out = format!("<{}", tag);
        for (name, value) in attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value, self.escaping));
            out.push('"');
        }
        out
    }

    fn push_line(&mut self, s: &str) {
        self.indent.write(&mut self.buffer, self.open.len());
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}

impl Default for MarkupBuilder {
    fn default() -> Self {
        Self::new(Indent::default(), Escaping::default())
    }
}
