//! Markup escaping for serialized datamodel documents.

use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape};

/// How textual content is embedded into the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Escape markup-reserved characters in text and attribute values.
    #[default]
    Markup,
    /// Embed values exactly as given.
    ///
    /// Values containing `<`, `&` or quotes will corrupt the document.
    Verbatim,
}

/// Escape element text content (`&`, `<`, `>`).
pub fn escape_text(value: &str, escaping: Escaping) -> Cow<'_, str> {
    match escaping {
        Escaping::Markup => partial_escape(value),
        Escaping::Verbatim => Cow::Borrowed(value),
    }
}

/// Escape an attribute value (`&`, `<`, `>`, `"`, `'`).
pub fn escape_attribute(value: &str, escaping: Escaping) -> Cow<'_, str> {
    match escaping {
        Escaping::Markup => escape(value),
        Escaping::Verbatim => Cow::Borrowed(value),
    }
}

/// Wrap a value in a CDATA section.
///
/// With [`Escaping::Markup`] every `]]>` inside the value is split across two
/// sections so the block cannot be closed early.
pub fn cdata_section(value: &str, escaping: Escaping) -> String {
    let body = match escaping {
        Escaping::Markup => Cow::Owned(value.replace("]]>", "]]]]><![CDATA[>")),
        Escaping::Verbatim => Cow::Borrowed(value),
    };
    format!("<![CDATA[{}]]>", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c", Escaping::Markup), "a &lt; b &amp; c");
        assert_eq!(escape_text("plain", Escaping::Markup), "plain");
        assert_eq!(escape_text("a < b", Escaping::Verbatim), "a < b");
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape_text("it's \"ok\"", Escaping::Markup), "it's \"ok\"");
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute("say \"hi\"", Escaping::Markup),
            "say &quot;hi&quot;"
        );
        assert_eq!(escape_attribute("say \"hi\"", Escaping::Verbatim), "say \"hi\"");
    }

    #[test]
    fn test_cdata_section() {
        assert_eq!(cdata_section("return 1;", Escaping::Markup), "<![CDATA[return 1;]]>");
        assert_eq!(
            cdata_section("a]]>b", Escaping::Markup),
            "<![CDATA[a]]]]><![CDATA[>b]]>"
        );
        assert_eq!(cdata_section("a]]>b", Escaping::Verbatim), "<![CDATA[a]]>b]]>");
    }

    #[test]
    fn test_default_is_markup() {
        assert_eq!(Escaping::default(), Escaping::Markup);
    }
}
