//! Identifier checks and source-located errors for class definitions.

use miette::SourceSpan;

use crate::{Error, Result};

/// Where in a definition file validation currently is.
///
/// Carries the TOML source and file name so every error it builds can point
/// into the file. `push` descends into a section, e.g. `ctx.push("indexes")`.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    /// Section names from the root, e.g. `["lifecycle", "states"]`
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    /// A context one section deeper.
    pub fn push(&self, segment: &'a str) -> Self {
        Self {
            path: self.path.iter().copied().chain([segment]).collect(),
            ..self.clone()
        }
    }

    /// Section path joined with dots, empty at the root.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// `kind` qualified by the current section, as used in error titles.
    pub fn context_for(&self, kind: &str) -> String {
        match self.path.as_slice() {
            [] => kind.to_string(),
            _ => format!("{} in '{}'", kind, self.path_string()),
        }
    }

    /// First occurrence of `name` in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src, name, 0)
    }

    /// Reject names that cannot be used as class or field identifiers.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        match validate_identifier(name) {
            Some(reason) => Err(Error::invalid_identifier(
                name,
                self.context_for(kind),
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            )),
            None => Ok(()),
        }
    }

    /// Create a duplicate name error pointing at the first two occurrences.
    pub fn duplicate_error(&self, name: &str, kind: &str) -> Box<Error> {
        let first = self.find_span(name);
        let second = first.and_then(|span| find_name_span(self.src, name, span.offset() + span.len()));
        Error::duplicate_name(
            name,
            self.context_for(kind),
            self.src,
            self.filename,
            (first, second),
        )
    }

    /// Create a schema mismatch error for a field.
    pub fn schema_mismatch_error(
        &self,
        field: &str,
        field_type: &str,
        payload: &'static str,
        expected: &'static str,
    ) -> Box<Error> {
        Error::schema_mismatch(
            field,
            field_type,
            payload,
            expected,
            self.src,
            self.filename,
            self.find_span(field),
        )
    }

    /// Create a validation error labelled at the given name.
    pub fn validation_error_for(&self, name: &str, message: impl Into<String>) -> Box<Error> {
        Error::validation(message, self.src, self.filename, self.find_span(name))
    }
}

/// Find the span of a quoted name in the TOML source, starting at `from`.
///
/// Names appear as string values (`name = "hostname"`), so the quoted form is
/// searched first and the span covers the name without its quotes.
pub(crate) fn find_name_span(src: &str, name: &str, from: usize) -> Option<SourceSpan> {
    if name.is_empty() || from >= src.len() {
        return None;
    }
    let haystack = src.get(from..)?;

    let patterns = [format!("\"{}\"", name), format!("'{}'", name)];
    for pattern in &patterns {
        if let Some(pos) = haystack.find(pattern.as_str()) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((from + pos + 1, name.len())));
        }
    }

    // Unquoted, e.g. inside an inline array
    haystack
        .find(name)
        .map(|pos| SourceSpan::from((from + pos, name.len())))
}

/// Why `name` is not an identifier (`[A-Za-z_][A-Za-z0-9_]*`), if it is not.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("name cannot be empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            Some("name must start with a letter or underscore")
        }
        _ if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) => {
            Some("name contains invalid characters")
        }
        _ => None,
    }
}
