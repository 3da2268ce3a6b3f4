use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for model operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the path of a class definition with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse class definition")]
    #[diagnostic(code(forge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("field '{field}' of type {field_type} cannot carry '{payload}'")]
    #[diagnostic(
        code(forge::schema_mismatch),
        help("'{payload}' is only meaningful for {expected} fields")
    )]
    SchemaMismatch {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: Option<SourceSpan>,
        field: String,
        field_type: String,
        payload: &'static str,
        expected: &'static str,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(forge::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate {context} '{name}'")]
    #[diagnostic(code(forge::duplicate_name), help("rename one of the two {context}s"))]
    DuplicateName {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("{message}")]
    #[diagnostic(code(forge::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(
        field: impl Into<String>,
        field_type: impl Into<String>,
        payload: &'static str,
        expected: &'static str,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::SchemaMismatch {
            src: NamedSource::new(filename, src.to_string()),
            span,
            field: field.into(),
            field_type: field_type.into(),
            payload,
            expected,
        })
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate name error
    pub fn duplicate_name(
        name: impl Into<String>,
        context: impl Into<String>,
        src: &str,
        filename: &str,
        spans: (Option<SourceSpan>, Option<SourceSpan>),
    ) -> Box<Self> {
        Box::new(Error::DuplicateName {
            src: NamedSource::new(filename, src.to_string()),
            first_span: spans.0,
            second_span: spans.1,
            name: name.into(),
            context: context.into(),
        })
    }
}
