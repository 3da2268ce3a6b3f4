use std::str::Utf8Error;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::tree::SyntaxError;

/// Result type for analyzer operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("bundle is not a readable zip archive")]
    #[diagnostic(code(forge::analyzer::archive))]
    Archive {
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to read archive entry '{name}'")]
    #[diagnostic(code(forge::analyzer::entry))]
    Entry {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("no datamodel document found in the bundle")]
    #[diagnostic(
        code(forge::analyzer::missing_datamodel),
        help("the bundle needs an entry ending in '.xml' whose name contains 'datamodel'")
    )]
    MissingDatamodel,

    #[error("malformed datamodel document '{entry}'")]
    #[diagnostic(code(forge::analyzer::parse))]
    Parse {
        entry: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },
}

impl Error {
    pub(crate) fn entry(
        name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Box<Self> {
        Box::new(Self::Entry {
            name: name.into(),
            source: source.into(),
        })
    }

    pub(crate) fn parse(entry: &str, src: &str, err: SyntaxError) -> Box<Self> {
        Box::new(Self::Parse {
            entry: entry.to_string(),
            src: NamedSource::new(entry, src.to_string()),
            span: point(err.offset, src.len()),
            reason: err.message,
        })
    }

    pub(crate) fn not_utf8(entry: &str, bytes: &[u8], err: Utf8Error) -> Box<Self> {
        let src = String::from_utf8_lossy(bytes).into_owned();
        let offset = err.valid_up_to();
        Box::new(Self::Parse {
            entry: entry.to_string(),
            span: point(offset, src.len()),
            src: NamedSource::new(entry, src),
            reason: "document is not valid UTF-8".to_string(),
        })
    }

    /// Byte offset of the error in the datamodel document, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Parse { span, .. } => Some(span.offset()),
            _ => None,
        }
    }
}

/// A one-character span at `offset`, clamped to the source.
fn point(offset: usize, len: usize) -> SourceSpan {
    let offset = offset.min(len);
    let width = usize::from(offset < len);
    (offset, width).into()
}
