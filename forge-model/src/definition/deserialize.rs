use serde::{Deserialize, Deserializer};

/// Untagged enum to support both list and delimited-string formats
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum DelimitedFormat {
    List(Vec<String>),
    Joined(String),
}

impl From<DelimitedFormat> for Vec<String> {
    fn from(format: DelimitedFormat) -> Self {
        match format {
            DelimitedFormat::List(items) => items.iter().map(|s| s.trim().to_string()).collect(),
            DelimitedFormat::Joined(joined) => split_delimited(&joined),
        }
    }
}

/// Split a comma-separated string into trimmed entries.
///
/// An empty string yields no entries; empty segments between delimiters are
/// kept so validation can report them.
pub(super) fn split_delimited(joined: &str) -> Vec<String> {
    if joined.trim().is_empty() {
        return Vec::new();
    }
    joined.split(',').map(|s| s.trim().to_string()).collect()
}

pub(super) fn deserialize_delimited<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    DelimitedFormat::deserialize(deserializer).map(Into::into)
}
