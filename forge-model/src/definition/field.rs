use std::fmt;

use serde::{Deserialize, Serialize};

/// A typed class field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Field kind with its kind-specific payload
    pub kind: FieldKind,
    /// Whether the field accepts null values
    pub nullable: bool,
    pub default_value: String,
    /// Column name override; defaults to the field name
    pub sql: Option<String>,
}

impl Field {
    /// Create a nullable field with no default value.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: true,
            default_value: String::new(),
            sql: None,
        }
    }

    /// The column the field is stored in.
    pub fn sql_column(&self) -> &str {
        self.sql.as_deref().unwrap_or(&self.name)
    }

    /// The payload-free kind tag.
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }
}

/// Field kind and its kind-specific payload.
///
/// Only enumerations and external keys carry extra data; a mismatched
/// payload cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    /// Allowed values, in order
    Enum { values: Vec<String> },
    /// Reference to another class
    ExternalKey { target_class: String },
    LinkedSet,
    TagSet,
    CustomFields,
}

impl FieldKind {
    /// The payload-free kind tag.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String => FieldType::String,
            FieldKind::Integer => FieldType::Integer,
            FieldKind::Enum { .. } => FieldType::Enum,
            FieldKind::ExternalKey { .. } => FieldType::ExternalKey,
            FieldKind::LinkedSet => FieldType::LinkedSet,
            FieldKind::TagSet => FieldType::TagSet,
            FieldKind::CustomFields => FieldType::CustomFields,
        }
    }
}

/// Declared field type, as named by the target platform.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FieldType {
    #[default]
    #[serde(rename = "AttributeString", alias = "string")]
    String,
    #[serde(rename = "AttributeInteger", alias = "integer")]
    Integer,
    #[serde(rename = "AttributeEnum", alias = "enum")]
    Enum,
    #[serde(rename = "AttributeExternalKey", alias = "external_key")]
    ExternalKey,
    #[serde(rename = "AttributeLinkedSet", alias = "linked_set")]
    LinkedSet,
    #[serde(rename = "AttributeTagSet", alias = "tag_set")]
    TagSet,
    #[serde(rename = "AttributeCustomFields", alias = "custom_fields")]
    CustomFields,
}

impl FieldType {
    /// Returns the platform type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "AttributeString",
            FieldType::Integer => "AttributeInteger",
            FieldType::Enum => "AttributeEnum",
            FieldType::ExternalKey => "AttributeExternalKey",
            FieldType::LinkedSet => "AttributeLinkedSet",
            FieldType::TagSet => "AttributeTagSet",
            FieldType::CustomFields => "AttributeCustomFields",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
