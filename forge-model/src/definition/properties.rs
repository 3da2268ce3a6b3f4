use std::borrow::Cow;

use serde::Deserialize;

/// The recognized class properties.
///
/// Each property is emitted as one tag named after its [`PropertyKey`];
/// string properties left empty are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassProperties {
    /// Comma-separated class categories
    pub category: String,
    /// Whether the class is abstract
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    /// Key generation strategy
    pub key_type: String,
    /// Backing database table
    pub db_table: String,
    /// Primary key column
    pub db_key_field: String,
    /// Final class discriminator column
    pub db_final_class_field: String,
    /// Whether the class is a link class
    pub is_link: bool,
    /// Naming format of instances
    pub naming_format: String,
}

impl Default for ClassProperties {
    fn default() -> Self {
        Self {
            category: "bizmodel,searchable".to_string(),
            is_abstract: false,
            key_type: "autoincrement".to_string(),
            db_table: String::new(),
            db_key_field: "id".to_string(),
            db_final_class_field: "finalclass".to_string(),
            is_link: false,
            naming_format: String::new(),
        }
    }
}

impl ClassProperties {
    /// Iterate over the properties in emission order with their values.
    pub fn entries(&self) -> impl Iterator<Item = (PropertyKey, Cow<'_, str>)> + '_ {
        PropertyKey::ALL
            .iter()
            .map(move |key| (*key, key.value(self)))
    }

    /// Properties whose value is non-empty, in emission order.
    pub fn non_empty(&self) -> impl Iterator<Item = (PropertyKey, Cow<'_, str>)> + '_ {
        self.entries().filter(|(_, value)| !value.is_empty())
    }
}

/// A recognized class property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Category,
    Abstract,
    KeyType,
    DbTable,
    DbKeyField,
    DbFinalClassField,
    IsLink,
    NamingFormat,
}

impl PropertyKey {
    /// All keys in emission order.
    pub const ALL: [PropertyKey; 8] = [
        PropertyKey::Category,
        PropertyKey::Abstract,
        PropertyKey::KeyType,
        PropertyKey::DbTable,
        PropertyKey::DbKeyField,
        PropertyKey::DbFinalClassField,
        PropertyKey::IsLink,
        PropertyKey::NamingFormat,
    ];

    /// Tag name of the property in the generated document.
    pub fn tag(&self) -> &'static str {
        match self {
            PropertyKey::Category => "category",
            PropertyKey::Abstract => "abstract",
            PropertyKey::KeyType => "key_type",
            PropertyKey::DbTable => "db_table",
            PropertyKey::DbKeyField => "db_key_field",
            PropertyKey::DbFinalClassField => "db_final_class_field",
            PropertyKey::IsLink => "is_link",
            PropertyKey::NamingFormat => "naming_format",
        }
    }

    /// Rendered value of this property; booleans render as `true`/`false`.
    pub fn value<'a>(&self, props: &'a ClassProperties) -> Cow<'a, str> {
        match self {
            PropertyKey::Category => Cow::Borrowed(&props.category),
            PropertyKey::Abstract => Cow::Owned(props.is_abstract.to_string()),
            PropertyKey::KeyType => Cow::Borrowed(&props.key_type),
            PropertyKey::DbTable => Cow::Borrowed(&props.db_table),
            PropertyKey::DbKeyField => Cow::Borrowed(&props.db_key_field),
            PropertyKey::DbFinalClassField => Cow::Borrowed(&props.db_final_class_field),
            PropertyKey::IsLink => Cow::Owned(props.is_link.to_string()),
            PropertyKey::NamingFormat => Cow::Borrowed(&props.naming_format),
        }
    }
}
