//! Class definition parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use serde::Deserialize;

use super::{
    AccessProfile, Branding, ClassDefinition, ClassProperties, DEFAULT_PARENT, Field, FieldKind,
    FieldType, Index, Lifecycle, MenuEntry, Method, Relation, deserialize::DelimitedFormat,
};
use crate::{Error, Result, validate::ParseContext};

/// Class definition as written in class.toml, before validation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDefinition {
    name: String,
    #[serde(default = "default_parent")]
    parent: String,
    #[serde(default)]
    properties: ClassProperties,
    #[serde(default)]
    fields: Vec<RawField>,
    lifecycle: Option<Lifecycle>,
    #[serde(default)]
    methods: Vec<Method>,
    #[serde(default)]
    indexes: Vec<Index>,
    #[serde(default)]
    relations: Vec<Relation>,
    menu: Option<MenuEntry>,
    #[serde(default)]
    user_rights: Vec<AccessProfile>,
    branding: Option<Branding>,
}

fn default_parent() -> String {
    DEFAULT_PARENT.to_string()
}

/// Field with its kind-specific payload still loose
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: String,
    #[serde(rename = "type", default)]
    field_type: FieldType,
    #[serde(default = "default_true")]
    nullable: bool,
    #[serde(default, alias = "default")]
    default_value: String,
    sql: Option<String>,
    values: Option<DelimitedFormat>,
    target_class: Option<String>,
}

fn default_true() -> bool {
    true
}

impl RawField {
    /// Resolve the payload against the declared type.
    fn into_field(self, ctx: &ParseContext<'_>) -> Result<Field> {
        let type_name = self.field_type.as_str();

        if self.values.is_some() && self.field_type != FieldType::Enum {
            return Err(ctx.schema_mismatch_error(
                &self.name,
                type_name,
                "values",
                FieldType::Enum.as_str(),
            ));
        }
        if self.target_class.is_some() && self.field_type != FieldType::ExternalKey {
            return Err(ctx.schema_mismatch_error(
                &self.name,
                type_name,
                "target_class",
                FieldType::ExternalKey.as_str(),
            ));
        }

        let kind = match self.field_type {
            FieldType::String => FieldKind::String,
            FieldType::Integer => FieldKind::Integer,
            FieldType::Enum => FieldKind::Enum {
                values: self.values.map(Into::into).unwrap_or_default(),
            },
            FieldType::ExternalKey => FieldKind::ExternalKey {
                target_class: self.target_class.unwrap_or_default(),
            },
            FieldType::LinkedSet => FieldKind::LinkedSet,
            FieldType::TagSet => FieldKind::TagSet,
            FieldType::CustomFields => FieldKind::CustomFields,
        };

        Ok(Field {
            name: self.name,
            kind,
            nullable: self.nullable,
            default_value: self.default_value,
            sql: self.sql,
        })
    }
}

impl FromStr for ClassDefinition {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_definition(s, "class.toml")
    }
}

impl ClassDefinition {
    /// Parse a class.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_definition(&content, &path.display().to_string())
    }

    /// Parse a class.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_definition(content, filename)
    }
}

/// Parse a definition from content with the given filename for error reporting.
pub fn parse_definition(content: &str, filename: &str) -> Result<ClassDefinition> {
    let raw: RawDefinition =
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    let ctx = ParseContext::new(content, filename);

    ctx.validate_name(&raw.name, "class")?;
    ctx.validate_name(&raw.parent, "parent class")?;

    let fields = validate_fields(raw.fields, &ctx.push("fields"))?;
    validate_indexes(&raw.indexes, &ctx.push("indexes"))?;

    Ok(ClassDefinition {
        name: raw.name,
        parent_name: raw.parent,
        properties: raw.properties,
        fields,
        lifecycle: raw.lifecycle,
        methods: raw.methods,
        indexes: raw.indexes,
        relations: raw.relations,
        menu: raw.menu,
        user_rights: raw.user_rights,
        branding: raw.branding,
    })
}

fn validate_fields(raw: Vec<RawField>, ctx: &ParseContext<'_>) -> Result<Vec<Field>> {
    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(raw.len());

    for raw_field in raw {
        ctx.validate_name(&raw_field.name, "field")?;
        if !seen.insert(raw_field.name.clone()) {
            return Err(ctx.duplicate_error(&raw_field.name, "field"));
        }
        fields.push(raw_field.into_field(ctx)?);
    }

    Ok(fields)
}

fn validate_indexes(indexes: &[Index], ctx: &ParseContext<'_>) -> Result<()> {
    for index in indexes {
        if index.fields.is_empty() {
            return Err(ctx.validation_error_for(
                &index.name,
                format!("index '{}' has no fields", index.name),
            ));
        }
        if let Some(position) = index.fields.iter().position(|f| f.is_empty()) {
            return Err(ctx.validation_error_for(
                &index.name,
                format!(
                    "index '{}' has an empty field name at position {}",
                    index.name, position
                ),
            ));
        }
    }
    Ok(())
}
