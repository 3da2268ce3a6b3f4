use std::fmt;

use serde::Deserialize;

use super::deserialize::deserialize_delimited;

/// A class method with opaque source code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: MethodType,
    /// Method body, embedded as a literal block
    #[serde(default)]
    pub code: String,
}

/// Kind of a class method
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MethodType {
    #[default]
    #[serde(rename = "Overload-DBObject")]
    OverloadDbObject,
    LifecycleAction,
    Custom,
}

impl MethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodType::OverloadDbObject => "Overload-DBObject",
            MethodType::LifecycleAction => "LifecycleAction",
            MethodType::Custom => "Custom",
        }
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A database index over one or more fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Index {
    pub name: String,
    /// Indexed field names, in order
    ///
    /// Accepts an array or a comma-separated string.
    #[serde(deserialize_with = "deserialize_delimited")]
    pub fields: Vec<String>,
}

/// An impact relation to a neighbour class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Relation {
    #[serde(rename = "type", default)]
    pub kind: RelationKind,
    pub neighbour_class: String,
    #[serde(default)]
    pub query_down: String,
    #[serde(default)]
    pub query_up: String,
}

/// Kind of an impact relation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RelationKind {
    #[default]
    #[serde(rename = "impacts")]
    Impacts,
    #[serde(rename = "depends on", alias = "depends_on")]
    DependsOn,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Impacts => "impacts",
            RelationKind::DependsOn => "depends on",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default)]
        methods: Vec<Method>,
        #[serde(default)]
        indexes: Vec<Index>,
        #[serde(default)]
        relations: Vec<Relation>,
    }

    #[test]
    fn test_method_defaults() {
        let doc: Doc = toml::from_str(
            r#"
            [[methods]]
            name = "OnInsert"
            "#,
        )
        .unwrap();

        assert_eq!(doc.methods[0].kind, MethodType::OverloadDbObject);
        assert_eq!(doc.methods[0].kind.as_str(), "Overload-DBObject");
        assert!(doc.methods[0].code.is_empty());
    }

    #[test]
    fn test_index_fields_both_formats() {
        let doc: Doc = toml::from_str(
            r#"
            [[indexes]]
            name = "by_name"
            fields = "name, org_id"

            [[indexes]]
            name = "by_serial"
            fields = ["serial"]
            "#,
        )
        .unwrap();

        assert_eq!(doc.indexes[0].fields, ["name", "org_id"]);
        assert_eq!(doc.indexes[1].fields, ["serial"]);
    }

    #[test]
    fn test_relation_kinds() {
        let doc: Doc = toml::from_str(
            r#"
            [[relations]]
            neighbour_class = "Application"

            [[relations]]
            type = "depends on"
            neighbour_class = "Rack"
            query_down = "SELECT Rack"
            "#,
        )
        .unwrap();

        assert_eq!(doc.relations[0].kind, RelationKind::Impacts);
        assert_eq!(doc.relations[1].kind.to_string(), "depends on");
        assert_eq!(doc.relations[1].query_down, "SELECT Rack");
        assert!(doc.relations[1].query_up.is_empty());
    }
}
