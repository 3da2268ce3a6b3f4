//! Flat summary of an analyzed extension bundle.

use serde::{Deserialize, Serialize};

/// Extension name used when the module descriptor does not reveal one.
pub const UNKNOWN_EXTENSION: &str = "Unknown Extension";

/// Extension version used when the module descriptor does not reveal one.
pub const UNKNOWN_VERSION: &str = "Unknown Version";

/// Best-available summary of an extension bundle.
///
/// Sections absent from the source document are empty, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSummary {
    pub name: String,
    pub version: String,
    pub classes: Vec<ClassSummary>,
    pub menus: Vec<MenuSummary>,
    pub user_rights: Vec<ProfileRights>,
    pub module_parameters: Vec<ModuleParameter>,
    pub module_designs: Vec<ModuleDesign>,
}

impl ExtensionSummary {
    /// Create an empty summary for the given extension name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    /// Total number of fields across all classes.
    pub fn field_count(&self) -> usize {
        self.classes.iter().map(|c| c.fields.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub name: String,
    pub fields: Vec<FieldSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub name: String,
    /// Declared kind, e.g. `AttributeString`
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSummary {
    pub id: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRights {
    pub profile: String,
    pub rights: Vec<ActionRight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRight {
    pub action: String,
    pub allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleParameter {
    pub id: String,
    /// Display rendering of the parameter value
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDesign {
    pub id: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = ExtensionSummary::new(UNKNOWN_EXTENSION, UNKNOWN_VERSION);
        assert_eq!(summary.name, "Unknown Extension");
        assert_eq!(summary.version, "Unknown Version");
        assert!(summary.classes.is_empty());
        assert_eq!(summary.field_count(), 0);
    }

    #[test]
    fn test_serialize_json() {
        let mut summary = ExtensionSummary::new("My Extension", "1.2.0");
        summary.user_rights.push(ProfileRights {
            profile: "Administrator".to_string(),
            rights: vec![ActionRight {
                action: "read".to_string(),
                allowed: true,
            }],
        });

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["name"], "My Extension");
        assert_eq!(json["user_rights"][0]["rights"][0]["allowed"], true);
        assert_eq!(json["classes"], serde_json::json!([]));
    }
}
