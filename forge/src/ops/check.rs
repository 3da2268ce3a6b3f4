//! Check operation - class definition linting.

use std::path::Path;

use itopforge_codegen::lint;
use itopforge_model::ClassDefinition;

use super::Messages;
use crate::reports::{CheckReport, ClassOverview};

/// Execute the check operation.
///
/// Lints the definition and collects an overview of what it declares.
pub fn check(def: &ClassDefinition, config_path: &Path) -> CheckReport {
    let Messages {
        errors,
        warnings,
        infos,
    } = Messages::collect(&lint(def));

    CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        class: overview(def),
    }
}

fn overview(def: &ClassDefinition) -> ClassOverview {
    ClassOverview {
        name: def.name.clone(),
        parent: def.parent_name.clone(),
        fields: def
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.field_type().as_str().to_string()))
            .collect(),
        lifecycle: def
            .active_lifecycle()
            .map(|l| (l.attribute.clone(), l.states.len(), l.transitions.len())),
        methods: def.methods.len(),
        indexes: def.indexes.len(),
        relations: def.relations.len(),
        menu: def.menu.as_ref().map(|m| m.kind.as_str().to_string()),
        profiles: def.user_rights.iter().map(|p| p.name.clone()).collect(),
    }
}
