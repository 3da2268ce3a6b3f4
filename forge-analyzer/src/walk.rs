//! Reduction of a datamodel tree to an extension summary.

use itopforge_model::{
    ActionRight, ClassSummary, ExtensionSummary, FieldSummary, MenuSummary, ModuleDesign,
    ModuleParameter, ProfileRights,
};
use tracing::debug;

use crate::{
    descriptor::ModuleDescriptor,
    tree::{Element, Nodes, nodes_to_json},
};

const DESIGN_ROOT: &str = "itop_design";
const ACTION_PREFIX: &str = "action:";
const MODULE_DESIGN_DESCRIPTION: &str = "Module design details";

/// Build the summary of a parsed datamodel document.
///
/// A root other than `itop_design` yields a summary with every section empty.
pub fn summarize(root: &Element, descriptor: ModuleDescriptor) -> ExtensionSummary {
    let mut summary = ExtensionSummary::new(descriptor.name, descriptor.version);

    if root.name != DESIGN_ROOT {
        debug!(root = %root.name, "document root is not a datamodel design");
        return summary;
    }

    summary.classes = classes(root);
    summary.menus = menus(root);
    summary.user_rights = user_rights(root);
    summary.module_parameters = module_parameters(root);
    summary.module_designs = module_designs(root);

    debug!(
        classes = summary.classes.len(),
        fields = summary.field_count(),
        menus = summary.menus.len(),
        profiles = summary.user_rights.len(),
        "summarized datamodel"
    );
    summary
}

fn classes(root: &Element) -> Vec<ClassSummary> {
    root.select(&["classes", "class"])
        .into_iter()
        .map(|class| ClassSummary {
            name: class.id().to_string(),
            fields: class
                .select(&["fields", "field"])
                .into_iter()
                .map(|field| FieldSummary {
                    name: field.id().to_string(),
                    kind: field.xsi_type().to_string(),
                })
                .collect(),
        })
        .collect()
}

fn menus(root: &Element) -> Vec<MenuSummary> {
    root.select(&["menus", "menu"])
        .into_iter()
        .map(|menu| MenuSummary {
            id: menu.id().to_string(),
            kind: menu.xsi_type().to_string(),
        })
        .collect()
}

fn user_rights(root: &Element) -> Vec<ProfileRights> {
    root.select(&["user_rights", "profiles", "profile"])
        .into_iter()
        .map(|profile| ProfileRights {
            profile: profile.id().to_string(),
            rights: profile
                .select(&["groups", "group", "actions", "action"])
                .into_iter()
                .map(action_right)
                .collect(),
        })
        .collect()
}

fn action_right(action: &Element) -> ActionRight {
    let id = action.id();
    ActionRight {
        action: id.strip_prefix(ACTION_PREFIX).unwrap_or(id).to_string(),
        allowed: action.text.trim() == "allow",
    }
}

fn module_parameters(root: &Element) -> Vec<ModuleParameter> {
    root.select(&["module_parameters", "parameters"])
        .into_iter()
        .flat_map(|parameters| parameters.children.iter())
        .map(|(id, nodes)| ModuleParameter {
            id: id.clone(),
            value: parameter_value(nodes),
        })
        .collect()
}

/// Leaf parameters render as their text; anything else as compact JSON.
fn parameter_value(nodes: &Nodes) -> String {
    match nodes {
        Nodes::One(element) if element.is_leaf() => element.text.trim().to_string(),
        _ => nodes_to_json(nodes).to_string(),
    }
}

fn module_designs(root: &Element) -> Vec<ModuleDesign> {
    root.select(&["module_designs", "module_design"])
        .into_iter()
        .map(|design| ModuleDesign {
            id: design.id().to_string(),
            description: MODULE_DESIGN_DESCRIPTION.to_string(),
        })
        .collect()
}
