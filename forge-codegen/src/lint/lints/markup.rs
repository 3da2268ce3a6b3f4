//! Lint for values containing markup-reserved characters.

use std::borrow::Cow;

use itopforge_core::Escaping;
use itopforge_model::{ClassDefinition, FieldKind};

use super::super::Lint;
use crate::lint::Diagnostic;

const RESERVED: [char; 4] = ['&', '<', '>', '"'];
const CDATA_END: &str = "]]>";

/// Lint that reports embedded values which need escaping.
///
/// Escaped values are reported as info. Under [`Escaping::Verbatim`] the same
/// values corrupt the document and are reported as warnings.
pub struct MarkupLint {
    escaping: Escaping,
}

impl MarkupLint {
    pub fn new(escaping: Escaping) -> Self {
        Self { escaping }
    }

    fn report(&self, location: String, what: &str) -> Diagnostic {
        let diagnostic = match self.escaping {
            Escaping::Markup => Diagnostic::info(self.name(), format!("{} is escaped", what)),
            Escaping::Verbatim => Diagnostic::warning(
                self.name(),
                format!("{} is embedded unescaped and corrupts the document", what),
            ),
        };
        diagnostic.at(location)
    }
}

impl Lint for MarkupLint {
    fn name(&self) -> &'static str {
        "markup"
    }

    fn check(&self, def: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for (location, value) in embedded_values(def) {
            if value.contains(RESERVED) {
                diagnostics.push(self.report(location, "value with reserved characters"));
            }
        }

        for method in &def.methods {
            if method.code.contains(CDATA_END) {
                diagnostics.push(self.report(
                    format!("methods.{}.code", method.name),
                    "code containing ']]>'",
                ));
            }
        }
    }
}

/// Every value written as text or attribute content, with its location.
fn embedded_values(def: &ClassDefinition) -> Vec<(String, &str)> {
    let mut values = vec![
        ("name".to_string(), def.name.as_str()),
        ("parent".to_string(), def.parent_name.as_str()),
    ];

    for (key, value) in def.properties.entries() {
        if let Cow::Borrowed(value) = value {
            values.push((format!("properties.{}", key.tag()), value));
        }
    }

    for field in &def.fields {
        let at = |member: &str| format!("fields.{}.{}", field.name, member);
        values.push((at("name"), field.name.as_str()));
        values.push((at("sql"), field.sql_column()));
        values.push((at("default_value"), field.default_value.as_str()));
        match &field.kind {
            FieldKind::Enum { values: items } => {
                values.extend(items.iter().map(|v| (at("values"), v.as_str())));
            }
            FieldKind::ExternalKey { target_class } => {
                values.push((at("target_class"), target_class.as_str()));
            }
            _ => {}
        }
    }

    if let Some(lifecycle) = def.active_lifecycle() {
        values.push(("lifecycle.attribute".to_string(), lifecycle.attribute.as_str()));
        for state in &lifecycle.states {
            let at = format!("lifecycle.states.{}", state.name);
            values.push((at.clone(), state.name.as_str()));
            values.push((format!("{}.highlight", at), state.highlight.as_str()));
        }
        for transition in &lifecycle.transitions {
            let at = format!("lifecycle.transitions.{}", transition.stimulus);
            values.push((at.clone(), transition.stimulus.as_str()));
            values.push((format!("{}.target", at), transition.target.as_str()));
            values.extend(
                transition
                    .actions
                    .iter()
                    .map(|a| (format!("{}.actions", at), a.as_str())),
            );
        }
    }

    for method in &def.methods {
        values.push((format!("methods.{}", method.name), method.name.as_str()));
    }

    for index in &def.indexes {
        let at = format!("indexes.{}", index.name);
        values.push((at.clone(), index.name.as_str()));
        values.extend(index.fields.iter().map(|f| (format!("{}.fields", at), f.as_str())));
    }

    for relation in &def.relations {
        let at = format!("relations.{}", relation.neighbour_class);
        values.push((at.clone(), relation.neighbour_class.as_str()));
        values.push((format!("{}.query_down", at), relation.query_down.as_str()));
        values.push((format!("{}.query_up", at), relation.query_up.as_str()));
    }

    if let Some(menu) = &def.menu {
        values.push(("menu.parent".to_string(), menu.parent.as_str()));
        if menu.has_query() {
            values.push(("menu.oql".to_string(), menu.oql.as_str()));
        }
    }

    for profile in &def.user_rights {
        let at = format!("user_rights.{}", profile.name);
        values.push((at.clone(), profile.name.as_str()));
        values.extend(profile.rights.keys().map(|k| (format!("{}.rights", at), k.as_str())));
    }

    if let Some(branding) = def.active_branding() {
        values.push(("branding.logo".to_string(), branding.logo.as_str()));
        values.push(("branding.main_color".to_string(), branding.main_color.as_str()));
        values.push((
            "branding.complementary_color".to_string(),
            branding.complementary_color.as_str(),
        ));
    }

    values
}
