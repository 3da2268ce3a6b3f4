//! Lint for the generated menu entry.

use itopforge_model::ClassDefinition;

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that checks the menu query against the menu kind.
pub struct MenuLint;

impl Lint for MenuLint {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn check(&self, def: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        let Some(menu) = &def.menu else {
            return;
        };

        if menu.has_query() && menu.oql.trim().is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("{} '{}' has an empty query", menu.kind, def.menu_id()),
                )
                .at("menu.oql"),
            );
        } else if !menu.has_query() && !menu.oql.is_empty() {
            diagnostics.push(
                Diagnostic::info(
                    self.name(),
                    format!("query is ignored for {} entries", menu.kind),
                )
                .at("menu.oql"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use itopforge_model::{MenuEntry, MenuKind};

    use super::*;

    fn check_menu(kind: MenuKind, oql: &str) -> Vec<Diagnostic> {
        let mut def = ClassDefinition::new("Server", "cmdbAbstractObject");
        def.menu = Some(MenuEntry {
            kind,
            parent: "ConfigManagement".into(),
            rank: 1,
            oql: oql.into(),
        });
        let mut diagnostics = Vec::new();
        MenuLint.check(&def, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_query_menu_without_query() {
        let diagnostics = check_menu(MenuKind::OqlMenuNode, " ");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Server_menu"));
    }

    #[test]
    fn test_ignored_query() {
        let diagnostics = check_menu(MenuKind::NewObjectMenuNode, "SELECT Server");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, crate::lint::Severity::Info);
    }

    #[test]
    fn test_valid_menus() {
        assert!(check_menu(MenuKind::OqlMenuNode, "SELECT Server").is_empty());
        assert!(check_menu(MenuKind::SearchMenuNode, "").is_empty());
    }
}
