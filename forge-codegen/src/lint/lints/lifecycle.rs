//! Lint for lifecycle consistency.

use itopforge_model::ClassDefinition;

use super::{super::Lint, is_element_name};
use crate::lint::Diagnostic;

/// Lint that checks the lifecycle against the fields and its own states.
pub struct LifecycleLint;

impl Lint for LifecycleLint {
    fn name(&self) -> &'static str {
        "lifecycle"
    }

    fn check(&self, def: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        let Some(lifecycle) = &def.lifecycle else {
            return;
        };

        if !lifecycle.is_active() {
            if !lifecycle.states.is_empty() || !lifecycle.transitions.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        "lifecycle has states or transitions but no attribute; the section is omitted",
                    )
                    .at("lifecycle"),
                );
            }
            return;
        }

        // The attribute may be inherited from the parent class.
        if def.field(&lifecycle.attribute).is_none() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "lifecycle attribute '{}' is not a field of '{}'",
                        lifecycle.attribute, def.name
                    ),
                )
                .at("lifecycle.attribute"),
            );
        }

        for state in &lifecycle.states {
            for flag in state.flags.keys() {
                if !is_element_name(flag) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("flag '{}' of state '{}' is not a valid tag name", flag, state.name),
                        )
                        .at(format!("lifecycle.states.{}.flags", state.name)),
                    );
                }
            }
        }

        for transition in &lifecycle.transitions {
            if !lifecycle.has_state(&transition.target) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "transition '{}' targets undeclared state '{}'",
                            transition.stimulus, transition.target
                        ),
                    )
                    .at(format!("lifecycle.transitions.{}", transition.stimulus)),
                );
            }
        }
    }
}
