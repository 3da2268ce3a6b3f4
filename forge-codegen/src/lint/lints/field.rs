//! Lint for kind-specific field payloads.

use itopforge_model::{ClassDefinition, FieldKind};

use super::super::Lint;
use crate::lint::Diagnostic;

/// Lint that checks enumeration values and external key targets.
pub struct FieldLint;

impl Lint for FieldLint {
    fn name(&self) -> &'static str {
        "fields"
    }

    fn check(&self, def: &ClassDefinition, diagnostics: &mut Vec<Diagnostic>) {
        for field in &def.fields {
            let location = format!("fields.{}", field.name);

            match &field.kind {
                FieldKind::Enum { values } if values.is_empty() => {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("enum field '{}' has no values", field.name),
                        )
                        .at(location),
                    );
                }
                FieldKind::Enum { values } => {
                    for (index, value) in values.iter().enumerate() {
                        if value.trim().is_empty() {
                            diagnostics.push(
                                Diagnostic::warning(
                                    self.name(),
                                    format!(
                                        "enum field '{}' has an empty value at position {}",
                                        field.name, index
                                    ),
                                )
                                .at(format!("{}.values", location)),
                            );
                        }
                    }

                    let default = field.default_value.trim();
                    if !default.is_empty() && !values.iter().any(|v| v.trim() == default) {
                        diagnostics.push(
                            Diagnostic::warning(
                                self.name(),
                                format!(
                                    "default value '{}' of '{}' is not one of its values",
                                    default, field.name
                                ),
                            )
                            .at(format!("{}.default_value", location)),
                        );
                    }
                }
                FieldKind::ExternalKey { target_class } if target_class.is_empty() => {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!("external key '{}' has no target class", field.name),
                        )
                        .at(location),
                    );
                }
                _ => {}
            }
        }
    }
}
