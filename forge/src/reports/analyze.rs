//! Analyze command report data structures.

use std::path::PathBuf;

use itopforge_model::ExtensionSummary;

use super::output::{Output, Report};

/// Report data from bundle analysis.
#[derive(Debug)]
pub struct AnalyzeReport {
    pub bundle_path: PathBuf,
    pub field_count: usize,
    pub summary: ExtensionSummary,
}

impl Report for AnalyzeReport {
    fn render(&self, out: &mut dyn Output) {
        let summary = &self.summary;

        out.section(&summary.name);
        out.key_value("version", &summary.version);
        out.key_value("bundle", &self.bundle_path.display().to_string());
        out.key_value(
            "classes",
            &format!("{} ({} fields)", summary.classes.len(), self.field_count),
        );
        out.newline();

        if !summary.classes.is_empty() {
            out.section("Classes");
            for class in &summary.classes {
                out.list_item(&class.name);
                for field in &class.fields {
                    out.preformatted(&format!("        {}: {}", field.name, field.kind));
                }
            }
            out.newline();
        }

        if !summary.menus.is_empty() {
            out.section("Menus");
            for menu in &summary.menus {
                out.list_item(&format!("{} ({})", menu.id, menu.kind));
            }
            out.newline();
        }

        if !summary.user_rights.is_empty() {
            out.section("User rights");
            for profile in &summary.user_rights {
                let rights: Vec<_> = profile
                    .rights
                    .iter()
                    .map(|r| format!("{}={}", r.action, if r.allowed { "allow" } else { "deny" }))
                    .collect();
                out.list_item(&format!("{}: {}", profile.profile, rights.join(", ")));
            }
            out.newline();
        }

        if !summary.module_parameters.is_empty() {
            out.section("Module parameters");
            for param in &summary.module_parameters {
                out.key_value(&param.id, &param.value);
            }
            out.newline();
        }

        if !summary.module_designs.is_empty() {
            out.section("Module designs");
            for design in &summary.module_designs {
                out.list_item(&format!("{}: {}", design.id, design.description));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itopforge_model::{
        ActionRight, ClassSummary, FieldSummary, MenuSummary, ProfileRights, UNKNOWN_EXTENSION,
        UNKNOWN_VERSION,
    };

    use super::*;
    use crate::{ops, reports::RecordingOutput};

    #[test]
    fn test_render_summary() {
        let mut summary = ExtensionSummary::new("Server Pack", "1.2.0");
        summary.classes.push(ClassSummary {
            name: "Server".into(),
            fields: vec![FieldSummary {
                name: "hostname".into(),
                kind: "AttributeString".into(),
            }],
        });
        summary.menus.push(MenuSummary {
            id: "Server_menu".into(),
            kind: "OQLMenuNode".into(),
        });
        summary.user_rights.push(ProfileRights {
            profile: "Administrator".into(),
            rights: vec![
                ActionRight {
                    action: "read".into(),
                    allowed: true,
                },
                ActionRight {
                    action: "delete".into(),
                    allowed: false,
                },
            ],
        });

        let mut out = RecordingOutput::default();
        ops::analyze(summary, &PathBuf::from("pack.zip")).render(&mut out);

        assert_eq!(
            out.text(),
            "\
Server Pack:
  version     1.2.0
  bundle      pack.zip
  classes     1 (1 fields)

Classes:
    - Server
        hostname: AttributeString

Menus:
    - Server_menu (OQLMenuNode)

User rights:
    - Administrator: read=allow, delete=deny
"
        );
    }

    #[test]
    fn test_render_empty_summary() {
        let summary = ExtensionSummary::new(UNKNOWN_EXTENSION, UNKNOWN_VERSION);

        let mut out = RecordingOutput::default();
        ops::analyze(summary, &PathBuf::from("empty.zip")).render(&mut out);

        assert_eq!(out.lines.len(), 5);
        assert_eq!(out.lines[0], "Unknown Extension:");
    }
}
