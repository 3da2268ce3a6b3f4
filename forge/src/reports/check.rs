//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from definition linting.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    pub class: ClassOverview,
}

/// What a class definition declares, counted per section.
#[derive(Debug, Default)]
pub struct ClassOverview {
    pub name: String,
    pub parent: String,
    /// Field names with their datamodel type.
    pub fields: Vec<(String, String)>,
    /// Driving attribute, state count and transition count.
    pub lifecycle: Option<(String, usize, usize)>,
    pub methods: usize,
    pub indexes: usize,
    pub relations: usize,
    /// Menu node kind.
    pub menu: Option<String>,
    pub profiles: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.errors.is_empty() || !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                self.errors.len(),
                plural(self.errors.len())
            ));
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        self.class.render(out);
    }
}

impl Report for ClassOverview {
    fn render(&self, out: &mut dyn Output) {
        out.section(&self.name);
        out.key_value("parent", &self.parent);

        if let Some((attribute, states, transitions)) = &self.lifecycle {
            out.key_value(
                "lifecycle",
                &format!(
                    "{} ({} state{}, {} transition{})",
                    attribute,
                    states,
                    plural(*states),
                    transitions,
                    plural(*transitions)
                ),
            );
        }
        for (label, count) in [
            ("methods", self.methods),
            ("indexes", self.indexes),
            ("relations", self.relations),
        ] {
            if count > 0 {
                out.key_value(label, &count.to_string());
            }
        }
        if let Some(menu) = &self.menu {
            out.key_value("menu", menu);
        }
        if !self.profiles.is_empty() {
            out.key_value("profiles", &self.profiles.join(", "));
        }

        out.newline();
        out.preformatted(&format!(
            "  {} field{}:",
            self.fields.len(),
            plural(self.fields.len())
        ));
        for (name, field_type) in &self.fields {
            out.list_item(&format!("{} ({})", name, field_type));
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn report(errors: Vec<String>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("class.toml"),
            errors,
            warnings: vec!["enum field 'status' has no values\n  --> fields.status".into()],
            infos: Vec::new(),
            class: ClassOverview {
                name: "Server".into(),
                parent: "FunctionalCI".into(),
                fields: vec![("hostname".into(), "AttributeString".into())],
                lifecycle: Some(("status".into(), 2, 1)),
                menu: Some("OQLMenuNode".into()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = RecordingOutput::default();
        report(Vec::new()).render(&mut out);

        assert_eq!(
            out.text(),
            "\
warning: enum field 'status' has no values
  --> fields.status

✓ class.toml is valid

Server:
  parent      FunctionalCI
  lifecycle   status (2 states, 1 transition)
  menu        OQLMenuNode

  1 field:
    - hostname (AttributeString)"
        );
    }

    #[test]
    fn test_render_invalid_skips_overview() {
        let mut out = RecordingOutput::default();
        report(vec!["transition 'ev_x' targets undeclared state 'y'".into()]).render(&mut out);

        let text = out.text();
        assert!(text.starts_with("error: transition 'ev_x'"));
        assert!(text.ends_with("✗ class.toml has 1 error"));
        assert!(!text.contains("parent"));
    }
}
