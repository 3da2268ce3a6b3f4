//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from document generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub class_name: String,
    /// Lint errors; the document is still generated.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Where the generated document went.
#[derive(Debug)]
pub enum GenerationResult {
    /// The document, to be printed as is.
    Printed(String),
    /// The document was written to this file.
    Written(PathBuf),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            // Already newline-terminated
            GenerationResult::Printed(document) => {
                out.preformatted(document.strip_suffix('\n').unwrap_or(document.as_str()))
            }
            GenerationResult::Written(path) => out.preformatted(&format!(
                "✓ wrote {} to {}",
                self.class_name,
                path.display()
            )),
        }
    }
}
