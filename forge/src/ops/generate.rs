//! Generate operation - document serialization.

use std::path::Path;

use eyre::{Context, Result, bail};
use itopforge_codegen::{SerializeOptions, Serializer, lint_with};
use itopforge_core::{Escaping, OutputFile, Overwrite, WriteResult};
use itopforge_model::ClassDefinition;
use tracing::debug;

use super::Messages;
use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// File to write; the document is returned for printing when absent.
    pub output: Option<&'a Path>,
    /// Whether an existing output file may be replaced.
    pub force: bool,
    pub escaping: Escaping,
}

/// Execute the generate operation.
///
/// Lint findings never block generation; they are reported alongside the
/// document.
pub fn generate(def: &ClassDefinition, opts: GenerateOptions) -> Result<GenerateReport> {
    let Messages {
        errors, warnings, ..
    } = Messages::collect(&lint_with(def, opts.escaping));

    let serializer = Serializer::new(SerializeOptions::default().with_escaping(opts.escaping));
    let document = serializer.serialize(def);

    let result = match opts.output {
        None => GenerationResult::Printed(document),
        Some(path) => {
            let overwrite = if opts.force {
                Overwrite::Always
            } else {
                Overwrite::IfMissing
            };
            let file = OutputFile::new(path, document).overwrite(overwrite);
            match file
                .write()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?
            {
                WriteResult::Written => debug!(path = %path.display(), "wrote document"),
                WriteResult::Skipped => bail!(
                    "{} already exists (pass --force to overwrite it)",
                    path.display()
                ),
            }
            GenerationResult::Written(path.to_path_buf())
        }
    };

    Ok(GenerateReport {
        class_name: def.name.clone(),
        errors,
        warnings,
        result,
    })
}
