//! Core operations.
//!
//! This module contains the business logic for forge commands,
//! separated from CLI argument parsing and output rendering.

pub mod analyze;
pub mod check;
pub mod generate;

pub use analyze::analyze;
pub use check::check;
pub use generate::{GenerateOptions, generate};

use itopforge_codegen::{Diagnostic, Severity};

/// Diagnostic messages split by severity, each with its location appended.
#[derive(Debug, Default)]
pub(crate) struct Messages {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl Messages {
    pub fn collect(diagnostics: &[Diagnostic]) -> Self {
        let mut messages = Self::default();
        for diag in diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{}\n  --> {}", diag.message, loc),
                None => diag.message.clone(),
            };

            match diag.severity {
                Severity::Error => messages.errors.push(msg),
                Severity::Warning => messages.warnings.push(msg),
                Severity::Info => messages.infos.push(msg),
            }
        }
        messages
    }
}
