//! Datamodel document generation for itopforge.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware markup building blocks
//! - [`serializer`] - [`ClassDefinition`](itopforge_model::ClassDefinition) to document text
//! - [`lint`] - Definition lints and diagnostics

pub mod builder;
pub mod lint;
pub mod serializer;

pub use lint::{Diagnostic, Lint, Linter, Severity, lint, lint_with};
pub use serializer::{SerializeOptions, Serializer, serialize};
