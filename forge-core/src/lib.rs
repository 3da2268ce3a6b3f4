//! Core utilities and types for the itopforge datamodel tools.
//!
//! This crate provides the markup escaping primitives and the output file
//! handling shared by the serializer and the command-line surface.

mod escape;
mod file;

// Markup escaping
pub use escape::{Escaping, cdata_section, escape_attribute, escape_text};
// File operations
pub use file::{OutputFile, Overwrite, WriteResult};
