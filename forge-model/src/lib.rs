//! Document model for iTop class definitions.
//!
//! A [`ClassDefinition`] describes one CMDB object type: its properties,
//! typed fields, lifecycle, methods, indexes, relations, menu entry, access
//! profiles and branding. Definitions are plain values; they are either built
//! in code or loaded from a TOML file, in which case they are validated at
//! construction and errors carry the source for miette reporting.
//!
//! [`ExtensionSummary`] is the flat record produced when an existing extension
//! bundle is analyzed.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod definition;
mod error;
mod summary;
mod validate;

pub use definition::*;
pub use error::{Error, Result};
pub use summary::{
    ActionRight, ClassSummary, ExtensionSummary, FieldSummary, MenuSummary, ModuleDesign,
    ModuleParameter, ProfileRights, UNKNOWN_EXTENSION, UNKNOWN_VERSION,
};
pub use validate::ParseContext;
