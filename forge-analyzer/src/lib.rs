//! Extension bundle analysis for itopforge.
//!
//! [`analyze`] takes the bytes of a zipped extension bundle, locates its
//! datamodel document and module descriptor, and reduces them to an
//! [`ExtensionSummary`]. The document is read into an [`Element`] tree whose
//! repeated children may appear once or many times; every access goes through
//! [`to_sequence`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod archive;
mod descriptor;
mod error;
pub mod tree;
mod walk;

pub use archive::{Bundle, BundleEntry, is_datamodel_entry, is_descriptor_entry};
pub use descriptor::ModuleDescriptor;
pub use error::{Error, Result};
pub use itopforge_model::ExtensionSummary;
pub use tree::{Element, Nodes, to_sequence};
pub use walk::summarize;

/// Analyze the bytes of an extension bundle.
///
/// Fails only when the bytes are not an archive, when no datamodel document
/// is present, or when that document is not well-formed. Missing sections and
/// an unreadable descriptor degrade to empty sequences and placeholder names.
pub fn analyze(bytes: &[u8]) -> Result<ExtensionSummary> {
    let bundle = Bundle::read(bytes)?;

    let datamodel = bundle.datamodel.as_ref().ok_or(Error::MissingDatamodel)?;
    let descriptor = match &bundle.descriptor {
        Some(entry) => ModuleDescriptor::parse(&String::from_utf8_lossy(&entry.content)),
        None => {
            tracing::warn!("bundle has no module descriptor");
            ModuleDescriptor::unknown()
        }
    };

    let source = datamodel.text().map_err(|e| Error::not_utf8(&datamodel.name, &datamodel.content, e))?;
    let root = tree::parse(source).map_err(|e| Error::parse(&datamodel.name, source, e))?;

    Ok(summarize(&root, descriptor))
}
