//! Locating the datamodel document and module descriptor inside a bundle.

use std::io::{Cursor, Read};

use tracing::debug;
use zip::ZipArchive;

use crate::{Error, Result};

/// One archive entry read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    /// Full entry path inside the archive
    pub name: String,
    pub content: Vec<u8>,
}

impl BundleEntry {
    /// The content as UTF-8 text.
    pub fn text(&self) -> std::result::Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.content)
    }
}

/// The entries of a bundle the analyzer cares about.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    /// First entry matching [`is_datamodel_entry`], in archive order
    pub datamodel: Option<BundleEntry>,
    /// First entry matching [`is_descriptor_entry`], in archive order
    pub descriptor: Option<BundleEntry>,
}

impl Bundle {
    /// Scan zip archive bytes for the datamodel and descriptor entries.
    ///
    /// Only matching entries are decompressed, so unrelated entries stored
    /// with a method or encryption this build cannot read are skipped.
    pub fn read(bytes: &[u8]) -> Result<Self> {
        let mut archive =
            ZipArchive::new(Cursor::new(bytes)).map_err(|source| Error::Archive { source })?;
        let mut bundle = Bundle::default();
        debug!(entries = archive.len(), "scanning bundle");

        for index in 0..archive.len() {
            let name = {
                let raw = archive
                    .by_index_raw(index)
                    .map_err(|e| Error::entry(format!("#{}", index), e))?;
                if raw.is_dir() {
                    continue;
                }
                raw.name().to_string()
            };

            let wanted = (bundle.datamodel.is_none() && is_datamodel_entry(&name))
                || (bundle.descriptor.is_none() && is_descriptor_entry(&name));
            if !wanted {
                continue;
            }

            let mut content = Vec::new();
            archive
                .by_index(index)
                .map_err(|e| Error::entry(name.as_str(), e))?
                .read_to_end(&mut content)
                .map_err(|e| Error::entry(name.as_str(), e))?;

            let entry = BundleEntry { name, content };
            if is_datamodel_entry(&entry.name) {
                debug!(entry = %entry.name, "found datamodel document");
                bundle.datamodel = Some(entry);
            } else {
                debug!(entry = %entry.name, "found module descriptor");
                bundle.descriptor = Some(entry);
            }
        }

        Ok(bundle)
    }
}

/// Returns true for entries ending in `.xml` whose name contains `datamodel`.
pub fn is_datamodel_entry(name: &str) -> bool {
    name.ends_with(".xml") && name.contains("datamodel")
}

/// Returns true for entries whose file name is `module.<name>.php`.
pub fn is_descriptor_entry(name: &str) -> bool {
    let file_name = name.rsplit('/').next().unwrap_or(name);
    file_name
        .strip_prefix("module.")
        .and_then(|rest| rest.strip_suffix(".php"))
        .is_some_and(|middle| !middle.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_datamodel_entry() {
        assert!(is_datamodel_entry("datamodel.itop-server.xml"));
        assert!(is_datamodel_entry("ext/datamodel.xml"));
        assert!(!is_datamodel_entry("datamodel.itop-server.xml.bak"));
        assert!(!is_datamodel_entry("dictionary.xml"));
    }

    #[test]
    fn test_is_descriptor_entry() {
        assert!(is_descriptor_entry("module.itop-server.php"));
        assert!(is_descriptor_entry("itop-server/module.itop-server.php"));
        assert!(!is_descriptor_entry("module..php"));
        assert!(!is_descriptor_entry("model.itop-server.php"));
        assert!(!is_descriptor_entry("module.itop-server.php/readme.txt"));
    }

    #[test]
    fn test_not_an_archive() {
        let err = Bundle::read(b"definitely not a zip").unwrap_err();
        assert!(matches!(*err, Error::Archive { .. }));
    }
}
