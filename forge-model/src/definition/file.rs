use std::path::{Path, PathBuf};

use super::{ClassDefinition, parse::parse_definition};
use crate::Result;

/// Represents a class.toml file with both raw content and parsed definition.
pub struct DefinitionFile {
    path: PathBuf,
    content: String,
    definition: ClassDefinition,
}

impl DefinitionFile {
    /// Open and parse a class.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let definition = parse_definition(&content, &filename)?;

        Ok(Self {
            path,
            content,
            definition,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed definition.
    pub fn definition(&self) -> &ClassDefinition {
        &self.definition
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("class.toml");
        fs::write(&path, "name = \"Server\"\nparent = \"FunctionalCI\"\n").unwrap();

        let file = DefinitionFile::open(&path).unwrap();

        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("FunctionalCI"));
        assert_eq!(file.definition().name, "Server");
        assert_eq!(file.definition().parent_name, "FunctionalCI");
    }

    #[test]
    fn test_open_reports_filename() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "name = ").unwrap();

        let err = DefinitionFile::open(&path).err().unwrap();
        assert!(matches!(*err, crate::Error::Parse { .. }));
    }
}
