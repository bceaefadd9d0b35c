//! Where content types and developer files come from.

use std::fs;
use std::path::{Path, PathBuf};

use mb_ir::{Config, ContentTypeDescriptor};
use mb_parse::SourceFile;
use mb_symbols::{Symbol, SymbolKind};
use serde::Deserialize;
use tracing::debug;

use crate::error::{DriverError, Result};

/// Enumerates the content types of the host.
pub trait ContentTypeSource {
    fn content_types(&self) -> Result<Vec<ContentTypeDescriptor>>;

    /// Types of the host's referenced assemblies beyond the built-in set.
    fn references(&self) -> Result<Vec<Symbol>> {
        Ok(Vec::new())
    }
}

impl ContentTypeSource for Vec<ContentTypeDescriptor> {
    fn content_types(&self) -> Result<Vec<ContentTypeDescriptor>> {
        Ok(self.clone())
    }
}

/// A content type export on disk.
///
/// Either a bare array of content types, or an object with
/// `content_types` and optional `references`.
#[derive(Clone, Debug)]
pub struct JsonSource {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypesDocument {
    Bare(Vec<ContentTypeDescriptor>),
    Full {
        content_types: Vec<ContentTypeDescriptor>,
        #[serde(default)]
        references: Vec<Reference>,
    },
}

#[derive(Deserialize)]
struct Reference {
    name: String,
    #[serde(default)]
    kind: ReferenceKind,
}

#[derive(Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ReferenceKind {
    #[default]
    Class,
    Interface,
    Struct,
    Enum,
}

impl From<ReferenceKind> for SymbolKind {
    fn from(kind: ReferenceKind) -> Self {
        match kind {
            ReferenceKind::Class => SymbolKind::Class,
            ReferenceKind::Interface => SymbolKind::Interface,
            ReferenceKind::Struct => SymbolKind::Struct,
            ReferenceKind::Enum => SymbolKind::Enum,
        }
    }
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn document(&self) -> Result<TypesDocument> {
        read_json(&self.path, "content type export")
    }
}

impl ContentTypeSource for JsonSource {
    fn content_types(&self) -> Result<Vec<ContentTypeDescriptor>> {
        Ok(match self.document()? {
            TypesDocument::Bare(types) | TypesDocument::Full { content_types: types, .. } => types,
        })
    }

    fn references(&self) -> Result<Vec<Symbol>> {
        Ok(match self.document()? {
            TypesDocument::Bare(_) => Vec::new(),
            TypesDocument::Full { references, .. } => references
                .into_iter()
                .map(|reference| Symbol::new(reference.name, reference.kind.into()))
                .collect(),
        })
    }
}

/// Read a generation config; fields left out keep their defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    read_json(path, "configuration")
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path, what: &'static str) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| DriverError::io("read", path, e))?;
    serde_json::from_str(&text).map_err(|source| DriverError::Json {
        what,
        path: path.to_path_buf(),
        source,
    })
}

/// Every `.cs` file under `dir`, generated files excluded, in path order.
pub fn read_developer_files(dir: &Path) -> Result<Vec<SourceFile>> {
    let mut paths = Vec::new();
    collect_sources(dir, &mut paths)?;
    paths.sort();
    debug!(dir = %dir.display(), files = paths.len(), "developer files found");

    paths
        .into_iter()
        .map(|path| {
            let text = fs::read_to_string(&path).map_err(|e| DriverError::io("read", &path, e))?;
            let name = path.strip_prefix(dir).unwrap_or(&path).display().to_string();
            Ok(SourceFile::new(name, text))
        })
        .collect()
}

fn collect_sources(dir: &Path, into: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| DriverError::io("list", dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| DriverError::io("list", dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            collect_sources(&path, into)?;
        } else if is_developer_source(&path) {
            into.push(path);
        }
    }
    Ok(())
}

fn is_developer_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(".cs") && !name.ends_with(".generated.cs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generated_files_are_not_developer_code() {
        assert!(is_developer_source(Path::new("Models/Page.cs")));
        assert!(!is_developer_source(Path::new("Models/Page.generated.cs")));
        assert!(!is_developer_source(Path::new("Models/readme.md")));
    }

    #[test]
    fn reference_kinds_map_to_symbols() {
        let reference: Reference =
            serde_json::from_str(r#"{ "name": "Acme.IWidget", "kind": "interface" }"#)
                .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            Symbol::new(reference.name, reference.kind.into()),
            Symbol::new("Acme.IWidget", SymbolKind::Interface)
        );
    }
}
