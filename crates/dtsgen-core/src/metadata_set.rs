//! JSON-backed metadata source.
//!
//! The manifest groups type definitions by assembly:
//!
//! ```json
//! {
//!   "assemblies": [
//!     {
//!       "name": "Acme.Core",
//!       "types": [{ "namespace": "Acme", "name": "Widget" }],
//!       "load_failures": ["Acme.Broken: could not load dependency"]
//!     }
//!   ]
//! }
//! ```
//!
//! `load_failures` lists types the producer could not materialize; an
//! assembly with any of them reports a partial load.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::metadata::TypeDef;
use crate::{ExportedTypes, MetadataSource};

/// One assembly's exported type definitions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AssemblyDef {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeDef>,
    #[serde(default)]
    pub load_failures: Vec<String>,
}

#[derive(serde::Deserialize)]
struct RawManifest {
    #[serde(default)]
    assemblies: Vec<AssemblyDef>,
}

/// Errors from loading a metadata manifest.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid metadata manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory metadata source indexed by full type name.
#[derive(Clone, Debug, Default)]
pub struct MetadataSet {
    assemblies: Vec<AssemblyDef>,
    /// Full name -> (assembly index, type index). First definition wins.
    by_name: IndexMap<String, (usize, usize)>,
}

impl MetadataSet {
    pub fn new(assemblies: Vec<AssemblyDef>) -> Self {
        let mut by_name = IndexMap::new();
        for (a, assembly) in assemblies.iter().enumerate() {
            for (t, ty) in assembly.types.iter().enumerate() {
                by_name.entry(ty.full_name()).or_insert((a, t));
            }
        }
        Self {
            assemblies,
            by_name,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let manifest: RawManifest = serde_json::from_str(json)?;
        Ok(Self::new(manifest.assemblies))
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn assemblies(&self) -> &[AssemblyDef] {
        &self.assemblies
    }

    pub fn assembly(&self, name: &str) -> Option<&AssemblyDef> {
        self.assemblies.iter().find(|a| a.name == name)
    }

    /// Number of distinct type full names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl MetadataSource for MetadataSet {
    fn type_def(&self, full_name: &str) -> Option<&TypeDef> {
        let &(a, t) = self.by_name.get(full_name)?;
        Some(&self.assemblies[a].types[t])
    }

    fn exported_types(&self, assembly: &str) -> Option<ExportedTypes<'_>> {
        let assembly = self.assembly(assembly)?;
        Some(ExportedTypes {
            types: assembly
                .types
                .iter()
                .filter(|t| t.is_public && !t.is_nested())
                .collect(),
            load_failures: assembly.load_failures.clone(),
        })
    }
}
