//! Add/emit/write workflow over one metadata source.

use std::path::Path;

use dtsgen_core::{MetadataSource, TypeRef};

use crate::Result;
use crate::graph::{GraphBuilder, TypeGraph};
use crate::typegen::typescript::{self, Config};

/// Collects seed types, then renders their closure as declarations.
///
/// Seeding only grows the graph; `clear` (or dropping the generator)
/// releases it.
pub struct Generator<'s, S: MetadataSource + ?Sized> {
    builder: GraphBuilder<'s, S>,
    config: Config,
}

impl<'s, S: MetadataSource + ?Sized> Generator<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: &'s S, config: Config) -> Self {
        Self {
            builder: GraphBuilder::new(source),
            config,
        }
    }

    /// Seed with every public exported type of an assembly.
    pub fn add_assembly(&mut self, assembly: &str) -> Result<usize> {
        self.builder.add_assembly(assembly)
    }

    pub fn add_type(&mut self, ty: &TypeRef) -> usize {
        self.builder.add_type(ty)
    }

    pub fn add_type_named(&mut self, full_name: &str) -> Result<usize> {
        self.builder.add_type_named(full_name)
    }

    pub fn graph(&self) -> &TypeGraph<'s> {
        self.builder.graph()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn emit(&self) -> String {
        typescript::emit_with_config(self.graph(), self.config.clone())
    }

    /// Render and persist in one blocking write.
    pub fn write(&self, path: &Path) -> Result<()> {
        typescript::write(self.graph(), self.config.clone(), path)
    }

    /// Drop every admitted type.
    pub fn clear(&mut self) {
        self.builder.clear();
    }
}
