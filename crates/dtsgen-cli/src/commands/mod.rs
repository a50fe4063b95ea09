pub mod generate;
pub mod graph;

#[cfg(test)]
mod graph_tests;

use std::path::Path;

use dtsgen_core::MetadataSet;
use dtsgen_lib::Generator;

/// Seed selection shared by every command.
#[derive(Clone, Debug, Default)]
pub struct Seeds {
    pub assemblies: Vec<String>,
    pub types: Vec<String>,
}

impl Seeds {
    /// Seed the generator: assemblies first, then single types. With no
    /// explicit seed every assembly in the manifest is used.
    pub fn apply(
        &self,
        set: &MetadataSet,
        generator: &mut Generator<'_, MetadataSet>,
    ) -> dtsgen_lib::Result<()> {
        if self.assemblies.is_empty() && self.types.is_empty() {
            for assembly in set.assemblies() {
                generator.add_assembly(&assembly.name)?;
            }
            return Ok(());
        }

        for assembly in &self.assemblies {
            generator.add_assembly(assembly)?;
        }
        for full_name in &self.types {
            generator.add_type_named(full_name)?;
        }
        Ok(())
    }
}

/// Load the manifest or exit with an error.
pub fn load_metadata(path: &Path) -> MetadataSet {
    MetadataSet::from_path(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Seed the generator or exit with an error.
pub fn seed_or_exit(
    seeds: &Seeds,
    set: &MetadataSet,
    generator: &mut Generator<'_, MetadataSet>,
) {
    if let Err(e) = seeds.apply(set, generator) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
