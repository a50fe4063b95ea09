#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for dtsgen type metadata.
//!
//! Two layers:
//! - **Metadata layer** (`metadata`, `type_ref`): owned definitions that map
//!   1:1 onto a metadata manifest
//! - **Source layer** (`MetadataSource`): the read-only lookup interface the
//!   graph builder depends on
//!
//! `MetadataSet` is the manifest-backed implementation of the source layer.

pub mod metadata;
pub mod metadata_set;
pub mod type_ref;

#[cfg(test)]
mod type_ref_tests;

pub use metadata::{
    AccessorDef, Constant, ConstructorDef, EventDef, FieldDef, MethodDef, MethodToken, ParamDef,
    PropertyDef, Signature, TypeDef, TypeDefKind,
};
pub use metadata_set::{AssemblyDef, LoadError, MetadataSet};
pub use type_ref::{TypeRef, TypeRefParseError};

/// Full names the pipeline treats specially.
pub mod well_known {
    /// Universal root of the class hierarchy.
    pub const OBJECT: &str = "System.Object";
    pub const VOID: &str = "System.Void";
    /// Marks an enum as a bit-flag enum.
    pub const FLAGS_ATTRIBUTE: &str = "System.FlagsAttribute";
}

// ============================================================================
// MetadataSource Trait
// ============================================================================

/// Exported types of one assembly.
///
/// A non-empty `load_failures` means the enumeration was partial: `types`
/// holds whatever could be loaded.
#[derive(Clone, Debug, Default)]
pub struct ExportedTypes<'a> {
    pub types: Vec<&'a TypeDef>,
    pub load_failures: Vec<String>,
}

impl ExportedTypes<'_> {
    pub fn is_partial(&self) -> bool {
        !self.load_failures.is_empty()
    }
}

/// Read-only access to type metadata.
///
/// Provides exactly what graph construction and emission need:
/// - Definition lookup by full name
/// - Enumeration of an assembly's public top-level types
pub trait MetadataSource {
    /// Definition for a full name, if the source knows it.
    fn type_def(&self, full_name: &str) -> Option<&TypeDef>;

    /// Public exported types of `assembly`, or `None` for an unknown assembly.
    fn exported_types(&self, assembly: &str) -> Option<ExportedTypes<'_>>;
}

impl<T: MetadataSource + ?Sized> MetadataSource for &T {
    fn type_def(&self, full_name: &str) -> Option<&TypeDef> {
        (*self).type_def(full_name)
    }

    fn exported_types(&self, assembly: &str) -> Option<ExportedTypes<'_>> {
        (*self).exported_types(assembly)
    }
}
