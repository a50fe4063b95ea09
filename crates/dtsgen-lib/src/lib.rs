//! dtsgen: TypeScript declarations from .NET-style type metadata.
//!
//! The pipeline runs in two strictly ordered passes:
//! - `graph` - closes a set of seed types over their public surface into a
//!   deduplicated `TypeGraph`
//! - `typegen` - renders the graph as one ambient declaration file
//!
//! `Generator` wraps both behind the add/emit/write workflow.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod graph;
pub mod typegen;

mod generator;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
pub mod test_utils;

use std::path::PathBuf;

pub use generator::Generator;
pub use graph::{GraphBuilder, TypeDescriptor, TypeGraph, TypeId, TypeKind};
pub use typegen::typescript::{Config as TsEmitConfig, Indent};

/// Errors that can occur while building or writing declarations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown assembly `{0}`")]
    UnknownAssembly(String),

    #[error("unknown type `{0}`")]
    UnknownType(String),

    /// The declaration file could not be persisted.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for dtsgen operations.
pub type Result<T> = std::result::Result<T, Error>;
