//! TypeScript ambient declarations from a closed type graph.
//!
//! One `declare namespace` wraps everything; each source namespace becomes a
//! nested `namespace` block holding its types in full-name order.

mod config;
mod emitter;
mod members;
mod primitives;
mod render;
mod resolve;


use std::path::Path;

pub use config::{Config, Indent};
pub use emitter::{Emitter, SkipReason, skip_reason};
pub use primitives::PrimitiveKind;
pub use resolve::{ESCAPE_TOKEN, TypeResolver};

use crate::graph::TypeGraph;
use crate::{Error, Result};

/// Emit declarations for a graph with the default config.
pub fn emit(graph: &TypeGraph<'_>) -> String {
    Emitter::new(graph, Config::default()).emit()
}

/// Emit declarations for a graph with custom config.
pub fn emit_with_config(graph: &TypeGraph<'_>, config: Config) -> String {
    Emitter::new(graph, config).emit()
}

/// Render the whole file in memory, then write it in one call.
pub fn write(graph: &TypeGraph<'_>, config: Config, path: &Path) -> Result<()> {
    let text = emit_with_config(graph, config);
    std::fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), types = graph.len(), "wrote declarations");
    Ok(())
}
