//! Type reference resolution.
//!
//! First match wins:
//! 1. primitive table (`primitives::lookup`)
//! 2. a non-generic named type present in the graph, by full name
//! 3. the escape token `any`
//!
//! Graph references are qualified with the root namespace so a type whose
//! name matches a namespace segment cannot shadow the path.

use dtsgen_core::TypeRef;

use super::primitives;
use crate::graph::TypeGraph;

/// Opaque fallback for types without a structural mapping.
pub const ESCAPE_TOKEN: &str = "any";

/// Maps usage-site type references to declaration tokens.
#[derive(Clone)]
pub struct TypeResolver<'g, 's> {
    graph: &'g TypeGraph<'s>,
    root: String,
}

impl<'g, 's> TypeResolver<'g, 's> {
    pub fn new(graph: &'g TypeGraph<'s>, root: impl Into<String>) -> Self {
        Self {
            graph,
            root: root.into(),
        }
    }

    pub fn resolve(&self, ty: &TypeRef) -> String {
        if let Some(token) = primitives::lookup(ty) {
            return token.to_string();
        }

        match ty {
            TypeRef::Named { name, args } if args.is_empty() && self.is_plain_type(name) => {
                self.qualify(name)
            }
            _ => ESCAPE_TOKEN.to_string(),
        }
    }

    /// `Acme.Widget` as seen from anywhere inside the root namespace.
    pub fn qualify(&self, full_name: &str) -> String {
        format!("{}.{full_name}", self.root)
    }

    fn is_plain_type(&self, full_name: &str) -> bool {
        self.graph
            .lookup(full_name)
            .and_then(|id| self.graph.get(id))
            .is_some_and(|desc| !desc.is_generic())
    }
}
