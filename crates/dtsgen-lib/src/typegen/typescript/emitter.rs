//! Core emitter struct and main emit logic.

use crate::graph::{TypeDescriptor, TypeGraph, TypeId};

use super::Config;
use super::resolve::TypeResolver;

pub(super) const BANNER: &str = "/** Auto-generated by dtsgen. Do not edit. */";

/// Why a type was left out of the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Nested types are never emitted at the top level.
    Nested,
    /// A generic argument is not an open parameter.
    ClosedGenericArgument,
}

/// Emission-time filter. `None` means the type renders.
pub fn skip_reason(desc: &TypeDescriptor<'_>) -> Option<SkipReason> {
    if desc.is_nested() {
        return Some(SkipReason::Nested);
    }
    if desc.generic_args().iter().any(|a| !a.is_generic_param()) {
        return Some(SkipReason::ClosedGenericArgument);
    }
    None
}

/// TypeScript declaration emitter over a closed type graph.
pub struct Emitter<'g, 's> {
    pub(super) graph: &'g TypeGraph<'s>,
    pub(super) resolver: TypeResolver<'g, 's>,
    pub(super) config: Config,

    /// Indent unit, rendered once
    pub(super) indent: String,
    /// Current nesting depth
    pub(super) depth: usize,
    /// Output buffer
    pub(super) output: String,
}

impl<'g, 's> Emitter<'g, 's> {
    pub fn new(graph: &'g TypeGraph<'s>, config: Config) -> Self {
        Self {
            graph,
            resolver: TypeResolver::new(graph, config.root_namespace.clone()),
            indent: config.indent.unit(),
            config,
            depth: 0,
            output: String::new(),
        }
    }

    /// Render the whole graph as one declaration file.
    pub fn emit(mut self) -> String {
        if self.config.header {
            self.line(BANNER);
            self.output.push('\n');
        }

        let root = format!("declare namespace {} {{", self.config.root_namespace);
        self.open(&root);

        let graph = self.graph;
        for (namespace, ids) in graph.by_namespace() {
            let ids: Vec<TypeId> = ids
                .into_iter()
                .filter(|&id| self.renders(id))
                .collect();
            if ids.is_empty() {
                continue;
            }

            if namespace.is_empty() {
                self.emit_types(&ids);
            } else {
                self.open(&format!("namespace {namespace} {{"));
                self.emit_types(&ids);
                self.close();
            }
        }

        self.close();
        self.output
    }

    fn renders(&self, id: TypeId) -> bool {
        let desc = self.graph.ensure(id);
        match skip_reason(desc) {
            None => true,
            Some(reason) => {
                tracing::debug!(full_name = %desc.full_name, ?reason, "skipped type");
                false
            }
        }
    }

    fn emit_types(&mut self, ids: &[TypeId]) {
        let graph = self.graph;
        for &id in ids {
            let desc = graph.ensure(id);
            self.emit_type(desc);
        }
    }

    /// Write one indented line.
    pub(super) fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(&self.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write a block header and indent.
    pub(super) fn open(&mut self, header: &str) {
        self.line(header);
        self.depth += 1;
    }

    /// Dedent and close a block.
    pub(super) fn close(&mut self) {
        self.depth -= 1;
        self.line("}");
    }
}
