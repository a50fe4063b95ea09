//! Closure over reachable types.
//!
//! Admission is decided when a type is first discovered; admitted types go on
//! a worklist and are expanded later. Expansion offers every type named in a
//! public method signature, then the base type. The full-name index of the
//! graph is the visited set, so cycles and diamonds terminate on the
//! "already present" check.

use dtsgen_core::{MetadataSource, TypeDef, TypeRef, well_known};

use super::{TypeDescriptor, TypeGraph, TypeId};
use crate::{Error, Result};

/// Why a type was not admitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Generic parameter; it has no full name.
    NoFullName,
    /// Array, by-ref or pointer. These only exist at reference sites.
    Wrapper,
    /// The universal root type.
    Root,
    AlreadyPresent,
    /// Named type the metadata source has no definition for.
    Unresolved,
    Nested,
    /// Constructed generic with a fully resolved argument.
    ClosedGeneric,
}

/// Builds a `TypeGraph` from seeds drawn out of a metadata source.
pub struct GraphBuilder<'s, S: MetadataSource + ?Sized> {
    source: &'s S,
    graph: TypeGraph<'s>,
}

impl<'s, S: MetadataSource + ?Sized> GraphBuilder<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            graph: TypeGraph::new(),
        }
    }

    pub fn graph(&self) -> &TypeGraph<'s> {
        &self.graph
    }

    pub fn into_graph(self) -> TypeGraph<'s> {
        self.graph
    }

    pub fn clear(&mut self) {
        self.graph.clear();
    }

    /// Seed with every public exported type of `assembly`.
    ///
    /// A partial load is not an error: the loaded subset is used. Returns the
    /// number of newly admitted types.
    pub fn add_assembly(&mut self, assembly: &str) -> Result<usize> {
        let source = self.source;
        let exported = source
            .exported_types(assembly)
            .ok_or_else(|| Error::UnknownAssembly(assembly.to_string()))?;

        if exported.is_partial() {
            tracing::warn!(
                assembly,
                loaded = exported.types.len(),
                failed = exported.load_failures.len(),
                "partial type load, continuing with the loaded types"
            );
        }

        let before = self.graph.len();
        let mut worklist = Vec::new();
        for def in exported.types.into_iter().filter(|t| t.is_public) {
            self.offer_def(def, &def.generic_arguments, &mut worklist);
        }
        self.close(worklist);
        Ok(self.graph.len() - before)
    }

    /// Seed with the type a reference points at. Returns the number of newly
    /// admitted types; zero when the reference is rejected.
    pub fn add_type(&mut self, ty: &TypeRef) -> usize {
        let before = self.graph.len();
        let mut worklist = Vec::new();
        self.offer(ty, &mut worklist);
        self.close(worklist);
        self.graph.len() - before
    }

    /// Seed with a definition looked up by full name.
    pub fn add_type_named(&mut self, full_name: &str) -> Result<usize> {
        let source = self.source;
        let def = source
            .type_def(full_name)
            .ok_or_else(|| Error::UnknownType(full_name.to_string()))?;

        let before = self.graph.len();
        let mut worklist = Vec::new();
        self.offer_def(def, &def.generic_arguments, &mut worklist);
        self.close(worklist);
        Ok(self.graph.len() - before)
    }

    fn offer(&mut self, ty: &TypeRef, worklist: &mut Vec<TypeId>) {
        match self.resolve(ty) {
            Ok(def) => self.offer_def(def, ty.generic_args(), worklist),
            Err(rejection) => tracing::trace!(ty = %ty, ?rejection, "rejected type"),
        }
    }

    fn offer_def(&mut self, def: &'s TypeDef, args: &[TypeRef], worklist: &mut Vec<TypeId>) {
        match self.check(def, args) {
            Ok(full_name) => {
                tracing::trace!(full_name = %full_name, "admitted type");
                let id = self.graph.insert(TypeDescriptor::new(def, full_name));
                worklist.push(id);
            }
            Err(rejection) => {
                tracing::trace!(full_name = %def.full_name(), ?rejection, "rejected type")
            }
        }
    }

    /// Find the definition behind a usage-site reference.
    fn resolve(&self, ty: &TypeRef) -> std::result::Result<&'s TypeDef, Rejection> {
        let name = match ty {
            TypeRef::Named { name, .. } => name,
            TypeRef::GenericParam(_) => return Err(Rejection::NoFullName),
            TypeRef::Array { .. } | TypeRef::ByRef(_) | TypeRef::Pointer(_) => {
                return Err(Rejection::Wrapper);
            }
        };
        if name == well_known::OBJECT {
            return Err(Rejection::Root);
        }
        if self.graph.contains(name) {
            return Err(Rejection::AlreadyPresent);
        }
        let source = self.source;
        source.type_def(name).ok_or(Rejection::Unresolved)
    }

    /// Admission rules for a definition reached with the given generic
    /// arguments. Returns the full name to admit under.
    fn check(&self, def: &TypeDef, args: &[TypeRef]) -> std::result::Result<String, Rejection> {
        let full_name = def.full_name();
        if full_name == well_known::OBJECT {
            return Err(Rejection::Root);
        }
        if self.graph.contains(&full_name) {
            return Err(Rejection::AlreadyPresent);
        }
        if def.is_nested() {
            return Err(Rejection::Nested);
        }
        if args
            .iter()
            .chain(&def.generic_arguments)
            .any(TypeRef::is_closed)
        {
            return Err(Rejection::ClosedGeneric);
        }
        Ok(full_name)
    }

    fn close(&mut self, mut worklist: Vec<TypeId>) {
        while let Some(id) = worklist.pop() {
            let desc = self.graph.ensure(id);
            let def = desc.def;
            let self_name = desc.full_name.clone();
            let is_self = |ty: &TypeRef| ty.full_name() == Some(self_name.as_str());

            for method in def.methods.iter().filter(|m| m.is_public) {
                if !is_self(&method.returns) {
                    self.offer(&method.returns, &mut worklist);
                }
                for param in &method.params {
                    if !is_self(&param.ty) {
                        self.offer(&param.ty, &mut worklist);
                    }
                }
            }

            if let Some(base) = &def.base {
                self.offer(base, &mut worklist);
            }
        }
        self.link_bases();
    }

    /// Point each descriptor at its admitted base, if any.
    fn link_bases(&mut self) {
        let links: Vec<Option<TypeId>> = self
            .graph
            .iter()
            .map(|(_, desc)| {
                desc.def
                    .base
                    .as_ref()
                    .filter(|b| b.is_non_generic())
                    .and_then(TypeRef::full_name)
                    .and_then(|name| self.graph.lookup(name))
            })
            .collect();

        for (desc, base) in self.graph.descriptors_mut().iter_mut().zip(links) {
            desc.base = base;
        }
    }
}
