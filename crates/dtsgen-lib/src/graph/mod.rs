//! The closed type graph.
//!
//! An arena of `TypeDescriptor`s indexed by `TypeId`, with a full-name index
//! that doubles as the visited set during construction. Descriptors are only
//! ever appended; `clear` drops the whole collection.

mod builder;
mod invariants;


use std::collections::BTreeMap;

use dtsgen_core::{TypeDef, TypeRef};
use indexmap::IndexMap;

pub use builder::{GraphBuilder, Rejection};

/// Index of a descriptor within its `TypeGraph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Declaration kind of an admitted type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    AbstractClass,
    Interface,
    Enum { flags: bool },
}

impl TypeKind {
    pub fn of(def: &TypeDef) -> Self {
        if def.is_interface() {
            Self::Interface
        } else if def.is_enum() {
            Self::Enum {
                flags: def.is_flags(),
            }
        } else if def.is_abstract {
            Self::AbstractClass
        } else {
            Self::Class
        }
    }

    /// Declaration keyword(s) for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::AbstractClass => "abstract class",
            Self::Interface => "interface",
            Self::Enum { .. } => "enum",
        }
    }
}

/// One type admitted into the graph.
#[derive(Clone, Debug)]
pub struct TypeDescriptor<'s> {
    /// Uniqueness key.
    pub full_name: String,
    pub kind: TypeKind,
    /// Admitted base type; `None` for the root type or a base outside the graph.
    pub base: Option<TypeId>,
    pub def: &'s TypeDef,
}

impl<'s> TypeDescriptor<'s> {
    pub(crate) fn new(def: &'s TypeDef, full_name: String) -> Self {
        Self {
            full_name,
            kind: TypeKind::of(def),
            base: None,
            def,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.def.namespace
    }

    /// Simple name without generic arity.
    pub fn name(&self) -> &str {
        self.def.display_name()
    }

    pub fn generic_args(&self) -> &'s [TypeRef] {
        &self.def.generic_arguments
    }

    pub fn is_generic(&self) -> bool {
        self.def.is_generic()
    }

    /// Whether `ty` is one of this type's own generic parameters.
    pub fn has_generic_param(&self, ty: &TypeRef) -> bool {
        ty.is_generic_param() && self.generic_args().contains(ty)
    }

    pub fn is_nested(&self) -> bool {
        self.def.is_nested()
    }

    /// Abstract and sealed: every member renders as static.
    pub fn is_static(&self) -> bool {
        self.def.is_static()
    }
}

/// Closed, deduplicated set of admitted types.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph<'s> {
    descriptors: Vec<TypeDescriptor<'s>>,
    by_name: IndexMap<String, TypeId>,
}

impl<'s> TypeGraph<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.by_name.contains_key(full_name)
    }

    pub fn lookup(&self, full_name: &str) -> Option<TypeId> {
        self.by_name.get(full_name).copied()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor<'s>> {
        self.descriptors.get(id.index())
    }

    /// Descriptors in admission order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeDescriptor<'s>)> {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(i, d)| (TypeId(i as u32), d))
    }

    /// Top-level descriptors grouped by namespace, each group ordered by full
    /// name. Namespaces iterate in lexical order, the global namespace first.
    pub fn by_namespace(&self) -> BTreeMap<&str, Vec<TypeId>> {
        let mut groups: BTreeMap<&str, Vec<TypeId>> = BTreeMap::new();
        for (id, desc) in self.iter() {
            if desc.is_nested() {
                continue;
            }
            groups.entry(desc.namespace()).or_default().push(id);
        }
        for ids in groups.values_mut() {
            ids.sort_by(|a, b| {
                self.ensure(*a)
                    .full_name
                    .cmp(&self.ensure(*b).full_name)
            });
        }
        groups
    }

    /// Drop every descriptor.
    pub fn clear(&mut self) {
        self.descriptors.clear();
        self.by_name.clear();
    }

    pub(crate) fn insert(&mut self, desc: TypeDescriptor<'s>) -> TypeId {
        let id = TypeId(self.descriptors.len() as u32);
        self.by_name.insert(desc.full_name.clone(), id);
        self.descriptors.push(desc);
        id
    }

    pub(crate) fn descriptors_mut(&mut self) -> &mut [TypeDescriptor<'s>] {
        &mut self.descriptors
    }
}
