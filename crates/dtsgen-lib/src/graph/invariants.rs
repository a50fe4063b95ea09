//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TypeDescriptor, TypeGraph, TypeId};

impl<'s> TypeGraph<'s> {
    pub(crate) fn ensure(&self, id: TypeId) -> &TypeDescriptor<'s> {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TypeGraph: type id {} not found \
                 (ids are only minted by TypeGraph::insert)",
                id.index()
            )
        })
    }
}
