//! Per-type declaration blocks.

use dtsgen_core::TypeRef;

use super::Emitter;
use crate::graph::{TypeDescriptor, TypeKind};

impl Emitter<'_, '_> {
    pub(super) fn emit_type(&mut self, desc: &TypeDescriptor<'_>) {
        let header = self.type_header(desc);
        if let TypeKind::Enum { flags } = desc.kind {
            if flags {
                self.line("/** Flags */");
            }
            self.open(&header);
            self.emit_enum_members(desc);
            self.close();
            return;
        }

        self.open(&header);
        self.emit_fields(desc);
        self.emit_properties(desc);
        self.emit_constructors(desc);
        self.emit_methods(desc);
        self.emit_events(desc);
        self.close();
    }

    /// `abstract class Name<T, U> extends Base {`
    fn type_header(&self, desc: &TypeDescriptor<'_>) -> String {
        let mut header = format!("{} {}", desc.kind.keyword(), desc.name());

        if desc.is_generic() {
            let params: Vec<String> = desc.generic_args().iter().map(param_name).collect();
            header.push('<');
            header.push_str(&params.join(", "));
            header.push('>');
        } else if let Some(base) = desc
            .base
            .filter(|_| !matches!(desc.kind, TypeKind::Enum { .. }))
        {
            header.push_str(" extends ");
            header.push_str(&self.resolver.qualify(&self.graph.ensure(base).full_name));
        }

        header.push_str(" {");
        header
    }

    fn emit_enum_members(&mut self, desc: &TypeDescriptor<'_>) {
        for field in &desc.def.fields {
            let Some(value) = field.constant.as_ref().filter(|_| field.is_public) else {
                continue;
            };
            self.line(&format!("{} = {value},", field.name));
        }
    }

    fn emit_fields(&mut self, desc: &TypeDescriptor<'_>) {
        for field in &desc.def.fields {
            if !field.is_public || !self.renders_member(desc, field.is_static) {
                continue;
            }
            let prefix = self.static_prefix(desc, field.is_static);
            let ty = self.resolver.resolve(&field.ty);
            self.line(&format!("{prefix}{}: {ty};", field.name));
        }
    }

    fn emit_properties(&mut self, desc: &TypeDescriptor<'_>) {
        for prop in &desc.def.properties {
            if !prop.is_public() || !self.renders_member(desc, prop.is_static()) {
                continue;
            }
            let mut prefix = self.static_prefix(desc, prop.is_static()).to_string();
            if self.config.readonly_properties && prop.is_read_only() {
                prefix.push_str("readonly ");
            }
            let ty = self.resolver.resolve(&prop.ty);
            self.line(&format!("{prefix}{}: {ty};", prop.name));
        }
    }

    /// Fields and properties: instance members always, static ones on request.
    fn renders_member(&self, desc: &TypeDescriptor<'_>, is_static: bool) -> bool {
        if !is_static {
            return true;
        }
        self.config.static_members && desc.kind != TypeKind::Interface
    }

    pub(super) fn static_prefix(
        &self,
        desc: &TypeDescriptor<'_>,
        is_static: bool,
    ) -> &'static str {
        if desc.kind == TypeKind::Interface {
            return "";
        }
        if desc.is_static() || is_static {
            "static "
        } else {
            ""
        }
    }
}

/// Declared name of a generic parameter.
fn param_name(ty: &TypeRef) -> String {
    match ty {
        TypeRef::GenericParam(name) => name.clone(),
        other => other.to_string(),
    }
}
