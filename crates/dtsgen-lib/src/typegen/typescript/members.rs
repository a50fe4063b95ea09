//! Callable members: constructors, methods, events and their parameter lists.

use dtsgen_core::{MethodDef, MethodToken, ParamDef, TypeDef, TypeRef};

use super::Emitter;
use super::resolve::ESCAPE_TOKEN;
use crate::graph::{TypeDescriptor, TypeKind};

/// Words that cannot name a parameter in a declaration file.
const RESERVED_WORDS: &[&str] = &[
    "arguments",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "eval",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

pub(super) fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Whether `token` belongs to a property getter or setter.
fn is_property_accessor(def: &TypeDef, token: Option<MethodToken>) -> bool {
    token.is_some_and(|t| def.properties.iter().any(|p| p.has_accessor(t)))
}

/// Whether a method is a property or event accessor.
///
/// Token identity is checked first. Methods without a matching token still
/// count when named `get_P`/`set_P` for a public property `P`; this is a
/// naming heuristic and also catches an unrelated method that happens to
/// follow the pattern.
pub(super) fn is_accessor(def: &TypeDef, method: &MethodDef) -> bool {
    if is_property_accessor(def, method.token) {
        return true;
    }
    if method
        .token
        .is_some_and(|t| def.events.iter().any(|e| e.has_accessor(t)))
    {
        return true;
    }
    let Some(property) = method
        .name
        .strip_prefix("get_")
        .or_else(|| method.name.strip_prefix("set_"))
    else {
        return false;
    };
    def.properties
        .iter()
        .filter(|p| p.is_public())
        .any(|p| p.name == property)
}

impl Emitter<'_, '_> {
    pub(super) fn emit_constructors(&mut self, desc: &TypeDescriptor<'_>) {
        if desc.kind == TypeKind::Interface {
            return;
        }
        let def = desc.def;
        for ctor in &def.constructors {
            if !ctor.is_public || ctor.is_static || is_property_accessor(def, ctor.token) {
                continue;
            }
            let params = self.params(desc, &ctor.params);
            self.line(&format!("constructor({params});"));
        }
    }

    pub(super) fn emit_methods(&mut self, desc: &TypeDescriptor<'_>) {
        let def = desc.def;
        for method in &def.methods {
            if !method.is_public || is_accessor(def, method) {
                continue;
            }
            if method.is_static && desc.kind == TypeKind::Interface {
                continue;
            }
            let prefix = self.static_prefix(desc, method.is_static);
            let params = self.params(desc, &method.params);
            let returns = self.resolver.resolve(&method.returns);
            self.line(&format!("{prefix}{}({params}): {returns};", method.name));
        }
    }

    /// Events become subscribe handles:
    /// `Name: { connect(callback: (..) => R): { disconnect(): void; }; };`
    pub(super) fn emit_events(&mut self, desc: &TypeDescriptor<'_>) {
        for event in &desc.def.events {
            if !event.is_public {
                continue;
            }
            if event.is_static && desc.kind == TypeKind::Interface {
                continue;
            }
            let prefix = self.static_prefix(desc, event.is_static);
            let params = self.params(desc, &event.signature.params);
            let returns = self.resolver.resolve(&event.signature.returns);
            self.line(&format!(
                "{prefix}{}: {{ connect(callback: ({params}) => {returns}): {{ disconnect(): void; }}; }};",
                event.name
            ));
        }
    }

    /// Comma-separated parameter list.
    pub(super) fn params(&self, desc: &TypeDescriptor<'_>, params: &[ParamDef]) -> String {
        params
            .iter()
            .enumerate()
            .map(|(i, p)| self.param(desc, i, p))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn param(&self, desc: &TypeDescriptor<'_>, index: usize, param: &ParamDef) -> String {
        let mut name = if param.name.is_empty() {
            format!("arg{index}")
        } else {
            param.name.clone()
        };
        if is_reserved(&name) {
            name.push('_');
        }

        let mut ty = match &param.ty {
            TypeRef::GenericParam(generic) if desc.has_generic_param(&param.ty) => generic.clone(),
            other => self.resolver.resolve(other),
        };

        if param.variadic {
            if !ty.ends_with("[]") {
                ty = format!("{ESCAPE_TOKEN}[]");
            }
            return format!("...{name}: {ty}");
        }
        if param.has_default {
            return format!("{name}?: {ty}");
        }
        format!("{name}: {ty}")
    }
}
