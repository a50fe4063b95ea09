//! Type definition metadata.
//!
//! 1:1 mapping to the type entries of a metadata manifest. Every member list
//! holds *declared* members only; inherited members are reached through
//! `TypeDef::base`.

use std::fmt;

use crate::type_ref::TypeRef;
use crate::well_known;

fn default_true() -> bool {
    true
}

/// Metadata token identifying a method, used for accessor identity checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct MethodToken(pub u32);

/// Declared shape of a type definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDefKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

/// A type definition as exposed by a metadata source.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDef {
    #[serde(default)]
    pub namespace: String,
    /// Metadata name, including any generic arity suffix (``List`1``).
    pub name: String,
    #[serde(default)]
    pub kind: TypeDefKind,
    #[serde(rename = "abstract", default)]
    pub is_abstract: bool,
    #[serde(rename = "sealed", default)]
    pub is_sealed: bool,
    #[serde(rename = "public", default = "default_true")]
    pub is_public: bool,
    /// Full name of the enclosing type for nested types.
    #[serde(default)]
    pub declaring_type: Option<String>,
    #[serde(default)]
    pub base: Option<TypeRef>,
    /// Parameters of a generic definition, or concrete arguments of a
    /// constructed type.
    #[serde(default)]
    pub generic_arguments: Vec<TypeRef>,
    /// Full names of the attribute types applied to this type.
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDef>,
    #[serde(default)]
    pub methods: Vec<MethodDef>,
    #[serde(default)]
    pub events: Vec<EventDef>,
}

impl TypeDef {
    /// Empty public class definition.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            kind: TypeDefKind::Class,
            is_abstract: false,
            is_sealed: false,
            is_public: true,
            declaring_type: None,
            base: None,
            generic_arguments: Vec::new(),
            attributes: Vec::new(),
            fields: Vec::new(),
            properties: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Identity used across the whole pipeline:
    /// `Namespace.Name`, `Name` in the global namespace, `Outer+Name` when nested.
    pub fn full_name(&self) -> String {
        match &self.declaring_type {
            Some(outer) => format!("{outer}+{}", self.name),
            None if self.namespace.is_empty() => self.name.clone(),
            None => format!("{}.{}", self.namespace, self.name),
        }
    }

    /// Name without the generic arity suffix.
    pub fn display_name(&self) -> &str {
        match self.name.rfind('`') {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        }
    }

    pub fn is_nested(&self) -> bool {
        self.declaring_type.is_some()
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeDefKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeDefKind::Enum
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_arguments.is_empty()
    }

    pub fn has_attribute(&self, full_name: &str) -> bool {
        self.attributes.iter().any(|a| a == full_name)
    }

    /// Enum marked as a bit-flag enum.
    pub fn is_flags(&self) -> bool {
        self.is_enum() && self.has_attribute(well_known::FLAGS_ATTRIBUTE)
    }

    /// Abstract and sealed: a static-only container.
    pub fn is_static(&self) -> bool {
        self.is_abstract && self.is_sealed
    }
}

/// A declared field. Literal fields carry their constant.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(rename = "public", default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub constant: Option<Constant>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
            is_public: true,
            constant: None,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.constant.is_some()
    }
}

/// Getter or setter of a property.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct AccessorDef {
    #[serde(default)]
    pub token: Option<MethodToken>,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(rename = "public", default = "default_true")]
    pub is_public: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PropertyDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub getter: Option<AccessorDef>,
    #[serde(default)]
    pub setter: Option<AccessorDef>,
}

impl PropertyDef {
    fn accessors(&self) -> impl Iterator<Item = &AccessorDef> {
        self.getter.iter().chain(self.setter.iter())
    }

    /// Public when any accessor is public.
    pub fn is_public(&self) -> bool {
        self.accessors().any(|a| a.is_public)
    }

    /// Static when any accessor is static.
    pub fn is_static(&self) -> bool {
        self.accessors().any(|a| a.is_static)
    }

    /// Readable but without a public setter.
    pub fn is_read_only(&self) -> bool {
        self.getter.as_ref().is_some_and(|g| g.is_public)
            && !self.setter.as_ref().is_some_and(|s| s.is_public)
    }

    /// Whether `token` identifies this property's getter or setter.
    pub fn has_accessor(&self, token: MethodToken) -> bool {
        self.accessors().any(|a| a.token == Some(token))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ParamDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub has_default: bool,
    /// Parameter array (`params T[]`).
    #[serde(default)]
    pub variadic: bool,
}

impl ParamDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            has_default: false,
            variadic: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ConstructorDef {
    #[serde(default)]
    pub token: Option<MethodToken>,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(rename = "public", default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub params: Vec<ParamDef>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MethodDef {
    #[serde(default)]
    pub token: Option<MethodToken>,
    pub name: String,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(rename = "public", default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default = "TypeRef::void")]
    pub returns: TypeRef,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, returns: TypeRef) -> Self {
        Self {
            token: None,
            name: name.into(),
            is_static: false,
            is_public: true,
            params: Vec::new(),
            returns,
        }
    }
}

/// Invoke signature of an event's handler delegate.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<ParamDef>,
    #[serde(default = "TypeRef::void")]
    pub returns: TypeRef,
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            params: Vec::new(),
            returns: TypeRef::void(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EventDef {
    pub name: String,
    /// Handler delegate type.
    pub handler: TypeRef,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(rename = "public", default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub add: Option<MethodToken>,
    #[serde(default)]
    pub remove: Option<MethodToken>,
    #[serde(default)]
    pub signature: Signature,
}

impl EventDef {
    /// Whether `token` identifies this event's add or remove accessor.
    pub fn has_accessor(&self, token: MethodToken) -> bool {
        self.add == Some(token) || self.remove == Some(token)
    }
}

/// Raw constant value of a literal field.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Constant {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => {
                let quoted = serde_json::to_string(v).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
        }
    }
}
