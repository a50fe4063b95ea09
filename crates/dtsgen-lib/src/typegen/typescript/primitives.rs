//! Primitive type mapping.
//!
//! Keyed by primitive kind plus an "is rank-1 array" flag. The numeric family
//! collapses to `number`; source precision is not preserved.

use dtsgen_core::TypeRef;

/// Value types with a fixed TypeScript token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Void,
    Boolean,
    Char,
    String,
    Byte,
    SByte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
}

impl PrimitiveKind {
    pub fn from_full_name(name: &str) -> Option<Self> {
        let kind = match name {
            "System.Void" => Self::Void,
            "System.Boolean" => Self::Boolean,
            "System.Char" => Self::Char,
            "System.String" => Self::String,
            "System.Byte" => Self::Byte,
            "System.SByte" => Self::SByte,
            "System.Int16" => Self::Int16,
            "System.UInt16" => Self::UInt16,
            "System.Int32" => Self::Int32,
            "System.UInt32" => Self::UInt32,
            "System.Int64" => Self::Int64,
            "System.UInt64" => Self::UInt64,
            "System.Single" => Self::Single,
            "System.Double" => Self::Double,
            "System.Decimal" => Self::Decimal,
            _ => return None,
        };
        Some(kind)
    }
}

use PrimitiveKind as K;

const TABLE: &[(PrimitiveKind, bool, &str)] = &[
    (K::Void, false, "void"),
    (K::Boolean, false, "boolean"),
    (K::Boolean, true, "boolean[]"),
    (K::Char, false, "string"),
    (K::Char, true, "string[]"),
    (K::String, false, "string"),
    (K::String, true, "string[]"),
    (K::Byte, false, "number"),
    (K::Byte, true, "number[]"),
    (K::SByte, false, "number"),
    (K::SByte, true, "number[]"),
    (K::Int16, false, "number"),
    (K::Int16, true, "number[]"),
    (K::UInt16, false, "number"),
    (K::UInt16, true, "number[]"),
    (K::Int32, false, "number"),
    (K::Int32, true, "number[]"),
    (K::UInt32, false, "number"),
    (K::UInt32, true, "number[]"),
    (K::Int64, false, "number"),
    (K::Int64, true, "number[]"),
    (K::UInt64, false, "number"),
    (K::UInt64, true, "number[]"),
    (K::Single, false, "number"),
    (K::Single, true, "number[]"),
    (K::Double, false, "number"),
    (K::Double, true, "number[]"),
    (K::Decimal, false, "number"),
    (K::Decimal, true, "number[]"),
];

/// Token for a primitive kind, or its array form.
pub fn token(kind: PrimitiveKind, array: bool) -> Option<&'static str> {
    TABLE
        .iter()
        .find(|&&(k, a, _)| k == kind && a == array)
        .map(|&(_, _, token)| token)
}

/// Token for a reference to a primitive or a rank-1 array of one.
pub fn lookup(ty: &TypeRef) -> Option<&'static str> {
    let (name, array) = match ty {
        TypeRef::Named { name, args } if args.is_empty() => (name, false),
        TypeRef::Array { element, rank: 1 } => match element.as_ref() {
            TypeRef::Named { name, args } if args.is_empty() => (name, true),
            _ => return None,
        },
        _ => return None,
    };
    token(PrimitiveKind::from_full_name(name)?, array)
}
