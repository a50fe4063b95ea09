//! Usage-site type references and their compact textual syntax.
//!
//! A `TypeRef` is what a member signature points at: a named type (possibly
//! a constructed generic), a generic parameter, or an array / by-ref / pointer
//! wrapper around another reference. The textual form is used by the JSON
//! manifest, by log output and by the `graph` command:
//!
//! ```text
//! System.String                              named type
//! System.Collections.Generic.List`1<!T>     open generic, argument is a parameter
//! System.Collections.Generic.List`1<System.Int32>
//! !T                                         generic parameter
//! System.Int32[]   System.Int32[,]           arrays (rank 1, rank 2)
//! System.Int32&    System.Byte*              by-ref, pointer
//! ```
//!
//! Suffixes apply left to right, so `System.Int32[]&` is a by-ref to an array.

use std::fmt;
use std::str::FromStr;

use crate::well_known;

/// A reference to a type at a usage site.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// A named type, with generic arguments when constructed.
    Named { name: String, args: Vec<TypeRef> },
    /// A generic parameter in scope (`!T`).
    GenericParam(String),
    /// An array of `element` with the given rank.
    Array { element: Box<TypeRef>, rank: u32 },
    /// A pass-by-reference wrapper (`T&`).
    ByRef(Box<TypeRef>),
    /// An unmanaged pointer (`T*`).
    Pointer(Box<TypeRef>),
}

impl TypeRef {
    /// A non-generic named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A generic type with the given arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    pub fn param(name: impl Into<String>) -> Self {
        Self::GenericParam(name.into())
    }

    /// Rank-1 array of `element`.
    pub fn array_of(element: TypeRef) -> Self {
        Self::Array {
            element: Box::new(element),
            rank: 1,
        }
    }

    /// `System.Void`.
    pub fn void() -> Self {
        Self::named(well_known::VOID)
    }

    /// Fully-qualified name. Only named types have one; generic parameters
    /// and wrappers do not.
    pub fn full_name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Generic arguments of a named type, empty otherwise.
    pub fn generic_args(&self) -> &[TypeRef] {
        match self {
            Self::Named { args, .. } => args,
            _ => &[],
        }
    }

    pub fn is_generic_param(&self) -> bool {
        matches!(self, Self::GenericParam(_))
    }

    /// Named type without generic arguments.
    pub fn is_non_generic(&self) -> bool {
        matches!(self, Self::Named { args, .. } if args.is_empty())
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    pub fn is_by_ref(&self) -> bool {
        matches!(self, Self::ByRef(_))
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Fully resolved: no generic parameter appears anywhere inside.
    pub fn is_closed(&self) -> bool {
        match self {
            Self::Named { args, .. } => args.iter().all(TypeRef::is_closed),
            Self::GenericParam(_) => false,
            Self::Array { element, .. } | Self::ByRef(element) | Self::Pointer(element) => {
                element.is_closed()
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::GenericParam(name) => write!(f, "!{name}"),
            Self::Array { element, rank } => {
                write!(f, "{element}[")?;
                for _ in 1..*rank {
                    f.write_str(",")?;
                }
                f.write_str("]")
            }
            Self::ByRef(element) => write!(f, "{element}&"),
            Self::Pointer(element) => write!(f, "{element}*"),
        }
    }
}

/// Errors from parsing the textual type reference syntax.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeRefParseError {
    #[error("empty type reference")]
    Empty,

    #[error("expected a type name at offset {0}")]
    ExpectedName(usize),

    #[error("unexpected `{found}` at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("unclosed `{0}`")]
    Unclosed(char),
}

impl FromStr for TypeRef {
    type Err = TypeRefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(TypeRefParseError::Empty);
        }

        let mut parser = Parser { src: s, pos: 0 };
        let ty = parser.parse_type()?;
        match parser.peek() {
            None => Ok(ty),
            Some(found) => Err(TypeRefParseError::Unexpected {
                found,
                offset: parser.pos,
            }),
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeRefParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            return true;
        }
        false
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeRefParseError> {
        self.skip_whitespace();

        let mut ty = if self.eat('!') {
            TypeRef::GenericParam(self.parse_name()?)
        } else {
            let name = self.parse_name()?;
            let args = if self.eat('<') {
                self.parse_args()?
            } else {
                Vec::new()
            };
            TypeRef::Named { name, args }
        };

        loop {
            match self.peek() {
                Some('[') => {
                    self.bump();
                    ty = TypeRef::Array {
                        element: Box::new(ty),
                        rank: self.parse_rank()?,
                    };
                }
                Some('&') => {
                    self.bump();
                    ty = TypeRef::ByRef(Box::new(ty));
                }
                Some('*') => {
                    self.bump();
                    ty = TypeRef::Pointer(Box::new(ty));
                }
                _ => break,
            }
        }

        self.skip_whitespace();
        Ok(ty)
    }

    fn parse_args(&mut self) -> Result<Vec<TypeRef>, TypeRefParseError> {
        let mut args = vec![self.parse_type()?];
        loop {
            let offset = self.pos;
            match self.bump() {
                Some(',') => args.push(self.parse_type()?),
                Some('>') => return Ok(args),
                Some(found) => return Err(TypeRefParseError::Unexpected { found, offset }),
                None => return Err(TypeRefParseError::Unclosed('<')),
            }
        }
    }

    /// Rank of an array suffix; the opening `[` is already consumed.
    fn parse_rank(&mut self) -> Result<u32, TypeRefParseError> {
        let mut rank = 1;
        loop {
            let offset = self.pos;
            match self.bump() {
                Some(',') => rank += 1,
                Some(']') => return Ok(rank),
                Some(found) => return Err(TypeRefParseError::Unexpected { found, offset }),
                None => return Err(TypeRefParseError::Unclosed('[')),
            }
        }
    }

    fn parse_name(&mut self) -> Result<String, TypeRefParseError> {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        if self.pos == start {
            return Err(TypeRefParseError::ExpectedName(start));
        }
        Ok(self.src[start..self.pos].to_string())
    }
}

fn is_name_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '<' | '>' | ',' | '[' | ']' | '&' | '*' | '!')
}
