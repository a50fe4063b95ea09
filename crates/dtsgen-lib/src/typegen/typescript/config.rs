//! Configuration types for TypeScript emission.

/// Indentation unit for nested declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

impl Indent {
    pub(crate) fn unit(self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(n as usize),
            Self::Tab => "\t".to_string(),
        }
    }
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the single top-level ambient namespace
    pub(crate) root_namespace: String,
    /// Whether to emit the auto-generated banner
    pub(crate) header: bool,
    pub(crate) indent: Indent,
    /// Mark getter-only properties `readonly`
    pub(crate) readonly_properties: bool,
    /// Also render declared public static fields and properties
    pub(crate) static_members: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_namespace: "dotnet".to_string(),
            header: true,
            indent: Indent::default(),
            readonly_properties: false,
            static_members: false,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top-level namespace name.
    pub fn root_namespace(mut self, name: impl Into<String>) -> Self {
        self.root_namespace = name.into();
        self
    }

    /// Set whether to emit the banner comment.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    pub fn indent(mut self, value: Indent) -> Self {
        self.indent = value;
        self
    }

    /// Set whether getter-only properties are marked `readonly`.
    pub fn readonly_properties(mut self, value: bool) -> Self {
        self.readonly_properties = value;
        self
    }

    /// Set whether static fields and properties are rendered.
    pub fn static_members(mut self, value: bool) -> Self {
        self.static_members = value;
        self
    }
}
