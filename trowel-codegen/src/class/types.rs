//! Type references and member visibility.

/// A type reference in a property or method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A builtin type written verbatim (`string`, `array`, `int`, `void`).
    Builtin(String),
    /// A class type by fully qualified name, shortened by the printer.
    Class(String),
    /// A nullable type (`?string`).
    Nullable(Box<TypeRef>),
}

impl TypeRef {
    /// Create a builtin type reference.
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::Builtin(name.into())
    }

    /// Create a class type reference.
    pub fn class(fqn: impl Into<String>) -> Self {
        Self::Class(fqn.into())
    }

    /// Create a nullable type reference.
    pub fn nullable(inner: TypeRef) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Convenience: `string`.
    pub fn string() -> Self {
        Self::builtin("string")
    }

    /// Convenience: `array`.
    pub fn array() -> Self {
        Self::builtin("array")
    }
}

/// Visibility of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// The modifier keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}
