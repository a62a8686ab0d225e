//! Grammar capability descriptors.
//!
//! The resolver never hard-codes which declaration shapes are aliases or
//! enums. It asks a [`GrammarCapabilities`] implementation supplied by the
//! caller, so new dialects only need a new descriptor.

use serde::Serialize;
use tyres_ast::Dialect;

/// How the resolver treats a declaration it followed.
///
/// Serializes as [`DeclarationKind::as_str`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// Follow the alias right-hand side.
    #[serde(rename = "alias")]
    TypeAlias,
    /// Follow the enum body.
    Enum,
}

impl DeclarationKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeAlias => "alias",
            Self::Enum => "enum",
        }
    }
}

/// Dialect-specific declaration shape tags.
pub trait GrammarCapabilities {
    /// Shape tag of a type alias declaration.
    fn type_alias(&self) -> &str;

    /// Shape tag of an enum declaration.
    fn enum_declaration(&self) -> &str;

    /// Classify a declaration shape. `None` means the shape is neither.
    fn classify_declaration(&self, shape: &str) -> Option<DeclarationKind> {
        if shape == self.type_alias() {
            Some(DeclarationKind::TypeAlias)
        } else if shape == self.enum_declaration() {
            Some(DeclarationKind::Enum)
        } else {
            None
        }
    }
}

impl GrammarCapabilities for Dialect {
    fn type_alias(&self) -> &str {
        self.type_alias_shape()
    }

    fn enum_declaration(&self) -> &str {
        self.enum_declaration_shape()
    }
}

impl<G: GrammarCapabilities + ?Sized> GrammarCapabilities for &G {
    fn type_alias(&self) -> &str {
        (**self).type_alias()
    }

    fn enum_declaration(&self) -> &str {
        (**self).enum_declaration()
    }
}

/// Descriptor for dialects without a built-in [`Dialect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomGrammar {
    pub type_alias: String,
    pub enum_declaration: String,
}

impl CustomGrammar {
    pub fn new(type_alias: impl Into<String>, enum_declaration: impl Into<String>) -> Self {
        Self {
            type_alias: type_alias.into(),
            enum_declaration: enum_declaration.into(),
        }
    }
}

impl GrammarCapabilities for CustomGrammar {
    fn type_alias(&self) -> &str {
        &self.type_alias
    }

    fn enum_declaration(&self) -> &str {
        &self.enum_declaration
    }
}
