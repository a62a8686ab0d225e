//! Annotation node sum type.
//!
//! An annotation tree is made of four node kinds. Only nullable wrappers and
//! type references are walked by the resolver; declarations are looked up
//! through the [`TypeDeclarationMap`](crate::TypeDeclarationMap) and opaque
//! nodes are terminal.
//!
//! | Variant | Meaning | Example (Flow) |
//! |---------|---------|----------------|
//! | `Nullable` | inner type may also be absent | `?string` |
//! | `Reference` | names another type | `Props`, `Foo.Bar<T>` |
//! | `Declaration` | named binding with a value node | `type Foo = string` |
//! | `Opaque` | anything else, never inspected | `string`, `{ a: number }` |

use serde::Serialize;
use serde_json::Value;

/// Shape reported by every nullable wrapper.
pub const NULLABLE_SHAPE: &str = "NullableTypeAnnotation";

/// Shape reported by every type reference.
pub const REFERENCE_SHAPE: &str = "GenericTypeAnnotation";

/// A node in a type-annotation tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnnotationNode {
    Nullable(NullableAnnotation),
    Reference(TypeReference),
    Declaration(DeclarationNode),
    Opaque(OpaqueNode),
}

/// `?T`: the wrapped type also permits an absent value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NullableAnnotation {
    pub inner: Box<AnnotationNode>,
}

/// A reference to a named type, looked up by `name`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeReference {
    /// Identifier as written; qualified names are joined with `.`.
    pub name: String,
    /// Type arguments, carried through untouched.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<AnnotationNode>,
}

/// A named type binding.
///
/// The `shape` is the dialect's node tag (`TypeAlias`, `TSEnumDeclaration`, ...).
/// Whether the declaration counts as an alias or an enum is decided by the
/// caller's grammar, not by this type. `value` is the alias right-hand side or
/// the enum body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeclarationNode {
    pub shape: String,
    pub name: String,
    pub value: Box<AnnotationNode>,
}

/// Any node the resolver does not walk. The raw payload is kept for
/// downstream consumers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpaqueNode {
    pub shape: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub raw: Value,
}

impl AnnotationNode {
    pub fn nullable(inner: AnnotationNode) -> Self {
        Self::Nullable(NullableAnnotation {
            inner: Box::new(inner),
        })
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(TypeReference {
            name: name.into(),
            type_arguments: Vec::new(),
        })
    }

    pub fn declaration(
        shape: impl Into<String>,
        name: impl Into<String>,
        value: AnnotationNode,
    ) -> Self {
        Self::Declaration(DeclarationNode {
            shape: shape.into(),
            name: name.into(),
            value: Box::new(value),
        })
    }

    /// Opaque node with no payload.
    pub fn opaque(shape: impl Into<String>) -> Self {
        Self::opaque_with(shape, Value::Null)
    }

    pub fn opaque_with(shape: impl Into<String>, raw: Value) -> Self {
        Self::Opaque(OpaqueNode {
            shape: shape.into(),
            raw,
        })
    }

    /// The node's shape tag.
    pub fn shape(&self) -> &str {
        match self {
            Self::Nullable(_) => NULLABLE_SHAPE,
            Self::Reference(_) => REFERENCE_SHAPE,
            Self::Declaration(decl) => &decl.shape,
            Self::Opaque(opaque) => &opaque.shape,
        }
    }

    pub fn as_reference(&self) -> Option<&TypeReference> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn as_declaration(&self) -> Option<&DeclarationNode> {
        match self {
            Self::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    /// Right-hand side of a declaration; `None` for every other node.
    pub fn declaration_value(&self) -> Option<&AnnotationNode> {
        self.as_declaration().map(|decl| decl.value.as_ref())
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

impl TypeReference {
    pub fn with_arguments(name: impl Into<String>, type_arguments: Vec<AnnotationNode>) -> Self {
        Self {
            name: name.into(),
            type_arguments,
        }
    }
}

impl From<TypeReference> for AnnotationNode {
    fn from(reference: TypeReference) -> Self {
        Self::Reference(reference)
    }
}

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod node_tests;
