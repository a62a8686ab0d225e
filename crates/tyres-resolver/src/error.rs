use std::fmt;

/// Fatal resolution failure. None of these are recoverable by retrying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The resolver was called without an annotation node.
    MissingAnnotation,

    /// A type reference named a declaration that is neither an alias nor an
    /// enum for the active grammar.
    UnsupportedDeclaration {
        name: String,
        found: String,
        type_alias: String,
        enum_declaration: String,
    },

    /// A declaration chain leads back to a name already on it.
    /// The first and last entries are the repeated name.
    CyclicTypeReference { cycle: Vec<String> },

    /// The chain from `name` exceeded the configured depth.
    ChainTooDeep { name: String, limit: u32 },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnnotation => {
                f.write_str("resolve_type_annotation(): type annotation cannot be absent")
            }
            Self::UnsupportedDeclaration {
                found,
                type_alias,
                enum_declaration,
                ..
            } => write!(
                f,
                "A non GenericTypeAnnotation must be a type declaration ('{type_alias}') or enum ('{enum_declaration}'). Instead, got the unsupported {found}."
            ),
            Self::CyclicTypeReference { cycle } => {
                write!(f, "cyclic type reference: {}", cycle.join(" -> "))
            }
            Self::ChainTooDeep { name, limit } => write!(
                f,
                "type reference chain through '{name}' exceeds the limit of {limit} declarations"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

impl ResolveError {
    /// The declaration name most relevant to the failure, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::MissingAnnotation => None,
            Self::UnsupportedDeclaration { name, .. } | Self::ChainTooDeep { name, .. } => {
                Some(name)
            }
            Self::CyclicTypeReference { cycle } => cycle.first().map(String::as_str),
        }
    }
}
