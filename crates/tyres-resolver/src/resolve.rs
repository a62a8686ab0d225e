//! Nullable and alias resolution.
//!
//! [`resolve_type_annotation`] reduces an annotation to the node it stands
//! for: nullable wrappers are stripped (and remembered), and type references
//! are followed through alias and enum declarations in the file's
//! [`TypeDeclarationMap`]. Only the last declaration followed is reported.
//!
//! ```text
//! type Inner = ?string;
//! type Outer = Inner;
//!
//! resolve(Outer)  =>  { nullable: true, annotation: string, status: alias "Inner" }
//! ```
//!
//! [`unwrap_alias_value`] is the narrow variant: it follows references to
//! declaration values and nothing else.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::grammar::{DeclarationKind, GrammarCapabilities};
use crate::recursion::{RecursionGuard, RecursionResult};
use serde::Serialize;
use tracing::{debug, trace};
use tyres_ast::{AnnotationNode, TypeDeclarationMap};

/// Whether a declaration was followed, and which one came last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum TypeResolutionStatus {
    /// No declaration was followed.
    #[default]
    Unresolved,
    /// `name` is the last declaration followed; earlier hops are not kept.
    Resolved { kind: DeclarationKind, name: String },
}

impl TypeResolutionStatus {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn kind(&self) -> Option<DeclarationKind> {
        match self {
            Self::Unresolved => None,
            Self::Resolved { kind, .. } => Some(*kind),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unresolved => None,
            Self::Resolved { name, .. } => Some(name),
        }
    }
}

/// Result of [`resolve_type_annotation`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedAnnotation<'a> {
    /// A nullable wrapper was seen anywhere along the chain.
    pub nullable: bool,
    /// The node resolution stopped at.
    pub annotation: &'a AnnotationNode,
    pub status: TypeResolutionStatus,
}

/// A grammar plus configuration, reusable across many resolutions.
#[derive(Clone, Debug)]
pub struct TypeResolver<G> {
    grammar: G,
    config: ResolverConfig,
}

impl<G: GrammarCapabilities> TypeResolver<G> {
    pub fn new(grammar: G) -> Self {
        Self {
            grammar,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grammar(&self) -> &G {
        &self.grammar
    }

    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Strip nullable wrappers and follow alias / enum declarations until a
    /// node that is neither is reached.
    ///
    /// A reference to a name missing from `types` is returned as-is.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn resolve<'a>(
        &self,
        annotation: Option<&'a AnnotationNode>,
        types: &'a TypeDeclarationMap,
    ) -> Result<ResolvedAnnotation<'a>, ResolveError> {
        let Some(mut node) = annotation else {
            return Err(ResolveError::MissingAnnotation);
        };
        let mut nullable = false;
        let mut status = TypeResolutionStatus::Unresolved;
        let mut guard = RecursionGuard::with_profile(self.config.recursion_profile());

        loop {
            let reference = match node {
                AnnotationNode::Nullable(wrapper) => {
                    nullable = true;
                    node = wrapper.inner.as_ref();
                    continue;
                }
                AnnotationNode::Reference(reference) => reference,
                AnnotationNode::Declaration(_) | AnnotationNode::Opaque(_) => break,
            };

            let Some((name, decl)) = types.get_entry(&reference.name) else {
                trace!(name = %reference.name, "reference is not declared in this file");
                break;
            };

            let (kind, value) = match decl {
                AnnotationNode::Declaration(declaration) => (
                    self.grammar.classify_declaration(&declaration.shape),
                    declaration.value.as_ref(),
                ),
                other => (None, other),
            };
            let Some(kind) = kind else {
                return Err(ResolveError::UnsupportedDeclaration {
                    name: name.to_string(),
                    found: decl.shape().to_string(),
                    type_alias: self.grammar.type_alias().to_string(),
                    enum_declaration: self.grammar.enum_declaration().to_string(),
                });
            };

            enter_declaration(&mut guard, name)?;
            trace!(name, kind = kind.as_str(), "following declaration");
            status = TypeResolutionStatus::Resolved {
                kind,
                name: name.to_string(),
            };
            node = value;
        }

        debug!(
            nullable,
            shape = node.shape(),
            hops = guard.depth(),
            "resolved type annotation"
        );
        Ok(ResolvedAnnotation {
            nullable,
            annotation: node,
            status,
        })
    }

    /// Follow type references through declaration values.
    ///
    /// Nullable wrappers are not stripped. Enum declarations are followed to
    /// their body exactly like aliases to their right-hand side, so an enum
    /// reference unwraps instead of failing. The grammar is not consulted.
    /// Any node other than a reference to a declared name is returned
    /// unchanged.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn unwrap_alias_value<'a>(
        &self,
        node: &'a AnnotationNode,
        types: &'a TypeDeclarationMap,
    ) -> Result<&'a AnnotationNode, ResolveError> {
        let mut guard = RecursionGuard::with_profile(self.config.recursion_profile());
        unwrap_with_guard(node, types, &mut guard)
    }
}

/// Resolve `annotation` with the default configuration.
///
/// See [`TypeResolver::resolve`].
pub fn resolve_type_annotation<'a, G: GrammarCapabilities + ?Sized>(
    annotation: Option<&'a AnnotationNode>,
    types: &'a TypeDeclarationMap,
    grammar: &G,
) -> Result<ResolvedAnnotation<'a>, ResolveError> {
    TypeResolver::new(grammar).resolve(annotation, types)
}

/// Follow `node` through declaration values with the default configuration.
///
/// See [`TypeResolver::unwrap_alias_value`].
pub fn unwrap_alias_value<'a>(
    node: &'a AnnotationNode,
    types: &'a TypeDeclarationMap,
) -> Result<&'a AnnotationNode, ResolveError> {
    let mut guard = RecursionGuard::with_profile(ResolverConfig::default().recursion_profile());
    unwrap_with_guard(node, types, &mut guard)
}

fn unwrap_with_guard<'a>(
    node: &'a AnnotationNode,
    types: &'a TypeDeclarationMap,
    guard: &mut RecursionGuard<&'a str>,
) -> Result<&'a AnnotationNode, ResolveError> {
    let Some(reference) = node.as_reference() else {
        return Ok(node);
    };
    let Some((name, decl)) = types.get_entry(&reference.name) else {
        return Ok(node);
    };
    // Interfaces and other value-less entries end the walk.
    let Some(value) = decl.declaration_value() else {
        return Ok(node);
    };

    enter_declaration(guard, name)?;
    trace!(name, "unwrapping alias value");
    let result = unwrap_with_guard(value, types, guard);
    guard.leave(name);
    result
}

fn enter_declaration<'a>(
    guard: &mut RecursionGuard<&'a str>,
    name: &'a str,
) -> Result<(), ResolveError> {
    match guard.enter(name) {
        RecursionResult::Entered => Ok(()),
        RecursionResult::Cycle => Err(ResolveError::CyclicTypeReference {
            cycle: guard
                .cycle_from(name)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }),
        RecursionResult::DepthExceeded => Err(ResolveError::ChainTooDeep {
            name: guard.path().first().copied().unwrap_or(name).to_string(),
            limit: guard.max_depth(),
        }),
    }
}

#[cfg(test)]
#[path = "../tests/resolve_tests.rs"]
mod resolve_tests;

#[cfg(test)]
#[path = "../tests/unwrap_tests.rs"]
mod unwrap_tests;
