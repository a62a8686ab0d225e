//! Type-reference resolution over a file's declared types.
//!
//! Given an annotation node and the file's [`TypeDeclarationMap`], the
//! resolver strips nullable wrappers and follows alias and enum declarations
//! to the concrete node underneath, reporting:
//!
//! - whether nullability was seen anywhere along the chain
//! - the last alias or enum name followed (earlier hops are dropped)
//!
//! The dialect is injected through [`GrammarCapabilities`], which names the
//! alias and enum declaration shapes. Chains that loop back on themselves
//! fail with [`ResolveError::CyclicTypeReference`] instead of spinning.
//!
//! [`TypeDeclarationMap`]: tyres_ast::TypeDeclarationMap

pub mod config;
mod error;
pub mod grammar;
pub mod recursion;
mod resolve;

pub use config::ResolverConfig;
pub use error::ResolveError;
pub use grammar::{CustomGrammar, DeclarationKind, GrammarCapabilities};
pub use recursion::{MAX_ALIAS_CHAIN_DEPTH, RecursionGuard, RecursionProfile, RecursionResult};
pub use resolve::{
    ResolvedAnnotation, TypeResolutionStatus, TypeResolver, resolve_type_annotation,
    unwrap_alias_value,
};
