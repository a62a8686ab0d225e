//! tyres: type-reference resolution for Flow and TypeScript source-API
//! declarations.
//!
//! This facade re-exports the workspace crates:
//! - `tyres-ast`: annotation nodes, dialects, declaration maps, ESTree reading
//! - `tyres-resolver`: nullable / alias resolution and alias value unwrapping
//!
//! ```ignore
//! use tyres::{AnnotationNode, Dialect, TypeDeclarationMap, resolve_type_annotation};
//!
//! let types = TypeDeclarationMap::from_program(&program_json, Dialect::Flow)?;
//! let node = AnnotationNode::reference("Props");
//! let resolved = resolve_type_annotation(Some(&node), &types, &Dialect::Flow)?;
//! ```

// AST - Annotation nodes and declaration maps
pub use tyres_ast as ast;
pub use tyres_ast::{AnnotationNode, Dialect, ReadError, TypeDeclarationMap};

// Resolver - Nullable / alias resolution
pub use tyres_resolver as resolver;
pub use tyres_resolver::{
    CustomGrammar, DeclarationKind, GrammarCapabilities, ResolveError, ResolvedAnnotation,
    ResolverConfig, TypeResolutionStatus, TypeResolver, resolve_type_annotation,
    unwrap_alias_value,
};

// Tracing subscriber setup for binaries
pub mod tracing_config;
