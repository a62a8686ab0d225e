//! Annotation node types for the tyres resolver.
//!
//! This crate provides the data the resolver works on:
//! - The closed annotation node sum type (`AnnotationNode`)
//! - Source dialects and their node shape tags (`Dialect`)
//! - The per-file symbol table of named declarations (`TypeDeclarationMap`)
//! - Reading ESTree JSON produced by Flow and TypeScript parsers (`estree`)

// Annotation nodes
pub mod node;
pub use node::{AnnotationNode, DeclarationNode, NullableAnnotation, OpaqueNode, TypeReference};

// Source dialects and shape tags
pub mod dialect;
pub use dialect::Dialect;

// Symbol table of named type declarations
pub mod declarations;
pub use declarations::TypeDeclarationMap;

// ESTree JSON reader
pub mod estree;
pub use estree::{ReadError, read_annotation, read_declaration};
