//! Reading ESTree JSON into annotation nodes.
//!
//! Accepts the JSON emitted by `flow-parser` (Flow dialect) and
//! `@typescript-eslint/typescript-estree` (TypeScript dialect). Only the nodes
//! the resolver walks are decoded structurally; everything else becomes an
//! [`OpaqueNode`](crate::OpaqueNode) holding a copy of its JSON.

use crate::declarations::TypeDeclarationMap;
use crate::dialect::{self, Dialect, flow, typescript};
use crate::node::{AnnotationNode, TypeReference};
use serde_json::{Map, Value, json};
use std::fmt;
use tracing::{debug, trace};

/// Error returned when parser output does not have the expected shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadError {
    /// Expected a JSON object (an ESTree node).
    NotAnObject { context: String },
    /// A required field is absent or `null`.
    MissingField { node: String, field: &'static str },
    /// A field is present but holds the wrong kind of value.
    UnexpectedValue {
        node: String,
        field: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject { context } => {
                write!(f, "expected an ESTree node object in {context}")
            }
            Self::MissingField { node, field } => {
                write!(f, "{node} node is missing required field '{field}'")
            }
            Self::UnexpectedValue {
                node,
                field,
                expected,
            } => write!(f, "field '{field}' of {node} node must be {expected}"),
        }
    }
}

impl std::error::Error for ReadError {}

/// Read an annotation node.
///
/// `TypeAnnotation` / `TSTypeAnnotation` wrappers are transparent, so a
/// property's `typeAnnotation` field can be passed as-is.
pub fn read_annotation(value: &Value, dialect: Dialect) -> Result<AnnotationNode, ReadError> {
    let obj = as_node(value, "annotation")?;
    let shape = node_type(obj)?;

    match dialect {
        Dialect::Flow => read_flow(obj, shape),
        Dialect::TypeScript => read_typescript(obj, shape),
    }
}

/// Read a top-level statement that declares a type.
///
/// Returns `None` for statements that do not declare a named type (imports,
/// functions, ...). Alias and enum declarations become
/// [`AnnotationNode::Declaration`]; interfaces and opaque types are kept as
/// [`AnnotationNode::Opaque`].
pub fn read_declaration(
    value: &Value,
    dialect: Dialect,
) -> Result<Option<(String, AnnotationNode)>, ReadError> {
    let obj = as_node(value, "declaration")?;
    let shape = node_type(obj)?;
    if !dialect.type_declaration_shapes().contains(&shape) {
        trace!(shape, "skipping non-type statement");
        return Ok(None);
    }

    let name = declared_name(obj, shape)?;
    let node = if shape == dialect.type_alias_shape()
        || shape == dialect.enum_declaration_shape()
        || shape == flow::DECLARE_TYPE_ALIAS
    {
        read_annotation(value, dialect)?
    } else {
        AnnotationNode::opaque_with(shape, value.clone())
    };
    Ok(Some((name, node)))
}

impl TypeDeclarationMap {
    /// Collect the top-level type declarations of an ESTree `Program`.
    ///
    /// Declarations wrapped in export statements are included. A later
    /// declaration of the same name replaces an earlier one.
    pub fn from_program(program: &Value, dialect: Dialect) -> Result<Self, ReadError> {
        let obj = as_node(program, "program")?;
        let shape = node_type(obj)?;
        let body = match obj.get("body") {
            Some(Value::Array(body)) => body,
            Some(_) => {
                return Err(ReadError::UnexpectedValue {
                    node: shape.to_string(),
                    field: "body",
                    expected: "an array of statements",
                });
            }
            None => {
                return Err(ReadError::MissingField {
                    node: shape.to_string(),
                    field: "body",
                });
            }
        };

        let mut types = TypeDeclarationMap::new();
        for statement in body {
            let statement = unwrap_export(statement)?;
            let Some(statement) = statement else {
                continue;
            };
            if let Some((name, decl)) = read_declaration(statement, dialect)? {
                if types.insert(name.clone(), decl).is_some() {
                    debug!(name = %name, "duplicate type declaration replaced");
                }
            }
        }

        debug!(dialect = %dialect, count = types.len(), "collected type declarations");
        Ok(types)
    }
}

fn read_flow(obj: &Map<String, Value>, shape: &str) -> Result<AnnotationNode, ReadError> {
    match shape {
        flow::TYPE_ANNOTATION => {
            read_annotation(field(obj, shape, "typeAnnotation")?, Dialect::Flow)
        }
        flow::NULLABLE => Ok(AnnotationNode::nullable(read_annotation(
            field(obj, shape, "typeAnnotation")?,
            Dialect::Flow,
        )?)),
        flow::GENERIC => {
            let name = qualified_name(field(obj, shape, "id")?, shape, "id")?;
            let type_arguments = read_type_arguments(obj, &["typeParameters"], Dialect::Flow)?;
            Ok(TypeReference::with_arguments(name, type_arguments).into())
        }
        // `declare type` is an ordinary alias once read.
        flow::TYPE_ALIAS | flow::DECLARE_TYPE_ALIAS => {
            let name = declared_name(obj, shape)?;
            let right = read_annotation(field(obj, shape, "right")?, Dialect::Flow)?;
            Ok(AnnotationNode::declaration(flow::TYPE_ALIAS, name, right))
        }
        flow::ENUM_DECLARATION => {
            let name = declared_name(obj, shape)?;
            let body = field(obj, shape, "body")?;
            let body_shape = node_type(as_node(body, shape)?)?;
            Ok(AnnotationNode::declaration(
                shape,
                name,
                AnnotationNode::opaque_with(body_shape, body.clone()),
            ))
        }
        _ => Ok(AnnotationNode::opaque_with(shape, Value::Object(obj.clone()))),
    }
}

fn read_typescript(obj: &Map<String, Value>, shape: &str) -> Result<AnnotationNode, ReadError> {
    match shape {
        typescript::TYPE_ANNOTATION => read_annotation(
            field(obj, shape, "typeAnnotation")?,
            Dialect::TypeScript,
        ),
        typescript::TYPE_REFERENCE => {
            let name = qualified_name(field(obj, shape, "typeName")?, shape, "typeName")?;
            let type_arguments = read_type_arguments(
                obj,
                &["typeArguments", "typeParameters"],
                Dialect::TypeScript,
            )?;
            Ok(TypeReference::with_arguments(name, type_arguments).into())
        }
        typescript::TYPE_ALIAS => {
            let name = declared_name(obj, shape)?;
            let value = read_annotation(field(obj, shape, "typeAnnotation")?, Dialect::TypeScript)?;
            Ok(AnnotationNode::declaration(shape, name, value))
        }
        typescript::ENUM_DECLARATION => {
            let name = declared_name(obj, shape)?;
            // Older typescript-estree puts members on the declaration, newer
            // versions nest them in a `TSEnumBody`.
            let members = match obj.get("body").and_then(Value::as_object) {
                Some(body) => field(body, typescript::ENUM_BODY, "members")?,
                None => field(obj, shape, "members")?,
            };
            let body = AnnotationNode::opaque_with(
                typescript::ENUM_BODY,
                json!({ "type": typescript::ENUM_BODY, "members": members }),
            );
            Ok(AnnotationNode::declaration(shape, name, body))
        }
        typescript::UNION => read_typescript_union(obj, shape),
        _ => Ok(AnnotationNode::opaque_with(shape, Value::Object(obj.clone()))),
    }
}

/// `T | null` (or `undefined` / `void`) reads as a nullable `T`. Any other
/// union is opaque.
fn read_typescript_union(
    obj: &Map<String, Value>,
    shape: &str,
) -> Result<AnnotationNode, ReadError> {
    let Some(types) = field(obj, shape, "types")?.as_array() else {
        return Err(ReadError::UnexpectedValue {
            node: shape.to_string(),
            field: "types",
            expected: "an array of types",
        });
    };

    let mut non_null = Vec::with_capacity(types.len());
    for member in types {
        let member_shape = node_type(as_node(member, shape)?)?;
        if !typescript::NULL_KEYWORDS.contains(&member_shape) {
            non_null.push(member);
        }
    }

    match non_null.as_slice() {
        [single] if types.len() > 1 => Ok(AnnotationNode::nullable(read_annotation(
            single,
            Dialect::TypeScript,
        )?)),
        _ => Ok(AnnotationNode::opaque_with(shape, Value::Object(obj.clone()))),
    }
}

fn read_type_arguments(
    obj: &Map<String, Value>,
    fields: &[&'static str],
    dialect: Dialect,
) -> Result<Vec<AnnotationNode>, ReadError> {
    let Some(instantiation) = fields
        .iter()
        .find_map(|name| obj.get(*name).filter(|value| !value.is_null()))
    else {
        return Ok(Vec::new());
    };
    let inst = as_node(instantiation, "type arguments")?;
    let inst_shape = node_type(inst)?;
    match field(inst, inst_shape, "params")? {
        Value::Array(params) => params
            .iter()
            .map(|param| read_annotation(param, dialect))
            .collect(),
        _ => Err(ReadError::UnexpectedValue {
            node: inst_shape.to_string(),
            field: "params",
            expected: "an array of types",
        }),
    }
}

/// Returns the declaration inside an export wrapper, or the statement itself.
fn unwrap_export(statement: &Value) -> Result<Option<&Value>, ReadError> {
    let obj = as_node(statement, "program body")?;
    let shape = node_type(obj)?;
    if dialect::EXPORT_WRAPPERS.contains(&shape) {
        return Ok(obj.get("declaration").filter(|decl| decl.is_object()));
    }
    Ok(Some(statement))
}

/// `id.name` of a declaration.
fn declared_name(obj: &Map<String, Value>, shape: &str) -> Result<String, ReadError> {
    let id = as_node(field(obj, shape, "id")?, shape)?;
    match id.get("name") {
        Some(Value::String(name)) => Ok(name.clone()),
        Some(_) => Err(ReadError::UnexpectedValue {
            node: shape.to_string(),
            field: "id",
            expected: "an identifier with a string name",
        }),
        None => Err(ReadError::MissingField {
            node: shape.to_string(),
            field: "id",
        }),
    }
}

/// Name of an identifier or a qualified name, joined with `.`.
fn qualified_name(
    value: &Value,
    node: &str,
    field_name: &'static str,
) -> Result<String, ReadError> {
    let obj = as_node(value, node)?;
    let shape = obj.get("type").and_then(Value::as_str).unwrap_or_default();
    match shape {
        flow::QUALIFIED_IDENTIFIER => {
            let qualification =
                qualified_name(field(obj, shape, "qualification")?, shape, "qualification")?;
            let id = qualified_name(field(obj, shape, "id")?, shape, "id")?;
            Ok(format!("{qualification}.{id}"))
        }
        typescript::QUALIFIED_NAME => {
            let left = qualified_name(field(obj, shape, "left")?, shape, "left")?;
            let right = qualified_name(field(obj, shape, "right")?, shape, "right")?;
            Ok(format!("{left}.{right}"))
        }
        _ => match obj.get("name") {
            Some(Value::String(name)) => Ok(name.clone()),
            _ => Err(ReadError::UnexpectedValue {
                node: node.to_string(),
                field: field_name,
                expected: "an identifier or qualified name",
            }),
        },
    }
}

fn as_node<'v>(value: &'v Value, context: &str) -> Result<&'v Map<String, Value>, ReadError> {
    value.as_object().ok_or_else(|| ReadError::NotAnObject {
        context: context.to_string(),
    })
}

fn node_type(obj: &Map<String, Value>) -> Result<&str, ReadError> {
    match obj.get("type") {
        Some(Value::String(shape)) => Ok(shape),
        Some(_) => Err(ReadError::UnexpectedValue {
            node: "ESTree".to_string(),
            field: "type",
            expected: "a string",
        }),
        None => Err(ReadError::MissingField {
            node: "ESTree".to_string(),
            field: "type",
        }),
    }
}

fn field<'v>(
    obj: &'v Map<String, Value>,
    node: &str,
    name: &'static str,
) -> Result<&'v Value, ReadError> {
    match obj.get(name) {
        Some(Value::Null) | None => Err(ReadError::MissingField {
            node: node.to_string(),
            field: name,
        }),
        Some(value) => Ok(value),
    }
}

#[cfg(test)]
#[path = "../tests/estree_tests.rs"]
mod estree_tests;
