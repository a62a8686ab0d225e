//! Tests for reading ESTree JSON.

use super::*;
use serde_json::json;

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn flow_generic(name: &str) -> Value {
    json!({
        "type": "GenericTypeAnnotation",
        "id": ident(name),
        "typeParameters": null,
    })
}

fn nullable_reference(name: &str) -> AnnotationNode {
    AnnotationNode::nullable(AnnotationNode::reference(name))
}

fn shape_of<'a>(types: &'a TypeDeclarationMap, name: &str) -> Option<&'a str> {
    types.get(name).map(AnnotationNode::shape)
}

#[test]
fn test_flow_nullable_generic() {
    let value = json!({
        "type": "NullableTypeAnnotation",
        "typeAnnotation": flow_generic("Props"),
    });

    let node = read_annotation(&value, Dialect::Flow).expect("reads");
    assert_eq!(node, nullable_reference("Props"));
}

#[test]
fn test_flow_type_annotation_wrapper_is_transparent() {
    let value = json!({
        "type": "TypeAnnotation",
        "typeAnnotation": { "type": "StringTypeAnnotation" },
    });

    let node = read_annotation(&value, Dialect::Flow).expect("reads");
    assert_eq!(node.shape(), "StringTypeAnnotation");
    assert!(matches!(node, AnnotationNode::Opaque(_)));
}

#[test]
fn test_flow_qualified_generic_with_arguments() {
    let value = json!({
        "type": "GenericTypeAnnotation",
        "id": {
            "type": "QualifiedTypeIdentifier",
            "qualification": ident("React"),
            "id": ident("ElementRef"),
        },
        "typeParameters": {
            "type": "TypeParameterInstantiation",
            "params": [{ "type": "NumberTypeAnnotation" }],
        },
    });

    let node = read_annotation(&value, Dialect::Flow).expect("reads");
    let reference = node.as_reference().expect("reference");
    assert_eq!(reference.name, "React.ElementRef");
    assert_eq!(reference.type_arguments.len(), 1);
    assert_eq!(reference.type_arguments[0].shape(), "NumberTypeAnnotation");
}

#[test]
fn test_flow_alias_and_enum_declarations() {
    let alias = json!({
        "type": "TypeAlias",
        "id": ident("Foo"),
        "right": { "type": "NullableTypeAnnotation", "typeAnnotation": { "type": "StringTypeAnnotation" } },
    });
    let node = read_annotation(&alias, Dialect::Flow).expect("reads");
    let decl = node.as_declaration().expect("declaration");
    assert_eq!(decl.shape, "TypeAlias");
    assert_eq!(decl.name, "Foo");
    assert!(decl.value.is_nullable());

    let enum_decl = json!({
        "type": "EnumDeclaration",
        "id": ident("Color"),
        "body": { "type": "EnumStringBody", "members": [], "explicitType": true },
    });
    let node = read_annotation(&enum_decl, Dialect::Flow).expect("reads");
    let decl = node.as_declaration().expect("declaration");
    assert_eq!(decl.shape, "EnumDeclaration");
    assert_eq!(decl.value.shape(), "EnumStringBody");
}

#[test]
fn test_flow_declare_type_alias_reads_as_alias() {
    let value = json!({
        "type": "DeclareTypeAlias",
        "id": ident("Handle"),
        "right": { "type": "NumberTypeAnnotation" },
    });

    let node = read_annotation(&value, Dialect::Flow).expect("reads");
    assert_eq!(node.shape(), "TypeAlias");
}

#[test]
fn test_typescript_reference_and_alias() {
    let alias = json!({
        "type": "TSTypeAliasDeclaration",
        "id": ident("Handle"),
        "typeAnnotation": {
            "type": "TSTypeReference",
            "typeName": {
                "type": "TSQualifiedName",
                "left": ident("NS"),
                "right": ident("Inner"),
            },
            "typeArguments": {
                "type": "TSTypeParameterInstantiation",
                "params": [{ "type": "TSStringKeyword" }],
            },
        },
    });

    let node = read_annotation(&alias, Dialect::TypeScript).expect("reads");
    let decl = node.as_declaration().expect("declaration");
    assert_eq!(decl.shape, "TSTypeAliasDeclaration");
    let reference = decl.value.as_reference().expect("reference");
    assert_eq!(reference.name, "NS.Inner");
    assert_eq!(reference.type_arguments[0].shape(), "TSStringKeyword");
}

#[test]
fn test_typescript_union_with_null_reads_as_nullable() {
    let value = json!({
        "type": "TSUnionType",
        "types": [
            { "type": "TSTypeReference", "typeName": ident("Props") },
            { "type": "TSNullKeyword" },
            { "type": "TSUndefinedKeyword" },
        ],
    });

    let node = read_annotation(&value, Dialect::TypeScript).expect("reads");
    assert_eq!(node, nullable_reference("Props"));
}

#[test]
fn test_typescript_wide_union_is_opaque() {
    let value = json!({
        "type": "TSUnionType",
        "types": [{ "type": "TSStringKeyword" }, { "type": "TSNumberKeyword" }],
    });

    let node = read_annotation(&value, Dialect::TypeScript).expect("reads");
    assert_eq!(node.shape(), "TSUnionType");
    assert!(matches!(node, AnnotationNode::Opaque(_)));
}

#[test]
fn test_typescript_enum_members_in_either_position() {
    let legacy = json!({
        "type": "TSEnumDeclaration",
        "id": ident("Mode"),
        "members": [{ "type": "TSEnumMember", "id": ident("A") }],
    });
    let nested = json!({
        "type": "TSEnumDeclaration",
        "id": ident("Mode"),
        "body": { "type": "TSEnumBody", "members": [{ "type": "TSEnumMember", "id": ident("A") }] },
    });

    let a = read_annotation(&legacy, Dialect::TypeScript);
    let b = read_annotation(&nested, Dialect::TypeScript);
    assert_eq!(a, b);
    let a = a.expect("reads");
    let body = a.declaration_value().expect("enum body");
    assert_eq!(body.shape(), "TSEnumBody");
}

#[test]
fn test_read_errors() {
    assert!(matches!(
        read_annotation(&json!(42), Dialect::Flow),
        Err(ReadError::NotAnObject { .. })
    ));
    assert!(matches!(
        read_annotation(&json!({ "name": "x" }), Dialect::Flow),
        Err(ReadError::MissingField { field: "type", .. })
    ));
    assert_eq!(
        read_annotation(&json!({ "type": "NullableTypeAnnotation" }), Dialect::Flow),
        Err(ReadError::MissingField {
            node: "NullableTypeAnnotation".to_string(),
            field: "typeAnnotation",
        })
    );

    let alias = json!({ "type": "TypeAlias", "id": ident("X") });
    let err = read_annotation(&alias, Dialect::Flow).expect_err("right");
    let message = "TypeAlias node is missing required field 'right'";
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_from_program_flow() {
    let program = json!({
        "type": "Program",
        "body": [
            { "type": "ImportDeclaration", "specifiers": [], "source": { "type": "Literal", "value": "x" } },
            {
                "type": "ExportNamedDeclaration",
                "declaration": { "type": "TypeAlias", "id": ident("Props"), "right": flow_generic("Base") },
            },
            { "type": "InterfaceDeclaration", "id": ident("Base"), "body": { "type": "ObjectTypeAnnotation" } },
            {
                "type": "EnumDeclaration",
                "id": ident("Color"),
                "body": { "type": "EnumNumberBody", "members": [] },
            },
            { "type": "FunctionDeclaration", "id": ident("helper"), "params": [] },
            { "type": "ExportNamedDeclaration", "declaration": null, "specifiers": [] },
        ],
    });

    let types = TypeDeclarationMap::from_program(&program, Dialect::Flow);
    let types = types.expect("reads");
    assert_eq!(types.sorted_names(), vec!["Base", "Color", "Props"]);
    assert_eq!(shape_of(&types, "Props"), Some("TypeAlias"));
    assert_eq!(shape_of(&types, "Base"), Some("InterfaceDeclaration"));
    assert!(matches!(types.get("Base"), Some(AnnotationNode::Opaque(_))));
    assert_eq!(shape_of(&types, "Color"), Some("EnumDeclaration"));
}

#[test]
fn test_from_program_typescript_last_declaration_wins() {
    let program = json!({
        "type": "Program",
        "body": [
            { "type": "TSTypeAliasDeclaration", "id": ident("T"), "typeAnnotation": { "type": "TSStringKeyword" } },
            { "type": "TSTypeAliasDeclaration", "id": ident("T"), "typeAnnotation": { "type": "TSNumberKeyword" } },
            { "type": "TSInterfaceDeclaration", "id": ident("I"), "body": { "type": "TSInterfaceBody", "body": [] } },
        ],
    });

    let types = TypeDeclarationMap::from_program(&program, Dialect::TypeScript);
    let types = types.expect("reads");
    assert_eq!(types.len(), 2);
    let value = types.get("T").and_then(AnnotationNode::declaration_value);
    assert_eq!(value.map(AnnotationNode::shape), Some("TSNumberKeyword"));
}

#[test]
fn test_from_program_requires_body_array() {
    let program = json!({ "type": "Program", "body": {} });
    let err = TypeDeclarationMap::from_program(&program, Dialect::Flow);
    let err = err.expect_err("body must be an array");
    assert!(matches!(
        err,
        ReadError::UnexpectedValue { field: "body", .. }
    ));
}
