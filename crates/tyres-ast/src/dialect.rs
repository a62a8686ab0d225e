//! Source dialects and the node shape tags they use.
//!
//! Flow and TypeScript describe the same constructs with differently named
//! ESTree nodes. The tags here are the `type` strings emitted by
//! `flow-parser` and `@typescript-eslint/typescript-estree`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod flow {
    pub const TYPE_ALIAS: &str = "TypeAlias";
    pub const DECLARE_TYPE_ALIAS: &str = "DeclareTypeAlias";
    pub const ENUM_DECLARATION: &str = "EnumDeclaration";
    pub const NULLABLE: &str = "NullableTypeAnnotation";
    pub const GENERIC: &str = "GenericTypeAnnotation";
    pub const QUALIFIED_IDENTIFIER: &str = "QualifiedTypeIdentifier";
    pub const TYPE_ANNOTATION: &str = "TypeAnnotation";

    /// Top-level statements that declare a named type.
    pub const TYPE_DECLARATIONS: &[&str] = &[
        TYPE_ALIAS,
        DECLARE_TYPE_ALIAS,
        ENUM_DECLARATION,
        "InterfaceDeclaration",
        "DeclareInterface",
        "OpaqueType",
        "DeclareOpaqueType",
    ];
}

pub mod typescript {
    pub const TYPE_ALIAS: &str = "TSTypeAliasDeclaration";
    pub const ENUM_DECLARATION: &str = "TSEnumDeclaration";
    pub const ENUM_BODY: &str = "TSEnumBody";
    pub const TYPE_REFERENCE: &str = "TSTypeReference";
    pub const QUALIFIED_NAME: &str = "TSQualifiedName";
    pub const UNION: &str = "TSUnionType";
    pub const TYPE_ANNOTATION: &str = "TSTypeAnnotation";
    pub const NULL_KEYWORDS: &[&str] = &["TSNullKeyword", "TSUndefinedKeyword", "TSVoidKeyword"];

    pub const TYPE_DECLARATIONS: &[&str] =
        &[TYPE_ALIAS, ENUM_DECLARATION, "TSInterfaceDeclaration"];
}

/// Export wrappers whose `declaration` is unpacked when collecting a program.
pub const EXPORT_WRAPPERS: &[&str] = &[
    "ExportNamedDeclaration",
    "ExportDefaultDeclaration",
    "DeclareExportDeclaration",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Flow,
    #[serde(alias = "ts")]
    TypeScript,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Flow, Dialect::TypeScript];

    /// Shape tag of a type alias declaration.
    pub const fn type_alias_shape(self) -> &'static str {
        match self {
            Self::Flow => flow::TYPE_ALIAS,
            Self::TypeScript => typescript::TYPE_ALIAS,
        }
    }

    /// Shape tag of an enum declaration.
    pub const fn enum_declaration_shape(self) -> &'static str {
        match self {
            Self::Flow => flow::ENUM_DECLARATION,
            Self::TypeScript => typescript::ENUM_DECLARATION,
        }
    }

    /// Statement shapes collected into a [`TypeDeclarationMap`](crate::TypeDeclarationMap).
    pub const fn type_declaration_shapes(self) -> &'static [&'static str] {
        match self {
            Self::Flow => flow::TYPE_DECLARATIONS,
            Self::TypeScript => typescript::TYPE_DECLARATIONS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flow" => Ok(Self::Flow),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(format!("unknown dialect '{other}' (expected flow or typescript)")),
        }
    }
}
