//! Parsed schema document tree.
//!
//! This is the input side of the generator: a closed set of definition
//! nodes as produced by a schema-language parser. Documents can be loaded
//! from a JSON encoding of the tree (see [`load_document`]) or, with the
//! `sdl` feature, lowered from SDL text by [`crate::sdl`].
//!
//! The JSON form is internally tagged by `"kind"`:
//!
//! ```json
//! {
//!   "definitions": [
//!     {
//!       "kind": "object_type_definition",
//!       "name": "User",
//!       "interfaces": ["Node"],
//!       "directives": [{ "name": "entity" }],
//!       "fields": [
//!         { "name": "name", "type": { "kind": "named", "name": "String" } }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A `kind` outside the known set is kept as [`Definition::Unsupported`]
//! with its raw tag and name, so the visitor can report what it rejected.

use std::path::Path;

use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// A parsed schema document: definitions in source order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "definitions")]
    pub definitions: Vec<Definition>,
}

/// Kind tags with a modeled [`Definition`] variant.
pub const KNOWN_KINDS: &[&str] = &[
    "schema_definition",
    "directive_definition",
    "scalar_type_definition",
    "object_type_definition",
    "input_object_type_definition",
    "interface_type_definition",
    "union_type_definition",
    "enum_type_definition",
    "schema_extension",
    "scalar_type_extension",
    "object_type_extension",
    "interface_type_extension",
    "union_type_extension",
    "enum_type_extension",
    "input_object_type_extension",
];

// Known kinds go through the derived decoder so malformed nodes still fail
// with a field-level message. Unknown kinds keep their tag and name.
fn definitions<'de, D>(deserializer: D) -> std::result::Result<Vec<Definition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|value| {
            let Some(kind) = value.get("kind").and_then(Value::as_str).map(str::to_owned) else {
                return Err(<D::Error as de::Error>::missing_field("kind"));
            };
            if KNOWN_KINDS.contains(&kind.as_str()) {
                return Definition::deserialize(value).map_err(<D::Error as de::Error>::custom);
            }
            let name = value.get("name").and_then(Value::as_str).map(str::to_owned);
            Ok(Definition::Unsupported { kind, name })
        })
        .collect()
}

/// One top-level definition node.
///
/// Object and enum definitions and their extensions are modeled for code
/// generation. Every other kind is walked but produces no declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Definition {
    SchemaDefinition(SchemaNode),
    DirectiveDefinition(DirectiveDefinitionNode),
    ScalarTypeDefinition(ScalarNode),
    ObjectTypeDefinition(ObjectTypeNode),
    InputObjectTypeDefinition(InputObjectNode),
    InterfaceTypeDefinition(ObjectTypeNode),
    UnionTypeDefinition(UnionNode),
    EnumTypeDefinition(EnumNode),

    SchemaExtension(SchemaNode),
    ScalarTypeExtension(ScalarNode),
    ObjectTypeExtension(ObjectTypeNode),
    InterfaceTypeExtension(ObjectTypeNode),
    UnionTypeExtension(UnionNode),
    EnumTypeExtension(EnumNode),
    InputObjectTypeExtension(InputObjectNode),

    /// Any `kind` tag outside [`KNOWN_KINDS`], e.g. an operation definition.
    #[serde(skip)]
    Unsupported { kind: String, name: Option<String> },
}

impl Definition {
    /// The snake_case kind tag of this definition, as used in the JSON form.
    pub fn kind(&self) -> &str {
        match self {
            Definition::SchemaDefinition(_) => "schema_definition",
            Definition::DirectiveDefinition(_) => "directive_definition",
            Definition::ScalarTypeDefinition(_) => "scalar_type_definition",
            Definition::ObjectTypeDefinition(_) => "object_type_definition",
            Definition::InputObjectTypeDefinition(_) => "input_object_type_definition",
            Definition::InterfaceTypeDefinition(_) => "interface_type_definition",
            Definition::UnionTypeDefinition(_) => "union_type_definition",
            Definition::EnumTypeDefinition(_) => "enum_type_definition",
            Definition::SchemaExtension(_) => "schema_extension",
            Definition::ScalarTypeExtension(_) => "scalar_type_extension",
            Definition::ObjectTypeExtension(_) => "object_type_extension",
            Definition::InterfaceTypeExtension(_) => "interface_type_extension",
            Definition::UnionTypeExtension(_) => "union_type_extension",
            Definition::EnumTypeExtension(_) => "enum_type_extension",
            Definition::InputObjectTypeExtension(_) => "input_object_type_extension",
            Definition::Unsupported { kind, .. } => kind,
        }
    }
}

/// A reference to a type, with its not-null and list wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    Named { name: String },
    List { of_type: Box<TypeRef> },
    NonNull { of_type: Box<TypeRef> },
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named { name: name.into() }
    }

    pub fn list(of_type: TypeRef) -> Self {
        TypeRef::List {
            of_type: Box::new(of_type),
        }
    }

    pub fn non_null(of_type: TypeRef) -> Self {
        TypeRef::NonNull {
            of_type: Box::new(of_type),
        }
    }
}

/// A directive applied to a definition, e.g. `@entity` or `@key(fields: "id")`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

/// A directive argument. Values are kept in their source text form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Argument {
    pub name: String,
    pub value: String,
}

/// Object types, interfaces, and their extensions share this shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectTypeNode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(default)]
    pub directives: Vec<Directive>,
}

/// A field argument or an input-object field.
#[derive(Debug, Clone, Deserialize)]
pub struct InputValueDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnumNode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub values: Vec<EnumValueDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumValueDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScalarNode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnionNode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputObjectNode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub fields: Vec<InputValueDefinition>,
}

/// `schema { query: Query }` and `extend schema { ... }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaNode {
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub operation_types: Vec<OperationTypeDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationTypeDefinition {
    /// `query`, `mutation` or `subscription`.
    pub operation: String,
    pub type_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectiveDefinitionNode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    #[serde(default)]
    pub repeatable: bool,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Load a JSON-encoded schema document from disk.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let document: Document = serde_json::from_str(&content)?;
    Ok(document)
}
