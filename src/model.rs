//! The flattened type model shared by the visitor, merge and render passes.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::shape::FieldShape;

/// What a [`TypeItem`] declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Interface,
    ObjectType,
    Enum,
    /// An `extend type` or `extend enum` that has not been promoted.
    Extension,
}

/// A field of a type, or an enumerant of an enum (which has no shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<FieldShape>,
}

impl Field {
    pub fn typed(name: impl Into<String>, shape: FieldShape) -> Self {
        Field {
            name: name.into(),
            shape: Some(shape),
        }
    }

    pub fn enumerant(name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            shape: None,
        }
    }
}

/// One schema-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeItem {
    pub name: String,
    pub kind: ItemKind,
    pub fields: Vec<Field>,
    /// Interface names in declaration order. Not de-duplicated.
    pub interfaces: Vec<String>,
    /// Names of the directives attached to the declaration.
    pub tags: BTreeSet<String>,
}

impl TypeItem {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        TypeItem {
            name: name.into(),
            kind,
            fields: Vec::new(),
            interfaces: Vec::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
