//! Field shapes: a type reference with its wrappers unwrapped.
//!
//! A [`FieldShape`] mirrors the wrapper nesting of a [`TypeRef`]. Not-null is
//! a flag on the current node; a list opens a new nested node for its
//! element type.
//!
//! | type reference | shape |
//! |----------------|-------|
//! | `T` | `Scalar(T)` |
//! | `T!` | `Scalar(T)`, not-null |
//! | `[T!]` | `List(Scalar(T), not-null)` |
//! | `[T]!` | `List(Scalar(T))`, not-null |

use serde::Serialize;

use crate::ast::TypeRef;

/// The resolved type of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldShape {
    /// The outer wrapper forbids an absent value.
    pub not_null: bool,
    pub kind: ShapeKind,
}

/// Either a sequence of an element shape, or a named leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    List(Box<FieldShape>),
    /// A scalar keyword or a reference to a named interface, type or enum.
    Scalar(String),
}

impl FieldShape {
    pub fn scalar(name: impl Into<String>) -> Self {
        FieldShape {
            not_null: false,
            kind: ShapeKind::Scalar(name.into()),
        }
    }

    pub fn list(element: FieldShape) -> Self {
        FieldShape {
            not_null: false,
            kind: ShapeKind::List(Box::new(element)),
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, ShapeKind::List(_))
    }

    /// The element shape, if this is a list.
    pub fn element(&self) -> Option<&FieldShape> {
        match &self.kind {
            ShapeKind::List(element) => Some(element),
            ShapeKind::Scalar(_) => None,
        }
    }

    /// The leaf name, if this is not a list.
    pub fn scalar_name(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Scalar(name) => Some(name),
            ShapeKind::List(_) => None,
        }
    }
}

/// Resolve a type reference into a field shape.
pub fn resolve(type_ref: &TypeRef) -> FieldShape {
    resolve_into(type_ref, false)
}

// Not-null is checked before list on every entry, and writes into the
// current node rather than opening a new one.
fn resolve_into(type_ref: &TypeRef, not_null: bool) -> FieldShape {
    match type_ref {
        TypeRef::NonNull { of_type } => resolve_into(of_type, true),
        TypeRef::List { of_type } => FieldShape {
            not_null,
            kind: ShapeKind::List(Box::new(resolve_into(of_type, false))),
        },
        TypeRef::Named { name } => FieldShape {
            not_null,
            kind: ShapeKind::Scalar(name.clone()),
        },
    }
}
