//! C# declaration rendering.
//!
//! Emits, in item order:
//! - `public enum` for enums, one enumerant per value
//! - `public interface` for interfaces, one `{ get; set; }` property per field
//! - `public class` for object types, with `: A, B` for implemented interfaces
//! - nothing for extensions
//!
//! followed by one aggregator class with a collection property per
//! `@entity` object type, when there is at least one.
//!
//! Declarations are separated by a blank line. Not-null markers are not
//! reflected in property types.

use std::fmt::Write;

use crate::config::RenderConfig;
use crate::model::{Field, ItemKind, TypeItem};
use crate::shape::{FieldShape, ShapeKind};
use crate::type_map::{ScalarMap, capitalize, enumerant_names, pluralize};

/// Directive name that selects a type for the aggregator declaration.
pub const ENTITY_TAG: &str = "entity";

const PROPERTY_ACCESSORS: &str = "{ get; set; }";

// Shapeless fields only occur on enum-derived items; they fall back to this
// scalar when rendered as properties.
const UNTYPED_SCALAR: &str = "Any";

/// Renders a resolved item list to C# source text.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    scalars: ScalarMap,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(scalars: ScalarMap, config: RenderConfig) -> Self {
        Renderer { scalars, config }
    }

    /// Render every declaration, then the aggregator if any entity exists.
    pub fn render(&self, items: &[TypeItem]) -> String {
        let mut declarations: Vec<String> = items
            .iter()
            .filter_map(|item| self.render_item(item))
            .collect();

        let entities = entity_names(items);
        if !entities.is_empty() {
            declarations.push(self.render_aggregator(&entities));
        }

        declarations.join("\n")
    }

    /// Render a single item, or `None` for extensions.
    pub fn render_item(&self, item: &TypeItem) -> Option<String> {
        let rendered = match item.kind {
            ItemKind::Enum => self.render_enum(item),
            ItemKind::Interface => self.render_interface(item),
            ItemKind::ObjectType => self.render_class(item),
            ItemKind::Extension => return None,
        };
        Some(rendered)
    }

    /// The C# type for a field shape. Lists become `List<T>`.
    pub fn render_type(&self, shape: &FieldShape) -> String {
        match &shape.kind {
            ShapeKind::List(element) => format!("List<{}>", self.render_type(element)),
            ShapeKind::Scalar(name) => self.scalars.map(name).to_string(),
        }
    }

    fn render_field_type(&self, field: &Field) -> String {
        match &field.shape {
            Some(shape) => self.render_type(shape),
            None => self.scalars.map(UNTYPED_SCALAR).to_string(),
        }
    }

    // ── Enums ──────────────────────────────────────────────────────────

    fn render_enum(&self, item: &TypeItem) -> String {
        let indent = &self.config.indent;
        let separator = &self.config.enum_separator;
        let mut out = String::new();

        writeln!(out, "public enum {}", item.name).unwrap();
        writeln!(out, "{{").unwrap();
        for name in enumerant_names(item.fields.iter().map(|f| f.name.as_str())) {
            writeln!(out, "{indent}{name}{separator}").unwrap();
        }
        writeln!(out, "}}").unwrap();

        out
    }

    // ── Interfaces ─────────────────────────────────────────────────────

    fn render_interface(&self, item: &TypeItem) -> String {
        let indent = &self.config.indent;
        let mut out = String::new();

        writeln!(out, "public interface {}", item.name).unwrap();
        writeln!(out, "{{").unwrap();
        for field in &item.fields {
            writeln!(
                out,
                "{indent}{} {} {PROPERTY_ACCESSORS}",
                self.render_field_type(field),
                capitalize(&field.name)
            )
            .unwrap();
        }
        writeln!(out, "}}").unwrap();

        out
    }

    // ── Classes ────────────────────────────────────────────────────────

    fn render_class(&self, item: &TypeItem) -> String {
        let indent = &self.config.indent;
        let mut out = String::new();

        write!(out, "public class {}", item.name).unwrap();
        if !item.interfaces.is_empty() {
            write!(out, " : {}", item.interfaces.join(", ")).unwrap();
        }
        writeln!(out).unwrap();
        writeln!(out, "{{").unwrap();
        for field in &item.fields {
            writeln!(
                out,
                "{indent}public {} {} {PROPERTY_ACCESSORS}",
                self.render_field_type(field),
                capitalize(&field.name)
            )
            .unwrap();
        }
        writeln!(out, "}}").unwrap();

        out
    }

    // ── Aggregator ─────────────────────────────────────────────────────

    fn render_aggregator(&self, entities: &[&str]) -> String {
        let indent = &self.config.indent;
        let collection = &self.config.collection_type;
        let mut out = String::new();

        writeln!(out, "public class {}", self.config.aggregator_name).unwrap();
        writeln!(out, "{{").unwrap();
        for name in entities {
            writeln!(
                out,
                "{indent}public {collection}<{name}> {} {PROPERTY_ACCESSORS}",
                pluralize(name)
            )
            .unwrap();
        }
        writeln!(out, "}}").unwrap();

        out
    }
}

/// Object types tagged `@entity`, in item order.
pub fn entity_names(items: &[TypeItem]) -> Vec<&str> {
    items
        .iter()
        .filter(|i| i.kind == ItemKind::ObjectType && i.has_tag(ENTITY_TAG))
        .map(|i| i.name.as_str())
        .collect()
}
