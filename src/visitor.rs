//! Document walk: definition nodes in, flat [`TypeItem`]s out.
//!
//! One item is produced per interface, object type, enum, and per object or
//! enum extension. Extensions are kept as separate items of kind
//! [`ItemKind::Extension`]; folding them into their base is the job of
//! [`crate::merge`].
//!
//! Scalars, unions, inputs, schema and directive definitions (and their
//! extensions) are walked and counted, but they produce no item. Input values
//! on inputs and directive definitions are resolved for trace logging only.

use crate::ast::{
    Definition, Directive, DirectiveDefinitionNode, Document, EnumNode, FieldDefinition,
    InputObjectNode, InputValueDefinition, ObjectTypeNode, SchemaNode, ScalarNode, UnionNode,
};
use crate::error::{Error, Result};
use crate::model::{Field, ItemKind, TypeItem};
use crate::shape;

/// Counters collected during one walk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VisitStats {
    /// Definitions walked that produce no item.
    pub skipped: usize,
}

/// Walks a [`Document`] and collects its type items.
#[derive(Debug, Default)]
pub struct Visitor {
    items: Vec<TypeItem>,
    stats: VisitStats,
}

impl Visitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk every definition in `document`, in order.
    ///
    /// Each call starts from an empty item list. Fails on the first
    /// definition the visitor has no dispatch for; no partial output is
    /// returned in that case.
    pub fn visit(&mut self, document: &Document) -> Result<Vec<TypeItem>> {
        self.items.clear();
        self.stats = VisitStats::default();

        for definition in &document.definitions {
            self.visit_definition(definition)?;
        }

        tracing::debug!(
            items = self.items.len(),
            skipped = self.stats.skipped,
            "visited document"
        );
        Ok(std::mem::take(&mut self.items))
    }

    /// Counters from the most recent [`Visitor::visit`] call.
    pub fn stats(&self) -> &VisitStats {
        &self.stats
    }

    fn visit_definition(&mut self, definition: &Definition) -> Result<()> {
        match definition {
            Definition::InterfaceTypeDefinition(node) => {
                self.visit_object_like(node, ItemKind::Interface)
            }
            Definition::ObjectTypeDefinition(node) => {
                self.visit_object_like(node, ItemKind::ObjectType)
            }
            Definition::ObjectTypeExtension(node) => {
                self.visit_object_like(node, ItemKind::Extension)
            }
            Definition::EnumTypeDefinition(node) => self.visit_enum(node, ItemKind::Enum),
            Definition::EnumTypeExtension(node) => self.visit_enum(node, ItemKind::Extension),

            Definition::InterfaceTypeExtension(node) => self.walk_interface_extension(node),
            Definition::SchemaDefinition(node) | Definition::SchemaExtension(node) => {
                self.walk_schema(node)
            }
            Definition::DirectiveDefinition(node) => self.walk_directive_definition(node),
            Definition::ScalarTypeDefinition(node) | Definition::ScalarTypeExtension(node) => {
                self.walk_scalar(node)
            }
            Definition::UnionTypeDefinition(node) | Definition::UnionTypeExtension(node) => {
                self.walk_union(node)
            }
            Definition::InputObjectTypeDefinition(node)
            | Definition::InputObjectTypeExtension(node) => self.walk_input_object(node),

            Definition::Unsupported { kind, name } => {
                return Err(Error::UnsupportedDefinition {
                    kind: kind.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }

    // ── Modeled definitions ────────────────────────────────────────────

    fn visit_object_like(&mut self, node: &ObjectTypeNode, kind: ItemKind) {
        let mut item = TypeItem::new(&node.name, kind);

        // Interfaces never declare conformance in the model.
        if kind != ItemKind::Interface {
            item.interfaces.extend(node.interfaces.iter().cloned());
            item.tags.extend(tag_names(&node.directives));
        }

        for field in &node.fields {
            item.fields.push(visit_field(field));
        }

        self.items.push(item);
    }

    fn visit_enum(&mut self, node: &EnumNode, kind: ItemKind) {
        let mut item = TypeItem::new(&node.name, kind);
        item.tags.extend(tag_names(&node.directives));
        item.fields
            .extend(node.values.iter().map(|v| Field::enumerant(&v.name)));
        self.items.push(item);
    }

    // ── Walked, not modeled ────────────────────────────────────────────

    fn walk_interface_extension(&mut self, node: &ObjectTypeNode) {
        tracing::debug!(
            name = %node.name,
            fields = node.fields.len(),
            "interface extensions are not merged"
        );
        self.stats.skipped += 1;
    }

    fn walk_schema(&mut self, node: &SchemaNode) {
        for operation in &node.operation_types {
            tracing::trace!(
                operation = %operation.operation,
                type_name = %operation.type_name,
                "schema operation type"
            );
        }
        self.skip("schema", None);
    }

    fn walk_directive_definition(&mut self, node: &DirectiveDefinitionNode) {
        trace_input_values(&node.name, &node.arguments);
        self.skip("directive", Some(&node.name));
    }

    fn walk_scalar(&mut self, node: &ScalarNode) {
        self.skip("scalar", Some(&node.name));
    }

    fn walk_union(&mut self, node: &UnionNode) {
        tracing::trace!(name = %node.name, members = node.types.len(), "union members");
        self.skip("union", Some(&node.name));
    }

    fn walk_input_object(&mut self, node: &InputObjectNode) {
        trace_input_values(&node.name, &node.fields);
        self.skip("input object", Some(&node.name));
    }

    fn skip(&mut self, what: &str, name: Option<&str>) {
        tracing::debug!(what, name = name.unwrap_or(""), "definition not modeled");
        self.stats.skipped += 1;
    }
}

fn visit_field(field: &FieldDefinition) -> Field {
    Field::typed(&field.name, shape::resolve(&field.type_ref))
}

// Input values are never modeled; their resolved shapes only show up at trace level.
fn trace_input_values(owner: &str, values: &[InputValueDefinition]) {
    for value in values {
        tracing::trace!(
            owner,
            name = %value.name,
            shape = ?shape::resolve(&value.type_ref),
            "input value"
        );
    }
}

fn tag_names(directives: &[Directive]) -> impl Iterator<Item = String> + '_ {
    directives.iter().map(|d| d.name.clone())
}
