//! SDL front end: parse schema text with `graphql-parser` and lower it into
//! the [`crate::ast`] document tree.

use std::path::Path;

use graphql_parser::schema as gql;

use crate::ast::{
    Argument, Definition, Directive, DirectiveDefinitionNode, Document, EnumNode,
    EnumValueDefinition, FieldDefinition, InputObjectNode, InputValueDefinition, ObjectTypeNode,
    OperationTypeDefinition, ScalarNode, SchemaNode, TypeRef, UnionNode,
};
use crate::error::{Error, Result};

/// Parse SDL text into a [`Document`].
pub fn parse_document(source: &str) -> Result<Document> {
    let parsed =
        gql::parse_schema::<String>(source).map_err(|e| Error::Parse(e.to_string()))?;
    let definitions = parsed
        .definitions
        .into_iter()
        .map(lower_definition)
        .collect();
    Ok(Document { definitions })
}

/// Read and parse an SDL file.
pub fn load_sdl(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_document(&content)
}

fn lower_definition(definition: gql::Definition<'_, String>) -> Definition {
    match definition {
        gql::Definition::SchemaDefinition(schema) => {
            Definition::SchemaDefinition(lower_schema(schema))
        }
        gql::Definition::DirectiveDefinition(directive) => {
            Definition::DirectiveDefinition(DirectiveDefinitionNode {
                name: directive.name,
                description: directive.description,
                arguments: lower_input_values(directive.arguments),
                repeatable: directive.repeatable,
                locations: directive
                    .locations
                    .iter()
                    .map(|l| l.as_str().to_string())
                    .collect(),
            })
        }
        gql::Definition::TypeDefinition(type_def) => lower_type_definition(type_def),
        gql::Definition::TypeExtension(type_ext) => lower_type_extension(type_ext),
    }
}

fn lower_type_definition(type_def: gql::TypeDefinition<'_, String>) -> Definition {
    match type_def {
        gql::TypeDefinition::Scalar(t) => Definition::ScalarTypeDefinition(ScalarNode {
            name: t.name,
            description: t.description,
            directives: lower_directives(t.directives),
        }),
        gql::TypeDefinition::Object(t) => Definition::ObjectTypeDefinition(ObjectTypeNode {
            name: t.name,
            description: t.description,
            interfaces: t.implements_interfaces,
            directives: lower_directives(t.directives),
            fields: lower_fields(t.fields),
        }),
        gql::TypeDefinition::Interface(t) => Definition::InterfaceTypeDefinition(ObjectTypeNode {
            name: t.name,
            description: t.description,
            interfaces: t.implements_interfaces,
            directives: lower_directives(t.directives),
            fields: lower_fields(t.fields),
        }),
        gql::TypeDefinition::Union(t) => Definition::UnionTypeDefinition(UnionNode {
            name: t.name,
            description: t.description,
            directives: lower_directives(t.directives),
            types: t.types,
        }),
        gql::TypeDefinition::Enum(t) => Definition::EnumTypeDefinition(EnumNode {
            name: t.name,
            description: t.description,
            directives: lower_directives(t.directives),
            values: lower_enum_values(t.values),
        }),
        gql::TypeDefinition::InputObject(t) => {
            Definition::InputObjectTypeDefinition(InputObjectNode {
                name: t.name,
                description: t.description,
                directives: lower_directives(t.directives),
                fields: lower_input_values(t.fields),
            })
        }
    }
}

fn lower_type_extension(type_ext: gql::TypeExtension<'_, String>) -> Definition {
    match type_ext {
        gql::TypeExtension::Scalar(t) => Definition::ScalarTypeExtension(ScalarNode {
            name: t.name,
            description: None,
            directives: lower_directives(t.directives),
        }),
        gql::TypeExtension::Object(t) => Definition::ObjectTypeExtension(ObjectTypeNode {
            name: t.name,
            description: None,
            interfaces: t.implements_interfaces,
            directives: lower_directives(t.directives),
            fields: lower_fields(t.fields),
        }),
        gql::TypeExtension::Interface(t) => Definition::InterfaceTypeExtension(ObjectTypeNode {
            name: t.name,
            description: None,
            interfaces: t.implements_interfaces,
            directives: lower_directives(t.directives),
            fields: lower_fields(t.fields),
        }),
        gql::TypeExtension::Union(t) => Definition::UnionTypeExtension(UnionNode {
            name: t.name,
            description: None,
            directives: lower_directives(t.directives),
            types: t.types,
        }),
        gql::TypeExtension::Enum(t) => Definition::EnumTypeExtension(EnumNode {
            name: t.name,
            description: None,
            directives: lower_directives(t.directives),
            values: lower_enum_values(t.values),
        }),
        gql::TypeExtension::InputObject(t) => {
            Definition::InputObjectTypeExtension(InputObjectNode {
                name: t.name,
                description: None,
                directives: lower_directives(t.directives),
                fields: lower_input_values(t.fields),
            })
        }
    }
}

fn lower_schema(schema: gql::SchemaDefinition<'_, String>) -> SchemaNode {
    let operation_types = [
        ("query", schema.query),
        ("mutation", schema.mutation),
        ("subscription", schema.subscription),
    ]
    .into_iter()
    .filter_map(|(operation, type_name)| {
        type_name.map(|type_name| OperationTypeDefinition {
            operation: operation.to_string(),
            type_name,
        })
    })
    .collect();

    SchemaNode {
        directives: lower_directives(schema.directives),
        operation_types,
    }
}

fn lower_fields(fields: Vec<gql::Field<'_, String>>) -> Vec<FieldDefinition> {
    fields
        .into_iter()
        .map(|f| FieldDefinition {
            name: f.name,
            type_ref: lower_type(f.field_type),
            description: f.description,
            arguments: lower_input_values(f.arguments),
            directives: lower_directives(f.directives),
        })
        .collect()
}

fn lower_input_values(values: Vec<gql::InputValue<'_, String>>) -> Vec<InputValueDefinition> {
    values
        .into_iter()
        .map(|v| InputValueDefinition {
            name: v.name,
            type_ref: lower_type(v.value_type),
            default_value: v.default_value.map(|d| d.to_string()),
            directives: lower_directives(v.directives),
        })
        .collect()
}

fn lower_enum_values(values: Vec<gql::EnumValue<'_, String>>) -> Vec<EnumValueDefinition> {
    values
        .into_iter()
        .map(|v| EnumValueDefinition {
            name: v.name,
            description: v.description,
            directives: lower_directives(v.directives),
        })
        .collect()
}

fn lower_directives(directives: Vec<gql::Directive<'_, String>>) -> Vec<Directive> {
    directives
        .into_iter()
        .map(|d| Directive {
            name: d.name,
            arguments: d
                .arguments
                .into_iter()
                .map(|(name, value)| Argument {
                    name,
                    value: value.to_string(),
                })
                .collect(),
        })
        .collect()
}

fn lower_type(ty: gql::Type<'_, String>) -> TypeRef {
    match ty {
        gql::Type::NamedType(name) => TypeRef::Named { name },
        gql::Type::ListType(inner) => TypeRef::list(lower_type(*inner)),
        gql::Type::NonNullType(inner) => TypeRef::non_null(lower_type(*inner)),
    }
}
