//! End-to-end integration tests for graphql-decl-gen.
//!
//! These build small schema documents (JSON syntax trees, and SDL text when
//! the `sdl` feature is on) and check the full pipeline: visit → merge →
//! render.

use graphql_decl_gen::ast::{self, Definition, Document};
use graphql_decl_gen::codegen;
use graphql_decl_gen::config::{self, GeneratorConfig};
use graphql_decl_gen::error::Error;
use graphql_decl_gen::model::ItemKind;

/// The interface / type / extension scenario as a JSON syntax tree.
fn user_document_json() -> &'static str {
    r#"{
        "definitions": [
            {
                "kind": "interface_type_definition",
                "name": "Node",
                "fields": [
                    {
                        "name": "id",
                        "type": { "kind": "non_null", "of_type": { "kind": "named", "name": "ID" } }
                    }
                ]
            },
            {
                "kind": "object_type_definition",
                "name": "User",
                "interfaces": ["Node"],
                "fields": [
                    { "name": "name", "type": { "kind": "named", "name": "String" } }
                ]
            },
            {
                "kind": "object_type_extension",
                "name": "User",
                "directives": [{ "name": "entity" }],
                "fields": [
                    { "name": "email", "type": { "kind": "named", "name": "String" } }
                ]
            }
        ]
    }"#
}

fn user_document() -> Document {
    serde_json::from_str(user_document_json()).unwrap()
}

#[test]
fn end_to_end_interface_and_extension() {
    let generated = codegen::generate(&user_document(), &GeneratorConfig::default())
        .expect("generation should succeed");

    // Verify the merged model.
    let user = generated
        .items
        .iter()
        .find(|i| i.name == "User" && i.kind == ItemKind::ObjectType)
        .unwrap();
    assert_eq!(user.field_names(), vec!["id", "name", "email"]);
    assert!(user.has_tag("entity"));

    // Verify stats.
    assert_eq!(generated.stats.classes_generated, 1);
    assert_eq!(generated.stats.interfaces_generated, 1);
    assert_eq!(generated.stats.extensions_folded, 1);
    assert_eq!(generated.stats.entities, 1);

    // Verify rendered text.
    let out = &generated.source;
    assert!(out.contains("public interface Node\n{\n    Guid Id { get; set; }\n}\n"));
    assert!(out.contains("public class User : Node\n{\n"));
    assert!(out.contains("    public string Name { get; set; }\n"));
    assert!(out.contains("    public Guid Id { get; set; }\n"));
    assert!(out.contains("    public string Email { get; set; }\n"));
    assert!(out.contains("public DbSet<User> Users { get; set; }"));

    // The folded extension is not a declaration of its own.
    assert_eq!(out.matches("public class User").count(), 1);
}

#[test]
fn full_output_is_exact() {
    let generated = codegen::generate(&user_document(), &GeneratorConfig::default()).unwrap();
    let expected = "\
public interface Node
{
    Guid Id { get; set; }
}

public class User : Node
{
    public Guid Id { get; set; }
    public string Name { get; set; }
    public string Email { get; set; }
}

public class EntityContext
{
    public DbSet<User> Users { get; set; }
}
";
    assert_eq!(generated.source, expected);
}

#[test]
fn orphan_extension_renders_as_class() {
    let json = r#"{
        "definitions": [
            {
                "kind": "object_type_extension",
                "name": "Audit",
                "fields": [
                    { "name": "at", "type": { "kind": "named", "name": "DateTime" } },
                    {
                        "name": "notes",
                        "type": { "kind": "list", "of_type": { "kind": "named", "name": "String" } }
                    }
                ]
            }
        ]
    }"#;
    let document: Document = serde_json::from_str(json).unwrap();
    let generated = codegen::generate(&document, &GeneratorConfig::default()).unwrap();

    assert_eq!(generated.items[0].kind, ItemKind::ObjectType);
    assert_eq!(generated.items[0].field_names(), vec!["at", "notes"]);
    let expected = "\
public class Audit
{
    public DateTime At { get; set; }
    public List<string> Notes { get; set; }
}
";
    assert_eq!(generated.source, expected);
    assert_eq!(generated.stats.extensions_promoted, 1);
    assert!(!generated.source.contains("EntityContext"));
}

#[test]
fn unsupported_definition_aborts_generation() {
    let json = r#"{
        "definitions": [
            { "kind": "enum_type_definition", "name": "Color", "values": [{ "name": "RED" }] },
            { "kind": "operation_definition", "name": "GetUser" }
        ]
    }"#;
    let document: Document = serde_json::from_str(json).unwrap();
    assert_eq!(document.definitions[1].kind(), "operation_definition");
    assert!(matches!(document.definitions[1], Definition::Unsupported { .. }));

    let result = codegen::generate(&document, &GeneratorConfig::default());
    let err = result.unwrap_err();
    assert!(matches!(err, Error::UnsupportedDefinition { .. }));
    assert!(err.to_string().contains("operation_definition"));
    assert!(err.to_string().contains("GetUser"));
}

#[test]
fn scalar_overrides_apply_to_output() {
    let json = r#"{
        "definitions": [
            {
                "kind": "object_type_definition",
                "name": "Invoice",
                "fields": [
                    { "name": "total", "type": { "kind": "named", "name": "Money" } },
                    { "name": "rate", "type": { "kind": "named", "name": "Float" } }
                ]
            }
        ]
    }"#;
    let document: Document = serde_json::from_str(json).unwrap();

    let plain = codegen::generate(&document, &GeneratorConfig::default()).unwrap();
    assert!(plain.source.contains("public Money Total { get; set; }"));
    assert!(plain.source.contains("public float Rate { get; set; }"));

    let config: GeneratorConfig =
        serde_json::from_str(r#"{"scalars": {"Money": "decimal", "Float": "double"}}"#).unwrap();
    let overridden = codegen::generate(&document, &config).unwrap();
    assert!(overridden.source.contains("public decimal Total { get; set; }"));
    assert!(overridden.source.contains("public double Rate { get; set; }"));
}

#[test]
fn deterministic_output() {
    let a = codegen::generate(&user_document(), &GeneratorConfig::default()).unwrap();
    let b = codegen::generate(&user_document(), &GeneratorConfig::default()).unwrap();
    assert_eq!(a.source, b.source);
}

#[test]
fn document_and_config_load_from_files() {
    let dir = tempdir();
    let doc_path = dir.join("schema.json");
    let config_path = dir.join("config.json");

    std::fs::write(&doc_path, user_document_json()).unwrap();
    std::fs::write(
        &config_path,
        r#"{"render": {"aggregator_name": "AppDbContext"}}"#,
    )
    .unwrap();

    let document = ast::load_document(&doc_path).unwrap();
    assert_eq!(document.definitions.len(), 3);

    let config = config::load_config(&config_path).unwrap();
    let generated = codegen::generate(&document, &config).unwrap();
    assert!(generated.source.contains("public class AppDbContext\n"));

    let out_path = dir.join("generated").join("Model.cs");
    codegen::write_output(&out_path, &generated.source).unwrap();
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), generated.source);
}

#[test]
fn missing_document_reports_path() {
    let dir = tempdir();
    let missing = dir.join("nope.json");
    let err = ast::load_document(&missing).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn model_dump_is_valid_json() {
    let (items, _) = codegen::build_model(&user_document()).unwrap();
    let json = codegen::model_json(&items).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.is_array());
    assert_eq!(value[1]["name"], "User");
    assert_eq!(value[1]["kind"], "object_type");
    assert_eq!(value[1]["fields"][0]["name"], "id");
    assert_eq!(value[1]["fields"][0]["shape"]["not_null"], true);
    assert_eq!(value[2]["kind"], "extension");
}

#[cfg(feature = "sdl")]
mod sdl {
    use super::*;
    use graphql_decl_gen::sdl::parse_document;

    const SCHEMA: &str = r#"
        schema { query: Query }

        scalar Money

        interface Node {
            id: ID!
        }

        type User implements Node {
            name: String
        }

        extend type User @entity {
            email: String
        }

        enum Color {
            RED
            GREEN
            BLUE
        }

        type Category @entity {
            title: String!
            tags: [String!]!
            color: Color
        }

        input UserInput {
            name: String
        }

        union SearchResult = User | Category

        type Query {
            user(id: ID!): User
        }
    "#;

    #[test]
    fn sdl_end_to_end() {
        let document = parse_document(SCHEMA).unwrap();
        let generated = codegen::generate(&document, &GeneratorConfig::default()).unwrap();
        let out = &generated.source;

        let user = generated
            .items
            .iter()
            .find(|i| i.name == "User" && i.kind == ItemKind::ObjectType)
            .unwrap();
        assert_eq!(user.field_names(), vec!["id", "name", "email"]);

        assert!(out.contains("public enum Color\n{\n    Red,\n    Green,\n    Blue,\n}\n"));
        assert!(out.contains("    public List<string> Tags { get; set; }\n"));
        assert!(out.contains("    public Color Color { get; set; }\n"));
        assert!(out.contains("public class Query\n"));
        assert!(!out.contains("UserInput"));
        assert!(!out.contains("SearchResult"));
        let aggregator = concat!(
            "public class EntityContext\n{\n",
            "    public DbSet<User> Users { get; set; }\n",
            "    public DbSet<Category> Categories { get; set; }\n",
            "}\n",
        );
        assert!(out.ends_with(aggregator));

        // schema, scalar, input, union
        assert_eq!(generated.stats.definitions_skipped, 4);
    }

    #[test]
    fn sdl_enum_extension_folds() {
        let sdl = "enum Color { RED } extend enum Color { GREEN RED }";
        let document = parse_document(sdl).unwrap();
        let generated = codegen::generate(&document, &GeneratorConfig::default()).unwrap();
        assert_eq!(
            generated.source,
            "public enum Color\n{\n    Red,\n    Green,\n}\n"
        );
    }

    #[test]
    fn sdl_file_loads() {
        let dir = tempdir();
        let path = dir.join("schema.graphql");
        std::fs::write(&path, SCHEMA).unwrap();
        let document = graphql_decl_gen::sdl::load_sdl(&path).unwrap();
        assert_eq!(document.definitions.len(), 10);
    }
}

// ── Helpers ────────────────────────────────────────────────────────────

fn tempdir() -> std::path::PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "graphql-decl-gen-test-{}-{}",
        std::process::id(),
        id
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
