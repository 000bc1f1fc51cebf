//! Generate C# declarations from GraphQL schema documents.
//!
//! `graphql-decl-gen` takes a parsed schema document and produces class,
//! interface and enum skeletons:
//!
//! - Builds a flat type model, one item per interface, object type, enum,
//!   and per `extend type` / `extend enum`
//! - Copies interface fields into implementing types
//! - Folds extensions into their base type, or promotes orphan extensions
//!   to standalone classes
//! - Maps GraphQL scalars to C# types (`ID` → `Guid`, `String` → `string`, ...)
//! - Emits an aggregator class with one collection per `@entity` type
//!
//! Documents come either from a JSON encoding of the syntax tree
//! ([`ast::load_document`]) or, with the default `sdl` feature, straight
//! from schema text ([`sdl::parse_document`]).
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "sdl")]
//! # {
//! use graphql_decl_gen::config::GeneratorConfig;
//!
//! let document = graphql_decl_gen::sdl::parse_document(
//!     "interface Node { id: ID! } type User implements Node @entity { name: String }",
//! )?;
//! let generated = graphql_decl_gen::codegen::generate(&document, &GeneratorConfig::default())?;
//! println!("{}", generated.source);
//! # }
//! # Ok::<(), graphql_decl_gen::error::Error>(())
//! ```

pub mod ast;
pub mod codegen;
pub mod config;
pub mod error;
pub mod merge;
pub mod model;
pub mod render;
#[cfg(feature = "sdl")]
pub mod sdl;
pub mod shape;
pub mod type_map;
pub mod visitor;
