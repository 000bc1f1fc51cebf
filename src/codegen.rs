//! End-to-end generation: document → items → merged items → C# text.
//!
//! The three passes run strictly in sequence. The visitor hands its owned
//! item list to the merge resolver, which mutates it in place; the renderer
//! only reads the result.

use std::path::Path;

use crate::ast::Document;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::merge;
use crate::model::{ItemKind, TypeItem};
use crate::render::{self, Renderer};
use crate::visitor::Visitor;

/// Statistics collected during generation for reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    pub interfaces_generated: usize,
    pub classes_generated: usize,
    pub enums_generated: usize,
    pub entities: usize,
    pub extensions_folded: usize,
    pub extensions_promoted: usize,
    pub interface_fields_injected: usize,
    pub definitions_skipped: usize,
}

/// The result of a generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub source: String,
    pub items: Vec<TypeItem>,
    pub stats: GenerationStats,
}

/// Visit and merge `document` into its final type model.
pub fn build_model(document: &Document) -> Result<(Vec<TypeItem>, GenerationStats)> {
    let mut visitor = Visitor::new();
    let mut items = visitor.visit(document)?;
    let merge_stats = merge::resolve(&mut items);

    let count = |kind: ItemKind| items.iter().filter(|i| i.kind == kind).count();
    let stats = GenerationStats {
        interfaces_generated: count(ItemKind::Interface),
        classes_generated: count(ItemKind::ObjectType),
        enums_generated: count(ItemKind::Enum),
        entities: render::entity_names(&items).len(),
        extensions_folded: merge_stats.extensions_folded,
        extensions_promoted: merge_stats.extensions_promoted,
        interface_fields_injected: merge_stats.interface_fields_injected,
        definitions_skipped: visitor.stats().skipped,
    };

    Ok((items, stats))
}

/// Generate C# declarations for `document`.
pub fn generate(document: &Document, config: &GeneratorConfig) -> Result<Generated> {
    config.validate()?;

    let (items, stats) = build_model(document)?;
    let renderer = Renderer::new(config.scalar_map(), config.render.clone());
    let source = renderer.render(&items);

    tracing::info!(
        classes = stats.classes_generated,
        interfaces = stats.interfaces_generated,
        enums = stats.enums_generated,
        entities = stats.entities,
        "rendered declarations"
    );

    Ok(Generated {
        source,
        items,
        stats,
    })
}

/// Serialize the merged model as pretty JSON.
pub fn model_json(items: &[TypeItem]) -> Result<String> {
    serde_json::to_string_pretty(items).map_err(Error::Json)
}

/// Write content to a file, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
