//! Generator configuration.
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) yields the stock C# output:
//!
//! ```json
//! {
//!   "scalars": { "Float": "double", "Money": "decimal" },
//!   "render": {
//!     "indent": "    ",
//!     "enum_separator": ",",
//!     "aggregator_name": "EntityContext",
//!     "collection_type": "DbSet"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::type_map::ScalarMap;

/// Top-level configuration for a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Scalar mappings layered over [`crate::type_map::DEFAULT_SCALARS`].
    pub scalars: BTreeMap<String, String>,
    pub render: RenderConfig,
}

/// Layout of the rendered declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub indent: String,
    /// Written after every enumerant.
    pub enum_separator: String,
    /// Class name of the aggregator declaration for `@entity` types.
    pub aggregator_name: String,
    /// Generic collection type wrapping each entity in the aggregator.
    pub collection_type: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            indent: "    ".to_string(),
            enum_separator: ",".to_string(),
            aggregator_name: "EntityContext".to_string(),
            collection_type: "DbSet".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn scalar_map(&self) -> ScalarMap {
        ScalarMap::with_overrides(&self.scalars)
    }

    /// Reject settings that would produce unusable declarations.
    pub fn validate(&self) -> Result<()> {
        if self.render.aggregator_name.trim().is_empty() {
            return Err(Error::Config("aggregator_name must not be empty".to_string()));
        }
        if self.render.collection_type.trim().is_empty() {
            return Err(Error::Config("collection_type must not be empty".to_string()));
        }
        if let Some((scalar, _)) = self.scalars.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(Error::Config(format!("scalar '{scalar}' maps to an empty type name")));
        }
        Ok(())
    }
}

/// Load and validate a JSON configuration file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: GeneratorConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.render.indent, "    ");
        assert_eq!(config.render.aggregator_name, "EntityContext");
    }

    #[test]
    fn partial_render_section_keeps_other_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"render": {"aggregator_name": "AppDbContext"}}"#).unwrap();
        assert_eq!(config.render.aggregator_name, "AppDbContext");
        assert_eq!(config.render.collection_type, "DbSet");
        assert_eq!(config.render.enum_separator, ",");
    }

    #[test]
    fn scalar_overrides_reach_scalar_map() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"scalars": {"Float": "double"}}"#).unwrap();
        let map = config.scalar_map();
        assert_eq!(map.map("Float"), "double");
        assert_eq!(map.map("Int"), "int");
    }

    #[test]
    fn empty_aggregator_name_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.render.aggregator_name = " ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("aggregator_name"));
    }

    #[test]
    fn empty_scalar_target_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.scalars.insert("Money".to_string(), String::new());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Money"));
    }
}
