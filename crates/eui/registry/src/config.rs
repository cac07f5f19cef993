//! Figment-based registry configuration.
//!
//! Configuration priority (highest wins):
//! 1. Config file (TOML)
//! 2. Environment variables (`EUI_REGISTRY_` prefix, `_` separates keys)
//! 3. Defaults

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable prefix for registry settings.
pub const ENV_PREFIX: &str = "EUI_REGISTRY_";

/// Locations of one table's record text and offset index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Registry text file
    pub records: PathBuf,
    /// `key,offset,size` index file
    pub index: PathBuf,
}

impl TableConfig {
    /// Create a table config from its two paths.
    pub fn new(records: impl Into<PathBuf>, index: impl Into<PathBuf>) -> Self {
        Self {
            records: records.into(),
            index: index.into(),
        }
    }
}

/// Locations of the OUI and IAB tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// OUI table
    pub oui: TableConfig,
    /// IAB table
    pub iab: TableConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            oui: TableConfig::new("oui.txt", "oui.idx"),
            iab: TableConfig::new("iab.txt", "iab.idx"),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from defaults, environment, and config file.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("_"));

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        Ok(figment.extract()?)
    }

    /// Resolve relative paths against `dir`.
    pub fn relative_to(mut self, dir: &Path) -> Self {
        for table in [&mut self.oui, &mut self.iab] {
            table.records = dir.join(&table.records);
            table.index = dir.join(&table.index);
        }
        self
    }
}
