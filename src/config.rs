use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::manifest::eligibility::InterfaceProvider;

/// Shell configuration structure
///
/// Describes the host side of the compatibility check: the interfaces the
/// shell provides (with the concrete version of each) and the module
/// manifests to evaluate against them.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    /// Interface name -> version the host provides
    pub interfaces: IndexMap<String, String>,
    /// Module manifest files to evaluate
    pub modules: Vec<PathBuf>,
}

impl ShellConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        debug!(
            "Loaded shell config from {:?}: {} interfaces, {} modules",
            path,
            config.interfaces.len(),
            config.modules.len()
        );
        Ok(config)
    }
}

impl InterfaceProvider for ShellConfig {
    fn provided_version(&self, interface: &str) -> Option<String> {
        self.interfaces.get(interface).cloned()
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
