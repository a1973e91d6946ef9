//! Module manifest types
//!
//! A manifest is the descriptor a module ships alongside its code: the
//! module's own version plus the shell interfaces it needs, each with a
//! version requirement.
//!
//! Format example:
//! ```json
//! {
//!   "name": "@acme/patient-chart",
//!   "version": "3.1.0",
//!   "requiredInterfaces": {
//!     "shell-api": "2.3",
//!     "styleguide": "1.0 2.0"
//!   }
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

/// Descriptor for a loadable module
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModuleManifest {
    /// Module name, conventionally scoped like `@scope/name`
    pub name: String,
    /// Version of the module itself
    pub version: String,
    /// Interface name -> version requirement (whitespace-separated alternatives)
    #[serde(default)]
    pub required_interfaces: IndexMap<String, String>,
}

impl ModuleManifest {
    /// Parse a manifest from JSON
    pub fn from_json(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Error type for manifest loading
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Failed to read the manifest file
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest is not valid JSON or is missing required fields
    #[error("Invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
}
