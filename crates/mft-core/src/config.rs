//! Host configuration: federation remotes plus resolver options.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Folder name used for type archives when the host does not override it.
pub const DEFAULT_TYPES_FOLDER: &str = "@mf-types";

/// Whether extracted types folders are deleted after consumption by default.
pub const DEFAULT_DELETE_TYPES_FOLDER: bool = true;

/// Module-federation section of the host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFederationConfig {
    /// Remote name -> remote locator (`<scope>@<url>` or a bare URL).
    /// Ordered so resolution output is stable across runs.
    #[serde(default)]
    pub remotes: BTreeMap<String, String>,
}

/// Host options as supplied by a caller or loaded from `mft.toml`.
///
/// Optional fields fall back to defaults at resolve time; explicit values
/// always win. The federation section is required for resolution but modeled
/// as optional so its absence surfaces as a reportable error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostOptions {
    /// Folder name used to derive the archive file name (`<name>.zip`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types_folder: Option<String>,
    /// Whether the extracted types folder is deleted after use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_types_folder: Option<bool>,
    /// Federation config with the `remotes` mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_federation: Option<ModuleFederationConfig>,
}

impl HostOptions {
    /// Load host options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read host config: {}", path.display()))?;
        let options: HostOptions = toml::from_str(&data)
            .with_context(|| format!("parse host config TOML: {}", path.display()))?;
        tracing::debug!("loaded host config from {}", path.display());
        Ok(options)
    }
}

/// Host options with every default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHostOptions {
    pub module_federation: ModuleFederationConfig,
    pub types_folder: String,
    pub delete_types_folder: bool,
}

impl ResolvedHostOptions {
    /// Shallow merge: each present value wins over its default. No deep
    /// merging happens; `module_federation` is taken as given.
    pub fn new(
        module_federation: ModuleFederationConfig,
        types_folder: Option<String>,
        delete_types_folder: Option<bool>,
    ) -> Self {
        Self {
            module_federation,
            types_folder: types_folder.unwrap_or_else(|| DEFAULT_TYPES_FOLDER.to_string()),
            delete_types_folder: delete_types_folder.unwrap_or(DEFAULT_DELETE_TYPES_FOLDER),
        }
    }
}
