//! Resolves a host's federation config into type-archive download URLs.
//!
//! Pure and synchronous: no I/O, no shared state, input is never mutated.
//! Callers may invoke it concurrently without coordination.

mod archive_url;
mod error;

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::config::{HostOptions, ResolvedHostOptions};
use crate::locator::RemoteLocator;

pub use error::HostConfigError;

/// Fully-defaulted host options plus the per-remote archive URL mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedHostConfig {
    pub host_options: ResolvedHostOptions,
    /// Remote name -> archive URL; exactly the key set of the input
    /// `remotes`, never a subset.
    pub map_remotes_to_download: BTreeMap<String, String>,
}

/// Resolves `options` into an archive URL for every configured remote.
///
/// Defaulting is a shallow merge (explicit values win); the federation
/// section itself is required. Fails on the first malformed remote rather
/// than returning a partial mapping.
pub fn resolve_host_config(options: &HostOptions) -> Result<ResolvedHostConfig, HostConfigError> {
    let module_federation = options
        .module_federation
        .clone()
        .ok_or(HostConfigError::MissingFederationConfig)?;
    let host_options = ResolvedHostOptions::new(
        module_federation,
        options.types_folder.clone(),
        options.delete_types_folder,
    );

    let mut map_remotes_to_download = BTreeMap::new();
    for (name, locator) in &host_options.module_federation.remotes {
        let archive = remote_archive_url(name, locator, &host_options.types_folder)?;
        map_remotes_to_download.insert(name.clone(), archive.to_string());
    }

    Ok(ResolvedHostConfig {
        host_options,
        map_remotes_to_download,
    })
}

/// Archive URL for a single `(name, locator)` pair.
fn remote_archive_url(
    name: &str,
    locator: &str,
    types_folder: &str,
) -> Result<Url, HostConfigError> {
    let locator = RemoteLocator::parse(locator);
    let entry = Url::parse(&locator.url).map_err(|source| HostConfigError::MalformedRemoteUrl {
        remote: name.to_string(),
        url: locator.url.clone(),
        source,
    })?;
    archive_url::types_archive_url(&entry, types_folder).ok_or_else(|| {
        HostConfigError::UnsupportedRemoteUrl {
            remote: name.to_string(),
            url: locator.url.clone(),
        }
    })
}
