//! `mft resolve <config>` – resolve remotes to archive URLs.

use anyhow::Result;
use mft_core::config::HostOptions;
use mft_core::resolver::resolve_host_config;
use std::path::Path;

pub fn run_resolve(
    config: &Path,
    types_folder: Option<String>,
    keep_types_folder: bool,
    json: bool,
) -> Result<()> {
    let mut options = HostOptions::load(config)?;
    // Flags win over file values; file values win over defaults.
    if types_folder.is_some() {
        options.types_folder = types_folder;
    }
    if keep_types_folder {
        options.delete_types_folder = Some(false);
    }
    tracing::debug!("resolving host options: {:?}", options);

    let resolved = resolve_host_config(&options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else if resolved.map_remotes_to_download.is_empty() {
        println!("No remotes configured.");
    } else {
        println!("{:<20} {}", "REMOTE", "ARCHIVE URL");
        for (name, url) in &resolved.map_remotes_to_download {
            println!("{:<20} {}", name, url);
        }
    }
    Ok(())
}
