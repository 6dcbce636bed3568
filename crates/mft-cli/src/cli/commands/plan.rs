//! `mft plan <config>` – show the fetch-and-extract plan.

use anyhow::Result;
use mft_core::config::HostOptions;
use mft_core::plan::download_plan;
use mft_core::resolver::resolve_host_config;
use std::path::Path;

pub fn run_plan(config: &Path, json: bool) -> Result<()> {
    let options = HostOptions::load(config)?;
    let resolved = resolve_host_config(&options)?;
    let tasks = download_plan(&resolved);

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No remotes configured.");
    } else {
        println!(
            "{:<20} {:<16} {:<8} {}",
            "REMOTE", "EXTRACT INTO", "DELETE", "ARCHIVE URL"
        );
        for task in &tasks {
            println!(
                "{:<20} {:<16} {:<8} {}",
                task.remote,
                task.extract_into,
                if task.delete_after_extract { "yes" } else { "no" },
                task.archive_url
            );
        }
    }
    Ok(())
}
