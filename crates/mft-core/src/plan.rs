//! Download plan handed to the external fetch-and-extract step.
//!
//! The core produces only the data that step needs; fetching, extraction,
//! and folder deletion are owned by the caller.

use serde::Serialize;

use crate::resolver::ResolvedHostConfig;

/// One archive to fetch and unpack for a single remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadTask {
    /// Remote name from the host's `remotes` mapping.
    pub remote: String,
    /// Fully-qualified URL of the type-declaration archive.
    pub archive_url: String,
    /// Local directory name the archive is extracted into.
    pub extract_into: String,
    /// Whether the extracted folder is removed after consumption.
    pub delete_after_extract: bool,
}

/// One task per resolved remote, in stable name order.
pub fn download_plan(resolved: &ResolvedHostConfig) -> Vec<DownloadTask> {
    resolved
        .map_remotes_to_download
        .iter()
        .map(|(remote, url)| DownloadTask {
            remote: remote.clone(),
            archive_url: url.clone(),
            extract_into: resolved.host_options.types_folder.clone(),
            delete_after_extract: resolved.host_options.delete_types_folder,
        })
        .collect()
}
