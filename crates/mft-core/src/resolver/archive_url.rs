//! Archive URL construction from a remote entry URL.

use url::Url;

/// Rewrites `entry`'s path so it points at the types archive sitting next
/// to the entry file: the final path segment is replaced with
/// `<types_folder>.zip`. Scheme, authority, port, and query are untouched.
///
/// Returns `None` for cannot-be-a-base URLs, which have no path segments.
pub(crate) fn types_archive_url(entry: &Url, types_folder: &str) -> Option<Url> {
    let mut archive = entry.clone();
    {
        let mut segments = archive.path_segments_mut().ok()?;
        segments.pop().push(&format!("{types_folder}.zip"));
    }
    Some(archive)
}
