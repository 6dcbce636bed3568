//! Error types for host-config resolution.

use thiserror::Error;

/// Failure while resolving a host's federation config into archive URLs.
///
/// Resolution is fail-fast: the first bad remote aborts the whole call so a
/// downstream bulk download never sees a partial mapping.
#[derive(Debug, Error)]
pub enum HostConfigError {
    /// The host options carried no federation section at all.
    #[error("module_federation_config is required")]
    MissingFederationConfig,

    /// A remote locator's URL part is not a well-formed absolute URL.
    #[error("remote `{remote}` has a malformed entry URL `{url}`: {source}")]
    MalformedRemoteUrl {
        remote: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The entry URL parsed but has no rewritable path (e.g. `mailto:`).
    #[error("remote `{remote}` entry URL `{url}` has no path to rewrite")]
    UnsupportedRemoteUrl { remote: String, url: String },
}
