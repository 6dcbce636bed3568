//! Remote locator parsing.
//!
//! Federation hosts list remotes as `<scope>@<url>` strings. The scope may
//! itself contain `@` (package scopes like `@org/pkg`), so the split happens
//! on the last `@`. A locator without any `@` is a bare URL.

/// A remote locator split into its scope and entry-URL text.
///
/// The URL part is kept as raw text here; parsing it as an absolute URL is
/// the resolver's job, so malformed URLs are reported with the remote name
/// attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocator {
    /// Scope prefix before the last `@`, if any.
    pub scope: Option<String>,
    /// Text after the last `@`, expected to be an absolute URL.
    pub url: String,
}

impl RemoteLocator {
    /// Split a locator on its last `@`.
    ///
    /// Assumes the URL part contains no literal `@` (no userinfo in the
    /// authority); such a URL would be split in the middle. Hosts needing
    /// authenticated URLs should express credentials outside the locator.
    pub fn parse(locator: &str) -> Self {
        match locator.rsplit_once('@') {
            Some((scope, url)) => Self {
                scope: (!scope.is_empty()).then(|| scope.to_string()),
                url: url.to_string(),
            },
            None => Self {
                scope: None,
                url: locator.to_string(),
            },
        }
    }
}
