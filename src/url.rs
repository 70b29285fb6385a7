//! URL helpers
//!
//! The crawl treats "same-origin" as a string-prefix test against the seed's
//! site root, so the root must carry scheme, host, and any explicit port.

use url::Url;

/// Returns the site root (scheme + host + explicit port) of a URL
///
/// The port is included only when it is present in the URL and is not the
/// default for the scheme, matching how the URL would be written out.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use siteglean::url::site_root;
///
/// let url = Url::parse("https://example.com/pricing?ref=x").unwrap();
/// assert_eq!(site_root(&url), Some("https://example.com".to_string()));
///
/// let url = Url::parse("http://localhost:8080/index.html").unwrap();
/// assert_eq!(site_root(&url), Some("http://localhost:8080".to_string()));
/// ```
pub fn site_root(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}://{}:{}", url.scheme(), host, port)),
        None => Some(format!("{}://{}", url.scheme(), host)),
    }
}
