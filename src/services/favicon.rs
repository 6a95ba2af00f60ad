//! Favicon URL derivation for items without an icon of their own.

use url::Url;

/// Public favicon service keyed by hostname.
const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons?domain=";

/// Build a favicon URL for the host of `page_url`.
///
/// Returns `None` for URLs without a host (`about:blank`, `file:///...`) or
/// URLs that fail to parse.
pub fn favicon_url(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    Some(format!("{}{}", FAVICON_SERVICE, host))
}
