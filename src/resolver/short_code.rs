//! Short code extraction.

use crate::error::{Error, Result};

/// Path markers that precede a short code, in priority order.
///
/// `/posts/` is understood here but never accepted by [`UrlResolver::validate`].
///
/// [`UrlResolver::validate`]: crate::resolver::UrlResolver::validate
pub const SHORT_CODE_MARKERS: [&str; 3] = ["/reel/", "/reels/", "/posts/"];

/// Extract the short code from a post URL.
///
/// Only the part before any `?` or `#` is searched. Uses the first marker in
/// [`SHORT_CODE_MARKERS`] that occurs there and returns the segment after its
/// last occurrence, up to the next `/`.
pub fn extract_short_code(url: &str) -> Result<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    for marker in SHORT_CODE_MARKERS {
        let Some((_, rest)) = path.rsplit_once(marker) else {
            continue;
        };

        let code = rest.split('/').next().unwrap_or_default();

        if code.is_empty() {
            return Err(Error::UnknownResolution(format!(
                "'{}' has no short code after '{}'",
                url, marker
            )));
        }

        return Ok(code.to_string());
    }

    Err(Error::UnknownResolution(format!(
        "'{}' contains none of {}; make sure the link opens in a browser",
        url,
        SHORT_CODE_MARKERS.join(", ")
    )))
}
