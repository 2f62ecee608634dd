//! URL validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DEFAULT_HOST;
use crate::error::{Error, Result};
use crate::resolver::post::Post;

/// Loose "looks like a URL" check, anchored at the start of the input.
///
/// Accepts a scheme, a `www` prefix, or a bare `name.tld/` prefix, followed by
/// a path that tolerates balanced parentheses and does not end in punctuation.
static GENERIC_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^\b(?:(?:https?://|www\d{0,3}[.]|[a-z0-9.\-]+[.][a-z]{2,4}/)(?:[^\s()<>]+|\((?:[^\s()<>]+|\([^\s()<>]+\))*\))+(?:\((?:[^\s()<>]+|\([^\s()<>]+\))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’]))"#,
    )
    .unwrap()
});

static DEFAULT_RESOLVER: Lazy<UrlResolver> = Lazy::new(|| UrlResolver::new(DEFAULT_HOST).unwrap());

/// Returns true if `url` passes the generic URL shape check.
pub fn is_well_formed_url(url: &str) -> bool {
    GENERIC_URL.is_match(url)
}

/// Validates post URLs for a single host and turns them into [`Post`]s.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    host: String,
    post_pattern: Regex,
}

impl UrlResolver {
    /// Build a resolver accepting `https://www.<host>.com/reel(s)/<code>` URLs.
    pub fn new(host: &str) -> Result<Self> {
        let pattern = format!(
            r"^(?:https?://)?(?:www\.)?{}\.com/reels?/[a-zA-Z0-9_-]{{5,15}}/?(?:\?.*)?(?:#.*)?$",
            regex::escape(host)
        );
        let post_pattern = Regex::new(&pattern).map_err(|e| Error::ConfigValidation {
            field: "query.host".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            host: host.to_string(),
            post_pattern,
        })
    }

    /// Host this resolver accepts.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Check that `url` is a well-formed URL pointing at a reel on this host.
    pub fn validate(&self, url: &str) -> Result<()> {
        if !is_well_formed_url(url) {
            return Err(Error::InvalidUrl(format!("'{}' is not a proper URL", url)));
        }

        if !self.post_pattern.is_match(url) {
            return Err(Error::InvalidUrl(format!(
                "'{}' is not a {} reel URL",
                url, self.host
            )));
        }

        Ok(())
    }

    /// Validate `url` and wrap it in a [`Post`].
    pub fn resolve(&self, url: &str) -> Result<Post> {
        self.validate(url)?;
        tracing::debug!("Validated post URL {}", url);
        Ok(Post::from_validated(url.to_string()))
    }
}

impl Default for UrlResolver {
    fn default() -> Self {
        DEFAULT_RESOLVER.clone()
    }
}
