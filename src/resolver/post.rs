//! Validated post reference.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::resolver::short_code::extract_short_code;
use crate::resolver::validate::UrlResolver;

/// A reference to one remote post.
///
/// Only obtainable through validation, so every `Post` holds a URL that
/// passed both URL checks. It owns no network resources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Post {
    url: String,
}

impl Post {
    /// Validate `url` against the default host.
    pub fn new(url: &str) -> Result<Self> {
        UrlResolver::default().resolve(url)
    }

    pub(crate) fn from_validated(url: String) -> Self {
        Self { url }
    }

    /// The URL exactly as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Derive the short code from the URL. Not cached.
    pub fn short_code(&self) -> Result<String> {
        extract_short_code(&self.url)
    }
}

impl FromStr for Post {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Post::new(s)
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
