//! Configuration validation logic.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::config::loader::{Config, DownloadConfig, HttpConfig, QueryConfig};
use crate::error::{Error, Result};
use crate::fs::sanitize_filename;

/// A single DNS label, e.g. `instagram`.
static HOST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$").unwrap());

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_query(&config.query)?;
    validate_http(&config.http)?;
    validate_download(&config.download)?;

    Ok(())
}

/// Validate the query endpoint, document id and host.
pub fn validate_query(query: &QueryConfig) -> Result<()> {
    let endpoint = Url::parse(&query.endpoint)?;
    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "query.endpoint".to_string(),
            message: format!("Unsupported scheme '{}'", endpoint.scheme()),
        });
    }

    validate_doc_id(&query.doc_id)?;

    if !HOST_PATTERN.is_match(&query.host) {
        return Err(Error::ConfigValidation {
            field: "query.host".to_string(),
            message: format!(
                "Host '{}' must be a bare name such as 'instagram' (no scheme, 'www.' or '.com')",
                query.host
            ),
        });
    }

    Ok(())
}

/// Validate the query document identifier.
pub fn validate_doc_id(doc_id: &str) -> Result<()> {
    if doc_id.is_empty() {
        return Err(Error::MissingConfig("query.doc_id".to_string()));
    }

    if !doc_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::ConfigValidation {
            field: "query.doc_id".to_string(),
            message: format!("Document id must be numeric (got '{}')", doc_id),
        });
    }

    Ok(())
}

/// Validate the HTTP client settings.
pub fn validate_http(http: &HttpConfig) -> Result<()> {
    if http.user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("http.user_agent".to_string()));
    }

    if http.timeout_seconds == Some(0) {
        return Err(Error::ConfigValidation {
            field: "http.timeout_seconds".to_string(),
            message: "Timeout must be greater than zero".to_string(),
        });
    }

    Ok(())
}

/// Validate the download defaults.
pub fn validate_download(download: &DownloadConfig) -> Result<()> {
    let sanitized = sanitize_filename(&download.file_name)?;
    if sanitized != download.file_name {
        return Err(Error::ConfigValidation {
            field: "download.file_name".to_string(),
            message: format!(
                "File name '{}' contains reserved characters (try '{}')",
                download.file_name, sanitized
            ),
        });
    }

    Ok(())
}
