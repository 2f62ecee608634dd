//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Query document identifier selecting the shortcode media query.
pub const DEFAULT_DOC_ID: &str = "8845758582119845";

/// Host name (without `www.` and `.com`) that post URLs must point at.
pub const DEFAULT_HOST: &str = "instagram";

/// File name used when the destination is a directory.
pub const DEFAULT_FILE_NAME: &str = "video.mp4";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub download: DownloadConfig,
}

/// Remote query settings.
///
/// Loaded once at startup and shared with the fetcher behind an `Arc`, so the
/// document id can be rotated by editing the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Full URL of the GraphQL query endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Query document identifier sent as `doc_id`.
    #[serde(default = "default_doc_id")]
    pub doc_id: String,

    /// Host accepted by URL validation.
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            doc_id: default_doc_id(),
            host: default_host(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Overall request timeout. No timeout when unset.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Default destination when none is given on the command line.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File name appended when the destination is a directory.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Name files `<short code>.<ext>` instead of `file_name`.
    #[serde(default)]
    pub name_by_short_code: bool,

    /// Whether to show a progress bar for large downloads.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_file_name(),
            name_by_short_code: false,
            show_progress: true,
        }
    }
}

fn default_endpoint() -> String {
    format!("https://www.{}.com/graphql/query", DEFAULT_HOST)
}

fn default_doc_id() -> String {
    DEFAULT_DOC_ID.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_true() -> bool {
    true
}

/// Platform config file location, e.g. `~/.config/reel-downloader/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "reel-downloader").map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the first configuration file that exists, or fall back to defaults.
    ///
    /// An explicitly given path must exist. Otherwise `config.toml` in the
    /// working directory is tried, then the platform config directory.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidates = std::iter::once(PathBuf::from("config.toml")).chain(default_config_path());
        for candidate in candidates {
            if candidate.is_file() {
                tracing::debug!("Using configuration file {}", candidate.display());
                return Ok((Self::load(&candidate)?, Some(candidate)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Get the effective download destination.
    pub fn download_directory(&self) -> PathBuf {
        self.download
            .directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.query.endpoint, "https://www.instagram.com/graphql/query");
        assert_eq!(config.query.doc_id, "8845758582119845");
        assert_eq!(config.download.file_name, "video.mp4");
        assert!(config.http.timeout_seconds.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\ndoc_id = \"1234\"\n\n[http]\ntimeout_seconds = 30").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.query.doc_id, "1234");
        assert_eq!(config.query.host, "instagram");
        assert_eq!(config.http.timeout_seconds, Some(30));
        assert!(config.download.show_progress);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_discover_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[download]\nfile_name = \"clip.mp4\"").unwrap();

        let (config, used) = Config::discover(Some(file.path())).unwrap();
        assert_eq!(config.download.file_name, "clip.mp4");
        assert_eq!(used.as_deref(), Some(file.path()));
    }
}
