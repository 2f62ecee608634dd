//! Error types for the reel-downloader application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // URL resolution errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Could not resolve short code: {0}")]
    UnknownResolution(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Query errors
    #[error("Metadata query rejected with HTTP {status}")]
    QueryRejected { status: u16 },

    #[error("Malformed metadata response: {0}")]
    MalformedResponse(String),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Download failed: {0}")]
    UnknownDownload(#[source] reqwest::Error),

    // File system errors
    #[error("Path not found or not creatable: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_URL: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
