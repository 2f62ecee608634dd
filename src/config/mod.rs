//! Configuration module for the reel-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Locating the configuration file
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{
    default_config_path, Config, DownloadConfig, HttpConfig, QueryConfig, DEFAULT_DOC_ID,
    DEFAULT_FILE_NAME, DEFAULT_HOST,
};
pub use validation::validate_config;
