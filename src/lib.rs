//! Reel Downloader - resolve reel links and download their videos.
//!
//! This library provides functionality for turning a post URL into a short
//! code, querying the post metadata and fetching the video behind it.
//!
//! # Features
//!
//! - Strict URL validation before anything touches the network
//! - Short code extraction from `/reel/`, `/reels/` and `/posts/` paths
//! - Configurable query endpoint and document id
//! - Download to a file or directory, or into memory
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use reel_downloader::{download_to_path, Config, Post, PostFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let post = Post::new("https://www.instagram.com/reel/C3xYz_9-Lmq/")?;
//!     let fetcher = PostFetcher::new(Arc::new(config.query.clone()), &config.http)?;
//!
//!     let outcome = download_to_path(&fetcher, &post, Path::new("."), &config.download).await?;
//!     println!("saved: {}", outcome.is_saved());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod resolver;

// Re-exports for convenience
pub use api::{Metadata, PostFetcher};
pub use config::Config;
pub use download::{download_to_buffer, download_to_path, DownloadOutcome};
pub use error::{Error, Result};
pub use resolver::{extract_short_code, Post, UrlResolver};
