//! Download module for post videos.
//!
//! This module provides:
//! - Streaming a video to a file or directory
//! - Fetching a video into an in-memory buffer

pub mod buffer;
pub mod file;

pub use buffer::download_to_buffer;
pub use file::{download_to_path, DownloadOutcome};
