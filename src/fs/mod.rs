//! Filesystem module.
//!
//! Provides:
//! - Destination path resolution
//! - Filename validation and generation

pub mod naming;
pub mod paths;

pub use naming::{sanitize_filename, short_code_file_name};
pub use paths::{ensure_dir, resolve_destination};
