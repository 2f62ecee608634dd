//! Destination path resolution.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve where a download should be written.
///
/// An existing directory gets `file_name` appended. Missing parent
/// directories of the resulting file are created.
pub async fn resolve_destination(destination: &Path, file_name: &str) -> Result<PathBuf> {
    let path = if is_dir(destination).await {
        destination.join(file_name)
    } else {
        destination.to_path_buf()
    };

    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    Ok(path)
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() || is_dir(path).await {
        return Ok(());
    }

    tokio::fs::create_dir_all(path).await.map_err(|e| {
        tracing::debug!("Failed to create {}: {}", path.display(), e);
        Error::PathNotFound(path.to_path_buf())
    })
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}
