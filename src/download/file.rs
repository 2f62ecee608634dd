//! Downloading a post's video to disk.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::{Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::PostFetcher;
use crate::config::DownloadConfig;
use crate::error::{Error, Result};
use crate::fs::{resolve_destination, short_code_file_name};
use crate::output::create_download_bar;
use crate::resolver::Post;

/// Minimum file size to show progress bar (5 MB).
const PROGRESS_THRESHOLD: u64 = 5 * 1024 * 1024;

/// Result of a path download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The asset was served with HTTP 200 and written to `path`.
    Saved {
        path: PathBuf,
        status: u16,
        bytes_written: u64,
    },
    /// The asset endpoint answered with another status. Nothing was written.
    Rejected { path: PathBuf, status: u16 },
}

impl DownloadOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, DownloadOutcome::Saved { .. })
    }

    /// HTTP status returned by the asset endpoint.
    pub fn status(&self) -> u16 {
        match self {
            DownloadOutcome::Saved { status, .. } | DownloadOutcome::Rejected { status, .. } => {
                *status
            }
        }
    }

    /// Resolved destination file.
    pub fn path(&self) -> &Path {
        match self {
            DownloadOutcome::Saved { path, .. } | DownloadOutcome::Rejected { path, .. } => path,
        }
    }
}

/// Download the video of `post` to `destination`.
///
/// `destination` may be a file or an existing directory, in which case the
/// configured file name is appended. Missing parent directories are created
/// and an existing file is overwritten.
pub async fn download_to_path(
    fetcher: &PostFetcher,
    post: &Post,
    destination: &Path,
    options: &DownloadConfig,
) -> Result<DownloadOutcome> {
    let short_code = post.short_code()?;
    tracing::info!("Downloading post: {}", short_code);

    let metadata = fetcher.fetch_metadata(&short_code).await?;
    let video_url = metadata.video_url()?;

    let file_name = if options.name_by_short_code {
        short_code_file_name(&short_code, &options.file_name)?
    } else {
        options.file_name.clone()
    };
    let path = resolve_destination(destination, &file_name).await?;

    let response = fetcher
        .get_asset(video_url)
        .await
        .map_err(|e| Error::Download(format!("Asset request failed: {}", e)))?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!("Failed to download {}: HTTP {}", short_code, status);
        return Ok(DownloadOutcome::Rejected {
            path,
            status: status.as_u16(),
        });
    }

    let written = write_body(response, &path, &short_code, options.show_progress).await;
    let bytes_written = match written {
        Ok(written) => written,
        Err(e) => {
            // Don't leave a truncated video behind.
            let _ = tokio::fs::remove_file(&path).await;
            return Err(e);
        }
    };

    tracing::info!("Downloaded: {}", path.display());

    Ok(DownloadOutcome::Saved {
        path,
        status: status.as_u16(),
        bytes_written,
    })
}

/// Stream a response body into `path` chunk by chunk.
async fn write_body(
    response: Response,
    path: &Path,
    short_code: &str,
    show_progress: bool,
) -> Result<u64> {
    let content_length = response.content_length();
    let progress = if show_progress && content_length.is_some_and(|l| l > PROGRESS_THRESHOLD) {
        Some(create_download_bar(content_length.unwrap_or(0), short_code))
    } else {
        None
    };

    let mut file = File::create(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::PathNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}
