//! Downloading a post's video into memory.

use bytes::Bytes;
use reqwest::Response;

use crate::api::PostFetcher;
use crate::error::{Error, Result};
use crate::resolver::Post;

/// Download the video of `post` and return its bytes.
///
/// Unlike [`download_to_path`](crate::download::download_to_path), a
/// non-success status from the asset endpoint is an error.
pub async fn download_to_buffer(fetcher: &PostFetcher, post: &Post) -> Result<Bytes> {
    let short_code = post.short_code()?;
    let metadata = fetcher.fetch_metadata(&short_code).await?;
    let video_url = metadata.video_url()?;

    let response = fetcher
        .get_asset(video_url)
        .await
        .and_then(Response::error_for_status)
        .map_err(Error::UnknownDownload)?;

    let bytes = response.bytes().await.map_err(Error::UnknownDownload)?;
    tracing::info!("Downloaded {} bytes for {}", bytes.len(), short_code);

    Ok(bytes)
}
