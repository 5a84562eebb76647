// SPDX-License-Identifier: MPL-2.0
//! Saving the current source to disk.
//!
//! The whole body is fetched into memory first and then written next to its
//! final name and renamed into place, so a failed fetch or write never leaves
//! a partial file under the download name. There is no retry.

use crate::config::{PlayerSettings, DEFAULT_DOWNLOAD_FILENAME, DOWNLOAD_MAX_REDIRECTS};
use crate::error::PlaybackError;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A download of one source URL into a fixed file name.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub url: String,
    pub dest_dir: PathBuf,
    pub filename: String,
    pub user_agent: String,
}

impl DownloadRequest {
    /// Builds a request for `url` using the configured directory and name.
    pub fn new(url: &str, settings: &PlayerSettings) -> Self {
        Self {
            url: url.to_string(),
            dest_dir: settings.download_dir.clone(),
            filename: settings.download_filename.clone(),
            user_agent: settings.user_agent.clone(),
        }
    }

    /// Final path of the saved file.
    ///
    /// Only the last component of the configured name is used, so a name
    /// cannot escape the download directory.
    pub fn dest_path(&self) -> PathBuf {
        let name = Path::new(&self.filename)
            .file_name()
            .map_or_else(|| DEFAULT_DOWNLOAD_FILENAME.into(), ToOwned::to_owned);
        self.dest_dir.join(name)
    }

    /// Fetches the source and saves it. Returns the saved path.
    pub async fn run(self) -> Result<PathBuf, PlaybackError> {
        let body = fetch_blob(&self.url, &self.user_agent).await?;
        save_blob(&self.dest_path(), &body).await
    }
}

/// Fetches `url` fully into memory.
pub async fn fetch_blob(url: &str, user_agent: &str) -> Result<Vec<u8>, PlaybackError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(DOWNLOAD_MAX_REDIRECTS))
        .user_agent(user_agent)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(PlaybackError::Download(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let total_size = response.content_length().unwrap_or(0);
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        body.extend_from_slice(&chunk);
        trace!(downloaded = body.len(), total = total_size, "download progress");
    }

    Ok(body)
}

/// Writes `bytes` to `path` through a temporary `.part` sibling.
pub async fn save_blob(path: &Path, bytes: &[u8]) -> Result<PathBuf, PlaybackError> {
    let io_error = |err: std::io::Error| PlaybackError::Download(format!("{}: {err}", path.display()));

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let mut part_name = path.as_os_str().to_owned();
    part_name.push(".part");
    let part_path = PathBuf::from(part_name);

    if let Err(err) = tokio::fs::write(&part_path, bytes).await {
        let _ = tokio::fs::remove_file(&part_path).await;
        return Err(io_error(err));
    }

    if let Err(err) = tokio::fs::rename(&part_path, path).await {
        let _ = tokio::fs::remove_file(&part_path).await;
        return Err(io_error(err));
    }

    Ok(path.to_path_buf())
}
