//! Byte transfers between a local file and a pre-signed URL
//!
//! Pre-signed URLs carry their own credentials, so these requests are sent
//! without the `Authorization` header.

use std::path::Path;

use reqwest::header::CONTENT_LENGTH;
use reqwest::StatusCode;
use tokio::io::AsyncWriteExt;

use crate::{ApiError, Error};

/// Outcome of a transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer {
    /// Status code of the transfer request
    pub status: u16,
    /// Number of bytes moved
    pub size: u64,
}

impl crate::Client {
    /// Downloads the content of a pre-signed URL into a local file.
    ///
    /// The local file is created, or truncated if it exists, before the request is sent.
    /// If the download fails, the partially written file is left in place. Nothing is
    /// touched when the deadline of the client has already passed.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] if the server doesn't respond with a 200 status,
    /// a [`crate::Error::Io`] if the local file can't be written.
    #[tracing::instrument(skip(self, href, local_path))]
    pub async fn download_from_link(
        &self,
        href: &str,
        local_path: impl AsRef<Path>,
    ) -> crate::Result<Transfer> {
        let local_path = local_path.as_ref();
        self.within_deadline(async {
            let mut file = tokio::fs::File::create(local_path).await?;
            let mut res = self.inner.get(href).send().await?;
            let status = res.status();
            tracing::debug!("responded with status {status:?}");
            if status != StatusCode::OK {
                return Err(Error::Remote {
                    status: status.as_u16(),
                    error: ApiError::from_status(status),
                });
            }
            let mut size = 0;
            while let Some(chunk) = res.chunk().await? {
                file.write_all(&chunk).await?;
                size += chunk.len() as u64;
            }
            file.flush().await?;
            tracing::debug!("downloaded {size} bytes to {local_path:?}");
            Ok(Transfer {
                status: status.as_u16(),
                size,
            })
        })
        .await
    }

    /// Uploads the content of a local file to a pre-signed URL.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Transport`] when no response was received, in which case
    /// the status is unknown. Returns a [`crate::Error::Remote`] when the server responds
    /// with a status outside of the 2xx range.
    #[tracing::instrument(skip(self, href, local_path))]
    pub async fn upload_to_link(
        &self,
        href: &str,
        local_path: impl AsRef<Path>,
    ) -> crate::Result<Transfer> {
        let local_path = local_path.as_ref();
        let file = tokio::fs::File::open(local_path).await?;
        let size = file.metadata().await?.len();
        self.within_deadline(async {
            let res = self
                .inner
                .put(href)
                .header(CONTENT_LENGTH, size)
                .body(reqwest::Body::from(file))
                .send()
                .await?;
            let status = res.status();
            tracing::debug!("responded with status {status:?}");
            if !status.is_success() {
                return Err(Error::Remote {
                    status: status.as_u16(),
                    error: ApiError::from_status(status),
                });
            }
            tracing::debug!("uploaded {size} bytes from {local_path:?}");
            Ok(Transfer {
                status: status.as_u16(),
                size,
            })
        })
        .await
    }
}
