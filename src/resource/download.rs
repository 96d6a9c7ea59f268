//! Resources needed to download a file

use std::path::Path;

use super::{Link, PathParams};
use crate::transfer::Transfer;

impl crate::Client {
    /// Gets a pre-signed URL to download a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the file on the disk.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] with a 404 status if the file doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_download_link(&self, path: &str) -> crate::Result<String> {
        self.get_request::<Link, _>(&["resources", "download"], PathParams::new(path))
            .await
            .map(|link| link.href)
    }

    /// Downloads a file from the disk into a local file.
    ///
    /// The status of the returned [`Transfer`] is the one of the download itself,
    /// not the one of the link request.
    ///
    /// # Arguments
    ///
    /// * `disk_path` - Path of the file on the disk.
    /// * `local_path` - Path of the local file to write, truncated if it exists.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yadisk::Client) -> Result<(), yadisk::Error> {
    /// let transfer = client.download_file("app:/report.pdf", "report.pdf").await?;
    /// println!("downloaded {} bytes", transfer.size);
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, local_path))]
    pub async fn download_file(
        &self,
        disk_path: &str,
        local_path: impl AsRef<Path>,
    ) -> crate::Result<Transfer> {
        let href = self.get_download_link(disk_path).await?;
        self.download_from_link(&href, local_path).await
    }
}
