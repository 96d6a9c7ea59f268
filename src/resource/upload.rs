//! Resources needed to upload a file

use std::borrow::Cow;
use std::path::Path;

use super::Link;
use crate::transfer::Transfer;

#[derive(Debug, serde::Serialize)]
struct UploadLinkParams<'a> {
    path: Cow<'a, str>,
    overwrite: bool,
}

impl crate::Client {
    /// Gets a pre-signed URL to upload a file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the file on the disk.
    /// * `overwrite` - Whether an existing file at `path` can be replaced.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] with a 409 status if the file exists and `overwrite` is false.
    #[tracing::instrument(skip(self))]
    pub async fn get_upload_link(&self, path: &str, overwrite: bool) -> crate::Result<String> {
        self.get_request::<Link, _>(
            &["resources", "upload"],
            UploadLinkParams {
                path: path.into(),
                overwrite,
            },
        )
        .await
        .map(|link| link.href)
    }

    /// Uploads a local file to the disk.
    ///
    /// The status of the returned [`Transfer`] is the one of the upload itself,
    /// usually 201 once the file is stored or 202 while the disk processes it.
    ///
    /// # Arguments
    ///
    /// * `disk_path` - Path of the file on the disk.
    /// * `local_path` - Path of the local file to read.
    /// * `overwrite` - Whether an existing file at `disk_path` can be replaced.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yadisk::Client) -> Result<(), yadisk::Error> {
    /// let transfer = client.upload_file("app:/report.pdf", "report.pdf", true).await?;
    /// println!("uploaded {} bytes", transfer.size);
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, local_path))]
    pub async fn upload_file(
        &self,
        disk_path: &str,
        local_path: impl AsRef<Path>,
        overwrite: bool,
    ) -> crate::Result<Transfer> {
        let href = self.get_upload_link(disk_path, overwrite).await?;
        self.upload_to_link(&href, local_path).await
    }
}
