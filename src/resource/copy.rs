use std::borrow::Cow;

use reqwest::{Method, StatusCode};

use super::Link;

/// Outcome of a copy
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyStatus {
    /// The copy is done, the link points to the metadata of the copy.
    Completed(Link),
    /// The copy is running in the background, the link points to the operation to poll.
    InProgress(Link),
}

impl CopyStatus {
    pub fn link(&self) -> &Link {
        match self {
            Self::Completed(link) | Self::InProgress(link) => link,
        }
    }

    /// The id to poll with [`get_operation_status`](crate::Client::get_operation_status)
    /// while the copy is in progress.
    pub fn operation_id(&self) -> Option<&str> {
        match self {
            Self::InProgress(link) => link.operation_id(),
            Self::Completed(_) => None,
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct CopyParams<'a> {
    from: Cow<'a, str>,
    path: Cow<'a, str>,
}

impl crate::Client {
    /// Copies a file or a folder.
    ///
    /// # Arguments
    ///
    /// * `from` - Path of the resource to copy.
    /// * `path` - Path of the copy.
    ///
    /// # Returns
    ///
    /// [`CopyStatus::Completed`] when the server answered with a 201 status,
    /// [`CopyStatus::InProgress`] when it answered with a 202 status.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] if the source doesn't exist or the destination already exists.
    #[tracing::instrument(skip(self))]
    pub async fn copy(&self, from: &str, path: &str) -> crate::Result<CopyStatus> {
        let (status, link) = self
            .request::<Link, _>(
                Method::POST,
                &["resources", "copy"],
                CopyParams {
                    from: from.into(),
                    path: path.into(),
                },
                &[StatusCode::CREATED, StatusCode::ACCEPTED],
            )
            .await?;
        if status == StatusCode::ACCEPTED {
            Ok(CopyStatus::InProgress(link))
        } else {
            Ok(CopyStatus::Completed(link))
        }
    }
}
