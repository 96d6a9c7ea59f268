//! Resources needed to list the content of a folder

use super::{PathParams, Resource, APP_ROOT};

/// A page of the content of a folder
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ResourceList {
    /// Field used to sort the list
    pub sort: Option<String>,
    #[serde(default)]
    pub items: Vec<Resource>,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
    /// Path of the listed folder
    pub path: String,
    /// Number of elements in the folder, including the ones outside of this page
    #[serde(default)]
    pub total: u64,
}

impl ResourceList {
    pub fn find(&self, name: &str) -> Option<&Resource> {
        self.items.iter().find(|item| item.name == name)
    }
}

impl std::fmt::Display for ResourceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FILES:")?;
        for item in self.items.iter() {
            writeln!(f, "{}", item.path)?;
        }
        write!(f, "Items total: {}", self.total)
    }
}

#[derive(Debug, serde::Deserialize)]
struct FolderResponse {
    #[serde(rename = "_embedded")]
    embedded: ResourceList,
}

impl crate::Client {
    /// Lists the content of a folder.
    ///
    /// Only the first page returned by the API is read.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the folder, like `disk:/foo` or `app:/bar`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] if the folder doesn't exist or if the API request fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_files(&self, path: &str) -> crate::Result<ResourceList> {
        self.get_request::<FolderResponse, _>(&["resources"], PathParams::new(path))
            .await
            .map(|res| res.embedded)
    }

    /// Lists the content of the folder of the application.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yadisk::Client) -> Result<(), yadisk::Error> {
    /// let list = client.list_app_files().await?;
    /// println!("{list}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_app_files(&self) -> crate::Result<ResourceList> {
        self.list_files(APP_ROOT).await
    }
}
