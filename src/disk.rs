//! Information about the disk of the user

use chrono::{DateTime, Utc};

use crate::request::NoParams;

/// Owner of the disk
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct User {
    pub reg_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub login: String,
}

/// Absolute paths of the system folders of the disk
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct SystemFolders {
    pub odnoklassniki: Option<String>,
    pub google: Option<String>,
    pub instagram: Option<String>,
    pub vkontakte: Option<String>,
    pub mailru: Option<String>,
    pub downloads: Option<String>,
    pub applications: Option<String>,
    pub facebook: Option<String>,
    pub social: Option<String>,
    pub scans: Option<String>,
    pub screenshots: Option<String>,
    pub photostream: Option<String>,
}

/// Information about the disk, its quota and its owner
///
/// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/capacity.html)
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Disk {
    #[serde(default)]
    pub max_file_size: u64,
    #[serde(default)]
    pub paid_max_file_size: u64,
    /// Total space available to the user, in bytes
    pub total_space: u64,
    /// Size of the files in the trash, in bytes
    #[serde(default)]
    pub trash_size: u64,
    #[serde(default)]
    pub is_paid: bool,
    /// Size of the files already stored on the disk, in bytes
    pub used_space: u64,
    #[serde(default)]
    pub system_folders: SystemFolders,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub unlimited_autoupload_enabled: bool,
    #[serde(default)]
    pub revision: u64,
}

impl Disk {
    pub fn free_space(&self) -> u64 {
        self.total_space.saturating_sub(self.used_space)
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DISK:")?;
        writeln!(f, "User login: {}", self.user.login)?;
        writeln!(f, "User UID: {}", self.user.uid)?;
        write!(f, "User country: {}", self.user.country)
    }
}

impl crate::Client {
    /// Gets the information about the disk of the user.
    ///
    /// # Returns
    ///
    /// On success, returns a [`Disk`] struct with the quota and the owner of the disk.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] with a 401 status if the token is not valid.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yadisk::Client) -> Result<(), yadisk::Error> {
    /// let disk = client.get_disk_info().await?;
    /// println!("{} bytes free", disk.free_space());
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn get_disk_info(&self) -> crate::Result<Disk> {
        self.get_request::<Disk, _>(&[], NoParams {}).await
    }
}
