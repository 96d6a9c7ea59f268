//! Files and folders stored on the disk, and the commands acting on them

use std::borrow::Cow;

use chrono::{DateTime, Utc};

pub mod copy;
pub mod create;
pub mod download;
pub mod list;
pub mod upload;

/// Root of the folder dedicated to the application
pub const APP_ROOT: &str = "app:/";

/// Kind of resource
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Dir,
}

/// Sharing information of a folder
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ShareInfo {
    /// Whether the folder is the root of the shared group
    #[serde(default)]
    pub is_root: bool,
    /// Whether the current user owns the shared folder
    #[serde(default)]
    pub is_owned: bool,
    #[serde(default)]
    pub rights: String,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Exif {
    pub date_time: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct CommentIds {
    pub private_resource: Option<String>,
    pub public_resource: Option<String>,
}

/// Metadata of a file or a folder
///
/// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/response-objects.html#resource)
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Resource {
    /// Full path of the resource, like `disk:/foo/photo.png`
    pub path: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub size: Option<u64>,
    pub md5: Option<String>,
    pub sha256: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub mime_type: Option<String>,
    /// Type of the file as detected by the disk, like `image` or `document`
    pub media_type: Option<String>,
    pub preview: Option<String>,
    /// URL to download the file
    pub file: Option<String>,
    pub public_key: Option<String>,
    pub public_url: Option<String>,
    /// Revision of the disk in which the resource was last modified
    pub revision: Option<u64>,
    pub antivirus_status: Option<String>,
    pub resource_id: Option<String>,
    pub photoslice_time: Option<DateTime<Utc>>,
    pub share: Option<ShareInfo>,
    pub exif: Option<Exif>,
    pub comment_ids: Option<CommentIds>,
    pub custom_properties: Option<serde_json::Value>,
}

impl Resource {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, ResourceKind::Dir)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, ResourceKind::File)
    }
}

/// A link returned by the API, pointing either to a pre-signed URL or to another API resource
///
/// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/response-objects.html#link)
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub templated: bool,
}

impl Link {
    /// The id of the asynchronous operation when the link points to one.
    ///
    /// ```
    /// # use yadisk::resource::Link;
    /// let link = Link {
    ///     href: "https://cloud-api.yandex.net/v1/disk/operations/33ca7d03ab21ct41".into(),
    ///     method: "GET".into(),
    ///     templated: false,
    /// };
    /// assert_eq!(link.operation_id(), Some("33ca7d03ab21ct41"));
    /// ```
    pub fn operation_id(&self) -> Option<&str> {
        let path = self.href.split(['?', '#']).next()?;
        let (prefix, id) = path.trim_end_matches('/').rsplit_once('/')?;
        if prefix.ends_with("/operations") && !id.is_empty() {
            Some(id)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.href)
    }
}

/// Query of the commands targeting a single resource
#[derive(Debug, serde::Serialize)]
pub(crate) struct PathParams<'a> {
    path: Cow<'a, str>,
}

impl<'a> PathParams<'a> {
    pub(crate) fn new(path: impl Into<Cow<'a, str>>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::{Link, Resource, ResourceKind};

    #[test]
    fn should_decode_file_resource() {
        let resource: Resource = serde_json::from_str(
            r#"{
    "antivirus_status": "clean",
    "resource_id": "11111111:abcdef",
    "file": "https://downloader.disk.yandex.ru/disk/abcdef",
    "size": 2048,
    "media_type": "document",
    "preview": "https://downloader.disk.yandex.ru/preview/abcdef",
    "type": "file",
    "mime_type": "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "revision": 1691505400000000,
    "path": "disk:/Приложения/app/test123.docx",
    "md5": "53f4dc6379c8f95ddf11b9508cfea271",
    "sha256": "9c0c3c6d7f3ea87e2f9ef9d0a0a5b8cfd3f4b3e6a6b1e1b5d1e2f3a4b5c6d7e8",
    "name": "test123.docx",
    "created": "2023-08-08T14:36:40+00:00",
    "modified": "2023-08-08T14:36:40+00:00",
    "comment_ids": {
        "private_resource": "11111111:abcdef",
        "public_resource": "11111111:abcdef"
    }
}"#,
        )
        .unwrap();
        assert!(resource.is_file());
        assert_eq!(resource.kind, ResourceKind::File);
        assert_eq!(resource.size, Some(2048));
        assert!(resource.share.is_none());
        assert_eq!(
            resource.comment_ids.unwrap().private_resource.as_deref(),
            Some("11111111:abcdef")
        );
    }

    #[test]
    fn should_not_find_operation_id_in_resource_link() {
        let link = Link {
            href: "https://cloud-api.yandex.net/v1/disk/resources?path=disk%3A%2Fbar".into(),
            method: "GET".into(),
            templated: false,
        };
        assert_eq!(link.operation_id(), None);
    }
}
