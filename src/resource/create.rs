use reqwest::{Method, StatusCode};

use super::{Link, PathParams};

impl crate::Client {
    /// Creates a folder.
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the folder to create. Its parent must exist.
    ///
    /// # Returns
    ///
    /// On success, returns a [`Link`] to the metadata of the created folder.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] with a 409 status if the folder already exists.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn example(client: &yadisk::Client) -> Result<(), yadisk::Error> {
    /// client.create_folder("app:/backups").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn create_folder(&self, path: &str) -> crate::Result<Link> {
        self.request::<Link, _>(
            Method::PUT,
            &["resources"],
            PathParams::new(path),
            &[StatusCode::CREATED],
        )
        .await
        .map(|(_, link)| link)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    #[tokio::test]
    async fn success() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/resources")
            .match_header("authorization", "OAuth access-token")
            .match_query(Matcher::UrlEncoded("path".into(), "app:/testing".into()))
            .with_status(201)
            .with_body(
                r#"{
    "href": "https://cloud-api.yandex.net/v1/disk/resources?path=disk%3A%2F%D0%9F%D1%80%D0%B8%D0%BB%D0%BE%D0%B6%D0%B5%D0%BD%D0%B8%D1%8F%2Fapp%2Ftesting",
    "method": "GET",
    "templated": false
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let link = client.create_folder("app:/testing").await.unwrap();
        assert_eq!(link.method, "GET");
        assert!(link.href.starts_with("https://cloud-api.yandex.net/v1/disk/resources"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn already_exists() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("PUT", "/resources")
            .match_query(Matcher::UrlEncoded("path".into(), "app:/bkp".into()))
            .with_status(409)
            .with_body(
                r#"{
    "message": "По указанному пути \"app:/bkp\" уже существует папка с таким именем.",
    "description": "Specified path \"app:/bkp\" points to existent directory.",
    "error": "DiskPathPointsToExistentDirectoryError"
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let err = client.create_folder("app:/bkp").await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.api_error().unwrap().code,
            "DiskPathPointsToExistentDirectoryError"
        );
        m.assert_async().await;
    }
}
