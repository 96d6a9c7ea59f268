//! Status of the asynchronous operations, like a copy of a large folder

use crate::request::NoParams;

/// Status of an asynchronous operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationStatus {
    Success,
    Failed,
    InProgress,
}

impl OperationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::InProgress => "in-progress",
        }
    }

    pub fn is_done(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, serde::Deserialize)]
struct StatusResponse {
    status: OperationStatus,
}

impl crate::Client {
    /// Gets the status of an asynchronous operation.
    ///
    /// # Arguments
    ///
    /// * `operation_id` - Id of the operation, see [`CopyStatus::operation_id`](crate::resource::copy::CopyStatus::operation_id).
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error::Remote`] with a 404 status if the operation doesn't exist.
    #[tracing::instrument(skip(self))]
    pub async fn get_operation_status(&self, operation_id: &str) -> crate::Result<OperationStatus> {
        self.get_request::<StatusResponse, _>(&["operations", operation_id], NoParams {})
            .await
            .map(|res| res.status)
    }
}

#[cfg(test)]
mod tests {
    use super::OperationStatus;
    use mockito::Matcher;

    #[tokio::test]
    async fn success_is_stable() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/operations/33ca7d03ab21ct41")
            .match_header("authorization", "OAuth access-token")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"status": "success"}"#)
            .expect(2)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let first = client
            .get_operation_status("33ca7d03ab21ct41")
            .await
            .unwrap();
        let second = client
            .get_operation_status("33ca7d03ab21ct41")
            .await
            .unwrap();
        assert_eq!(first, OperationStatus::Success);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "success");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn in_progress() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/operations/abcd")
            .with_status(200)
            .with_body(r#"{"status": "in-progress"}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let status = client.get_operation_status("abcd").await.unwrap();
        assert_eq!(status, OperationStatus::InProgress);
        assert!(!status.is_done());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn should_escape_operation_id() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/operations/a%2Fb%3Fc")
            .match_query(Matcher::Missing)
            .with_status(200)
            .with_body(r#"{"status": "failed"}"#)
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let status = client.get_operation_status("a/b?c").await.unwrap();
        assert_eq!(status, OperationStatus::Failed);
        assert!(status.is_done());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn unknown_operation() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/operations/wrong")
            .with_status(404)
            .with_body(
                r#"{
    "message": "Не удалось найти запрошенную операцию.",
    "description": "Operation not found.",
    "error": "OperationNotFoundError"
}"#,
            )
            .create_async()
            .await;
        let client = crate::tests::client(server.url());
        let err = client.get_operation_status("wrong").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.api_error().unwrap().code, "OperationNotFoundError");
        m.assert_async().await;
    }
}
