//! The shared send path of every authenticated call

use std::future::Future;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};

use crate::{ApiError, Error};

/// Query of the calls that don't take any parameter
#[derive(Debug, serde::Serialize)]
pub(crate) struct NoParams {}

/// Decodes the body as `T` when the status is one of `expected`, as an [`ApiError`] otherwise.
async fn read_response<T: serde::de::DeserializeOwned>(
    res: reqwest::Response,
    expected: &[StatusCode],
) -> crate::Result<(StatusCode, T)> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    let body = res.bytes().await?;
    if expected.contains(&status) {
        let payload = serde_json::from_slice(&body)?;
        Ok((status, payload))
    } else {
        let error: ApiError = serde_json::from_slice(&body)?;
        Err(Error::Remote {
            status: status.as_u16(),
            error,
        })
    }
}

impl crate::Client {
    /// Appends the percent-encoded `segments` to the base URL, no segment meaning the base itself.
    fn build_url(&self, segments: &[&str]) -> reqwest::Url {
        let mut url = self.base_url.clone();
        // the builder rejects the urls that can't be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            if segments.is_empty() {
                path.push("");
            } else {
                path.extend(segments);
            }
        }
        url
    }

    /// Runs `fut`, failing with [`Error::DeadlineExceeded`] when the deadline of the client is reached.
    pub(crate) async fn within_deadline<T, F>(&self, fut: F) -> crate::Result<T>
    where
        F: Future<Output = crate::Result<T>>,
    {
        let Some(deadline) = self.deadline else {
            return fut.await;
        };
        if deadline <= tokio::time::Instant::now() {
            tracing::debug!("deadline already exceeded, skipping request");
            return Err(Error::DeadlineExceeded);
        }
        tokio::time::timeout_at(deadline, fut)
            .await
            .map_err(|_| Error::DeadlineExceeded)?
    }

    #[tracing::instrument(name = "request", skip(self, params, expected))]
    pub(crate) async fn request<T, P>(
        &self,
        method: Method,
        segments: &[&str],
        params: P,
        expected: &[StatusCode],
    ) -> crate::Result<(StatusCode, T)>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        let uri = self.build_url(segments);
        tracing::debug!("calling {uri}");
        let req = self
            .inner
            .request(method, uri)
            .timeout(self.timeout)
            .header(AUTHORIZATION, self.authorization.clone())
            .query(&params);
        self.within_deadline(async move {
            let res = req.send().await?;
            read_response(res, expected).await
        })
        .await
    }

    pub(crate) async fn get_request<T, P>(&self, segments: &[&str], params: P) -> crate::Result<T>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        self.request(Method::GET, segments, params, &[StatusCode::OK])
            .await
            .map(|(_, payload)| payload)
    }
}
