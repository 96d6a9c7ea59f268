use std::borrow::Cow;
use std::time::Duration;

use crate::error::ConfigurationError;

fn timeout_from_env() -> Option<Duration> {
    let value = std::env::var("YADISK_TIMEOUT").ok()?;
    match value.parse::<u64>() {
        Ok(millis) => Some(Duration::from_millis(millis)),
        Err(err) => {
            tracing::warn!("invalid value {value:?} for YADISK_TIMEOUT: {err}");
            None
        }
    }
}

/// Builder for constructing a [`Client`](crate::Client) with custom configuration.
///
/// This allows specifying the base URL, the credentials, the timeout and optionally
/// customizing the inner `reqwest::ClientBuilder`.
///
/// ```
/// use std::time::Duration;
/// use yadisk::{ClientBuilder, Credentials};
///
/// let _client = ClientBuilder::default()
///     .with_credentials(Credentials::oauth("my-token"))
///     .with_timeout(Duration::from_secs(10))
///     .build()
///     .expect("unable to build client");
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Cow<'static, str>,
    client_builder: Option<reqwest::ClientBuilder>,
    credentials: Option<crate::Credentials>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings:
    ///
    /// - Base URL is set to [`BASE_URL`](crate::BASE_URL).
    /// - No credentials are set.
    /// - No timeout is set.
    /// - No custom `reqwest::ClientBuilder` is used.
    fn default() -> Self {
        Self {
            base_url: Cow::Borrowed(crate::BASE_URL),
            client_builder: None,
            credentials: None,
            timeout: None,
        }
    }
}

impl ClientBuilder {
    /// Creates a builder pre-configured using environment variables.
    ///
    /// - Uses `YADISK_BASE_URL` for the endpoint, falling back to [`BASE_URL`](crate::BASE_URL).
    /// - Uses `YADISK_ACCESS_TOKEN` for the credentials.
    /// - Uses `YADISK_TIMEOUT`, in milliseconds, for the timeout. An invalid value is ignored.
    pub fn from_env() -> Self {
        let base_url = std::env::var("YADISK_BASE_URL")
            .ok()
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed(crate::BASE_URL));

        Self {
            base_url,
            client_builder: None,
            credentials: crate::Credentials::from_env(),
            timeout: timeout_from_env(),
        }
    }
}

impl ClientBuilder {
    /// Sets a custom base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<Cow<'static, str>>) {
        self.base_url = base_url.into();
    }

    /// Sets a custom base URL and returns the modified builder.
    pub fn with_base_url(mut self, base_url: impl Into<Cow<'static, str>>) -> Self {
        self.set_base_url(base_url);
        self
    }

    /// Sets a custom `reqwest::ClientBuilder`.
    pub fn set_client_builder(&mut self, client_builder: reqwest::ClientBuilder) {
        self.client_builder = Some(client_builder);
    }

    /// Sets a custom `reqwest::ClientBuilder` and returns the modified builder.
    pub fn with_client_builder(mut self, client_builder: reqwest::ClientBuilder) -> Self {
        self.set_client_builder(client_builder);
        self
    }

    /// Sets the credentials for API authentication.
    pub fn set_credentials(&mut self, credentials: crate::Credentials) {
        self.credentials = Some(credentials);
    }

    /// Sets the credentials and returns the modified builder.
    pub fn with_credentials(mut self, credentials: crate::Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Sets the timeout applied to every API call.
    ///
    /// Transfers to and from pre-signed URLs only use it to bound the connection,
    /// moving the bytes themselves can take longer.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Sets the timeout and returns the modified builder.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    /// Builds the [`Client`](crate::Client) with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingAccessToken`] if no credentials, or an empty token, were set.
    /// Returns [`ConfigurationError::InvalidTimeout`] if the timeout is missing or zero.
    /// Returns [`ConfigurationError::InvalidAccessToken`] if the token cannot be sent as a header.
    /// Returns [`ConfigurationError::InvalidBaseUrl`] if the base URL can't be parsed.
    /// Returns [`ConfigurationError::Reqwest`] if the HTTP client could not be built.
    pub fn build(self) -> Result<crate::Client, ConfigurationError> {
        let credentials = self
            .credentials
            .filter(|creds| !creds.is_empty())
            .ok_or(ConfigurationError::MissingAccessToken)?;
        let timeout = self
            .timeout
            .filter(|value| !value.is_zero())
            .ok_or(ConfigurationError::InvalidTimeout)?;
        let authorization = credentials.to_header_value()?;
        let base_url = reqwest::Url::parse(&self.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigurationError::InvalidBaseUrl(self.base_url.to_string()))?;
        let builder = self
            .client_builder
            .unwrap_or_default()
            .user_agent(crate::USER_AGENT)
            .connect_timeout(timeout);
        Ok(crate::Client {
            base_url,
            authorization,
            inner: builder.build()?,
            timeout,
            deadline: None,
        })
    }
}
