//! Client for the [Yandex Disk REST API](https://yandex.com/dev/disk/rest/)
//!
//! Every remote operation is an async method on [`Client`]. A call either
//! returns the decoded payload, or an [`Error`] carrying the status code and
//! the error payload sent by the server.
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use std::time::Duration;
//!
//! let client = yadisk::Client::new("my-token", Duration::from_secs(10)).unwrap();
//! let disk = client.get_disk_info().await.unwrap();
//! println!("{disk}");
//! # })
//! ```

use std::time::{Duration, Instant};

use reqwest::header::HeaderValue;

pub mod builder;
pub mod credentials;
pub mod disk;
pub mod error;
pub mod operation;
mod request;
pub mod resource;
pub mod transfer;

pub use builder::ClientBuilder;
pub use credentials::Credentials;
pub use error::{ApiError, ConfigurationError, Error};

/// The address of the Yandex Disk REST API
pub const BASE_URL: &str = "https://cloud-api.yandex.net/v1/disk";
/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Yandex Disk REST API
///
/// The client holds no per call state. Cloning it is cheap and the clones
/// share the same connection pool, so it can be used from concurrent tasks.
#[derive(Clone)]
pub struct Client {
    base_url: reqwest::Url,
    authorization: HeaderValue,
    inner: reqwest::Client,
    /// Limit of the API calls, the pre-signed transfers are only bound by the deadline
    timeout: Duration,
    deadline: Option<tokio::time::Instant>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client bound to [`BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the token is empty or the timeout is zero.
    pub fn new(access_token: impl Into<String>, timeout: Duration) -> Result<Self> {
        ClientBuilder::default()
            .with_credentials(Credentials::oauth(access_token))
            .with_timeout(timeout)
            .build()
            .map_err(Error::from)
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Returns a copy of the client whose calls fail with [`Error::DeadlineExceeded`]
    /// once `deadline` is reached.
    ///
    /// A deadline in the past makes every call fail before any request is sent.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        Self {
            deadline: Some(tokio::time::Instant::from_std(deadline)),
            ..self.clone()
        }
    }

    /// Same as [`Client::with_deadline`], with a deadline relative to now.
    pub fn with_deadline_after(&self, duration: Duration) -> Self {
        self.with_deadline(Instant::now() + duration)
    }
}
