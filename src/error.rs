//! The errors returned by the client

use reqwest::StatusCode;

/// Errors that may occur while configuring and building a [`Client`](crate::Client).
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// No access token was provided, or it was empty.
    #[error("access token is missing")]
    MissingAccessToken,
    /// The access token contains characters that can't be sent in a header.
    #[error("access token is not a valid header value")]
    InvalidAccessToken(#[from] reqwest::header::InvalidHeaderValue),
    /// The base URL can't be parsed, or can't hold a path.
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
    /// No timeout was provided, or it was zero.
    #[error("timeout can't be zero")]
    InvalidTimeout,
    /// Returned when the underlying HTTP client could not be built.
    #[error("unable to build reqwest client")]
    Reqwest(#[from] reqwest::Error),
}

/// The error payload sent by the API when a request fails
///
/// [More about it on the documentation](https://yandex.com/dev/disk/api/reference/response-objects.html#error)
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ApiError {
    /// Human readable description of the error
    #[serde(default)]
    pub message: String,
    /// Technical description of the error
    #[serde(default)]
    pub description: String,
    /// Unique code of the error, like `DiskNotFoundError`
    #[serde(rename = "error", default)]
    pub code: String,
    /// Value of the limit, when a rate limit was hit
    #[serde(default)]
    pub limit: Option<u64>,
    /// Reason of the rate limit
    #[serde(default)]
    pub reason: Option<String>,
}

impl ApiError {
    /// Error payload for responses that don't come from the API itself, like the pre-signed transfers.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        Self {
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_owned(),
            description: format!("bad status: {}", status.as_u16()),
            ..Default::default()
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.code.is_empty(), self.description.is_empty()) {
            (true, true) => write!(f, "{}", self.message),
            (true, false) => write!(f, "{}", self.description),
            (false, true) => write!(f, "{}", self.code),
            (false, false) => write!(f, "{} {}", self.code, self.description),
        }
    }
}

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client could not be built
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// The request could not be sent or the response could not be read
    #[error("unable to execute request")]
    Transport(#[from] reqwest::Error),
    /// The deadline of the call was reached before the response arrived
    #[error("deadline exceeded")]
    DeadlineExceeded,
    /// Unable to parse a JSON response
    #[error("unable to decode response")]
    Decoding(#[from] serde_json::Error),
    /// The server responded with a status outside of the expected ones
    #[error("server responded with status {status}: {error}")]
    Remote { status: u16, error: ApiError },
    /// Error while reading or writing a local file
    #[error("unable to access local file")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The status code of the response, when one was received.
    ///
    /// Returns `None` when the status is unknown, for example when the server couldn't be reached.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Whether the error happened on the way to or from the server, deadlines included.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::DeadlineExceeded)
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Remote { error, .. } => Some(error),
            _ => None,
        }
    }
}
