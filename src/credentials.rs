//! The OAuth token used to authenticate with the Yandex Disk API, as specified in
//! [the documentation](https://yandex.com/dev/disk/rest/).

use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// The OAuth access token sent with every authenticated request
#[derive(Clone)]
pub struct Credentials {
    access_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"REDACTED")
            .finish()
    }
}

impl Credentials {
    /// Creates the credentials based on the `YADISK_ACCESS_TOKEN` environment variable.
    ///
    /// If the variable is not set, `None` is returned.
    ///
    /// ```rust
    /// use yadisk::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses an access token"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("YADISK_ACCESS_TOKEN").ok().map(Self::oauth)
    }

    pub fn oauth(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.trim().is_empty()
    }

    /// Builds the value of the `Authorization` header, flagged as sensitive.
    pub(crate) fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("OAuth {}", self.access_token))?;
        value.set_sensitive(true);
        Ok(value)
    }
}
