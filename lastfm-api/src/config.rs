//! Client credentials and endpoint

use std::fmt;

/// Root of the web service
pub const DEFAULT_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Credentials and endpoint shared by every call of a client
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    api_secret: Option<String>,
    base_url: String,
}

impl ClientConfig {
    /// Configuration for unsigned calls only
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Add the shared secret required by signed methods
    pub fn with_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.api_secret = Some(api_secret.into());
        self
    }

    /// Point the client at another endpoint (mirrors, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> Option<&str> {
        self.api_secret.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keep the secret out of logs and panic messages
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}
