//! Private HTTP transport for web service communication
//!
//! This crate provides the minimal blocking transport used by `lastfm-api`
//! to reach the web service. It knows nothing about methods, signatures or
//! response envelopes: it moves an already encoded request over the wire and
//! hands back the raw response document.

mod error;

pub use error::TransportError;

use std::sync::Arc;
use std::time::Duration;

/// Default user agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("lastfm-sdk/", env!("CARGO_PKG_VERSION"));

/// HTTP verb used for a web service call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Parameters travel in the query string
    Get,
    /// Parameters travel in a form-encoded body
    Post,
}

impl HttpMethod {
    /// The verb as it appears on the request line
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully encoded request ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Verb to use
    pub method: HttpMethod,
    /// Absolute URL, including the query string for GET requests
    pub url: String,
    /// Form-encoded body for POST requests
    pub body: Option<String>,
}

impl HttpRequest {
    /// Build a GET request for an already encoded URL
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    /// Build a POST request carrying a form-encoded body
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body.into()),
        }
    }
}

/// Executes encoded requests and returns the raw response document
///
/// Implementations must return the response body even when the service
/// answers with an HTTP error status: the web service reports its own
/// failures inside the document, and the caller decides what they mean.
pub trait Transport: Send + Sync {
    /// Send the request and return the response body
    fn send(&self, request: &HttpRequest) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<String, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &HttpRequest) -> Result<String, TransportError> {
        (**self).send(request)
    }
}

/// A minimal blocking HTTP client for web service communication
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    /// Create a new client with default timeouts (5s connect, 10s read)
    pub fn new() -> Self {
        Self::with_timeouts(Duration::from_secs(5), Duration::from_secs(10))
    }

    /// Create a client with custom connect and read timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .user_agent(DEFAULT_USER_AGENT)
                .build(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpClient {
    fn send(&self, request: &HttpRequest) -> Result<String, TransportError> {
        tracing::trace!(method = request.method.as_str(), "sending web service request");

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.url).call(),
            (HttpMethod::Post, body) => self
                .agent
                .post(&request.url)
                .set("Content-Type", "application/x-www-form-urlencoded")
                .send_string(body.unwrap_or_default()),
        };

        let response = match result {
            Ok(response) => response,
            // Service failures come back as 4xx/5xx with a regular document body
            Err(ureq::Error::Status(code, response)) => {
                tracing::debug!(status = code, "web service answered with an error status");
                response
            }
            Err(e) => return Err(TransportError::Network(e.to_string())),
        };

        response
            .into_string()
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
