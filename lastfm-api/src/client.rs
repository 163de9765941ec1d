use http_client::{HttpClient, Transport};

use crate::config::ClientConfig;
use crate::entity::CapabilityRegistry;
use crate::error::Result;
use crate::model;
use crate::query::Query;

/// A client for executing queries against the web service
///
/// The client owns the credentials and the transport; queries stay
/// stateless descriptions of a single call.
///
/// ```rust,ignore
/// use lastfm_api::{ClientConfig, LastfmClient, Named};
/// use lastfm_api::methods::radio;
///
/// let client = LastfmClient::new(ClientConfig::new("api-key").with_secret("secret"))?;
/// let station = client.execute(radio::tune("lastfm://artist/Cher", None, "session-key"))?;
/// println!("Now playing {}", station.name());
/// ```
#[derive(Debug, Clone)]
pub struct LastfmClient<T = HttpClient> {
    transport: T,
    config: ClientConfig,
}

impl LastfmClient<HttpClient> {
    /// Create a client using the default blocking HTTP transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, HttpClient::new())
    }
}

impl<T: Transport> LastfmClient<T> {
    /// Create a client with a custom transport (proxies, test doubles)
    ///
    /// Fails if the standard capability registry cannot build every
    /// built-in entity type, so wiring mistakes never reach request time.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        model::ensure_supported(CapabilityRegistry::standard())?;
        tracing::debug!(base_url = config.base_url(), "web service client ready");
        Ok(Self { transport, config })
    }

    /// Execute a query and return its typed result
    pub fn execute<R>(&self, query: Query<R>) -> Result<R> {
        query.execute(&self.transport, &self.config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
