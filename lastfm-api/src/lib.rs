//! Typed Last.fm web service API
//!
//! This crate turns web service methods into typed, one-shot [`Query`]
//! values and response documents into typed models. It uses the private
//! `http-client` crate for the actual HTTP exchange.
//!
//! # Executing queries
//!
//! ```rust,ignore
//! use lastfm_api::{ClientConfig, LastfmClient, Named};
//! use lastfm_api::methods::radio::{self, PlaylistOptions};
//!
//! let client = LastfmClient::new(ClientConfig::new("api-key").with_secret("secret"))?;
//!
//! let station = client.execute(radio::tune("lastfm://artist/Cher", None, "session-key"))?;
//! let playlist = client.execute(radio::get_playlist("session-key", PlaylistOptions::default()))?;
//! ```
//!
//! # Entities
//!
//! Entity models are assembled from independent capability parsers, see
//! [`entity`] for how capabilities, parsers and the registry fit together.

pub mod client;
pub mod config;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod methods;
pub mod model;
pub mod params;
pub mod query;
pub mod signer;
mod xml;

pub use client::LastfmClient;
pub use config::ClientConfig;
pub use entity::{
    Capability, CapabilityRegistry, CompositeEntityParser, Entity, EntityParser, HasBody,
    HasWebsite, Located, Named,
};
pub use error::{ConfigurationError, Error, ErrorCode, ParseError, Result, ValidationError};
pub use http_client::{HttpClient, HttpMethod, HttpRequest, Transport, TransportError};
pub use params::{Language, ParameterSet, ParameterValue};
pub use query::{Auth, Query};
