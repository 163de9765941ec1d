use http_client::TransportError;
use thiserror::Error;

use crate::entity::Capability;

/// High-level errors for web service calls
///
/// Every failure of a single `execute()` ends up as one of these variants.
/// Nothing is retried or defaulted on the way up.
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter or credential was missing
    ///
    /// Raised before any network activity, so the caller can supply the
    /// missing value and try again.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The transport could not complete the exchange
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The web service reported a failure
    ///
    /// `code` and `message` are passed through verbatim from the response.
    /// Use [`Error::api_code`] to branch on well-known codes.
    #[error("API error {code}: {message}")]
    Api { code: u32, message: String },

    /// The response could not be interpreted as the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The capability registry cannot serve an entity type
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl Error {
    /// Classify a service-reported failure, if this is one
    pub fn api_code(&self) -> Option<ErrorCode> {
        match self {
            Error::Api { code, .. } => Some(ErrorCode::from_code(*code)),
            _ => None,
        }
    }
}

/// Errors detected while validating a query before it is sent
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required parameter '{parameter}' is missing for {method}")]
    MissingParameter {
        method: &'static str,
        parameter: String,
    },

    #[error("{method} must be signed but no API secret is configured")]
    MissingSecret { method: &'static str },

    #[error("Parameter '{parameter}' value '{value}' is invalid: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    pub fn missing_parameter(method: &'static str, parameter: &str) -> Self {
        Self::MissingParameter {
            method,
            parameter: parameter.to_string(),
        }
    }

    pub fn invalid_value(parameter: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        Self::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised while interpreting a response document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The document is not well-formed XML
    #[error("Malformed response document: {0}")]
    Malformed(String),

    #[error("Unexpected root element <{0}>, expected <lfm>")]
    UnexpectedRoot(String),

    #[error("Response root carries no status attribute")]
    MissingStatus,

    #[error("Unknown response status '{0}'")]
    UnknownStatus(String),

    #[error("Failed response carries no <error> element")]
    MissingErrorElement,

    #[error("Invalid error code '{0}'")]
    InvalidErrorCode(String),

    /// An element documented as required was absent or empty
    #[error("Missing required element <{0}>")]
    MissingElement(String),

    #[error("Element <{element}> has invalid value '{value}': {reason}")]
    InvalidValue {
        element: String,
        value: String,
        reason: String,
    },

    /// A parser was handed the facet of another capability
    #[error("Parser for the {expected} capability received a {found} facet")]
    WrongFacet {
        expected: Capability,
        found: Capability,
    },

    /// An entity declares a capability it exposes no facet for
    #[error("{entity} does not expose the {capability} capability")]
    FacetMismatch {
        entity: &'static str,
        capability: Capability,
    },
}

impl ParseError {
    pub fn invalid_value(element: &str, value: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            element: element.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Registry wiring errors, raised at initialization only
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{entity} declares the {capability} capability but no parser is registered for it")]
    MissingParser {
        entity: &'static str,
        capability: Capability,
    },

    #[error("A parser for the {0} capability is already registered")]
    DuplicateParser(Capability),
}

/// Well-known service error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidService,
    InvalidMethod,
    AuthenticationFailed,
    InvalidParameters,
    OperationFailed,
    InvalidSessionKey,
    InvalidApiKey,
    ServiceOffline,
    InvalidMethodSignature,
    TemporaryError,
    SuspendedApiKey,
    RateLimitExceeded,
    Other(u32),
}

impl ErrorCode {
    pub fn from_code(code: u32) -> Self {
        match code {
            2 => ErrorCode::InvalidService,
            3 => ErrorCode::InvalidMethod,
            4 => ErrorCode::AuthenticationFailed,
            6 => ErrorCode::InvalidParameters,
            8 => ErrorCode::OperationFailed,
            9 => ErrorCode::InvalidSessionKey,
            10 => ErrorCode::InvalidApiKey,
            11 => ErrorCode::ServiceOffline,
            13 => ErrorCode::InvalidMethodSignature,
            16 => ErrorCode::TemporaryError,
            26 => ErrorCode::SuspendedApiKey,
            29 => ErrorCode::RateLimitExceeded,
            other => ErrorCode::Other(other),
        }
    }

    /// The numeric code as sent by the service
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::InvalidService => 2,
            ErrorCode::InvalidMethod => 3,
            ErrorCode::AuthenticationFailed => 4,
            ErrorCode::InvalidParameters => 6,
            ErrorCode::OperationFailed => 8,
            ErrorCode::InvalidSessionKey => 9,
            ErrorCode::InvalidApiKey => 10,
            ErrorCode::ServiceOffline => 11,
            ErrorCode::InvalidMethodSignature => 13,
            ErrorCode::TemporaryError => 16,
            ErrorCode::SuspendedApiKey => 26,
            ErrorCode::RateLimitExceeded => 29,
            ErrorCode::Other(code) => *code,
        }
    }
}

/// Type alias for results that can return an [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
