//! One-shot remote calls
//!
//! A [`Query`] couples how to build a request (method, parameters, verb,
//! authentication) with how to read the answer (a transform from the
//! response content element to `T`). Factories in [`crate::methods`] return
//! queries that are already wired for one web service method; callers may add
//! parameters and then execute the query exactly once.

use std::fmt;

use http_client::{HttpMethod, HttpRequest, Transport};
use xmltree::Element;

use crate::config::ClientConfig;
use crate::envelope;
use crate::error::{Result, ValidationError};
use crate::params::{ParameterSet, ParameterValue};
use crate::signer::{self, SIGNATURE_PARAMETER};

pub const METHOD_PARAMETER: &str = "method";
pub const API_KEY_PARAMETER: &str = "api_key";
pub const SESSION_KEY_PARAMETER: &str = "sk";

/// Interprets the content element of a successful response
pub type Transform<T> = Box<dyn FnOnce(&Element) -> Result<T> + Send>;

/// Authentication a method requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Auth {
    /// Public method, only the API key is sent
    #[default]
    None,
    /// A session key (`sk`) must be supplied
    Session,
    /// A session key must be supplied and the request signed
    SignedSession,
}

impl Auth {
    pub fn requires_session(&self) -> bool {
        matches!(self, Auth::Session | Auth::SignedSession)
    }

    pub fn requires_signature(&self) -> bool {
        matches!(self, Auth::SignedSession)
    }
}

/// A single parameterized call returning `T`
pub struct Query<T> {
    method: &'static str,
    http_method: HttpMethod,
    auth: Auth,
    params: ParameterSet,
    required: Vec<&'static str>,
    transform: Transform<T>,
}

impl<T> Query<T> {
    pub fn new<F>(method: &'static str, http_method: HttpMethod, transform: F) -> Self
    where
        F: FnOnce(&Element) -> Result<T> + Send + 'static,
    {
        Self {
            method,
            http_method,
            auth: Auth::None,
            params: ParameterSet::new(),
            required: Vec::new(),
            transform: Box::new(transform),
        }
    }

    pub fn get<F>(method: &'static str, transform: F) -> Self
    where
        F: FnOnce(&Element) -> Result<T> + Send + 'static,
    {
        Self::new(method, HttpMethod::Get, transform)
    }

    pub fn post<F>(method: &'static str, transform: F) -> Self
    where
        F: FnOnce(&Element) -> Result<T> + Send + 'static,
    {
        Self::new(method, HttpMethod::Post, transform)
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Declare a parameter that must be present when the query executes
    pub fn require(mut self, name: &'static str) -> Self {
        if !self.required.contains(&name) {
            self.required.push(name);
        }
        self
    }

    /// Builder form of [`Self::add_parameter`]
    pub fn param(mut self, name: impl Into<String>, value: impl ParameterValue) -> Self {
        self.params.add(name, value);
        self
    }

    /// Add a parameter; absent values are ignored
    pub fn add_parameter(&mut self, name: impl Into<String>, value: impl ParameterValue) -> &mut Self {
        self.params.add(name, value);
        self
    }

    pub fn remove_parameter(&mut self, name: &str) -> Option<String> {
        self.params.remove(name)
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    pub fn auth(&self) -> Auth {
        self.auth
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Validate, sign and encode the request without sending it
    ///
    /// Fails with a [`ValidationError`] when a required parameter, the
    /// session key or the shared secret is missing.
    pub fn to_request(&self, config: &ClientConfig) -> Result<HttpRequest> {
        if let Some(missing) = self
            .required
            .iter()
            .find(|name| !self.params.contains(name))
        {
            return Err(ValidationError::missing_parameter(self.method, missing).into());
        }

        if self.auth.requires_session() && !self.params.contains(SESSION_KEY_PARAMETER) {
            return Err(ValidationError::missing_parameter(self.method, SESSION_KEY_PARAMETER).into());
        }

        let mut params = self.params.clone();
        params.remove(SIGNATURE_PARAMETER);
        params
            .add(METHOD_PARAMETER, self.method)
            .add(API_KEY_PARAMETER, config.api_key());

        if self.auth.requires_signature() {
            let secret = config
                .api_secret()
                .ok_or(ValidationError::MissingSecret {
                    method: self.method,
                })?;
            let signature = signer::sign(&params, secret);
            params.add(SIGNATURE_PARAMETER, signature);
        }

        let encoded = params.to_form_urlencoded();
        let request = match self.http_method {
            HttpMethod::Get => {
                let separator = if config.base_url().contains('?') { '&' } else { '?' };
                HttpRequest::get(format!("{}{}{}", config.base_url(), separator, encoded))
            }
            HttpMethod::Post => HttpRequest::post(config.base_url(), encoded),
        };

        Ok(request)
    }

    /// Send the query through `transport` and interpret the response
    ///
    /// Consumes the query: every query is executed at most once. Nothing is
    /// retried; validation failures happen before the transport is touched.
    pub fn execute<Tr>(self, transport: &Tr, config: &ClientConfig) -> Result<T>
    where
        Tr: Transport + ?Sized,
    {
        let request = self.to_request(config)?;

        tracing::debug!(
            method = self.method,
            verb = self.http_method.as_str(),
            signed = self.auth.requires_signature(),
            "executing query"
        );

        let raw = transport.send(&request)?;
        let content = envelope::parse(&raw)?;

        tracing::trace!(method = self.method, content = %content.name, "response accepted");
        (self.transform)(&content)
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Parameter values may hold session keys
        let names: Vec<&str> = self.params.sorted_pairs().map(|(name, _)| name).collect();
        f.debug_struct("Query")
            .field("method", &self.method)
            .field("http_method", &self.http_method)
            .field("auth", &self.auth)
            .field("parameters", &names)
            .field("required", &self.required)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use http_client::TransportError;
    use std::sync::Mutex;

    /// Answers every request with a canned document and keeps the requests
    struct CannedTransport {
        response: String,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for CannedTransport {
        fn send(&self, request: &HttpRequest) -> std::result::Result<String, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    fn name_query() -> Query<String> {
        Query::get("artist.getInfo", |element: &Element| {
            Ok(crate::xml::required_child_text(element, "name")?)
        })
    }

    fn config() -> ClientConfig {
        ClientConfig::new("key").with_secret("secret")
    }

    #[test]
    fn test_get_request_encodes_sorted_query_string() {
        let query = name_query().param("artist", "Cher").param("limit", 10u32);
        let request = query.to_request(&config()).unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url,
            "https://ws.audioscrobbler.com/2.0/?api_key=key&artist=Cher&limit=10&method=artist.getInfo"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_base_url_with_query_string() {
        let request = name_query()
            .to_request(&ClientConfig::new("key").with_base_url("http://localhost/2.0/?format=xml"))
            .unwrap();
        assert_eq!(
            request.url,
            "http://localhost/2.0/?format=xml&api_key=key&method=artist.getInfo"
        );
    }

    #[test]
    fn test_signed_post_request_carries_signature_in_body() {
        let query = Query::post("radio.tune", |_: &Element| Ok(()))
            .with_auth(Auth::SignedSession)
            .param("station", "lastfm://artist/Cher")
            .param("sk", "session");
        let request = query.to_request(&config()).unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://ws.audioscrobbler.com/2.0/");
        assert_eq!(
            request.body.as_deref(),
            Some(
                "api_key=key&api_sig=bf69c312754ceadeb7179e077b8a27b4&method=radio.tune\
                 &sk=session&station=lastfm%3A%2F%2Fartist%2FCher"
            )
        );
    }

    #[test]
    fn test_stale_signature_is_replaced() {
        let query = Query::post("radio.tune", |_: &Element| Ok(()))
            .with_auth(Auth::SignedSession)
            .param("station", "lastfm://artist/Cher")
            .param("sk", "session")
            .param("api_sig", "stale");
        let body = query.to_request(&config()).unwrap().body.unwrap();

        assert!(body.contains("api_sig=bf69c312754ceadeb7179e077b8a27b4"));
        assert!(!body.contains("stale"));
    }

    #[test]
    fn test_missing_session_key() {
        let query = Query::post("radio.tune", |_: &Element| Ok(())).with_auth(Auth::Session);
        let result = query.to_request(&config());

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingParameter { ref parameter, .. })) if parameter == "sk"
        ));
    }

    #[test]
    fn test_missing_secret_for_signed_method() {
        let query = Query::post("radio.tune", |_: &Element| Ok(()))
            .with_auth(Auth::SignedSession)
            .param("sk", "session");
        let result = query.to_request(&ClientConfig::new("key"));

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingSecret { method: "radio.tune" }))
        ));
    }

    #[test]
    fn test_declared_required_parameter() {
        let mut query = name_query().require("artist").param("artist", "Cher");
        assert!(query.to_request(&config()).is_ok());

        query.remove_parameter("artist");
        assert!(matches!(
            query.to_request(&config()),
            Err(Error::Validation(ValidationError::MissingParameter { ref parameter, .. })) if parameter == "artist"
        ));
    }

    #[test]
    fn test_execute_runs_transform_on_content() {
        let transport = CannedTransport::new(
            r#"<lfm status="ok"><artist><name>Cher</name></artist></lfm>"#,
        );
        let name = name_query()
            .param("artist", "Cher")
            .execute(&transport, &config())
            .unwrap();

        assert_eq!(name, "Cher");
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_transform_failure_is_parse_error() {
        let transport = CannedTransport::new(r#"<lfm status="ok"><artist/></lfm>"#);
        let result = name_query().execute(&transport, &config());

        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_debug_hides_parameter_values() {
        let query = name_query().param("sk", "secret-session");
        let rendered = format!("{:?}", query);
        assert!(rendered.contains("sk"));
        assert!(!rendered.contains("secret-session"));
    }
}
