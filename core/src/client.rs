//! Authenticated request building and the response pipeline.
//!
//! # Design
//! `Client` holds only immutable state: the validated configuration, the
//! parsed base URL, and a shared transport. Every call builds its own
//! `HttpRequest`, performs one round trip, and runs the response through a
//! single classification routine:
//!
//! 1. status outside `[200, 300)` becomes [`Error::Api`] with the raw body
//!    and best-effort structured details;
//! 2. otherwise, when the caller expects a value and the body is not empty,
//!    the body is decoded by the shape of the expected value (one entity or
//!    a collection) and failures become [`Error::Decode`];
//! 3. calls that expect nothing never look at the body.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, Error, Result};
use crate::http::{Encoding, HttpMethod, HttpRequest, HttpResponse};
use crate::jsonapi::{encode_document, Attributes, Entity, FromDocument};
use crate::transport::{Transport, UreqTransport};

/// Path prefix of JSON:API resources.
pub const API_PREFIX: &str = "api/v1/";

/// Path prefix of the plain-JSON access token API.
pub const ACCESS_TOKEN_PREFIX: &str = "access-token/v1/";

/// Client for the Terrakube API.
///
/// Cheap to clone; clones share the configuration and transport.
#[derive(Clone)]
pub struct Client {
    config: Arc<Config>,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.config.user_agent)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client using the default `ureq` transport.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let transport = Arc::new(UreqTransport::new(&config));
        Self::with_transport(config, transport)
    }

    /// Create a client that sends requests through `transport`.
    ///
    /// `insecure_tls` and `timeout` only configure the default transport and
    /// are ignored here.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let base_url = config.base_url()?;
        Ok(Self {
            config: Arc::new(config),
            base_url,
            transport,
        })
    }

    /// Create a client from `TERRAKUBE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -------------------------------------------------------------------------
    // Request building
    // -------------------------------------------------------------------------

    /// Build a JSON:API request for `path` (relative to `/api/v1/`).
    pub fn document_request<A: Attributes>(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<&Entity<A>>,
    ) -> Result<HttpRequest> {
        let body = body
            .map(encode_document)
            .transpose()
            .map_err(Error::Encode)?;
        self.build_request(method, &format!("{API_PREFIX}{path}"), query, body, Encoding::Document)
    }

    /// Build a plain-JSON request for `path` (relative to the endpoint).
    pub fn json_request<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(Error::Encode)?;
        self.build_request(method, path, Vec::new(), body, Encoding::Json)
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<String>,
        encoding: Encoding,
    ) -> Result<HttpRequest> {
        let url = self.base_url.join(path)?;
        let media_type = encoding.media_type();

        let mut headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.config.token),
            ),
            ("User-Agent".to_string(), self.config.user_agent.clone()),
            ("Accept".to_string(), media_type.to_string()),
        ];
        if body.is_some() {
            headers.push(("Content-Type".to_string(), media_type.to_string()));
        }

        Ok(HttpRequest {
            method,
            path: url.path().to_string(),
            url: url.to_string(),
            query,
            headers,
            body,
        })
    }

    // -------------------------------------------------------------------------
    // Response pipeline
    // -------------------------------------------------------------------------

    /// Execute `request` and classify the response by status.
    pub fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(&request)?;
        debug!(
            method = %request.method,
            path = %request.path,
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );

        if !response.is_success() {
            return Err(ApiError::new(
                response.status,
                request.method,
                request.path,
                response.body,
            )
            .into());
        }
        Ok(response)
    }

    /// Execute `request`, ignoring any response body.
    pub fn execute(&self, request: HttpRequest) -> Result<()> {
        self.send(request).map(|_| ())
    }

    /// Execute `request` and decode a JSON:API document shaped like `T`.
    ///
    /// `Ok(None)` means the server answered 2xx with an empty body.
    pub fn execute_document<T: FromDocument>(&self, request: HttpRequest) -> Result<Option<T>> {
        let response = self.send(request)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        T::from_document(&response.body)
            .map(Some)
            .map_err(Error::Decode)
    }

    /// Execute `request` and decode a plain JSON body.
    pub fn execute_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<Option<T>> {
        let response = self.send(request)?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&response.body)
            .map(Some)
            .map_err(Error::Decode)
    }
}
