//! Error types for the Terrakube API client.
//!
//! # Design
//! Failures fall into disjoint kinds: local validation of path identifiers,
//! local request construction (URL, encoding), transport failures, non-2xx
//! API responses, and successful responses whose payload cannot be decoded.
//! Callers branch on the kind with the `is_*` helpers instead of inspecting
//! messages.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::http::HttpMethod;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the client and every resource service.
#[derive(Error, Debug)]
pub enum Error {
    /// The client configuration is incomplete or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required identifier was empty. Raised before any request is built.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// The endpoint or a request path could not be turned into a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a status outside 2xx.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered 2xx but the payload was not understood.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub(crate) fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }

    pub(crate) fn decode(message: impl fmt::Display) -> Self {
        Self::Decode(<serde_json::Error as serde::de::Error>::custom(message))
    }

    /// HTTP status of an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// The underlying API error, if the server rejected the request.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True iff the server answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True iff the server answered 401.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True iff the server answered 403.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// True iff the server answered 409.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

/// A non-2xx response, with the raw body always preserved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub method: HttpMethod,
    pub path: String,
    pub body: String,
    /// Parsed `errors` array; empty when the body was not a JSON:API error
    /// document.
    pub errors: Vec<ErrorObject>,
}

impl ApiError {
    /// Build an API error, parsing structured details from `body` when
    /// possible.
    pub fn new(status: u16, method: HttpMethod, path: impl Into<String>, body: String) -> Self {
        let errors = serde_json::from_str::<ErrorDocument>(&body)
            .map(|doc| doc.errors)
            .unwrap_or_default();
        Self {
            status,
            method,
            path: path.into(),
            body,
            errors,
        }
    }

    /// First `detail` (or `title`) among the structured errors.
    pub fn detail(&self) -> Option<&str> {
        self.errors
            .iter()
            .find_map(|e| e.detail.as_deref().or(e.title.as_deref()))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: HTTP {}", self.method, self.path, self.status)?;
        match self.detail() {
            Some(detail) => write!(f, ": {detail}"),
            None if !self.body.is_empty() => write!(f, ": {}", self.body),
            None => Ok(()),
        }
    }
}

/// JSON:API error document: `{"errors": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDocument {
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

/// One entry of a JSON:API `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorObject {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub source: Option<ErrorSource>,
}

/// Where in the request an error originated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorSource {
    #[serde(default)]
    pub pointer: Option<String>,
    #[serde(default)]
    pub parameter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, body: &str) -> Error {
        Error::Api(ApiError::new(
            status,
            HttpMethod::Get,
            "/api/v1/organization/org-1",
            body.to_string(),
        ))
    }

    #[test]
    fn not_found_only_for_404() {
        assert!(api(404, "").is_not_found());
        assert!(!api(401, "").is_not_found());
        assert!(!api(500, "").is_not_found());
        assert!(!Error::validation("organization_id", "must not be empty").is_not_found());
    }

    #[test]
    fn unauthorized_and_forbidden_are_distinct() {
        assert!(api(401, "").is_unauthorized());
        assert!(!api(401, "").is_forbidden());
        assert!(api(403, "").is_forbidden());
        assert!(api(409, "").is_conflict());
    }

    #[test]
    fn structured_errors_are_parsed() {
        let err = ApiError::new(
            400,
            HttpMethod::Post,
            "/api/v1/organization",
            r#"{"errors":[{"detail":"name is required","status":"400"}]}"#.to_string(),
        );
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.detail(), Some("name is required"));
        assert_eq!(
            err.to_string(),
            "POST /api/v1/organization: HTTP 400: name is required"
        );
    }

    #[test]
    fn unparsable_error_body_is_kept_raw() {
        let err = ApiError::new(502, HttpMethod::Get, "/api/v1/organization", "bad gateway".to_string());
        assert!(err.errors.is_empty());
        assert_eq!(err.body, "bad gateway");
        assert_eq!(err.to_string(), "GET /api/v1/organization: HTTP 502: bad gateway");
    }

    #[test]
    fn kinds_are_disjoint() {
        let validation = Error::validation("job_id", "must not be empty");
        assert!(validation.is_validation());
        assert!(!validation.is_api());
        assert_eq!(validation.status(), None);
        assert_eq!(validation.to_string(), "invalid job_id: must not be empty");

        let decode = Error::decode("unexpected end of input");
        assert!(decode.is_decode());
        assert!(!decode.is_api());
    }
}
