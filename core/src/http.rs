//! HTTP request and response types exchanged with a [`Transport`].
//!
//! # Design
//! Requests and responses are plain data. The client builds a complete
//! `HttpRequest` (URL, query pairs, auth and content headers, serialized body)
//! before any I/O happens, hands it to a transport, and classifies the
//! returned `HttpResponse` itself. Transports never interpret status codes.
//!
//! [`Transport`]: crate::transport::Transport

use std::fmt;

/// Media type for JSON:API documents.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Media type for plain JSON bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body encoding used for a request and expected for its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// JSON:API compound documents (`application/vnd.api+json`).
    Document,
    /// Direct JSON objects with no envelope (`application/json`).
    Json,
}

impl Encoding {
    pub fn media_type(self) -> &'static str {
        match self {
            Encoding::Document => JSON_API_MEDIA_TYPE,
            Encoding::Json => JSON_MEDIA_TYPE,
        }
    }
}

/// An outgoing HTTP request described as plain data.
///
/// `url` carries no query string; query pairs live in `query` and are
/// appended by the transport. `path` is the URL path, kept for error
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_half_open() {
        let mut response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(response.is_success());
        response.status = 299;
        assert!(response.is_success());
        response.status = 300;
        assert!(!response.is_success());
        response.status = 199;
        assert!(!response.is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "https://example.com/api/v1/organization".to_string(),
            path: "/api/v1/organization".to_string(),
            query: Vec::new(),
            headers: vec![("Accept".to_string(), JSON_API_MEDIA_TYPE.to_string())],
            body: None,
        };
        assert_eq!(request.header("accept"), Some(JSON_API_MEDIA_TYPE));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn methods_render_uppercase() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
