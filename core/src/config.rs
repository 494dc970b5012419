//! Client configuration.
//!
//! A `Config` is assembled with builder-style `with_*` methods or read from
//! the environment, then handed to [`Client::new`](crate::Client::new),
//! which validates it and freezes it for the lifetime of the client.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("terrakube-client/", env!("CARGO_PKG_VERSION"));

const ENV_ENDPOINT: &str = "TERRAKUBE_ENDPOINT";
const ENV_TOKEN: &str = "TERRAKUBE_TOKEN";
const ENV_USER_AGENT: &str = "TERRAKUBE_USER_AGENT";
const ENV_INSECURE_TLS: &str = "TERRAKUBE_INSECURE_TLS";
const ENV_TIMEOUT_SECS: &str = "TERRAKUBE_TIMEOUT_SECS";

/// Connection settings for a [`Client`](crate::Client).
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint. `https://` is assumed when no scheme is given.
    pub endpoint: String,
    /// Bearer credential sent with every request.
    pub token: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Skip TLS certificate verification on the default transport.
    #[serde(default)]
    pub insecure_tls: bool,
    /// Whole-request timeout on the default transport. `None` leaves it to
    /// the caller's environment.
    #[serde(default, with = "optional_secs")]
    pub timeout: Option<Duration>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

mod optional_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        duration: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        duration.map(|d| d.as_secs()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("insecure_tls", &self.insecure_tls)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            token: String::new(),
            user_agent: default_user_agent(),
            insecure_tls: false,
            timeout: None,
        }
    }
}

impl Config {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `TERRAKUBE_ENDPOINT`: API endpoint
    /// - `TERRAKUBE_TOKEN`: bearer token
    /// - `TERRAKUBE_USER_AGENT`: optional `User-Agent` override
    /// - `TERRAKUBE_INSECURE_TLS`: `1`/`true` disables certificate checks
    /// - `TERRAKUBE_TIMEOUT_SECS`: optional request timeout in seconds
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint = lookup(ENV_ENDPOINT)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config(format!("{ENV_ENDPOINT} is not set")))?;
        let token = lookup(ENV_TOKEN)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config(format!("{ENV_TOKEN} is not set")))?;

        let mut config = Self::new(endpoint, token);
        if let Some(user_agent) = lookup(ENV_USER_AGENT).filter(|v| !v.is_empty()) {
            config.user_agent = user_agent;
        }
        if let Some(value) = lookup(ENV_INSECURE_TLS).filter(|v| !v.is_empty()) {
            config.insecure_tls = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(Error::config(format!(
                        "{ENV_INSECURE_TLS} must be true or false, got {value:?}"
                    )))
                }
            };
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            let secs: u64 = value.trim().parse().map_err(|_| {
                Error::config(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {value:?}"
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Builder-style method to set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Builder-style method to set the bearer token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Builder-style method to override the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builder-style method to toggle certificate verification
    #[must_use]
    pub fn with_insecure_tls(mut self, insecure: bool) -> Self {
        self.insecure_tls = insecure;
        self
    }

    /// Builder-style method to set the transport timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::config("endpoint is required"));
        }
        if self.token.trim().is_empty() {
            return Err(Error::config("token is required"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::config("user agent cannot be empty"));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(Error::config("timeout cannot be zero"));
        }
        self.base_url().map(|_| ())
    }

    /// Parse the endpoint into a base URL ending in `/`.
    pub fn base_url(&self) -> Result<Url> {
        let endpoint = self.endpoint.trim();
        let mut url = if endpoint.contains("://") {
            Url::parse(endpoint)?
        } else {
            Url::parse(&format!("https://{endpoint}"))?
        };
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "unsupported endpoint scheme {:?}",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}
