//! Team access tokens.
//!
//! This API lives outside `/api/v1/` and speaks plain JSON: bodies are bare
//! objects with no document envelope.

use serde::{Deserialize, Serialize};

use crate::client::{Client, ACCESS_TOKEN_PREFIX};
use crate::error::{Error, Result};
use crate::http::HttpMethod;
use crate::validate::validate;

/// A team token. `token` is only filled in on the value returned by
/// [`TeamTokenService::create`]; the server never returns it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamToken {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub description: String,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    /// Team the token acts as.
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Team token management.
pub struct TeamTokenService<'c> {
    client: &'c Client,
}

impl<'c> TeamTokenService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn path() -> String {
        format!("{ACCESS_TOKEN_PREFIX}teams")
    }

    pub fn list(&self) -> Result<Vec<TeamToken>> {
        let request = self
            .client
            .json_request::<()>(HttpMethod::Get, &Self::path(), None)?;
        Ok(self.client.execute_json(request)?.unwrap_or_default())
    }

    /// Issue a token for `token.group`, valid for the given days, hours and
    /// minutes.
    pub fn create(&self, token: &TeamToken) -> Result<TeamToken> {
        validate("group", &token.group)?;
        let request = self
            .client
            .json_request(HttpMethod::Post, &Self::path(), Some(token))?;
        let issued: TeamToken = self
            .client
            .execute_json(request)?
            .ok_or_else(|| Error::decode("empty response creating team token"))?;

        let mut created = token.clone();
        if !issued.id.is_empty() {
            created.id = issued.id;
        }
        created.token = issued.token;
        Ok(created)
    }

    pub fn delete(&self, team_token_id: &str) -> Result<()> {
        validate("team_token_id", team_token_id)?;
        let request = self.client.json_request::<()>(
            HttpMethod::Delete,
            &format!("{}/{team_token_id}", Self::path()),
            None,
        )?;
        self.client.execute(request)
    }
}
