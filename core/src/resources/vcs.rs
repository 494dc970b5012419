//! VCS provider connections.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VcsAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `GITHUB`, `GITLAB`, `BITBUCKET` or `AZURE_DEVOPS`.
    pub vcs_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Attributes for VcsAttributes {
    const TYPE: &'static str = "vcs";
}

pub type Vcs = Entity<VcsAttributes>;

/// VCS connections of an organization.
pub struct VcsService<'c> {
    client: &'c Client,
}

impl<'c> VcsService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, VcsAttributes> {
        Crud::new(self.client)
    }

    pub fn list(&self, organization_id: &str, options: Option<&ListOptions>) -> Result<Vec<Vcs>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/vcs"), options)
    }

    pub fn get(&self, organization_id: &str, vcs_id: &str) -> Result<Vcs> {
        validate("organization_id", organization_id)?;
        validate("vcs_id", vcs_id)?;
        self.crud().get(&format!("organization/{organization_id}/vcs/{vcs_id}"))
    }

    pub fn create(&self, organization_id: &str, vcs: &Vcs) -> Result<Vcs> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/vcs"), vcs)
    }

    pub fn update(&self, organization_id: &str, vcs: &Vcs) -> Result<Vcs> {
        validate("organization_id", organization_id)?;
        validate("vcs_id", &vcs.id)?;
        self.crud().update(&format!("organization/{organization_id}/vcs/{}", vcs.id), vcs)
    }

    pub fn delete(&self, organization_id: &str, vcs_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("vcs_id", vcs_id)?;
        self.crud().delete(&format!("organization/{organization_id}/vcs/{vcs_id}"))
    }
}
