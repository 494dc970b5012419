//! Organizations, the top-level tenant every other resource lives under.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `remote` or `local`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub disabled: bool,
}

impl Attributes for OrganizationAttributes {
    const TYPE: &'static str = "organization";
}

pub type Organization = Entity<OrganizationAttributes>;

/// Organization CRUD.
pub struct OrganizationService<'c> {
    client: &'c Client,
}

impl<'c> OrganizationService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, OrganizationAttributes> {
        Crud::new(self.client)
    }

    pub fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Organization>> {
        self.crud().list("organization", options)
    }

    pub fn get(&self, organization_id: &str) -> Result<Organization> {
        validate("organization_id", organization_id)?;
        self.crud().get(&format!("organization/{organization_id}"))
    }

    pub fn create(&self, organization: &Organization) -> Result<Organization> {
        self.crud().create("organization", organization)
    }

    pub fn update(&self, organization: &Organization) -> Result<Organization> {
        validate("organization_id", &organization.id)?;
        self.crud().update(&format!("organization/{}", organization.id), organization)
    }

    pub fn delete(&self, organization_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        self.crud().delete(&format!("organization/{organization_id}"))
    }
}
