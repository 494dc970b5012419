//! Private registry providers and their versions.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attributes for ProviderAttributes {
    const TYPE: &'static str = "provider";
}

pub type Provider = Entity<ProviderAttributes>;

/// Providers published in an organization's registry.
pub struct ProviderService<'c> {
    client: &'c Client,
}

impl<'c> ProviderService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, ProviderAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Provider>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/provider"), options)
    }

    pub fn get(&self, organization_id: &str, provider_id: &str) -> Result<Provider> {
        validate("organization_id", organization_id)?;
        validate("provider_id", provider_id)?;
        self.crud().get(&format!("organization/{organization_id}/provider/{provider_id}"))
    }

    pub fn create(&self, organization_id: &str, provider: &Provider) -> Result<Provider> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/provider"), provider)
    }

    pub fn update(&self, organization_id: &str, provider: &Provider) -> Result<Provider> {
        validate("organization_id", organization_id)?;
        validate("provider_id", &provider.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/provider/{}", provider.id),
            provider,
        )
    }

    pub fn delete(&self, organization_id: &str, provider_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("provider_id", provider_id)?;
        self.crud().delete(&format!("organization/{organization_id}/provider/{provider_id}"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderVersionAttributes {
    pub version_number: String,
    /// Comma separated protocol versions, e.g. `5.0`.
    pub protocols: String,
}

impl Attributes for ProviderVersionAttributes {
    const TYPE: &'static str = "version";
}

pub type ProviderVersion = Entity<ProviderVersionAttributes>;

/// Versions of a registry provider.
pub struct ProviderVersionService<'c> {
    client: &'c Client,
}

impl<'c> ProviderVersionService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, ProviderVersionAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        provider_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<ProviderVersion>> {
        validate("organization_id", organization_id)?;
        validate("provider_id", provider_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/provider/{provider_id}/version"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        provider_id: &str,
        version_id: &str,
    ) -> Result<ProviderVersion> {
        validate("organization_id", organization_id)?;
        validate("provider_id", provider_id)?;
        validate("version_id", version_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/provider/{provider_id}/version/{version_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        provider_id: &str,
        version: &ProviderVersion,
    ) -> Result<ProviderVersion> {
        validate("organization_id", organization_id)?;
        validate("provider_id", provider_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/provider/{provider_id}/version"),
            version,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        provider_id: &str,
        version: &ProviderVersion,
    ) -> Result<ProviderVersion> {
        validate("organization_id", organization_id)?;
        validate("provider_id", provider_id)?;
        validate("version_id", &version.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/provider/{provider_id}/version/{}", version.id),
            version,
        )
    }

    pub fn delete(&self, organization_id: &str, provider_id: &str, version_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("provider_id", provider_id)?;
        validate("version_id", version_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/provider/{provider_id}/version/{version_id}"),
        )
    }
}
