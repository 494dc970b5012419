use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub provider: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,
    pub download_quantity: i64,
}

impl Attributes for ModuleAttributes {
    const TYPE: &'static str = "module";
}

pub type Module = Entity<ModuleAttributes>;

impl Module {
    #[must_use]
    pub fn with_vcs(self, vcs_id: impl Into<String>) -> Self {
        self.with_relationship("vcs", "vcs", vcs_id)
    }

    #[must_use]
    pub fn with_ssh(self, ssh_id: impl Into<String>) -> Self {
        self.with_relationship("ssh", "ssh", ssh_id)
    }
}

/// Private registry modules of an organization.
pub struct ModuleService<'c> {
    client: &'c Client,
}

impl<'c> ModuleService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, ModuleAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Module>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/module"), options)
    }

    pub fn get(&self, organization_id: &str, module_id: &str) -> Result<Module> {
        validate("organization_id", organization_id)?;
        validate("module_id", module_id)?;
        self.crud().get(&format!("organization/{organization_id}/module/{module_id}"))
    }

    pub fn create(&self, organization_id: &str, module: &Module) -> Result<Module> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/module"), module)
    }

    pub fn update(&self, organization_id: &str, module: &Module) -> Result<Module> {
        validate("organization_id", organization_id)?;
        validate("module_id", &module.id)?;
        self.crud().update(&format!("organization/{organization_id}/module/{}", module.id), module)
    }

    pub fn delete(&self, organization_id: &str, module_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("module_id", module_id)?;
        self.crud().delete(&format!("organization/{organization_id}/module/{module_id}"))
    }
}
