use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableAttributes {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `TERRAFORM` or `ENV`.
    pub category: String,
    pub sensitive: bool,
    pub hcl: bool,
}

impl Attributes for VariableAttributes {
    const TYPE: &'static str = "variable";
}

pub type Variable = Entity<VariableAttributes>;

/// Workspace variables.
pub struct VariableService<'c> {
    client: &'c Client,
}

impl<'c> VariableService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, VariableAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Variable>> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/workspace/{workspace_id}/variable"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        workspace_id: &str,
        variable_id: &str,
    ) -> Result<Variable> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("variable_id", variable_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/workspace/{workspace_id}/variable/{variable_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        workspace_id: &str,
        variable: &Variable,
    ) -> Result<Variable> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/workspace/{workspace_id}/variable"),
            variable,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        workspace_id: &str,
        variable: &Variable,
    ) -> Result<Variable> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("variable_id", &variable.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{workspace_id}/variable/{}", variable.id),
            variable,
        )
    }

    pub fn delete(
        &self,
        organization_id: &str,
        workspace_id: &str,
        variable_id: &str,
    ) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("variable_id", variable_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/workspace/{workspace_id}/variable/{variable_id}"),
        )
    }
}
