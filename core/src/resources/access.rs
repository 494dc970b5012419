use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceAccessAttributes {
    /// Team name.
    pub name: String,
    pub manage_state: bool,
    pub manage_workspace: bool,
    pub manage_job: bool,
}

impl Attributes for WorkspaceAccessAttributes {
    const TYPE: &'static str = "access";
}

pub type WorkspaceAccess = Entity<WorkspaceAccessAttributes>;

/// Per-workspace team permissions.
pub struct WorkspaceAccessService<'c> {
    client: &'c Client,
}

impl<'c> WorkspaceAccessService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, WorkspaceAccessAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<WorkspaceAccess>> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/workspace/{workspace_id}/access"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        workspace_id: &str,
        access_id: &str,
    ) -> Result<WorkspaceAccess> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("access_id", access_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/workspace/{workspace_id}/access/{access_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        workspace_id: &str,
        access: &WorkspaceAccess,
    ) -> Result<WorkspaceAccess> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/workspace/{workspace_id}/access"),
            access,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        workspace_id: &str,
        access: &WorkspaceAccess,
    ) -> Result<WorkspaceAccess> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("access_id", &access.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{workspace_id}/access/{}", access.id),
            access,
        )
    }

    pub fn delete(&self, organization_id: &str, workspace_id: &str, access_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("access_id", access_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/workspace/{workspace_id}/access/{access_id}"),
        )
    }
}
