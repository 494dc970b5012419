use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceTagAttributes {
    /// Id of an organization [`Tag`](super::Tag).
    pub tag_id: String,
}

impl Attributes for WorkspaceTagAttributes {
    const TYPE: &'static str = "workspacetag";
}

pub type WorkspaceTag = Entity<WorkspaceTagAttributes>;

/// Tags attached to a workspace.
pub struct WorkspaceTagService<'c> {
    client: &'c Client,
}

impl<'c> WorkspaceTagService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, WorkspaceTagAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<WorkspaceTag>> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/workspace/{workspace_id}/workspaceTag"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        workspace_id: &str,
        workspace_tag_id: &str,
    ) -> Result<WorkspaceTag> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("workspace_tag_id", workspace_tag_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/workspace/{workspace_id}/workspaceTag/{workspace_tag_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        workspace_id: &str,
        workspace_tag: &WorkspaceTag,
    ) -> Result<WorkspaceTag> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/workspace/{workspace_id}/workspaceTag"),
            workspace_tag,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        workspace_id: &str,
        workspace_tag: &WorkspaceTag,
    ) -> Result<WorkspaceTag> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("workspace_tag_id", &workspace_tag.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{workspace_id}/workspaceTag/{}", workspace_tag.id),
            workspace_tag,
        )
    }

    pub fn delete(
        &self,
        organization_id: &str,
        workspace_id: &str,
        workspace_tag_id: &str,
    ) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("workspace_tag_id", workspace_tag_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/workspace/{workspace_id}/workspaceTag/{workspace_tag_id}"),
        )
    }
}
