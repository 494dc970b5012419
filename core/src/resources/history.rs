use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<String>,
    /// Location of the stored state file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub serial: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineage: Option<String>,
}

impl Attributes for HistoryAttributes {
    const TYPE: &'static str = "history";
}

pub type History = Entity<HistoryAttributes>;

/// State history of a workspace.
pub struct HistoryService<'c> {
    client: &'c Client,
}

impl<'c> HistoryService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, HistoryAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<History>> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/workspace/{workspace_id}/history"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        workspace_id: &str,
        history_id: &str,
    ) -> Result<History> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("history_id", history_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/workspace/{workspace_id}/history/{history_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        workspace_id: &str,
        history: &History,
    ) -> Result<History> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/workspace/{workspace_id}/history"),
            history,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        workspace_id: &str,
        history: &History,
    ) -> Result<History> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("history_id", &history.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{workspace_id}/history/{}", history.id),
            history,
        )
    }

    pub fn delete(
        &self,
        organization_id: &str,
        workspace_id: &str,
        history_id: &str,
    ) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("history_id", history_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/workspace/{workspace_id}/history/{history_id}"),
        )
    }
}
