//! Workspaces.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Repository URL.
    pub source: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_reference: Option<String>,
    /// `terraform` or `tofu`.
    pub iac_type: String,
    pub terraform_version: String,
    pub execution_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_ssh_key: Option<String>,
    pub deleted: bool,
    pub allow_remote_apply: bool,
    pub locked: bool,
}

impl Attributes for WorkspaceAttributes {
    const TYPE: &'static str = "workspace";
}

pub type Workspace = Entity<WorkspaceAttributes>;

impl Workspace {
    /// Link the workspace to a VCS connection.
    #[must_use]
    pub fn with_vcs(self, vcs_id: impl Into<String>) -> Self {
        self.with_relationship("vcs", "vcs", vcs_id)
    }

    /// Link the workspace to an SSH key.
    #[must_use]
    pub fn with_ssh(self, ssh_id: impl Into<String>) -> Self {
        self.with_relationship("ssh", "ssh", ssh_id)
    }

    #[must_use]
    pub fn with_agent(self, agent_id: impl Into<String>) -> Self {
        self.with_relationship("agent", "agent", agent_id)
    }
}

/// Workspaces of an organization.
pub struct WorkspaceService<'c> {
    client: &'c Client,
}

impl<'c> WorkspaceService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, WorkspaceAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Workspace>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/workspace"), options)
    }

    pub fn get(&self, organization_id: &str, workspace_id: &str) -> Result<Workspace> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().get(&format!("organization/{organization_id}/workspace/{workspace_id}"))
    }

    pub fn create(&self, organization_id: &str, workspace: &Workspace) -> Result<Workspace> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/workspace"), workspace)
    }

    pub fn update(&self, organization_id: &str, workspace: &Workspace) -> Result<Workspace> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", &workspace.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{}", workspace.id),
            workspace,
        )
    }

    pub fn delete(&self, organization_id: &str, workspace_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().delete(&format!("organization/{organization_id}/workspace/{workspace_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client, FakeTransport};

    #[test]
    fn create_links_vcs() {
        let transport = FakeTransport::new();
        transport.respond(
            201,
            r#"{"data":{"type":"workspace","id":"ws-1","attributes":{"name":"network","source":"https://github.com/acme/network.git","branch":"main","iacType":"terraform","terraformVersion":"1.5.7","executionMode":"remote","deleted":false}}}"#,
        );
        let client = client(transport.clone());

        let workspace = Workspace::new(WorkspaceAttributes {
            name: "network".to_string(),
            source: "https://github.com/acme/network.git".to_string(),
            branch: "main".to_string(),
            iac_type: "terraform".to_string(),
            terraform_version: "1.5.7".to_string(),
            execution_mode: "remote".to_string(),
            ..Default::default()
        })
        .with_vcs("vcs-1");
        let created = client.workspaces().create("org-1", &workspace).unwrap();
        assert_eq!(created.id, "ws-1");
        assert_eq!(created.attributes.terraform_version, "1.5.7");

        let req = transport.last_request();
        assert_eq!(req.path, "/api/v1/organization/org-1/workspace");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        let attributes = &body["data"]["attributes"];
        assert_eq!(attributes["iacType"], "terraform");
        assert_eq!(attributes["allowRemoteApply"], false);
        assert_eq!(attributes["locked"], false);
        assert_eq!(body["data"]["relationships"]["vcs"]["data"]["type"], "vcs");
    }

    #[test]
    fn wrong_resource_type_is_decode_error() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"data":{"type":"module","id":"m-1","attributes":{}}}"#);
        let client = client(transport);
        let err = client.workspaces().get("org-1", "m-1").unwrap_err();
        assert!(err.is_decode());
    }
}
