use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
}

impl Attributes for AgentAttributes {
    const TYPE: &'static str = "agent";
}

pub type Agent = Entity<AgentAttributes>;

/// Executor agents registered with an organization.
pub struct AgentService<'c> {
    client: &'c Client,
}

impl<'c> AgentService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, AgentAttributes> {
        Crud::new(self.client)
    }

    pub fn list(&self, organization_id: &str, options: Option<&ListOptions>) -> Result<Vec<Agent>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/agent"), options)
    }

    pub fn get(&self, organization_id: &str, agent_id: &str) -> Result<Agent> {
        validate("organization_id", organization_id)?;
        validate("agent_id", agent_id)?;
        self.crud().get(&format!("organization/{organization_id}/agent/{agent_id}"))
    }

    pub fn create(&self, organization_id: &str, agent: &Agent) -> Result<Agent> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/agent"), agent)
    }

    pub fn update(&self, organization_id: &str, agent: &Agent) -> Result<Agent> {
        validate("organization_id", organization_id)?;
        validate("agent_id", &agent.id)?;
        self.crud().update(&format!("organization/{organization_id}/agent/{}", agent.id), agent)
    }

    pub fn delete(&self, organization_id: &str, agent_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("agent_id", agent_id)?;
        self.crud().delete(&format!("organization/{organization_id}/agent/{agent_id}"))
    }
}
