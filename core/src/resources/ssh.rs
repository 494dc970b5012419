use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SshAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub private_key: String,
    pub ssh_type: String,
}

impl Attributes for SshAttributes {
    const TYPE: &'static str = "ssh";
}

pub type Ssh = Entity<SshAttributes>;

/// SSH keys used to clone private sources.
pub struct SshService<'c> {
    client: &'c Client,
}

impl<'c> SshService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, SshAttributes> {
        Crud::new(self.client)
    }

    pub fn list(&self, organization_id: &str, options: Option<&ListOptions>) -> Result<Vec<Ssh>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/ssh"), options)
    }

    pub fn get(&self, organization_id: &str, ssh_id: &str) -> Result<Ssh> {
        validate("organization_id", organization_id)?;
        validate("ssh_id", ssh_id)?;
        self.crud().get(&format!("organization/{organization_id}/ssh/{ssh_id}"))
    }

    pub fn create(&self, organization_id: &str, ssh: &Ssh) -> Result<Ssh> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/ssh"), ssh)
    }

    pub fn update(&self, organization_id: &str, ssh: &Ssh) -> Result<Ssh> {
        validate("organization_id", organization_id)?;
        validate("ssh_id", &ssh.id)?;
        self.crud().update(&format!("organization/{organization_id}/ssh/{}", ssh.id), ssh)
    }

    pub fn delete(&self, organization_id: &str, ssh_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("ssh_id", ssh_id)?;
        self.crud().delete(&format!("organization/{organization_id}/ssh/{ssh_id}"))
    }
}
