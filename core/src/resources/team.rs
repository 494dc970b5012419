use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

/// Permission flags are always sent, so a revoked permission is an explicit `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamAttributes {
    /// Identity provider group name.
    pub name: String,
    pub manage_state: bool,
    pub manage_workspace: bool,
    pub manage_module: bool,
    pub manage_provider: bool,
    pub manage_vcs: bool,
    pub manage_template: bool,
    pub manage_collection: bool,
    pub manage_job: bool,
}

impl Attributes for TeamAttributes {
    const TYPE: &'static str = "team";
}

pub type Team = Entity<TeamAttributes>;

/// Teams and their organization-wide permissions.
pub struct TeamService<'c> {
    client: &'c Client,
}

impl<'c> TeamService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, TeamAttributes> {
        Crud::new(self.client)
    }

    pub fn list(&self, organization_id: &str, options: Option<&ListOptions>) -> Result<Vec<Team>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/team"), options)
    }

    pub fn get(&self, organization_id: &str, team_id: &str) -> Result<Team> {
        validate("organization_id", organization_id)?;
        validate("team_id", team_id)?;
        self.crud().get(&format!("organization/{organization_id}/team/{team_id}"))
    }

    pub fn create(&self, organization_id: &str, team: &Team) -> Result<Team> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/team"), team)
    }

    pub fn update(&self, organization_id: &str, team: &Team) -> Result<Team> {
        validate("organization_id", organization_id)?;
        validate("team_id", &team.id)?;
        self.crud().update(&format!("organization/{organization_id}/team/{}", team.id), team)
    }

    pub fn delete(&self, organization_id: &str, team_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("team_id", team_id)?;
        self.crud().delete(&format!("organization/{organization_id}/team/{team_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jsonapi::{encode_document, FromDocument};

    #[test]
    fn revoked_permissions_stay_on_the_wire() {
        let team = Team::new(TeamAttributes {
            name: "ops".to_string(),
            manage_workspace: true,
            ..Default::default()
        });
        let body: serde_json::Value =
            serde_json::from_str(&encode_document(&team).unwrap()).unwrap();
        let attributes = body["data"]["attributes"].as_object().unwrap();
        for key in [
            "manageState",
            "manageModule",
            "manageProvider",
            "manageVcs",
            "manageTemplate",
            "manageCollection",
            "manageJob",
        ] {
            assert_eq!(attributes.get(key), Some(&serde_json::Value::Bool(false)), "{key}");
        }
        assert_eq!(attributes["manageWorkspace"], true);

        let back = Team::from_document(&encode_document(&team).unwrap()).unwrap();
        assert_eq!(back, team);
    }
}
