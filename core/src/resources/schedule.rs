use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleAttributes {
    /// Quartz cron expression.
    pub cron: String,
    pub template_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attributes for ScheduleAttributes {
    const TYPE: &'static str = "schedule";
}

pub type Schedule = Entity<ScheduleAttributes>;

/// Cron schedules that trigger workspace jobs.
pub struct ScheduleService<'c> {
    client: &'c Client,
}

impl<'c> ScheduleService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, ScheduleAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Schedule>> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/workspace/{workspace_id}/schedule"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        workspace_id: &str,
        schedule_id: &str,
    ) -> Result<Schedule> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("schedule_id", schedule_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/workspace/{workspace_id}/schedule/{schedule_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        workspace_id: &str,
        schedule: &Schedule,
    ) -> Result<Schedule> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/workspace/{workspace_id}/schedule"),
            schedule,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        workspace_id: &str,
        schedule: &Schedule,
    ) -> Result<Schedule> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("schedule_id", &schedule.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{workspace_id}/schedule/{}", schedule.id),
            schedule,
        )
    }

    pub fn delete(
        &self,
        organization_id: &str,
        workspace_id: &str,
        schedule_id: &str,
    ) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("schedule_id", schedule_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/workspace/{workspace_id}/schedule/{schedule_id}"),
        )
    }
}
