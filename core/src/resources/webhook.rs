//! Workspace webhooks and the events that trigger them.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Hook id on the VCS provider side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_hook_id: Option<String>,
}

impl Attributes for WebhookAttributes {
    const TYPE: &'static str = "webhook";
}

pub type Webhook = Entity<WebhookAttributes>;

/// Webhooks registered on a workspace.
pub struct WebhookService<'c> {
    client: &'c Client,
}

impl<'c> WebhookService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, WebhookAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        workspace_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Webhook>> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook_id: &str,
    ) -> Result<Webhook> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", webhook_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{webhook_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook: &Webhook,
    ) -> Result<Webhook> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook"),
            webhook,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook: &Webhook,
    ) -> Result<Webhook> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", &webhook.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{}", webhook.id),
            webhook,
        )
    }

    pub fn delete(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook_id: &str,
    ) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", webhook_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{webhook_id}"),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookEventAttributes {
    /// `PUSH`, `PULL_REQUEST` or `RELEASE`.
    pub event: String,
    pub branch: String,
    pub path: String,
    pub template_id: String,
    pub priority: i32,
}

impl Attributes for WebhookEventAttributes {
    const TYPE: &'static str = "webhook_event";
}

pub type WebhookEvent = Entity<WebhookEventAttributes>;

/// Events of a workspace webhook.
pub struct WebhookEventService<'c> {
    client: &'c Client,
}

impl<'c> WebhookEventService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, WebhookEventAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<WebhookEvent>> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", webhook_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{webhook_id}/events"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook_id: &str,
        webhook_event_id: &str,
    ) -> Result<WebhookEvent> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", webhook_id)?;
        validate("webhook_event_id", webhook_event_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{webhook_id}/events/{webhook_event_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook_id: &str,
        event: &WebhookEvent,
    ) -> Result<WebhookEvent> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", webhook_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{webhook_id}/events"),
            event,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook_id: &str,
        event: &WebhookEvent,
    ) -> Result<WebhookEvent> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", webhook_id)?;
        validate("webhook_event_id", &event.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{webhook_id}/events/{}", event.id),
            event,
        )
    }

    pub fn delete(
        &self,
        organization_id: &str,
        workspace_id: &str,
        webhook_id: &str,
        webhook_event_id: &str,
    ) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("workspace_id", workspace_id)?;
        validate("webhook_id", webhook_id)?;
        validate("webhook_event_id", webhook_event_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/workspace/{workspace_id}/webhook/{webhook_id}/events/{webhook_event_id}"),
        )
    }
}
