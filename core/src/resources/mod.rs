//! Resource services.
//!
//! Each service validates its identifiers, parents first, then builds the
//! resource path and delegates to [`Crud`](crate::crud::Crud). Obtain them
//! from a [`Client`], e.g. `client.workspaces().list("org-1", None)`.

mod access;
mod agent;
mod collection;
mod history;
mod job;
mod module;
mod organization;
mod provider;
mod schedule;
mod ssh;
mod tag;
mod team;
mod team_token;
mod template;
mod variable;
mod vcs;
mod webhook;
mod workspace;
mod workspace_tag;

pub use access::{WorkspaceAccess, WorkspaceAccessAttributes, WorkspaceAccessService};
pub use agent::{Agent, AgentAttributes, AgentService};
pub use collection::{
    Collection, CollectionAttributes, CollectionItem, CollectionItemAttributes,
    CollectionItemService, CollectionReference, CollectionReferenceAttributes,
    CollectionReferenceService, CollectionService,
};
pub use history::{History, HistoryAttributes, HistoryService};
pub use job::{Job, JobAttributes, JobService, Step, StepAttributes, StepService};
pub use module::{Module, ModuleAttributes, ModuleService};
pub use organization::{Organization, OrganizationAttributes, OrganizationService};
pub use provider::{
    Provider, ProviderAttributes, ProviderService, ProviderVersion, ProviderVersionAttributes,
    ProviderVersionService,
};
pub use schedule::{Schedule, ScheduleAttributes, ScheduleService};
pub use ssh::{Ssh, SshAttributes, SshService};
pub use tag::{Tag, TagAttributes, TagService};
pub use team::{Team, TeamAttributes, TeamService};
pub use team_token::{TeamToken, TeamTokenService};
pub use template::{Template, TemplateAttributes, TemplateService};
pub use variable::{Variable, VariableAttributes, VariableService};
pub use vcs::{Vcs, VcsAttributes, VcsService};
pub use webhook::{
    Webhook, WebhookAttributes, WebhookEvent, WebhookEventAttributes, WebhookEventService,
    WebhookService,
};
pub use workspace::{Workspace, WorkspaceAttributes, WorkspaceService};
pub use workspace_tag::{WorkspaceTag, WorkspaceTagAttributes, WorkspaceTagService};

use crate::client::Client;

impl Client {
    pub fn organizations(&self) -> OrganizationService<'_> {
        OrganizationService::new(self)
    }

    pub fn workspaces(&self) -> WorkspaceService<'_> {
        WorkspaceService::new(self)
    }

    pub fn modules(&self) -> ModuleService<'_> {
        ModuleService::new(self)
    }

    pub fn jobs(&self) -> JobService<'_> {
        JobService::new(self)
    }

    pub fn steps(&self) -> StepService<'_> {
        StepService::new(self)
    }

    pub fn teams(&self) -> TeamService<'_> {
        TeamService::new(self)
    }

    /// Plain-JSON team token API.
    pub fn team_tokens(&self) -> TeamTokenService<'_> {
        TeamTokenService::new(self)
    }

    pub fn templates(&self) -> TemplateService<'_> {
        TemplateService::new(self)
    }

    pub fn tags(&self) -> TagService<'_> {
        TagService::new(self)
    }

    pub fn vcs(&self) -> VcsService<'_> {
        VcsService::new(self)
    }

    pub fn ssh_keys(&self) -> SshService<'_> {
        SshService::new(self)
    }

    pub fn agents(&self) -> AgentService<'_> {
        AgentService::new(self)
    }

    pub fn collections(&self) -> CollectionService<'_> {
        CollectionService::new(self)
    }

    pub fn collection_items(&self) -> CollectionItemService<'_> {
        CollectionItemService::new(self)
    }

    pub fn collection_references(&self) -> CollectionReferenceService<'_> {
        CollectionReferenceService::new(self)
    }

    pub fn providers(&self) -> ProviderService<'_> {
        ProviderService::new(self)
    }

    pub fn provider_versions(&self) -> ProviderVersionService<'_> {
        ProviderVersionService::new(self)
    }

    pub fn variables(&self) -> VariableService<'_> {
        VariableService::new(self)
    }

    pub fn workspace_tags(&self) -> WorkspaceTagService<'_> {
        WorkspaceTagService::new(self)
    }

    pub fn workspace_access(&self) -> WorkspaceAccessService<'_> {
        WorkspaceAccessService::new(self)
    }

    pub fn schedules(&self) -> ScheduleService<'_> {
        ScheduleService::new(self)
    }

    pub fn history(&self) -> HistoryService<'_> {
        HistoryService::new(self)
    }

    pub fn webhooks(&self) -> WebhookService<'_> {
        WebhookService::new(self)
    }

    pub fn webhook_events(&self) -> WebhookEventService<'_> {
        WebhookEventService::new(self)
    }
}
