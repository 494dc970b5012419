//! Jobs and the steps they run.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobAttributes {
    /// Terraform command, e.g. `plan` or `apply`.
    pub command: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_team: Option<String>,
    pub refresh: bool,
    pub refresh_only: bool,
    pub plan_changes: bool,
}

impl Attributes for JobAttributes {
    const TYPE: &'static str = "job";
}

pub type Job = Entity<JobAttributes>;

impl Job {
    /// Target the job at a workspace.
    #[must_use]
    pub fn for_workspace(self, workspace_id: impl Into<String>) -> Self {
        self.with_relationship("workspace", "workspace", workspace_id)
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.related_id("workspace")
    }
}

/// Jobs of an organization.
pub struct JobService<'c> {
    client: &'c Client,
}

impl<'c> JobService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, JobAttributes> {
        Crud::new(self.client)
    }

    pub fn list(&self, organization_id: &str, options: Option<&ListOptions>) -> Result<Vec<Job>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/job"), options)
    }

    pub fn get(&self, organization_id: &str, job_id: &str) -> Result<Job> {
        validate("organization_id", organization_id)?;
        validate("job_id", job_id)?;
        self.crud().get(&format!("organization/{organization_id}/job/{job_id}"))
    }

    pub fn create(&self, organization_id: &str, job: &Job) -> Result<Job> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/job"), job)
    }

    pub fn update(&self, organization_id: &str, job: &Job) -> Result<Job> {
        validate("organization_id", organization_id)?;
        validate("job_id", &job.id)?;
        self.crud().update(&format!("organization/{organization_id}/job/{}", job.id), job)
    }

    pub fn delete(&self, organization_id: &str, job_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("job_id", job_id)?;
        self.crud().delete(&format!("organization/{organization_id}/job/{job_id}"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepAttributes {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub step_number: i32,
}

impl Attributes for StepAttributes {
    const TYPE: &'static str = "step";
}

pub type Step = Entity<StepAttributes>;

/// Steps of a job.
pub struct StepService<'c> {
    client: &'c Client,
}

impl<'c> StepService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, StepAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        job_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Step>> {
        validate("organization_id", organization_id)?;
        validate("job_id", job_id)?;
        self.crud().list(&format!("organization/{organization_id}/job/{job_id}/step"), options)
    }

    pub fn get(&self, organization_id: &str, job_id: &str, step_id: &str) -> Result<Step> {
        validate("organization_id", organization_id)?;
        validate("job_id", job_id)?;
        validate("step_id", step_id)?;
        self.crud().get(&format!("organization/{organization_id}/job/{job_id}/step/{step_id}"))
    }

    pub fn create(&self, organization_id: &str, job_id: &str, step: &Step) -> Result<Step> {
        validate("organization_id", organization_id)?;
        validate("job_id", job_id)?;
        self.crud().create(&format!("organization/{organization_id}/job/{job_id}/step"), step)
    }

    pub fn update(&self, organization_id: &str, job_id: &str, step: &Step) -> Result<Step> {
        validate("organization_id", organization_id)?;
        validate("job_id", job_id)?;
        validate("step_id", &step.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/job/{job_id}/step/{}", step.id),
            step,
        )
    }

    pub fn delete(&self, organization_id: &str, job_id: &str, step_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("job_id", job_id)?;
        validate("step_id", step_id)?;
        self.crud().delete(&format!("organization/{organization_id}/job/{job_id}/step/{step_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::{client, FakeTransport};

    #[test]
    fn get_decodes_job() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"data":{"type":"job","id":"job-1","attributes":{"command":"terraform apply","status":"completed"}}}"#,
        );
        let client = client(transport.clone());

        let job = client.jobs().get("org-1", "job-1").unwrap();
        assert_eq!(job.id, "job-1");
        assert_eq!(job.attributes.command, "terraform apply");
        assert_eq!(job.attributes.status, "completed");

        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/api/v1/organization/org-1/job/job-1");
    }

    #[test]
    fn delete_accepts_no_content() {
        let transport = FakeTransport::new();
        transport.respond(204, "");
        let client = client(transport.clone());

        client.jobs().delete("org-1", "job-1").unwrap();
        assert_eq!(transport.last_request().method, HttpMethod::Delete);
    }

    #[test]
    fn empty_ids_never_reach_the_transport() {
        let transport = FakeTransport::new();
        let client = client(transport.clone());
        let jobs = client.jobs();

        let err = jobs.get("", "job-1").unwrap_err();
        assert!(matches!(err, crate::Error::Validation { ref field, .. } if field == "organization_id"));
        let err = jobs.get("org-1", "").unwrap_err();
        assert!(matches!(err, crate::Error::Validation { ref field, .. } if field == "job_id"));
        let err = jobs.update("org-1", &Job::new(JobAttributes::default())).unwrap_err();
        assert!(matches!(err, crate::Error::Validation { ref field, .. } if field == "job_id"));
        assert!(jobs.list("", None).unwrap_err().is_validation());
        assert!(jobs.delete("org-1", "").unwrap_err().is_validation());

        let err = client.steps().list("org-1", "", None).unwrap_err();
        assert!(matches!(err, crate::Error::Validation { ref field, .. } if field == "job_id"));

        assert!(transport.requests().is_empty());
    }

    #[test]
    fn ids_cannot_escape_their_path_segment() {
        let transport = FakeTransport::new();
        let client = client(transport.clone());
        let jobs = client.jobs();

        for id in ["..", ".", "job-1/../..", "job-1?x=1", "job-1#top"] {
            let err = jobs.delete("org-1", id).unwrap_err();
            assert!(
                matches!(err, crate::Error::Validation { ref field, .. } if field == "job_id"),
                "{id:?}: {err:?}"
            );
        }
        let err = jobs.delete("..", "job-1").unwrap_err();
        assert!(matches!(err, crate::Error::Validation { ref field, .. } if field == "organization_id"));
        let err = jobs
            .update("org-1", &Job::new(JobAttributes::default()).with_id(".."))
            .unwrap_err();
        assert!(err.is_validation());

        assert!(transport.requests().is_empty());
    }

    #[test]
    fn create_sends_workspace_relationship() {
        let transport = FakeTransport::new();
        transport.respond(
            201,
            r#"{"data":{"type":"job","id":"job-7","attributes":{"command":"plan","status":"pending"},
                "relationships":{"workspace":{"data":{"type":"workspace","id":"ws-1"}}}}}"#,
        );
        let client = client(transport.clone());

        let job = Job::new(JobAttributes {
            command: "plan".to_string(),
            ..Default::default()
        })
        .for_workspace("ws-1");
        let created = client.jobs().create("org-1", &job).unwrap();
        assert_eq!(created.id, "job-7");
        assert_eq!(created.workspace_id(), Some("ws-1"));

        let req = transport.last_request();
        assert_eq!(req.path, "/api/v1/organization/org-1/job");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["data"]["relationships"]["workspace"]["data"]["id"], "ws-1");
        assert_eq!(body["data"]["attributes"]["refresh"], false);
        assert_eq!(body["data"]["attributes"]["refreshOnly"], false);
    }

    #[test]
    fn steps_are_nested_under_job() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"data":[{"type":"step","id":"s-1","attributes":{"name":"plan","status":"completed","stepNumber":100}}]}"#,
        );
        let client = client(transport.clone());

        let steps = client.steps().list("org-1", "job-1", None).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].attributes.step_number, 100);
        assert_eq!(transport.last_request().path, "/api/v1/organization/org-1/job/job-1/step");
    }

    #[test]
    fn missing_job_is_not_found() {
        let transport = FakeTransport::new();
        transport.respond(404, r#"{"errors":[{"detail":"Unknown identifier job-9 for job"}]}"#);
        let client = client(transport);

        let err = client.jobs().get("org-1", "job-9").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }
}
