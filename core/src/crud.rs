//! Generic List/Get/Create/Update/Delete over one resource kind.
//!
//! Resource services validate their identifiers, format the path, and
//! delegate here. Paths are relative to `/api/v1/`.

use std::marker::PhantomData;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::http::HttpMethod;
use crate::jsonapi::{Attributes, Entity};

/// Options for list calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Filter expression passed through verbatim as `filter[<type>]`.
    pub filter: Option<String>,
}

impl ListOptions {
    pub fn filter(expression: impl Into<String>) -> Self {
        Self {
            filter: Some(expression.into()),
        }
    }

    fn query<A: Attributes>(options: Option<&Self>) -> Vec<(String, String)> {
        options
            .and_then(|o| o.filter.as_deref())
            .filter(|f| !f.is_empty())
            .map(|f| vec![(format!("filter[{}]", A::TYPE), f.to_string())])
            .unwrap_or_default()
    }
}

/// CRUD calls for entities with attributes `A`.
pub struct Crud<'c, A> {
    client: &'c Client,
    _attributes: PhantomData<fn() -> A>,
}

impl<'c, A: Attributes> Crud<'c, A> {
    pub fn new(client: &'c Client) -> Self {
        Self {
            client,
            _attributes: PhantomData,
        }
    }

    pub fn list(&self, path: &str, options: Option<&ListOptions>) -> Result<Vec<Entity<A>>> {
        let query = ListOptions::query::<A>(options);
        let request = self
            .client
            .document_request::<A>(HttpMethod::Get, path, query, None)?;
        Ok(self.client.execute_document(request)?.unwrap_or_default())
    }

    pub fn get(&self, path: &str) -> Result<Entity<A>> {
        let request = self
            .client
            .document_request::<A>(HttpMethod::Get, path, Vec::new(), None)?;
        self.client
            .execute_document(request)?
            .ok_or_else(|| Error::decode(format!("empty response for {} {path}", A::TYPE)))
    }

    pub fn create(&self, path: &str, entity: &Entity<A>) -> Result<Entity<A>> {
        let request =
            self.client
                .document_request(HttpMethod::Post, path, Vec::new(), Some(entity))?;
        self.client
            .execute_document(request)?
            .ok_or_else(|| Error::decode(format!("empty response creating {}", A::TYPE)))
    }

    /// Send `entity` as a PATCH. A `204 No Content` answer yields `entity`
    /// unchanged.
    pub fn update(&self, path: &str, entity: &Entity<A>) -> Result<Entity<A>> {
        let request =
            self.client
                .document_request(HttpMethod::Patch, path, Vec::new(), Some(entity))?;
        Ok(self
            .client
            .execute_document(request)?
            .unwrap_or_else(|| entity.clone()))
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        let request = self
            .client
            .document_request::<A>(HttpMethod::Delete, path, Vec::new(), None)?;
        self.client.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{JobAttributes, Job};
    use crate::testing::{client, FakeTransport};

    const JOB: &str = r#"{"data":{"type":"job","id":"job-1","attributes":{"command":"plan","status":"pending"}}}"#;

    #[test]
    fn filter_is_added_once() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"data":[]}"#);
        let client = client(transport.clone());
        let jobs = Crud::<JobAttributes>::new(&client)
            .list("organization/o/job", Some(&ListOptions::filter("status==pending")))
            .unwrap();
        assert!(jobs.is_empty());
        let req = transport.last_request();
        assert_eq!(
            req.query,
            vec![("filter[job]".to_string(), "status==pending".to_string())]
        );
    }

    #[test]
    fn empty_filter_is_omitted() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"data":[]}"#);
        transport.respond(200, r#"{"data":[]}"#);
        let client = client(transport.clone());
        let crud = Crud::<JobAttributes>::new(&client);
        crud.list("organization/o/job", Some(&ListOptions::filter(""))).unwrap();
        crud.list("organization/o/job", None).unwrap();
        assert!(transport.requests().iter().all(|r| r.query.is_empty()));
    }

    #[test]
    fn list_with_empty_body_is_empty() {
        let transport = FakeTransport::new();
        transport.respond(200, "");
        let client = client(transport);
        let jobs = Crud::<JobAttributes>::new(&client).list("organization/o/job", None).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn update_with_no_content_returns_input() {
        let transport = FakeTransport::new();
        transport.respond(204, "");
        let client = client(transport.clone());
        let job = Job::new(JobAttributes {
            command: "apply".to_string(),
            ..Default::default()
        })
        .with_id("job-1");
        let updated = Crud::new(&client).update("organization/o/job/job-1", &job).unwrap();
        assert_eq!(updated, job);
        assert_eq!(transport.last_request().method, HttpMethod::Patch);
    }

    #[test]
    fn update_decodes_returned_document() {
        let transport = FakeTransport::new();
        transport.respond(200, JOB);
        let client = client(transport);
        let job = Job::new(JobAttributes::default()).with_id("job-1");
        let updated = Crud::new(&client).update("organization/o/job/job-1", &job).unwrap();
        assert_eq!(updated.attributes.command, "plan");
    }

    #[test]
    fn get_with_empty_body_is_decode_error() {
        let transport = FakeTransport::new();
        transport.respond(200, "");
        let client = client(transport);
        let err = Crud::<JobAttributes>::new(&client)
            .get("organization/o/job/job-1")
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn create_posts_and_accepts_201() {
        let transport = FakeTransport::new();
        transport.respond(201, JOB);
        let client = client(transport.clone());
        let created = Crud::new(&client)
            .create("organization/o/job", &Job::new(JobAttributes::default()))
            .unwrap();
        assert_eq!(created.id, "job-1");
        let req = transport.last_request();
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.body.is_some());
    }
}
