//! Typed client for the Terrakube API.
//!
//! # Overview
//! Every resource kind (organizations, workspaces, jobs, variables, ...) is
//! reached through a thin service obtained from [`Client`]. Services check
//! their path identifiers and hand off to one generic CRUD adapter, which
//! builds an authenticated JSON:API request, performs a single blocking round
//! trip, and classifies the response.
//!
//! ```no_run
//! use terrakube_client::{Client, Config, ListOptions};
//!
//! fn main() -> terrakube_client::Result<()> {
//!     let client = Client::new(Config::new("terrakube.example.com", "token"))?;
//!     let job = client.jobs().get("org-1", "job-1")?;
//!     println!("{} is {}", job.attributes.command, job.attributes.status);
//!
//!     let running = client
//!         .jobs()
//!         .list("org-1", Some(&ListOptions::filter("status==running")))?;
//!     println!("{} running", running.len());
//!     Ok(())
//! }
//! ```
//!
//! # Design
//! - `Client` is immutable and cheap to clone; requests carry no shared
//!   mutable state, so one client can be used from many threads.
//! - Nothing is retried or logged as an error; every failure is returned as
//!   an [`Error`] whose kind is checked with the `is_*` helpers.
//! - Attribute structs are the wire schema. Booleans are always serialized;
//!   `Option` fields are omitted when `None`.

pub mod client;
pub mod config;
pub mod crud;
pub mod error;
pub mod http;
pub mod jsonapi;
pub mod resources;
pub mod transport;
pub mod validate;

#[cfg(test)]
mod testing;

pub use client::Client;
pub use config::Config;
pub use crud::{Crud, ListOptions};
pub use error::{ApiError, Error, ErrorObject, Result};
pub use http::{Encoding, HttpMethod, HttpRequest, HttpResponse};
pub use jsonapi::{Attributes, Entity, Relationship, RelationshipData, ResourceIdentifier};
pub use resources::*;
pub use transport::{Transport, UreqTransport};
pub use validate::validate;
