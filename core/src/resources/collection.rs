//! Variable collections, their items, and the workspaces referencing them.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Higher priorities win when collections overlap.
    pub priority: i32,
}

impl Attributes for CollectionAttributes {
    const TYPE: &'static str = "collection";
}

pub type Collection = Entity<CollectionAttributes>;

/// Variable collections of an organization.
pub struct CollectionService<'c> {
    client: &'c Client,
}

impl<'c> CollectionService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, CollectionAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Collection>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/collection"), options)
    }

    pub fn get(&self, organization_id: &str, collection_id: &str) -> Result<Collection> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        self.crud().get(&format!("organization/{organization_id}/collection/{collection_id}"))
    }

    pub fn create(&self, organization_id: &str, collection: &Collection) -> Result<Collection> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/collection"), collection)
    }

    pub fn update(&self, organization_id: &str, collection: &Collection) -> Result<Collection> {
        validate("organization_id", organization_id)?;
        validate("collection_id", &collection.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/collection/{}", collection.id),
            collection,
        )
    }

    pub fn delete(&self, organization_id: &str, collection_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        self.crud().delete(&format!("organization/{organization_id}/collection/{collection_id}"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionItemAttributes {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `TERRAFORM` or `ENV`.
    pub category: String,
    pub sensitive: bool,
    pub hcl: bool,
}

impl Attributes for CollectionItemAttributes {
    const TYPE: &'static str = "item";
}

pub type CollectionItem = Entity<CollectionItemAttributes>;

/// Items of a variable collection.
pub struct CollectionItemService<'c> {
    client: &'c Client,
}

impl<'c> CollectionItemService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, CollectionItemAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        collection_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<CollectionItem>> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/collection/{collection_id}/item"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        collection_id: &str,
        item_id: &str,
    ) -> Result<CollectionItem> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        validate("item_id", item_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/collection/{collection_id}/item/{item_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        collection_id: &str,
        item: &CollectionItem,
    ) -> Result<CollectionItem> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/collection/{collection_id}/item"),
            item,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        collection_id: &str,
        item: &CollectionItem,
    ) -> Result<CollectionItem> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        validate("item_id", &item.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/collection/{collection_id}/item/{}", item.id),
            item,
        )
    }

    pub fn delete(&self, organization_id: &str, collection_id: &str, item_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        validate("item_id", item_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/collection/{collection_id}/item/{item_id}"),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionReferenceAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attributes for CollectionReferenceAttributes {
    const TYPE: &'static str = "reference";
}

pub type CollectionReference = Entity<CollectionReferenceAttributes>;

impl CollectionReference {
    #[must_use]
    pub fn for_workspace(self, workspace_id: impl Into<String>) -> Self {
        self.with_relationship("workspace", "workspace", workspace_id)
    }

    pub fn workspace_id(&self) -> Option<&str> {
        self.related_id("workspace")
    }
}

/// Links between a collection and the workspaces that use it.
pub struct CollectionReferenceService<'c> {
    client: &'c Client,
}

impl<'c> CollectionReferenceService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, CollectionReferenceAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        collection_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<CollectionReference>> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        self.crud().list(
            &format!("organization/{organization_id}/collection/{collection_id}/reference"),
            options,
        )
    }

    pub fn get(
        &self,
        organization_id: &str,
        collection_id: &str,
        reference_id: &str,
    ) -> Result<CollectionReference> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        validate("reference_id", reference_id)?;
        self.crud().get(
            &format!("organization/{organization_id}/collection/{collection_id}/reference/{reference_id}"),
        )
    }

    pub fn create(
        &self,
        organization_id: &str,
        collection_id: &str,
        reference: &CollectionReference,
    ) -> Result<CollectionReference> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        self.crud().create(
            &format!("organization/{organization_id}/collection/{collection_id}/reference"),
            reference,
        )
    }

    pub fn update(
        &self,
        organization_id: &str,
        collection_id: &str,
        reference: &CollectionReference,
    ) -> Result<CollectionReference> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        validate("reference_id", &reference.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/collection/{collection_id}/reference/{}", reference.id),
            reference,
        )
    }

    pub fn delete(
        &self,
        organization_id: &str,
        collection_id: &str,
        reference_id: &str,
    ) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("collection_id", collection_id)?;
        validate("reference_id", reference_id)?;
        self.crud().delete(
            &format!("organization/{organization_id}/collection/{collection_id}/reference/{reference_id}"),
        )
    }
}
