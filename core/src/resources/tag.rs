use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagAttributes {
    pub name: String,
}

impl Attributes for TagAttributes {
    const TYPE: &'static str = "tag";
}

pub type Tag = Entity<TagAttributes>;

/// Organization tags.
pub struct TagService<'c> {
    client: &'c Client,
}

impl<'c> TagService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, TagAttributes> {
        Crud::new(self.client)
    }

    pub fn list(&self, organization_id: &str, options: Option<&ListOptions>) -> Result<Vec<Tag>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/tag"), options)
    }

    pub fn get(&self, organization_id: &str, tag_id: &str) -> Result<Tag> {
        validate("organization_id", organization_id)?;
        validate("tag_id", tag_id)?;
        self.crud().get(&format!("organization/{organization_id}/tag/{tag_id}"))
    }

    pub fn create(&self, organization_id: &str, tag: &Tag) -> Result<Tag> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/tag"), tag)
    }

    pub fn update(&self, organization_id: &str, tag: &Tag) -> Result<Tag> {
        validate("organization_id", organization_id)?;
        validate("tag_id", &tag.id)?;
        self.crud().update(&format!("organization/{organization_id}/tag/{}", tag.id), tag)
    }

    pub fn delete(&self, organization_id: &str, tag_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("tag_id", tag_id)?;
        self.crud().delete(&format!("organization/{organization_id}/tag/{tag_id}"))
    }
}
