use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::crud::{Crud, ListOptions};
use crate::error::Result;
use crate::jsonapi::{Attributes, Entity};
use crate::validate::validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateAttributes {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Base64 encoded template definition.
    pub tcl: String,
}

impl Attributes for TemplateAttributes {
    const TYPE: &'static str = "template";
}

pub type Template = Entity<TemplateAttributes>;

/// Job templates of an organization.
pub struct TemplateService<'c> {
    client: &'c Client,
}

impl<'c> TemplateService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    fn crud(&self) -> Crud<'c, TemplateAttributes> {
        Crud::new(self.client)
    }

    pub fn list(
        &self,
        organization_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<Template>> {
        validate("organization_id", organization_id)?;
        self.crud().list(&format!("organization/{organization_id}/template"), options)
    }

    pub fn get(&self, organization_id: &str, template_id: &str) -> Result<Template> {
        validate("organization_id", organization_id)?;
        validate("template_id", template_id)?;
        self.crud().get(&format!("organization/{organization_id}/template/{template_id}"))
    }

    pub fn create(&self, organization_id: &str, template: &Template) -> Result<Template> {
        validate("organization_id", organization_id)?;
        self.crud().create(&format!("organization/{organization_id}/template"), template)
    }

    pub fn update(&self, organization_id: &str, template: &Template) -> Result<Template> {
        validate("organization_id", organization_id)?;
        validate("template_id", &template.id)?;
        self.crud().update(
            &format!("organization/{organization_id}/template/{}", template.id),
            template,
        )
    }

    pub fn delete(&self, organization_id: &str, template_id: &str) -> Result<()> {
        validate("organization_id", organization_id)?;
        validate("template_id", template_id)?;
        self.crud().delete(&format!("organization/{organization_id}/template/{template_id}"))
    }
}
