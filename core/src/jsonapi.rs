//! JSON:API compound documents.
//!
//! # Design
//! Every resource is an [`Entity`] parameterized by an attribute struct. The
//! attribute struct is the schema: serde field attributes declare the
//! camelCase wire names and which fields are optional, and
//! [`Attributes::TYPE`] names the resource on the wire. One generic encoder
//! and one generic decoder serve every resource kind.
//!
//! Optional attributes are `Option<_>` and are left out of request bodies
//! when `None`. Booleans are plain `bool` and always written, so `false`
//! never collapses into "unset".

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Attribute schema of one resource kind.
pub trait Attributes: Serialize + DeserializeOwned + Default + Clone + fmt::Debug {
    /// Resource type name used in `data.type` and `filter[...]`.
    const TYPE: &'static str;
}

/// One resource: server-assigned id, attributes, and named relationships.
///
/// An empty `id` means "not yet created" and is omitted when encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity<A> {
    pub id: String,
    pub attributes: A,
    pub relationships: BTreeMap<String, Relationship>,
}

impl<A: Attributes> Entity<A> {
    /// A new, not yet persisted entity.
    pub fn new(attributes: A) -> Self {
        Self {
            id: String::new(),
            attributes,
            relationships: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Point the to-one relationship `name` at `kind`/`id`.
    #[must_use]
    pub fn with_relationship(
        mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        self.relationships
            .insert(name.into(), Relationship::to_one(kind, id));
        self
    }

    pub fn kind(&self) -> &'static str {
        A::TYPE
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships.get(name)
    }

    /// Id of the entity a to-one relationship points at.
    pub fn related_id(&self, name: &str) -> Option<&str> {
        match self.relationships.get(name)?.data.as_ref()? {
            RelationshipData::One(target) => Some(target.id.as_str()),
            RelationshipData::Many(_) => None,
        }
    }
}

/// A relationship object: `{"data": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

impl Relationship {
    pub fn to_one(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            data: Some(RelationshipData::One(ResourceIdentifier::new(kind, id))),
        }
    }

    pub fn to_many(targets: Vec<ResourceIdentifier>) -> Self {
        Self {
            data: Some(RelationshipData::Many(targets)),
        }
    }
}

/// Linkage of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    One(ResourceIdentifier),
    Many(Vec<ResourceIdentifier>),
}

/// `{"type": ..., "id": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl ResourceIdentifier {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }
}

#[derive(Serialize)]
struct ResourceObjectRef<'a, A> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "is_blank")]
    id: &'a str,
    attributes: &'a A,
    #[serde(skip_serializing_if = "has_no_links")]
    relationships: &'a BTreeMap<String, Relationship>,
}

fn is_blank(id: &&str) -> bool {
    id.is_empty()
}

fn has_no_links(relationships: &&BTreeMap<String, Relationship>) -> bool {
    relationships.is_empty()
}

#[derive(Deserialize)]
struct ResourceObject<A> {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    id: String,
    #[serde(default)]
    attributes: Option<A>,
    #[serde(default)]
    relationships: BTreeMap<String, Relationship>,
}

impl<A: Attributes> Serialize for Entity<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResourceObjectRef {
            kind: A::TYPE,
            id: &self.id,
            attributes: &self.attributes,
            relationships: &self.relationships,
        }
        .serialize(serializer)
    }
}

impl<'de, A: Attributes> Deserialize<'de> for Entity<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = ResourceObject::<A>::deserialize(deserializer)?;
        if object.kind != A::TYPE {
            return Err(D::Error::custom(format!(
                "expected resource type {:?}, found {:?}",
                A::TYPE,
                object.kind
            )));
        }
        Ok(Self {
            id: object.id,
            attributes: object.attributes.unwrap_or_default(),
            relationships: object.relationships,
        })
    }
}

#[derive(Serialize)]
struct DocumentRef<'a, T> {
    data: &'a T,
}

#[derive(Deserialize)]
struct Document<T> {
    data: T,
}

/// Encode a single entity as `{"data": {...}}`.
pub fn encode_document<A: Attributes>(entity: &Entity<A>) -> serde_json::Result<String> {
    serde_json::to_string(&DocumentRef { data: entity })
}

/// Shapes a response document can decode into.
///
/// A single entity reads `{"data": {...}}`; a `Vec` of entities reads the
/// collection form `{"data": [...]}`.
pub trait FromDocument: Sized {
    fn from_document(body: &str) -> serde_json::Result<Self>;
}

impl<A: Attributes> FromDocument for Entity<A> {
    fn from_document(body: &str) -> serde_json::Result<Self> {
        let document: Document<Option<Entity<A>>> = serde_json::from_str(body)?;
        document.data.ok_or_else(|| {
            serde_json::Error::custom(format!("document has no {:?} resource", A::TYPE))
        })
    }
}

impl<A: Attributes> FromDocument for Vec<Entity<A>> {
    fn from_document(body: &str) -> serde_json::Result<Self> {
        let document: Document<Option<Vec<Entity<A>>>> = serde_json::from_str(body)?;
        Ok(document.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    struct Sample {
        name: String,
        read_only: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    impl Attributes for Sample {
        const TYPE: &'static str = "sample";
    }

    fn wire(entity: &Entity<Sample>) -> Value {
        serde_json::from_str(&encode_document(entity).unwrap()).unwrap()
    }

    #[test]
    fn false_booleans_are_written() {
        let entity = Entity::new(Sample {
            name: "a".to_string(),
            read_only: false,
            note: None,
        });
        let doc = wire(&entity);
        let attributes = doc["data"]["attributes"].as_object().unwrap();
        assert_eq!(attributes.get("readOnly"), Some(&Value::Bool(false)));
        assert!(!attributes.contains_key("note"));
    }

    #[test]
    fn booleans_round_trip() {
        for flag in [true, false] {
            let entity = Entity::new(Sample {
                name: "b".to_string(),
                read_only: flag,
                note: Some("n".to_string()),
            })
            .with_id("p-1");
            let back = Entity::<Sample>::from_document(&encode_document(&entity).unwrap()).unwrap();
            assert_eq!(back, entity);
        }
    }

    #[test]
    fn new_entities_omit_id_and_empty_relationships() {
        let doc = wire(&Entity::new(Sample::default()));
        assert_eq!(doc["data"]["type"], "sample");
        assert!(doc["data"].get("id").is_none());
        assert!(doc["data"].get("relationships").is_none());
    }

    #[test]
    fn relationships_are_encoded_as_linkage() {
        let entity = Entity::new(Sample::default())
            .with_id("p-1")
            .with_relationship("workspace", "workspace", "ws-1");
        let doc = wire(&entity);
        assert_eq!(
            doc["data"]["relationships"],
            json!({"workspace": {"data": {"type": "workspace", "id": "ws-1"}}})
        );
        assert_eq!(entity.related_id("workspace"), Some("ws-1"));
        assert_eq!(entity.related_id("organization"), None);
    }

    #[test]
    fn decodes_single_document() {
        let body = r#"{"data":{"type":"sample","id":"p-9","attributes":{"name":"x","readOnly":true,"note":null},
            "relationships":{"owners":{"data":[{"type":"team","id":"t-1"}]},"parent":{"data":null}}},
            "links":{"self":"/sample/p-9"}}"#;
        let entity = Entity::<Sample>::from_document(body).unwrap();
        assert_eq!(entity.id, "p-9");
        assert_eq!(entity.attributes.name, "x");
        assert!(entity.attributes.read_only);
        assert_eq!(entity.attributes.note, None);
        assert_eq!(
            entity.relationship("owners"),
            Some(&Relationship::to_many(vec![ResourceIdentifier::new("team", "t-1")]))
        );
        assert_eq!(entity.relationship("parent"), Some(&Relationship::default()));
    }

    #[test]
    fn decodes_collection_document() {
        let body = r#"{"data":[{"type":"sample","id":"1","attributes":{"name":"a"}},{"type":"sample","id":"2"}]}"#;
        let entities = Vec::<Entity<Sample>>::from_document(body).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].attributes.name, "a");
        assert!(!entities[0].attributes.read_only);
        assert_eq!(entities[1].id, "2");
        assert_eq!(entities[1].attributes, Sample::default());
    }

    #[test]
    fn collection_round_trips() {
        let entities = vec![
            Entity::new(Sample::default()).with_id("1"),
            Entity::new(Sample::default()).with_id("2"),
        ];
        let body = json!({ "data": &entities }).to_string();
        assert_eq!(Vec::<Entity<Sample>>::from_document(&body).unwrap(), entities);
    }

    #[test]
    fn rejects_mismatched_type() {
        let body = r#"{"data":{"type":"workspace","id":"w-1","attributes":{}}}"#;
        let err = Entity::<Sample>::from_document(body).unwrap_err();
        assert!(err.to_string().contains("expected resource type"));
    }

    #[test]
    fn single_shape_rejects_collection_and_null() {
        assert!(Entity::<Sample>::from_document(r#"{"data":[]}"#).is_err());
        assert!(Entity::<Sample>::from_document(r#"{"data":null}"#).is_err());
        assert!(Vec::<Entity<Sample>>::from_document(r#"{"data":{"type":"sample","id":"1"}}"#).is_err());
    }
}
