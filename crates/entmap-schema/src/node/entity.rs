use crate::prelude::*;
use std::collections::BTreeMap;

///
/// EntityDescriptor
///
/// Schema description of one record type: its attributes, relationships,
/// open metadata bag, and the name of the implementation type bound to it.
/// The implementation type is a name resolved at mapping-build time, never
/// an owned handle.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EntityDescriptor {
    pub name: String,
    pub impl_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDescriptor>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipDescriptor>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, MetaValue>,
}

impl EntityDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, impl_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            impl_type: impl_type.into(),
            attributes: Vec::new(),
            relationships: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    #[must_use]
    pub fn with_relationship(mut self, relationship: RelationshipDescriptor) -> Self {
        self.relationships.push(relationship);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: MetaValue) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }

    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&RelationshipDescriptor> {
        self.relationships.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&MetaValue> {
        self.metadata.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_entity() -> EntityDescriptor {
        EntityDescriptor::new("AmenityReview", "Review")
            .with_attribute(AttributeDescriptor::new("amenityReviewID"))
            .with_attribute(AttributeDescriptor::new("rating").with_default(Value::Int(0)))
            .with_relationship(RelationshipDescriptor::new("author", "Human"))
    }

    #[test]
    fn attribute_lookup_scans_by_name() {
        let entity = review_entity();
        assert!(entity.attribute("rating").is_some());
        assert!(entity.attribute("missing").is_none());
    }

    #[test]
    fn relationship_lookup_scans_by_name() {
        let entity = review_entity();
        let author = entity
            .relationship("author")
            .expect("declared relationship should resolve");
        assert_eq!(author.target, "Human");
        assert!(entity.relationship("editor").is_none());
    }

    #[test]
    fn metadata_bag_is_open_keyed() {
        let entity = review_entity().with_metadata("source", MetaValue::Text("api.v2".into()));
        assert_eq!(
            entity.meta("source").and_then(MetaValue::as_text),
            Some("api.v2")
        );
        assert!(entity.meta("absent").is_none());
    }
}
