//! End-to-end configuration flow: catalog registration, type resolution,
//! mapping construction, identity configuration, and connection declaration.

use entmap::prelude::*;
use std::collections::BTreeMap;

fn seeded_catalog() -> SchemaCatalog {
    let mut catalog = SchemaCatalog::new();
    catalog
        .register(
            EntityDescriptor::new("Human", "Person")
                .with_attribute(AttributeDescriptor::new("humanID"))
                .with_attribute(AttributeDescriptor::new("name")),
        )
        .expect("entity registration should succeed");
    catalog
        .register(
            EntityDescriptor::new("AmenityReview", "Review")
                .with_attribute(AttributeDescriptor::new("amenityReviewID"))
                .with_attribute(
                    AttributeDescriptor::new("rating").with_default(Value::Int(0)),
                )
                .with_relationship(RelationshipDescriptor::new("author", "Human")),
        )
        .expect("entity registration should succeed");
    catalog
}

fn seeded_types() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .register(
            "Person",
            BTreeMap::from([("name".to_string(), PropertyType::Text)]),
        )
        .expect("type registration should succeed");
    registry
        .register(
            "Review",
            BTreeMap::from([("rating".to_string(), PropertyType::Int)]),
        )
        .expect("type registration should succeed");
    registry
}

#[test]
fn full_configuration_flow_builds_a_read_only_mapping() {
    let catalog = seeded_catalog();
    let types = seeded_types();

    let review = catalog
        .entity_descriptor("AmenityReview")
        .expect("registered entity should resolve");
    let mut mapping = EntityMapping::from_entity(review, &types, IdentityInference::Enabled)
        .expect("mapping construction should succeed");

    let identity = mapping
        .identity_attributes()
        .expect("conventional identity attribute should be inferred");
    assert_eq!(identity[0].name, "amenityReviewID");

    mapping
        .connect("author", ConnectionSpec::KeyPath("author_id".into()))
        .expect("author connection should register");

    let err = mapping
        .connect("author", ConnectionSpec::KeyPath("author_ref".into()))
        .expect_err("second connection for the relationship should fail");
    assert_eq!(
        err,
        ConfigError::DuplicateConnection {
            relationship: "author".into(),
        }
    );

    // Surfaces consulted by the mapping engine after configuration.
    let connections = mapping.connection_snapshot();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].target(), "Human");
    assert_eq!(
        connections[0].bindings(),
        &[("author_id".to_string(), "authorId".to_string())]
    );
    assert_eq!(mapping.default_value("rating"), Some(&Value::Int(0)));
    assert_eq!(mapping.property_type("rating"), Some(PropertyType::Int));
}

#[test]
fn mappings_for_unidentified_entities_are_still_usable() {
    let mut catalog = seeded_catalog();
    let types = seeded_types();
    let entity = catalog
        .register(
            EntityDescriptor::new("Note", "Review").with_attribute(AttributeDescriptor::new("body")),
        )
        .expect("entity registration should succeed");

    let mapping = EntityMapping::from_entity(entity, &types, IdentityInference::Enabled)
        .expect("mapping construction should succeed");
    assert!(
        mapping.identity_attributes().is_none(),
        "absence means no identity tracking, not a fault"
    );
    assert!(mapping.connections().is_empty());
}
