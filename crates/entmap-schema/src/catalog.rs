use crate::prelude::*;
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error as ThisError;

///
/// CatalogError
///

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("entity '{0}' already registered")]
    EntityAlreadyRegistered(String),

    #[error("entity '{0}' not found")]
    EntityNotFound(String),
}

///
/// SchemaProvider
///
/// Source of entity descriptors for mapping construction.
///

pub trait SchemaProvider {
    fn entity_descriptor(&self, name: &str) -> Option<Arc<EntityDescriptor>>;
}

///
/// SchemaCatalog
///
/// In-memory schema provider keyed by entity name. Registration happens
/// once during configuration; lookups afterwards hand out shared
/// descriptors.
///

#[derive(Debug, Default)]
pub struct SchemaCatalog {
    entities: BTreeMap<String, Arc<EntityDescriptor>>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity descriptor under its own name.
    pub fn register(&mut self, entity: EntityDescriptor) -> Result<Arc<EntityDescriptor>, CatalogError> {
        if self.entities.contains_key(&entity.name) {
            return Err(CatalogError::EntityAlreadyRegistered(entity.name));
        }

        let entity = Arc::new(entity);
        self.entities.insert(entity.name.clone(), entity.clone());

        Ok(entity)
    }

    /// Look up an entity descriptor by name.
    pub fn try_get(&self, name: &str) -> Result<Arc<EntityDescriptor>, CatalogError> {
        self.entities
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::EntityNotFound(name.to_string()))
    }

    /// Iterate registered descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<EntityDescriptor>> {
        self.entities.values()
    }
}

impl SchemaProvider for SchemaCatalog {
    fn entity_descriptor(&self, name: &str) -> Option<Arc<EntityDescriptor>> {
        self.entities.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> SchemaCatalog {
        let mut catalog = SchemaCatalog::new();
        catalog
            .register(EntityDescriptor::new("Human", "Person"))
            .expect("test entity registration should succeed");
        catalog
    }

    #[test]
    fn registered_entity_resolves_through_provider() {
        let catalog = test_catalog();
        let entity = catalog
            .entity_descriptor("Human")
            .expect("registered entity should resolve");
        assert_eq!(entity.impl_type, "Person");
    }

    #[test]
    fn duplicate_entity_registration_is_rejected() {
        let mut catalog = test_catalog();
        let err = catalog
            .register(EntityDescriptor::new("Human", "Person"))
            .expect_err("duplicate registration should fail");
        assert!(
            err.to_string().contains("entity 'Human' already registered"),
            "duplicate registration should include the conflicting name"
        );
    }

    #[test]
    fn missing_entity_is_rejected_before_access() {
        let catalog = test_catalog();
        let err = catalog
            .try_get("Ghost")
            .expect_err("missing entity should fail lookup");
        assert!(err.to_string().contains("entity 'Ghost' not found"));
    }
}
