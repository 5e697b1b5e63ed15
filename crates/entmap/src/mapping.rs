use crate::{
    connection::{ConnectionDescriptor, ConnectionRegistry, ConnectionSpec, RelationshipSpecifier},
    error::ConfigError,
    identity::{AttributeSpecifier, infer_identity, resolve_attributes},
    inspect::PropertyInspector,
    transform::{CamelCaseTransform, KeyPathTransformer},
    types::{PropertyType, TypeHandle, TypeRegistry},
};
use entmap_schema::{
    node::{AttributeDescriptor, EntityDescriptor},
    types::Value,
};
use log::debug;
use std::{collections::BTreeMap, fmt, sync::Arc};

///
/// IdentityInference
///
/// Whether mapping construction runs identity-attribute inference. Passed
/// explicitly per construction; there is no ambient process-wide flag, so
/// concurrent constructions cannot race on a toggle.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IdentityInference {
    #[default]
    Enabled,
    Disabled,
}

///
/// IdentityPredicate
///
/// Opaque filter over an incoming record's attribute values, consulted by
/// the mapping engine alongside the identification attributes when deciding
/// between update and insert. Copies of a mapping share the same predicate.
///

#[derive(Clone)]
pub struct IdentityPredicate(Arc<dyn Fn(&BTreeMap<String, Value>) -> bool + Send + Sync>);

impl IdentityPredicate {
    pub fn new(f: impl Fn(&BTreeMap<String, Value>) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[must_use]
    pub fn matches(&self, values: &BTreeMap<String, Value>) -> bool {
        (self.0)(values)
    }
}

impl fmt::Debug for IdentityPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdentityPredicate")
    }
}

///
/// EntityMapping
///
/// Per-entity mapping configuration: the resolved backing type, the
/// identification attributes used for update-vs-insert decisions, an
/// optional identification predicate, and the connection registry. Built
/// and mutated during a single-threaded configuration phase, then treated
/// as immutable shared configuration.
///
/// `Clone` is the structural copy: the connection list is independently
/// owned per copy, while the entity, predicate, and collaborators are
/// shared.
///

#[derive(Clone)]
pub struct EntityMapping {
    target: TypeHandle,
    entity: Arc<EntityDescriptor>,
    identity_attributes: Option<Vec<AttributeDescriptor>>,
    identity_predicate: Option<IdentityPredicate>,
    connections: ConnectionRegistry,
    transformer: Arc<dyn KeyPathTransformer + Send + Sync>,
    inspector: Option<Arc<dyn PropertyInspector + Send + Sync>>,
}

impl EntityMapping {
    /// Build a mapping from an entity descriptor.
    ///
    /// The entity's bound implementation type must resolve through the
    /// registry; a mapping never exists without an addressable backing
    /// type. Identity inference runs exactly once here, and only when
    /// `inference` enables it.
    pub fn from_entity(
        entity: Arc<EntityDescriptor>,
        registry: &TypeRegistry,
        inference: IdentityInference,
    ) -> Result<Self, ConfigError> {
        let target = registry.resolve(&entity.impl_type)?;

        let identity_attributes = match inference {
            IdentityInference::Enabled => infer_identity(&entity)?,
            IdentityInference::Disabled => None,
        };

        debug!(
            "built mapping for entity '{}' backed by type '{}'",
            entity.name,
            target.name()
        );

        Ok(Self {
            target,
            entity,
            identity_attributes,
            identity_predicate: None,
            connections: ConnectionRegistry::new(),
            transformer: Arc::new(CamelCaseTransform),
            inspector: None,
        })
    }

    /// Build a mapping directly from an already-resolved handle, for
    /// non-identity use. No inference runs.
    #[must_use]
    pub fn from_handle(target: TypeHandle, entity: Arc<EntityDescriptor>) -> Self {
        Self {
            target,
            entity,
            identity_attributes: None,
            identity_predicate: None,
            connections: ConnectionRegistry::new(),
            transformer: Arc::new(CamelCaseTransform),
            inspector: None,
        }
    }

    #[must_use]
    pub fn entity(&self) -> &EntityDescriptor {
        &self.entity
    }

    #[must_use]
    pub fn target(&self) -> &TypeHandle {
        &self.target
    }

    //
    // identification
    //

    /// Replace the identification attributes.
    ///
    /// `None` clears the list; a present list must be non-empty and every
    /// entry must resolve against this mapping's entity. Order and
    /// duplicates are preserved.
    pub fn set_identity_attributes(
        &mut self,
        specs: Option<Vec<AttributeSpecifier>>,
    ) -> Result<(), ConfigError> {
        let Some(specs) = specs else {
            self.identity_attributes = None;
            return Ok(());
        };

        if specs.is_empty() {
            return Err(ConfigError::EmptyIdentityAttributes);
        }

        self.identity_attributes = Some(resolve_attributes(&self.entity, &specs)?);

        Ok(())
    }

    #[must_use]
    pub fn identity_attributes(&self) -> Option<&[AttributeDescriptor]> {
        self.identity_attributes.as_deref()
    }

    pub fn set_identity_predicate(&mut self, predicate: Option<IdentityPredicate>) {
        self.identity_predicate = predicate;
    }

    #[must_use]
    pub const fn identity_predicate(&self) -> Option<&IdentityPredicate> {
        self.identity_predicate.as_ref()
    }

    //
    // connections
    //

    /// Declare a connection for one of the entity's relationships.
    pub fn connect(
        &mut self,
        relationship: impl Into<RelationshipSpecifier>,
        spec: ConnectionSpec,
    ) -> Result<(), ConfigError> {
        self.connections.add_for_relationship(
            &self.entity,
            self.transformer.as_ref(),
            relationship.into(),
            spec,
        )
    }

    /// Register an already-built connection descriptor.
    ///
    /// The descriptor's relationship must belong to this mapping's entity.
    pub fn add_connection(&mut self, connection: ConnectionDescriptor) -> Result<(), ConfigError> {
        if self.entity.relationship(connection.relationship()).is_none() {
            return Err(ConfigError::UnknownRelationship {
                entity: self.entity.name.clone(),
                relationship: connection.relationship().to_string(),
            });
        }

        self.connections.add(connection)
    }

    pub fn remove_connection(&mut self, connection: &ConnectionDescriptor) {
        self.connections.remove(connection);
    }

    #[must_use]
    pub fn connection(&self, relationship: &str) -> Option<&ConnectionDescriptor> {
        self.connections.lookup(relationship)
    }

    #[must_use]
    pub fn connections(&self) -> &[ConnectionDescriptor] {
        self.connections.connections()
    }

    #[must_use]
    pub fn connection_snapshot(&self) -> Vec<ConnectionDescriptor> {
        self.connections.snapshot()
    }

    //
    // collaborators
    //

    pub fn set_key_path_transformer(
        &mut self,
        transformer: Arc<dyn KeyPathTransformer + Send + Sync>,
    ) {
        self.transformer = transformer;
    }

    pub fn set_property_inspector(
        &mut self,
        inspector: Option<Arc<dyn PropertyInspector + Send + Sync>>,
    ) {
        self.inspector = inspector;
    }

    //
    // generic mapping fallbacks
    //

    /// Schema-declared default for an attribute, if any.
    #[must_use]
    pub fn default_value(&self, attribute: &str) -> Option<&Value> {
        self.entity.attribute(attribute).and_then(|a| a.default.as_ref())
    }

    /// Type of a property: the backing type's declaration first, then the
    /// configured inspector as a fallback.
    #[must_use]
    pub fn property_type(&self, property: &str) -> Option<PropertyType> {
        if let Some(declared) = self.target.property_type(property) {
            return Some(declared.clone());
        }

        self.inspector
            .as_ref()
            .and_then(|i| i.property_type(property, &self.entity))
    }
}

impl fmt::Debug for EntityMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityMapping")
            .field("entity", &self.entity.name)
            .field("target", &self.target.name())
            .field("identity_attributes", &self.identity_attributes)
            .field("identity_predicate", &self.identity_predicate)
            .field("connections", &self.connections)
            .finish_non_exhaustive()
    }
}
