use crate::{error::ConfigError, transform::KeyPathTransformer};
use entmap_schema::node::{EntityDescriptor, RelationshipDescriptor};
use log::debug;
use serde::Serialize;

///
/// ConnectionDescriptor
///
/// Declarative rule mapping ordered source key paths to destination
/// attribute names for one relationship, consulted after primary attribute
/// mapping to join source values into a related record's identity. Always
/// carries at least one binding. Cloning yields an independently owned
/// copy; equality is by content.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConnectionDescriptor {
    relationship: String,
    target: String,
    bindings: Vec<(String, String)>,
}

impl ConnectionDescriptor {
    /// Build a descriptor for a relationship from `(source, destination)`
    /// pairs.
    pub fn new(
        relationship: &RelationshipDescriptor,
        bindings: Vec<(String, String)>,
    ) -> Result<Self, ConfigError> {
        if bindings.is_empty() {
            return Err(ConfigError::EmptyConnectionSpec {
                relationship: relationship.name.clone(),
            });
        }

        Ok(Self {
            relationship: relationship.name.clone(),
            target: relationship.target.clone(),
            bindings,
        })
    }

    #[must_use]
    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    /// Name of the entity the relationship points at.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Ordered `(source key path, destination attribute)` pairs.
    #[must_use]
    pub fn bindings(&self) -> &[(String, String)] {
        &self.bindings
    }
}

///
/// ConnectionSpec
///
/// The three accepted shapes of a connection declaration. Single paths and
/// path lists run through the key-path transformer; explicit mappings are
/// used verbatim.
///

#[derive(Clone, Debug)]
pub enum ConnectionSpec {
    KeyPath(String),
    KeyPaths(Vec<String>),
    Explicit(Vec<(String, String)>),
}

///
/// RelationshipSpecifier
///

#[derive(Clone, Debug)]
pub enum RelationshipSpecifier {
    Name(String),
    Relationship(RelationshipDescriptor),
}

impl From<&str> for RelationshipSpecifier {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<RelationshipDescriptor> for RelationshipSpecifier {
    fn from(relationship: RelationshipDescriptor) -> Self {
        Self::Relationship(relationship)
    }
}

impl RelationshipSpecifier {
    fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Relationship(relationship) => &relationship.name,
        }
    }
}

///
/// ConnectionRegistry
///
/// Ordered collection of connection descriptors, at most one per distinct
/// relationship name. Mutated during the configuration phase only; reads
/// afterwards are borrows or owned snapshots.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ConnectionRegistry {
    connections: Vec<ConnectionDescriptor>,
}

impl ConnectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the connection registered for a relationship name.
    #[must_use]
    pub fn lookup(&self, relationship: &str) -> Option<&ConnectionDescriptor> {
        self.connections
            .iter()
            .find(|c| c.relationship() == relationship)
    }

    /// Append a connection, rejecting a second one for the same relationship.
    pub fn add(&mut self, connection: ConnectionDescriptor) -> Result<(), ConfigError> {
        if self.lookup(connection.relationship()).is_some() {
            return Err(ConfigError::DuplicateConnection {
                relationship: connection.relationship().to_string(),
            });
        }

        debug!(
            "registered connection for relationship '{}' -> '{}'",
            connection.relationship(),
            connection.target()
        );
        self.connections.push(connection);

        Ok(())
    }

    /// Remove the first content-equal connection; no-op when absent.
    pub fn remove(&mut self, connection: &ConnectionDescriptor) {
        if let Some(pos) = self.connections.iter().position(|c| c == connection) {
            self.connections.remove(pos);
        }
    }

    /// Borrowed read of the registered connections, insertion order.
    #[must_use]
    pub fn connections(&self) -> &[ConnectionDescriptor] {
        &self.connections
    }

    /// Owned copy of the registered connections, insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ConnectionDescriptor> {
        self.connections.clone()
    }

    /// Resolve a relationship against the entity and register a connection
    /// built from `spec`. Duplicates still fail through this path because
    /// the built descriptor is submitted via `add`.
    pub fn add_for_relationship(
        &mut self,
        entity: &EntityDescriptor,
        transformer: &dyn KeyPathTransformer,
        relationship: RelationshipSpecifier,
        spec: ConnectionSpec,
    ) -> Result<(), ConfigError> {
        let relationship = entity.relationship(relationship.name()).ok_or_else(|| {
            ConfigError::UnknownRelationship {
                entity: entity.name.clone(),
                relationship: relationship.name().to_string(),
            }
        })?;

        let bindings = match spec {
            ConnectionSpec::KeyPath(path) => {
                let destination = transformer.destination_name(&path);
                vec![(path, destination)]
            }
            ConnectionSpec::KeyPaths(paths) => paths
                .into_iter()
                .map(|path| {
                    let destination = transformer.destination_name(&path);
                    (path, destination)
                })
                .collect(),
            ConnectionSpec::Explicit(pairs) => pairs,
        };

        let connection = ConnectionDescriptor::new(relationship, bindings)?;

        self.add(connection)
    }
}
