use crate::error::ConfigError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc};

///
/// PropertyType
///
/// Mapper-level property types a backing implementation type can declare.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum PropertyType {
    Blob,
    Bool,
    Date,
    Float,
    Int,
    #[display("Object({_0})")]
    Object(String),
    Text,
    Url,
}

///
/// TypeHandle
///
/// Cheap-to-clone handle for a registered implementation type: its name and
/// shared declared-property table. A mapping holds this as a non-owning
/// back-reference; it never controls the type's lifetime.
///

#[derive(Clone, Debug)]
pub struct TypeHandle {
    name: Arc<str>,
    properties: Arc<BTreeMap<String, PropertyType>>,
}

impl TypeHandle {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Statically declared type of a property, if the backing type knows it.
    #[must_use]
    pub fn property_type(&self, property: &str) -> Option<&PropertyType> {
        self.properties.get(property)
    }
}

///
/// TypeRegistry
///
/// Typed factory for backing implementation types, resolved at
/// mapping-build time. Resolution returns a handle or a `ConfigError`,
/// never a null reference discovered later.
///

#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeHandle>,
}

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an implementation type with its declared property table.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        properties: BTreeMap<String, PropertyType>,
    ) -> Result<TypeHandle, ConfigError> {
        let name = name.into();
        if self.types.contains_key(&name) {
            return Err(ConfigError::TypeAlreadyRegistered(name));
        }

        let handle = TypeHandle {
            name: Arc::from(name.as_str()),
            properties: Arc::new(properties),
        };
        self.types.insert(name, handle.clone());

        Ok(handle)
    }

    /// Resolve a type name to its handle.
    pub fn resolve(&self, name: &str) -> Result<TypeHandle, ConfigError> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownType(name.to_string()))
    }

    /// Iterate registered handles in name order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeHandle> {
        self.types.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry
            .register(
                "Person",
                BTreeMap::from([
                    ("name".to_string(), PropertyType::Text),
                    ("age".to_string(), PropertyType::Int),
                ]),
            )
            .expect("test type registration should succeed");
        registry
    }

    #[test]
    fn resolved_handle_exposes_declared_properties() {
        let registry = test_registry();
        let handle = registry
            .resolve("Person")
            .expect("registered type should resolve");

        assert_eq!(handle.name(), "Person");
        assert_eq!(handle.property_type("age"), Some(&PropertyType::Int));
        assert_eq!(handle.property_type("unknown"), None);
    }

    #[test]
    fn duplicate_type_registration_is_rejected() {
        let mut registry = test_registry();
        let err = registry
            .register("Person", BTreeMap::new())
            .expect_err("duplicate registration should fail");
        assert_eq!(err, ConfigError::TypeAlreadyRegistered("Person".into()));
    }

    #[test]
    fn missing_type_is_rejected_at_resolution() {
        let registry = test_registry();
        let err = registry
            .resolve("Ghost")
            .expect_err("missing type should fail resolution");
        assert_eq!(err, ConfigError::UnknownType("Ghost".into()));
    }
}
