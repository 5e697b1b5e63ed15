//! Entity-mapping configuration layer: identity-attribute inference,
//! connection descriptors, and the per-entity mapping configuration handed
//! to a record-mapping engine.

// public exports are one module level down
pub mod connection;
pub mod error;
pub mod identity;
pub mod inspect;
pub mod mapping;
pub mod transform;
pub mod types;

pub use error::ConfigError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        connection::{
            ConnectionDescriptor, ConnectionRegistry, ConnectionSpec, RelationshipSpecifier,
        },
        error::ConfigError,
        identity::{AttributeSpecifier, infer_identity, resolve_attributes},
        inspect::PropertyInspector,
        mapping::{EntityMapping, IdentityInference, IdentityPredicate},
        transform::{CamelCaseTransform, KeyPathTransformer},
        types::{PropertyType, TypeHandle, TypeRegistry},
    };
    pub use entmap_schema::prelude::*;
}
