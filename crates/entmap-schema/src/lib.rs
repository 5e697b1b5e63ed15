//! Descriptor model for the entity-mapping configuration layer: entities,
//! attributes, relationships, metadata bags, and the schema catalog that
//! serves them to mapping construction.

pub mod catalog;
pub mod node;
pub mod types;

/// Metadata key carrying an identity-attribute override for an entity.
///
/// The value is either a single attribute name or an ordered list of names.
pub const IDENTITY_ATTRIBUTES_KEY: &str = "identity_attributes";

use crate::catalog::CatalogError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        IDENTITY_ATTRIBUTES_KEY,
        catalog::{SchemaCatalog, SchemaProvider},
        node::{AttributeDescriptor, EntityDescriptor, RelationshipDescriptor},
        types::{MetaValue, Value},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
}
