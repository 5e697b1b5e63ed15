use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Build-time configuration failures. Every variant is raised synchronously
/// while a mapping is being assembled and is never recovered internally;
/// nothing here surfaces at record-mapping time. Identity inference finding
/// no match is not an error (it yields an absent result).
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ConfigError {
    #[error("connection for relationship '{relationship}' already registered")]
    DuplicateConnection { relationship: String },

    #[error("connection spec for relationship '{relationship}' has no entries")]
    EmptyConnectionSpec { relationship: String },

    #[error("identification attribute list must contain at least one attribute")]
    EmptyIdentityAttributes,

    #[error("identity override on entity '{entity}' is invalid: {detail}")]
    InvalidIdentityOverride { entity: String, detail: String },

    #[error("type '{0}' already registered")]
    TypeAlreadyRegistered(String),

    #[error("entity '{entity}' has no attribute '{attribute}'")]
    UnknownAttribute { entity: String, attribute: String },

    #[error("entity '{entity}' has no relationship '{relationship}'")]
    UnknownRelationship { entity: String, relationship: String },

    #[error("type '{0}' not found")]
    UnknownType(String),
}
