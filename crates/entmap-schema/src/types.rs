use crate::prelude::*;

///
/// Value
///
/// Attribute default values declared by the schema.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    Text(String),
}

///
/// MetaValue
///
/// Open metadata-bag values attached to an entity descriptor. Bags are
/// arbitrary key/value pairs; this layer only interprets the keys it owns.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
pub enum MetaValue {
    Bool(bool),
    Int(i64),
    List(Vec<MetaValue>),
    Text(String),
}

impl MetaValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}
