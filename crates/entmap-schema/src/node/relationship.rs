use crate::prelude::*;

///
/// RelationshipDescriptor
///
/// Names a relationship and the entity it targets. The target is held by
/// name only; this descriptor never owns the target's lifetime.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RelationshipDescriptor {
    pub name: String,
    pub target: String,
}

impl RelationshipDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}
