use crate::prelude::*;

///
/// AttributeDescriptor
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AttributeDescriptor {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AttributeDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}
