mod attribute;
mod entity;
mod relationship;

pub use attribute::AttributeDescriptor;
pub use entity::EntityDescriptor;
pub use relationship::RelationshipDescriptor;
