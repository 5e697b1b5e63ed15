use crate::types::PropertyType;
use entmap_schema::node::EntityDescriptor;

///
/// PropertyInspector
///
/// Fallback source of property types, keyed by property name and entity.
/// Consulted only when the backing type declares nothing for the property.
///

pub trait PropertyInspector {
    fn property_type(&self, property: &str, entity: &EntityDescriptor) -> Option<PropertyType>;
}
