use crate::error::ConfigError;
use entmap_schema::{
    IDENTITY_ATTRIBUTES_KEY,
    node::{AttributeDescriptor, EntityDescriptor},
    types::MetaValue,
};
use log::debug;

/// Fallback attribute names tried after the `<name>ID` convention, in order.
const FALLBACK_CANDIDATES: [&str; 5] = ["identifier", "id", "ID", "URL", "url"];

///
/// AttributeSpecifier
///
/// One entry of an identification-attribute list: either a bare name or a
/// descriptor already bound to the entity.
///

#[derive(Clone, Debug)]
pub enum AttributeSpecifier {
    Name(String),
    Attribute(AttributeDescriptor),
}

impl From<&str> for AttributeSpecifier {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AttributeSpecifier {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<AttributeDescriptor> for AttributeSpecifier {
    fn from(attribute: AttributeDescriptor) -> Self {
        Self::Attribute(attribute)
    }
}

impl AttributeSpecifier {
    fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Attribute(attribute) => &attribute.name,
        }
    }
}

/// Resolve attribute specifiers against an entity.
///
/// Every entry must name an attribute the entity declares. Order and
/// duplicates are preserved verbatim; repeated names yield repeated
/// descriptors.
pub fn resolve_attributes(
    entity: &EntityDescriptor,
    specs: &[AttributeSpecifier],
) -> Result<Vec<AttributeDescriptor>, ConfigError> {
    let mut resolved = Vec::with_capacity(specs.len());

    for spec in specs {
        let attribute =
            entity
                .attribute(spec.name())
                .ok_or_else(|| ConfigError::UnknownAttribute {
                    entity: entity.name.clone(),
                    attribute: spec.name().to_string(),
                })?;
        resolved.push(attribute.clone());
    }

    Ok(resolved)
}

/// Compute the identification attributes for an entity.
///
/// A metadata override under `identity_attributes` bypasses the heuristics
/// entirely and is returned verbatim. Without one, the conventional
/// `<name>ID` attribute is tried first, then the fixed fallback names; the
/// first hit wins. No match is a normal outcome, not an error.
pub fn infer_identity(
    entity: &EntityDescriptor,
) -> Result<Option<Vec<AttributeDescriptor>>, ConfigError> {
    if let Some(value) = entity.meta(IDENTITY_ATTRIBUTES_KEY) {
        return resolve_override(entity, value).map(Some);
    }

    let conventional = conventional_name(&entity.name);
    let candidates = std::iter::once(conventional.as_str()).chain(FALLBACK_CANDIDATES);

    for candidate in candidates {
        if let Some(attribute) = entity.attribute(candidate) {
            debug!(
                "entity '{}': inferred identity attribute '{}'",
                entity.name, attribute.name
            );
            return Ok(Some(vec![attribute.clone()]));
        }
    }

    debug!("entity '{}': no identity attribute inferred", entity.name);

    Ok(None)
}

// Turn a metadata override (single name or list of names) into descriptors.
fn resolve_override(
    entity: &EntityDescriptor,
    value: &MetaValue,
) -> Result<Vec<AttributeDescriptor>, ConfigError> {
    let specs = match value {
        MetaValue::Text(name) => vec![AttributeSpecifier::Name(name.clone())],
        MetaValue::List(items) => {
            let mut specs = Vec::with_capacity(items.len());
            for item in items {
                let Some(name) = item.as_text() else {
                    return Err(ConfigError::InvalidIdentityOverride {
                        entity: entity.name.clone(),
                        detail: format!("list entries must be attribute names, got {item:?}"),
                    });
                };
                specs.push(AttributeSpecifier::Name(name.to_string()));
            }
            specs
        }
        other => {
            return Err(ConfigError::InvalidIdentityOverride {
                entity: entity.name.clone(),
                detail: format!("expected a name or a list of names, got {other:?}"),
            });
        }
    };

    resolve_attributes(entity, &specs)
}

// "AmenityReview" -> "amenityReviewID"
fn conventional_name(entity_name: &str) -> String {
    let mut chars = entity_name.chars();
    let Some(first) = chars.next() else {
        return "ID".to_string();
    };

    let mut name: String = first.to_lowercase().chain(chars).collect();
    name.push_str("ID");
    name
}
