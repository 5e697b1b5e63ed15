use convert_case::{Case, Casing};

///
/// KeyPathTransformer
///
/// Derives a destination attribute name from a source key path. Consulted
/// for single and list connection specs only; explicit mappings bypass it.
///

pub trait KeyPathTransformer {
    fn destination_name(&self, source_key_path: &str) -> String;
}

///
/// CamelCaseTransform
///
/// Default transformer: the last key-path segment, rendered in lowerCamel.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CamelCaseTransform;

impl KeyPathTransformer for CamelCaseTransform {
    fn destination_name(&self, source_key_path: &str) -> String {
        let segment = source_key_path
            .rsplit('.')
            .next()
            .unwrap_or(source_key_path);

        segment.to_case(Case::Camel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_path_is_camel_cased() {
        let transform = CamelCaseTransform;
        assert_eq!(transform.destination_name("author_id"), "authorId");
    }

    #[test]
    fn nested_key_path_keeps_only_the_last_segment() {
        let transform = CamelCaseTransform;
        assert_eq!(
            transform.destination_name("author.profile.external_ref"),
            "externalRef"
        );
    }
}
