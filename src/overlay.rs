use crate::Mapping;
use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// Caller-supplied mappings held by a resolver.
///
/// `extensions` is keyed by MIME type and replaced per key on every insert.
/// `mime_types` is keyed by extension and only ever appended to, in the order
/// entries arrive; it is never edited on its own.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overlay {
    extensions: BTreeMap<String, Vec<String>>,
    mime_types: BTreeMap<String, Vec<String>>,
}

impl Overlay {
    pub(crate) fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Number of distinct MIME types.
    pub(crate) fn len(&self) -> usize {
        self.extensions.len()
    }

    pub(crate) fn apply(&mut self, mapping: Mapping) {
        for (mime_type, extensions) in mapping {
            for extension in &extensions {
                self.mime_types
                    .entry(extension.clone())
                    .or_default()
                    .push(mime_type.clone());
            }
            self.extensions.insert(mime_type, extensions);
        }
    }

    pub(crate) fn mime_type_keys(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    pub(crate) fn extensions(&self, key: &str) -> Option<&[String]> {
        self.extensions.get(key).map(Vec::as_slice)
    }

    pub(crate) fn mime_types(&self, key: &str) -> Option<&[String]> {
        self.mime_types.get(key).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extensions_and_appends_mime_types() {
        let mut overlay = Overlay::default();
        overlay.apply(mapping! { "custom/mime" => ["a", "b"] });
        overlay.apply(mapping! { "custom/mime" => ["b"] });

        assert_eq!(overlay.extensions("custom/mime"), Some(&[String::from("b")][..]));
        assert_eq!(overlay.mime_types("a").map(<[String]>::len), Some(1));
        assert_eq!(overlay.mime_types("b").map(<[String]>::len), Some(2));
        assert_eq!(overlay.len(), 1);
    }

    #[test]
    fn keys_are_stored_as_given() {
        let mut overlay = Overlay::default();
        overlay.apply(mapping! { "Custom/Mime" => ["EXT"] });

        assert!(overlay.extensions("custom/mime").is_none());
        assert!(overlay.extensions("Custom/Mime").is_some());
        assert!(overlay.mime_types("EXT").is_some());
    }
}
