//! The default resolver: built-in dataset plus a growable overlay.
//!
//! A [`Resolver`] answers from the built-in [`dataset`](crate::dataset) and
//! from whatever custom mappings it has been given. Custom entries come first
//! in every answer, followed by the built-in entries they do not repeat.
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{mapping, Resolver};
//!
//! let mut resolver = Resolver::new();
//! assert_eq!(resolver.lookup_extensions("image/jpeg"), ["jpeg", "jpg", "jpe"]);
//!
//! resolver.merge(mapping! { "image/jpeg" => ["jfif", "jpg"] });
//! assert_eq!(resolver.lookup_extensions("image/jpeg"), ["jfif", "jpg", "jpeg", "jpe"]);
//! assert_eq!(resolver.lookup_mime_types("jfif"), ["image/jpeg", "image/pjpeg"]);
//! ```
use crate::{
    dataset,
    lookup::{combine, find_key, normalize},
    overlay::Overlay,
    Mapping, MimeLookup, Result,
};
use alloc::vec::Vec;

/// Resolves MIME types and extensions against the built-in dataset and a
/// caller-supplied overlay.
///
/// The overlay starts empty and grows with every [`merge`](Resolver::merge).
/// Merging a MIME type that is already present replaces its extension list,
/// while each extension keeps accumulating the MIME types that name it.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    overlay: Overlay,
}

impl Resolver {
    /// Creates a resolver with no custom mappings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver seeded with `mapping`.
    ///
    /// An empty mapping leaves the resolver identical to [`Resolver::new`].
    ///
    /// ```rust
    /// use mime_kit::Resolver;
    ///
    /// let resolver = Resolver::with_map([("custom/mime", ["cst"])]);
    /// assert_eq!(resolver.lookup_extensions("custom/mime"), ["cst"]);
    /// assert!(resolver.is_customized());
    /// ```
    pub fn with_map(mapping: impl Into<Mapping>) -> Self {
        let mut resolver = Self::new();
        resolver.merge(mapping);
        resolver
    }

    /// Validates a JSON document and creates a resolver seeded with it.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`Mapping::from_json`].
    #[cfg(feature = "json")]
    pub fn try_from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(Self::with_map(Mapping::from_json(value)?))
    }

    /// Returns `true` once any custom mapping has been merged.
    pub fn is_customized(&self) -> bool {
        !self.overlay.is_empty()
    }

    /// Returns the extensions for `mime_type`.
    ///
    /// Custom extensions come first, followed by built-in ones not already
    /// listed. An unknown MIME type yields an empty list.
    pub fn lookup_extensions(&self, mime_type: &str) -> Vec<&str> {
        let key = normalize(mime_type);
        let builtin = find_key(&key, mime_type, dataset::extensions);
        let custom = if self.overlay.is_empty() {
            None
        } else {
            find_key(&key, mime_type, |key| self.overlay.extensions(key))
        };

        let extensions = combine(custom, builtin);
        if extensions.is_empty() {
            tracing::trace!(mime_type, "no extensions registered");
        }
        extensions
    }

    /// Returns the MIME types for `extension`.
    ///
    /// Custom MIME types come first, followed by built-in ones not already
    /// listed. An unknown extension yields an empty list.
    pub fn lookup_mime_types(&self, extension: &str) -> Vec<&str> {
        let key = normalize(extension);
        let builtin = find_key(&key, extension, dataset::mime_types);
        let custom = if self.overlay.is_empty() {
            None
        } else {
            find_key(&key, extension, |key| self.overlay.mime_types(key))
        };

        let mime_types = combine(custom, builtin);
        if mime_types.is_empty() {
            tracing::trace!(extension, "no MIME types registered");
        }
        mime_types
    }

    /// Adds custom mappings to the overlay.
    ///
    /// Each MIME type in `mapping` replaces any extension list previously
    /// merged for it; each extension appends the MIME type to its own list.
    /// A typed [`Mapping`] is always valid, so this cannot fail.
    pub fn merge(&mut self, mapping: impl Into<Mapping>) {
        let mapping = mapping.into();
        if mapping.is_empty() {
            return;
        }

        let entries = mapping.len();
        self.overlay.apply(mapping);
        tracing::debug!(entries, mime_types = self.overlay.len(), "merged custom MIME mappings");
    }

    /// Validates a JSON document and merges it.
    ///
    /// The document is checked in full first; on error nothing is merged.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`Mapping::from_json`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_kit::Resolver;
    /// use serde_json::json;
    ///
    /// let mut resolver = Resolver::new();
    /// let result = resolver.merge_json(&json!({
    ///     "custom/ok": ["ok"],
    ///     "custom/bad": ["ok", 1],
    /// }));
    ///
    /// assert!(result.is_err());
    /// assert!(resolver.lookup_extensions("custom/ok").is_empty());
    /// ```
    #[cfg(feature = "json")]
    pub fn merge_json(&mut self, value: &serde_json::Value) -> Result<()> {
        self.merge(Mapping::from_json(value)?);
        Ok(())
    }
}

impl MimeLookup for Resolver {
    fn lookup_extensions(&self, mime_type: &str) -> Vec<&str> {
        Resolver::lookup_extensions(self, mime_type)
    }

    fn lookup_mime_types(&self, extension: &str) -> Vec<&str> {
        Resolver::lookup_mime_types(self, extension)
    }

    fn merge(&mut self, mapping: Mapping) -> Result<()> {
        Resolver::merge(self, mapping);
        Ok(())
    }
}

impl From<Mapping> for Resolver {
    fn from(mapping: Mapping) -> Self {
        Self::with_map(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_answers_from_dataset() {
        let resolver = Resolver::new();
        assert_eq!(resolver.lookup_extensions("image/jpeg"), dataset::extensions("image/jpeg").unwrap());
        assert_eq!(resolver.lookup_mime_types("jpeg"), ["image/jpeg", "image/pjpeg"]);
        assert!(resolver.lookup_extensions("not/found").is_empty());
        assert!(resolver.lookup_mime_types("notfound").is_empty());
        assert!(!resolver.is_customized());
    }

    #[test]
    fn empty_custom_list_falls_back_to_builtins() {
        let resolver = Resolver::with_map(mapping! { "image/png" => [] });
        assert_eq!(resolver.lookup_extensions("image/png"), ["png"]);
    }

    #[test]
    fn remerging_a_mime_type_replaces_its_extensions() {
        let mut resolver = Resolver::with_map(mapping! { "custom/mime" => ["zz-a", "zz-b"] });
        resolver.merge(mapping! { "custom/mime" => ["zz-c"] });

        assert_eq!(resolver.lookup_extensions("custom/mime"), ["zz-c"]);
        // The reverse side only grows.
        assert_eq!(resolver.lookup_mime_types("zz-a"), ["custom/mime"]);
        assert_eq!(resolver.lookup_mime_types("zz-c"), ["custom/mime"]);
    }

    #[test]
    fn custom_extension_shared_with_a_builtin_keeps_both() {
        let resolver = Resolver::with_map(mapping! { "custom/mime" => ["c"] });
        assert_eq!(resolver.lookup_mime_types("c"), ["custom/mime", "text/x-csrc"]);
    }

    #[test]
    fn repeated_pairs_are_deduplicated_on_read() {
        let mut resolver = Resolver::new();
        resolver.merge(mapping! { "custom/mime" => ["ext", "ext"] });
        resolver.merge(mapping! { "custom/mime" => ["ext"] });

        assert_eq!(resolver.lookup_extensions("custom/mime"), ["ext"]);
        assert_eq!(resolver.lookup_mime_types("ext"), ["custom/mime"]);
    }

    #[test]
    fn raw_key_stays_reachable() {
        let resolver = Resolver::with_map(mapping! { "Custom/Mixed" => ["MiX"] });

        assert_eq!(resolver.lookup_extensions("Custom/Mixed"), ["MiX"]);
        assert!(resolver.lookup_extensions("custom/mixed").is_empty());
        assert_eq!(resolver.lookup_mime_types("MiX"), ["Custom/Mixed"]);
    }
}
