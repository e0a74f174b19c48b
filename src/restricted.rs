//! A resolver limited to an allow-list.
//!
//! [`RestrictedResolver`] answers only from the mapping it was constructed
//! with. The built-in dataset is never consulted, and the allow-list cannot
//! grow afterwards: the type has no inherent `merge`, and the
//! [`MimeLookup::merge`] it must provide always fails with
//! [`Error::AlreadyAdded`].
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{mapping, Error, MimeLookup, RestrictedResolver};
//!
//! let mut allowed = RestrictedResolver::new(mapping! {
//!     "image/png" => ["png"],
//!     "image/jpeg" => ["jpg", "jpeg"],
//! })?;
//!
//! assert_eq!(allowed.lookup_extensions("image/jpeg"), ["jpg", "jpeg"]);
//! assert!(allowed.lookup_extensions("image/gif").is_empty());
//!
//! let err = allowed.merge(mapping! { "image/gif" => ["gif"] }).unwrap_err();
//! assert!(matches!(err, Error::AlreadyAdded));
//! # Ok::<(), mime_kit::Error>(())
//! ```
use crate::{
    lookup::{combine, find_key, normalize},
    overlay::Overlay,
    Error, Mapping, MimeLookup, Result,
};
use alloc::vec::Vec;

/// Resolves MIME types and extensions against a fixed, caller-supplied
/// allow-list only.
///
/// Lookups follow the same normalization and ordering rules as
/// [`Resolver`](crate::Resolver), minus the built-in fallback.
#[derive(Debug, Clone)]
pub struct RestrictedResolver {
    overlay: Overlay,
}

impl RestrictedResolver {
    /// Creates a resolver that only knows the entries of `mapping`.
    ///
    /// Only the number of entries is checked. An entry with an empty extension
    /// list still counts: its MIME type is [allowed](Self::is_allowed) but
    /// resolves to no extensions.
    ///
    /// ```rust
    /// use mime_kit::{mapping, RestrictedResolver};
    ///
    /// let allowed = RestrictedResolver::new(mapping! { "a/b" => [] }).unwrap();
    /// assert!(allowed.is_allowed("a/b"));
    /// assert!(allowed.lookup_extensions("a/b").is_empty());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMap`] if `mapping` has no entries, since such a
    /// resolver could never answer anything.
    pub fn new(mapping: impl Into<Mapping>) -> Result<Self> {
        let mapping = mapping.into();
        if mapping.is_empty() {
            return Err(Error::EmptyMap);
        }

        let mut overlay = Overlay::default();
        overlay.apply(mapping);
        tracing::debug!(mime_types = overlay.len(), "created restricted resolver");
        Ok(Self { overlay })
    }

    /// Validates a JSON document and creates a resolver limited to it.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`Mapping::from_json`], or
    /// [`Error::EmptyMap`] for an empty document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_kit::{Error, RestrictedResolver};
    /// use serde_json::json;
    ///
    /// let allowed = RestrictedResolver::try_from_json(&json!({ "custom/mime": ["cst"] })).unwrap();
    /// assert_eq!(allowed.lookup_mime_types("CST"), ["custom/mime"]);
    ///
    /// let err = RestrictedResolver::try_from_json(&json!({})).unwrap_err();
    /// assert_eq!(err, Error::EmptyMap);
    /// ```
    #[cfg(feature = "json")]
    pub fn try_from_json(value: &serde_json::Value) -> Result<Self> {
        Self::new(Mapping::from_json(value)?)
    }

    /// Returns `true` if `mime_type` is on the allow-list.
    pub fn is_allowed(&self, mime_type: &str) -> bool {
        find_key(&normalize(mime_type), mime_type, |key| self.overlay.extensions(key)).is_some()
    }

    /// Iterates over the allowed MIME types, sorted, with their registered casing.
    pub fn allowed_mime_types(&self) -> impl Iterator<Item = &str> {
        self.overlay.mime_type_keys()
    }

    /// Returns the extensions allowed for `mime_type`.
    pub fn lookup_extensions(&self, mime_type: &str) -> Vec<&str> {
        let custom = find_key(&normalize(mime_type), mime_type, |key| {
            self.overlay.extensions(key)
        });
        combine(custom, None)
    }

    /// Returns the allowed MIME types for `extension`.
    pub fn lookup_mime_types(&self, extension: &str) -> Vec<&str> {
        let custom = find_key(&normalize(extension), extension, |key| {
            self.overlay.mime_types(key)
        });
        combine(custom, None)
    }
}

impl MimeLookup for RestrictedResolver {
    fn lookup_extensions(&self, mime_type: &str) -> Vec<&str> {
        RestrictedResolver::lookup_extensions(self, mime_type)
    }

    fn lookup_mime_types(&self, extension: &str) -> Vec<&str> {
        RestrictedResolver::lookup_mime_types(self, extension)
    }

    fn merge(&mut self, mapping: Mapping) -> Result<()> {
        tracing::warn!(
            entries = mapping.len(),
            "rejected merge into a restricted resolver"
        );
        Err(Error::AlreadyAdded)
    }
}

impl TryFrom<Mapping> for RestrictedResolver {
    type Error = Error;

    fn try_from(mapping: Mapping) -> Result<Self> {
        Self::new(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_never_consulted() {
        let allowed = RestrictedResolver::new(mapping! { "custom/mime" => ["cst"] }).unwrap();

        assert!(allowed.lookup_extensions("image/jpeg").is_empty());
        assert!(allowed.lookup_mime_types("jpg").is_empty());
        assert!(!allowed.is_allowed("image/jpeg"));
    }

    #[test]
    fn overlaying_a_builtin_does_not_pull_in_its_siblings() {
        let allowed = RestrictedResolver::new(mapping! { "image/jpeg" => ["jpg"] }).unwrap();

        assert_eq!(allowed.lookup_extensions(" IMAGE/JPEG"), ["jpg"]);
        assert_eq!(allowed.lookup_mime_types("jpg"), ["image/jpeg"]);
        assert!(allowed.is_allowed("Image/Jpeg"));
    }

    #[test]
    fn empty_extension_list_is_allowed_but_resolves_nothing() {
        let allowed = RestrictedResolver::new(mapping! { "a/b" => [] }).unwrap();

        assert!(allowed.is_allowed("a/b"));
        assert!(allowed.lookup_extensions("a/b").is_empty());
        assert_eq!(allowed.allowed_mime_types().count(), 1);
    }

    #[test]
    fn merge_is_rejected_even_when_empty() {
        let mut allowed = RestrictedResolver::new(mapping! { "custom/mime" => ["cst"] }).unwrap();

        assert_eq!(MimeLookup::merge(&mut allowed, Mapping::new()), Err(Error::AlreadyAdded));
        assert_eq!(allowed.lookup_extensions("custom/mime"), ["cst"]);
    }

    #[test]
    fn lists_allowed_mime_types() {
        let allowed = RestrictedResolver::new(mapping! {
            "b/second" => ["b"],
            "a/first" => ["a"],
        })
        .unwrap();

        let listed: Vec<&str> = allowed.allowed_mime_types().collect();
        assert_eq!(listed, ["a/first", "b/second"]);
    }
}
