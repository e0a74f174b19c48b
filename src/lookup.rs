//! The lookup interface shared by every resolver.
//!
//! [`MimeLookup`] is the capability set a resolver offers: resolve a MIME type
//! to extensions, resolve an extension to MIME types, and accept a further
//! [`Mapping`]. [`Resolver`](crate::Resolver) and
//! [`RestrictedResolver`](crate::RestrictedResolver) both implement it, so code
//! that only needs lookups can stay generic over which one it was handed.
//!
//! # Query normalization
//!
//! Every query is first tried with ASCII whitespace and NUL stripped from both
//! ends and ASCII letters lowercased and, when that key is
//! absent, as the raw string exactly as given. The second attempt keeps custom
//! keys that were registered with uppercase letters or padding reachable.
//!
//! ```rust
//! use mime_kit::{MimeLookup, Resolver};
//!
//! fn first_extension(lookup: &impl MimeLookup, mime_type: &str) -> Option<String> {
//!     lookup.preferred_extension(mime_type).map(str::to_string)
//! }
//!
//! let resolver = Resolver::new();
//! assert_eq!(first_extension(&resolver, "  Image/JPEG "), Some("jpeg".to_string()));
//! ```
use crate::{Mapping, Result};
use alloc::{string::String, vec::Vec};

/// Bidirectional lookup between MIME types and extensions.
///
/// Lookups are total: an unknown key yields an empty list, never an error, and
/// reading never changes what a later read returns.
pub trait MimeLookup {
    /// Returns the extensions registered for `mime_type`, most specific first.
    fn lookup_extensions(&self, mime_type: &str) -> Vec<&str>;

    /// Returns the MIME types registered for `extension`, most specific first.
    fn lookup_mime_types(&self, extension: &str) -> Vec<&str>;

    /// Adds custom mappings.
    ///
    /// # Errors
    ///
    /// Implementations that do not accept further mappings return
    /// [`Error::AlreadyAdded`](crate::Error::AlreadyAdded).
    fn merge(&mut self, mapping: Mapping) -> Result<()>;

    /// Returns the first extension for `mime_type`, if any.
    ///
    /// ```rust
    /// use mime_kit::{MimeLookup, Resolver};
    ///
    /// assert_eq!(Resolver::new().preferred_extension("image/jpeg"), Some("jpeg"));
    /// assert_eq!(Resolver::new().preferred_extension("not/found"), None);
    /// ```
    fn preferred_extension(&self, mime_type: &str) -> Option<&str> {
        self.lookup_extensions(mime_type).first().copied()
    }

    /// Returns the first MIME type for `extension`, if any.
    fn preferred_mime_type(&self, extension: &str) -> Option<&str> {
        self.lookup_mime_types(extension).first().copied()
    }

    /// Returns `true` if `extension` is one of the extensions of `mime_type`.
    ///
    /// The extension is compared after trimming and ASCII lowercasing both sides.
    fn has_extension(&self, mime_type: &str, extension: &str) -> bool {
        let wanted = normalize(extension);
        self.lookup_extensions(mime_type)
            .iter()
            .any(|candidate| normalize(candidate) == wanted)
    }
}

/// Characters stripped from both ends of a query.
const PADDING: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Folds a query into its canonical key.
///
/// Only ASCII whitespace and NUL count as padding; other Unicode spaces are
/// part of the key.
pub(crate) fn normalize(query: &str) -> String {
    query.trim_matches(PADDING).to_ascii_lowercase()
}

/// Looks up the normalized key, then the raw query.
pub(crate) fn find_key<T>(normalized: &str, raw: &str, get: impl Fn(&str) -> Option<T>) -> Option<T> {
    get(normalized).or_else(|| get(raw))
}

/// Merges custom candidates in front of built-in ones.
///
/// Built-ins are returned untouched unless there is at least one custom
/// candidate; otherwise the concatenation is deduplicated keeping the first
/// occurrence of every value.
pub(crate) fn combine<'a>(
    custom: Option<&'a [String]>,
    builtin: Option<&'static [&'static str]>,
) -> Vec<&'a str> {
    let builtin = builtin.unwrap_or_default();
    match custom {
        Some(custom) if !custom.is_empty() => {
            let mut combined: Vec<&'a str> = Vec::with_capacity(custom.len() + builtin.len());
            for value in custom.iter().map(String::as_str).chain(builtin.iter().copied()) {
                if !combined.contains(&value) {
                    combined.push(value);
                }
            }
            combined
        }
        _ => builtin.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn normalize_trims_and_lowercases_ascii() {
        assert_eq!(normalize("  Image/JPEG \t"), "image/jpeg");
        assert_eq!(normalize("jpg"), "jpg");
    }

    #[test]
    fn normalize_strips_ascii_padding_only() {
        assert_eq!(normalize("\0image/jpeg\x0B\r\n"), "image/jpeg");
        assert_eq!(normalize("\u{3000}image/jpeg\u{a0}"), "\u{3000}image/jpeg\u{a0}");
    }

    #[test]
    fn find_key_falls_back_to_raw_key() {
        let lookup = |key: &str| (key == "Raw/Key").then_some(1);
        assert_eq!(find_key(&normalize("Raw/Key"), "Raw/Key", lookup), Some(1));
        assert_eq!(find_key("other", "other", lookup), None);
    }

    #[test]
    fn combine_puts_custom_first_without_duplicates() {
        let custom = vec![String::from("b"), String::from("x"), String::from("b")];
        let builtin: &'static [&'static str] = &["a", "b", "c"];

        assert_eq!(combine(Some(custom.as_slice()), Some(builtin)), ["b", "x", "a", "c"]);
        assert_eq!(combine(Some(&[][..]), Some(builtin)), ["a", "b", "c"]);
        assert_eq!(combine(None, Some(builtin)), ["a", "b", "c"]);
        assert!(combine(None, None).is_empty());
    }
}
