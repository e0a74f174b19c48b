//! Typed lookups through the [`mime`] crate.
//!
//! [`MimeLookupExt`] is implemented for every [`MimeLookup`], so a parsed
//! [`Mime`] can be resolved directly and answers can come back as [`Mime`]
//! values. Only the essence (`type/subtype`) of a `Mime` takes part in a
//! lookup; parameters such as `charset` are ignored.
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{typed::MimeLookupExt, Resolver};
//!
//! let resolver = Resolver::new();
//! let html: mime::Mime = "text/html; charset=utf-8".parse().unwrap();
//!
//! assert_eq!(resolver.extensions_for(&html)[0], "html");
//! assert_eq!(resolver.preferred_mime("png"), Some(mime::IMAGE_PNG));
//! ```
use crate::MimeLookup;
use alloc::vec::Vec;
use mime::Mime;

/// Extension methods that speak [`Mime`].
pub trait MimeLookupExt: MimeLookup {
    /// Returns the extensions for the essence of `mime`.
    fn extensions_for(&self, mime: &Mime) -> Vec<&str> {
        self.lookup_extensions(mime.essence_str())
    }

    /// Returns the MIME types for `extension`, parsed.
    ///
    /// Registered MIME types that are not valid media types are skipped.
    fn mime_types_for(&self, extension: &str) -> Vec<Mime> {
        self.lookup_mime_types(extension)
            .into_iter()
            .filter_map(|mime_type| mime_type.parse().ok())
            .collect()
    }

    /// Returns the first parseable MIME type for `extension`.
    fn preferred_mime(&self, extension: &str) -> Option<Mime> {
        self.lookup_mime_types(extension)
            .into_iter()
            .find_map(|mime_type| mime_type.parse().ok())
    }
}

impl<T: MimeLookup + ?Sized> MimeLookupExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Resolver, RestrictedResolver};

    #[test]
    fn parameters_are_ignored() {
        let resolver = Resolver::new();
        let json: Mime = "application/json; charset=utf-8".parse().unwrap();
        assert_eq!(resolver.extensions_for(&json), ["json"]);
    }

    #[test]
    fn unparseable_entries_are_skipped() {
        let allowed = RestrictedResolver::new(mapping! {
            "not a mime" => ["odd"],
            "text/x-odd" => ["odd"],
        })
        .unwrap();

        let parsed = allowed.mime_types_for("odd");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].essence_str(), "text/x-odd");
        assert_eq!(allowed.preferred_mime("odd").unwrap().subtype(), "x-odd");
    }
}
