//! Lookups keyed by file system paths.
//!
//! ```rust
//! use std::path::Path;
//! use mime_kit::{path, Resolver};
//!
//! let resolver = Resolver::new();
//! assert_eq!(path::guess_mime_type(&resolver, Path::new("photos/cat.JPG")), Some("image/jpeg"));
//! assert!(path::mime_types_for_path(&resolver, Path::new("Makefile")).is_empty());
//! ```
use crate::MimeLookup;
use alloc::vec::Vec;
use std::{ffi::OsStr, path::Path};

/// Returns the MIME types for the final extension of `path`.
///
/// A path without an extension, or with one that is not valid UTF-8, yields an
/// empty list.
pub fn mime_types_for_path<'a, L>(lookup: &'a L, path: &Path) -> Vec<&'a str>
where
    L: MimeLookup + ?Sized,
{
    path.extension()
        .and_then(OsStr::to_str)
        .map(|extension| lookup.lookup_mime_types(extension))
        .unwrap_or_default()
}

/// Returns the first MIME type for the final extension of `path`.
pub fn guess_mime_type<'a, L>(lookup: &'a L, path: &Path) -> Option<&'a str>
where
    L: MimeLookup + ?Sized,
{
    mime_types_for_path(lookup, path).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RestrictedResolver;

    #[test]
    fn uses_the_last_extension() {
        let allowed = RestrictedResolver::new(mapping! { "application/gzip" => ["gz"] }).unwrap();

        assert_eq!(mime_types_for_path(&allowed, Path::new("archive.tar.gz")), ["application/gzip"]);
        assert!(mime_types_for_path(&allowed, Path::new("archive.tar")).is_empty());
        assert_eq!(guess_mime_type(&allowed, Path::new(".gz")), None);
    }
}
