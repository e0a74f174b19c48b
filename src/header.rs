//! `Content-Type` helpers for the [`http`] crate.
//!
//! # Examples
//!
//! ```rust
//! use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};
//! use mime_kit::{header, Resolver};
//!
//! let resolver = Resolver::new();
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/png; q=1"));
//! assert_eq!(header::extensions_from_headers(&resolver, &headers), ["png"]);
//!
//! let value = header::content_type_for_extension(&resolver, "PNG").unwrap();
//! assert_eq!(value, "image/png");
//! ```
use crate::{typed::MimeLookupExt, MimeLookup};
use alloc::vec::Vec;
use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};

/// Returns the extensions for the `Content-Type` of `headers`.
///
/// A value the [`mime`] crate cannot parse is looked up verbatim. A missing or
/// non-ASCII header yields an empty list.
pub fn extensions_from_headers<'a, L>(lookup: &'a L, headers: &HeaderMap) -> Vec<&'a str>
where
    L: MimeLookup + ?Sized,
{
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()) else {
        return Vec::new();
    };

    match value.parse::<mime::Mime>() {
        Ok(mime) => lookup.extensions_for(&mime),
        Err(_) => lookup.lookup_extensions(value),
    }
}

/// Returns a `Content-Type` value for `extension`, using its first MIME type.
pub fn content_type_for_extension<L>(lookup: &L, extension: &str) -> Option<HeaderValue>
where
    L: MimeLookup + ?Sized,
{
    let mime_type = lookup.preferred_mime_type(extension)?;
    HeaderValue::from_str(mime_type).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Resolver;

    #[test]
    fn missing_header_is_empty() {
        assert!(extensions_from_headers(&Resolver::new(), &HeaderMap::new()).is_empty());
    }

    #[test]
    fn custom_types_win() {
        let resolver = Resolver::with_map(mapping! { "text/plain" => ["log"] });

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
        assert_eq!(extensions_from_headers(&resolver, &headers)[0], "log");
        assert_eq!(content_type_for_extension(&resolver, "log").unwrap(), "text/plain");
        assert!(content_type_for_extension(&resolver, "nope").is_none());
    }
}
