#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! Bidirectional lookup between MIME types and file extensions.
//!
//! This crate resolves a MIME type to its file extensions and an extension back
//! to its MIME types. Answers come from a large built-in table, optionally
//! layered with mappings supplied by the caller.
//!
//! # Features
//!
//! - **Built-in dataset** - Hundreds of well-known media types in sorted static tables
//! - **Custom overlay** - Add or override mappings at any time with [`Resolver::merge`]
//! - **Allow-lists** - [`RestrictedResolver`] answers only from the mappings it was built with
//! - **Forgiving queries** - Case and surrounding whitespace are ignored, while exact custom keys stay reachable
//! - **Total lookups** - Unknown keys yield an empty list, never an error
//!
//! # Optional Features
//!
//! - `std` - `Path` helpers in [`path`] (enabled by default)
//! - `mime` - Typed lookups through the `mime` crate (enabled by default)
//! - `json` - Validated mappings from `serde_json` documents (enabled by default)
//! - `http` - `Content-Type` header helpers through the `http` crate
//!
//! # Examples
//!
//! ## Default Lookups
//!
//! ```rust
//! use mime_kit::Resolver;
//!
//! let resolver = Resolver::new();
//! assert_eq!(resolver.lookup_extensions("image/jpeg"), ["jpeg", "jpg", "jpe"]);
//! assert_eq!(resolver.lookup_mime_types("jpeg"), ["image/jpeg", "image/pjpeg"]);
//! assert_eq!(resolver.lookup_extensions("  Image/JPEG "), ["jpeg", "jpg", "jpe"]);
//! assert!(resolver.lookup_extensions("not/found").is_empty());
//! ```
//!
//! ## Custom Mappings
//!
//! ```rust
//! use mime_kit::{mapping, Resolver};
//!
//! let resolver = Resolver::with_map(mapping! {
//!     "custom/mime1" => ["ext1"],
//!     "custom/mime2" => ["ext1", "ext2"],
//! });
//!
//! assert_eq!(resolver.lookup_extensions("custom/mime1"), ["ext1"]);
//! assert_eq!(resolver.lookup_mime_types("ext1"), ["custom/mime1", "custom/mime2"]);
//! assert_eq!(resolver.lookup_mime_types("ext2"), ["custom/mime2"]);
//! ```
//!
//! ## Allow-lists
//!
//! ```rust
//! use mime_kit::{mapping, MimeLookup, RestrictedResolver};
//!
//! let mut allowed = RestrictedResolver::new(mapping! { "image/png" => ["png"] })?;
//! assert_eq!(allowed.lookup_mime_types("png"), ["image/png"]);
//! assert!(allowed.lookup_mime_types("jpg").is_empty());
//! assert!(allowed.merge(mapping! { "image/jpeg" => ["jpg"] }).is_err());
//! # Ok::<(), mime_kit::Error>(())
//! ```
//!
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod error;
pub use error::{Error, Result, ValueKind};

pub mod dataset;

pub mod mapping;
pub use mapping::Mapping;

pub mod lookup;
#[doc(inline)]
pub use lookup::MimeLookup;

mod overlay;

pub mod resolver;
#[doc(inline)]
pub use resolver::Resolver;

pub mod restricted;
#[doc(inline)]
pub use restricted::RestrictedResolver;

#[cfg(feature = "mime")]
pub mod typed;

#[cfg(feature = "http")]
pub mod header;

#[cfg(feature = "std")]
pub mod path;

#[doc(hidden)]
pub mod __private {
    pub use alloc::{string::String, vec::Vec};
}
