//! Error types and utilities.
//!
//! This module provides the error handling infrastructure for building and
//! extending resolvers. The main types are:
//!
//! - [`Error`] - Every failure a constructor or a merge can report
//! - [`Result`] - A specialized Result type alias
//! - [`ValueKind`] - The kind of a rejected input value, used in messages
//!
//! Lookups never fail. An unknown MIME type or extension yields an empty list,
//! so errors only surface while a mapping is being validated or applied.
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{mapping, Error, RestrictedResolver};
//!
//! let err = RestrictedResolver::new(mapping! {}).unwrap_err();
//! assert!(matches!(err, Error::EmptyMap));
//! assert!(err.is_argument());
//! assert!(err.to_string().contains("cannot be empty"));
//! ```
use alloc::string::String;
use core::fmt;

/// The kind of a loosely-typed input value.
///
/// Validation errors name the kind they actually received, so a caller feeding
/// `{"custom/mime": 111}` learns that an `integer` showed up where an array of
/// extensions was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A string value.
    String,
    /// An integral number.
    Integer,
    /// A floating point number.
    Float,
    /// `true` or `false`.
    Boolean,
    /// An explicit null.
    Null,
    /// A sequence of values.
    Array,
    /// A key/value object.
    Object,
}

impl ValueKind {
    /// Returns the lowercase name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for resolver construction and merging.
///
/// Variants fall into two groups:
///
/// - **Argument errors** reject the input handed to a constructor or a merge
///   ([`Error::is_argument`]). Nothing is applied when one is returned.
/// - **State errors** reject the call itself regardless of its input
///   ([`Error::is_state`]); a [`RestrictedResolver`](crate::RestrictedResolver)
///   never accepts a second mapping.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "json")]
/// # {
/// use mime_kit::{Error, Resolver, ValueKind};
/// use serde_json::json;
///
/// let mut resolver = Resolver::new();
/// let err = resolver.merge_json(&json!({ "custom/mime": 111 })).unwrap_err();
///
/// assert!(matches!(err, Error::InvalidExtensions { kind: ValueKind::Integer, .. }));
/// assert_eq!(err.to_string(), "extensions must be an array, received `integer`");
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A mapping key was not a string.
    #[error("MIME type must be a string, received `{kind}`")]
    InvalidMimeType {
        /// What was found in place of the key.
        kind: ValueKind,
    },
    /// The value for a MIME type was not an array of extensions.
    #[error("extensions must be an array, received `{kind}`")]
    InvalidExtensions {
        /// The MIME type whose value was rejected.
        mime_type: String,
        /// What was found in place of the array.
        kind: ValueKind,
    },
    /// An element of an extensions array was not a string.
    #[error("extension must be a string, received `{kind}`")]
    InvalidExtension {
        /// The MIME type whose extension list held the element.
        mime_type: String,
        /// What was found in place of the extension.
        kind: ValueKind,
    },
    /// The mapping document itself was neither an object nor an array.
    #[error("map must be an object, received `{kind}`")]
    InvalidMap {
        /// What was found in place of the map.
        kind: ValueKind,
    },
    /// A restricted resolver was constructed without any allowed MIME types.
    #[error("map with allowed MIME types cannot be empty")]
    EmptyMap,
    /// A mapping was merged into a restricted resolver after construction.
    #[error("map with allowed MIME types already added")]
    AlreadyAdded,
}

impl Error {
    /// Returns `true` if the error rejects the supplied argument.
    ///
    /// ```rust
    /// use mime_kit::Error;
    ///
    /// assert!(Error::EmptyMap.is_argument());
    /// assert!(!Error::AlreadyAdded.is_argument());
    /// ```
    pub const fn is_argument(&self) -> bool {
        !self.is_state()
    }

    /// Returns `true` if the error rejects the call given the receiver's state.
    pub const fn is_state(&self) -> bool {
        matches!(self, Error::AlreadyAdded)
    }
}

/// A specialized Result type for resolver operations.
///
/// # Examples
///
/// ```rust
/// use mime_kit::{mapping, RestrictedResolver, Result};
///
/// fn build() -> Result<RestrictedResolver> {
///     RestrictedResolver::new(mapping! { "custom/mime" => ["cst"] })
/// }
///
/// assert_eq!(build().unwrap().lookup_extensions("custom/mime"), ["cst"]);
/// ```
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_received_kind() {
        let err = Error::InvalidMimeType {
            kind: ValueKind::Integer,
        };
        assert_eq!(err.to_string(), "MIME type must be a string, received `integer`");

        let err = Error::InvalidExtension {
            mime_type: "custom/mime".into(),
            kind: ValueKind::Array,
        };
        assert_eq!(err.to_string(), "extension must be a string, received `array`");
    }

    #[test]
    fn classification() {
        assert!(Error::AlreadyAdded.is_state());
        assert!(Error::EmptyMap.is_argument());
        assert!(Error::InvalidMap {
            kind: ValueKind::Null
        }
        .is_argument());
    }
}
