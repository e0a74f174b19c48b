//! Caller-supplied MIME type mappings.
//!
//! A [`Mapping`] is an ordered batch of `MIME type => [extensions]` entries that
//! a resolver layers on top of (or, for the restricted variant, uses instead of)
//! the built-in dataset. Entry order is kept as given: it decides the order in
//! which MIME types accumulate for an extension shared by several entries.
//!
//! Typed construction cannot fail. Loosely-typed input (a JSON document, with
//! the `json` feature) is validated in full before a `Mapping` is returned, so
//! an invalid document never reaches a resolver half-applied.
//!
//! # Examples
//!
//! ```rust
//! use mime_kit::{mapping, Mapping};
//!
//! let from_macro = mapping! {
//!     "custom/mime1" => ["ext1"],
//!     "custom/mime2" => ["ext1", "ext2"],
//! };
//!
//! let mut built = Mapping::new();
//! built.insert("custom/mime1", ["ext1"]);
//! built.insert("custom/mime2", ["ext1", "ext2"]);
//!
//! assert_eq!(from_macro, built);
//! assert_eq!(built.len(), 2);
//! ```
use alloc::{string::String, vec::Vec};

/// An ordered batch of `MIME type => [extensions]` entries.
///
/// Keys and extensions are stored exactly as supplied; no case folding or
/// trimming happens on insert. The same MIME type may appear more than once,
/// in which case the later entry replaces the earlier one when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Vec<String>)>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry for `mime_type`.
    ///
    /// ```rust
    /// use mime_kit::Mapping;
    ///
    /// let mut mapping = Mapping::new();
    /// mapping.insert("text/x-custom", ["cst", "custom"]);
    /// assert_eq!(mapping.get("text/x-custom"), Some(&["cst".to_string(), "custom".to_string()][..]));
    /// ```
    pub fn insert<K, I>(&mut self, mime_type: K, extensions: I)
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.entries.push((
            mime_type.into(),
            extensions.into_iter().map(Into::into).collect(),
        ));
    }

    /// Returns the extensions of the last entry for `mime_type`.
    pub fn get(&self, mime_type: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == mime_type)
            .map(|(_, extensions)| extensions.as_slice())
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(mime_type, extensions)| (mime_type.as_str(), extensions.as_slice()))
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Vec<String>);
    type IntoIter = alloc::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, I> FromIterator<(K, I)> for Mapping
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K, I> Extend<(K, I)> for Mapping
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, I)>>(&mut self, iter: T) {
        for (mime_type, extensions) in iter {
            self.insert(mime_type, extensions);
        }
    }
}

impl<K, I, const N: usize> From<[(K, I); N]> for Mapping
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from(entries: [(K, I); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(feature = "json")]
mod json {
    use super::Mapping;
    use crate::{Error, Result, ValueKind};
    use alloc::{string::String, vec::Vec};
    use serde_json::Value;

    fn kind_of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(number) if number.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    fn extensions_of(mime_type: &str, value: &Value) -> Result<Vec<String>> {
        let Value::Array(items) = value else {
            return Err(Error::InvalidExtensions {
                mime_type: mime_type.into(),
                kind: kind_of(value),
            });
        };

        items
            .iter()
            .map(|item| match item {
                Value::String(extension) => Ok(extension.clone()),
                other => Err(Error::InvalidExtension {
                    mime_type: mime_type.into(),
                    kind: kind_of(other),
                }),
            })
            .collect()
    }

    impl Mapping {
        /// Validates a JSON document and converts it into a mapping.
        ///
        /// The document must be an object whose values are arrays of strings.
        /// A non-empty top-level array is read as a map keyed by integer
        /// positions and rejected with [`Error::InvalidMimeType`]; an empty one
        /// is an empty mapping. The whole document is checked before anything
        /// is returned.
        ///
        /// # Errors
        ///
        /// - [`Error::InvalidMap`] if the document is neither an object nor an array
        /// - [`Error::InvalidMimeType`] if a key is not a string
        /// - [`Error::InvalidExtensions`] if a value is not an array
        /// - [`Error::InvalidExtension`] if an array element is not a string
        ///
        /// # Examples
        ///
        /// ```rust
        /// use mime_kit::{Error, Mapping, ValueKind};
        /// use serde_json::json;
        ///
        /// let mapping = Mapping::from_json(&json!({ "custom/mime": ["ext1", "ext2"] })).unwrap();
        /// assert_eq!(mapping.len(), 1);
        ///
        /// let err = Mapping::from_json(&json!({ "custom/mime": ["ext1", null] })).unwrap_err();
        /// assert!(matches!(err, Error::InvalidExtension { kind: ValueKind::Null, .. }));
        ///
        /// let err = Mapping::from_json(&json!(["ext1", "ext2"])).unwrap_err();
        /// assert!(matches!(err, Error::InvalidMimeType { kind: ValueKind::Integer }));
        /// ```
        pub fn from_json(value: &Value) -> Result<Self> {
            match value {
                Value::Object(map) => {
                    let mut mapping = Self::new();
                    for (mime_type, extensions) in map {
                        let extensions = extensions_of(mime_type, extensions)?;
                        mapping.entries.push((mime_type.clone(), extensions));
                    }
                    Ok(mapping)
                }
                Value::Array(items) if items.is_empty() => Ok(Self::new()),
                Value::Array(_) => Err(Error::InvalidMimeType {
                    kind: ValueKind::Integer,
                }),
                other => Err(Error::InvalidMap {
                    kind: kind_of(other),
                }),
            }
        }
    }

    impl TryFrom<&Value> for Mapping {
        type Error = Error;

        fn try_from(value: &Value) -> Result<Self> {
            Self::from_json(value)
        }
    }

    impl TryFrom<Value> for Mapping {
        type Error = Error;

        fn try_from(value: Value) -> Result<Self> {
            Self::from_json(&value)
        }
    }

    impl<'de> serde::Deserialize<'de> for Mapping {
        fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            Self::from_json(&value).map_err(serde::de::Error::custom)
        }
    }

    impl serde::Serialize for Mapping {
        fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeMap;

            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (mime_type, extensions) in &self.entries {
                map.serialize_entry(mime_type, extensions)?;
            }
            map.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mapping = mapping! {
            "b/second" => ["b"],
            "a/first" => ["a"],
            "b/second" => ["c"],
        };

        let keys: Vec<&str> = mapping.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b/second", "a/first", "b/second"]);
        assert_eq!(mapping.get("b/second"), Some(&[String::from("c")][..]));
    }

    #[test]
    fn collects_from_pairs() {
        let mapping: Mapping = vec![("x/y", vec!["xy"])].into_iter().collect();
        assert_eq!(mapping, Mapping::from([("x/y", ["xy"])]));
        assert!(!mapping.is_empty());
    }

    #[cfg(feature = "json")]
    mod json {
        use super::super::Mapping;
        use crate::{Error, ValueKind};
        use alloc::{string::ToString, vec::Vec};
        use serde_json::json;

        #[test]
        fn rejects_each_invalid_shape() {
            let cases = [
                (json!(["ext1", "ext2"]), "MIME type must be a string, received `integer`"),
                (json!({ "custom/mime": "ext" }), "extensions must be an array, received `string`"),
                (json!({ "custom/mime": 111 }), "extensions must be an array, received `integer`"),
                (json!({ "custom/mime": true }), "extensions must be an array, received `boolean`"),
                (json!({ "custom/mime": null }), "extensions must be an array, received `null`"),
                (json!({ "custom/mime": ["ext1", ["ext2"]] }), "extension must be a string, received `array`"),
                (json!({ "custom/mime": ["ext1", 111] }), "extension must be a string, received `integer`"),
                (json!({ "custom/mime": ["ext1", false] }), "extension must be a string, received `boolean`"),
                (json!({ "custom/mime": ["ext1", null] }), "extension must be a string, received `null`"),
                (json!("custom/mime"), "map must be an object, received `string`"),
            ];

            for (value, message) in cases {
                let err = Mapping::from_json(&value).unwrap_err();
                assert!(err.is_argument());
                assert_eq!(err.to_string(), message);
            }
        }

        #[test]
        fn floats_are_reported_as_floats() {
            let err = Mapping::from_json(&json!({ "custom/mime": [1.5] })).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidExtension {
                    mime_type: "custom/mime".into(),
                    kind: ValueKind::Float,
                }
            );
        }

        #[test]
        fn preserves_document_order() {
            let mapping =
                Mapping::from_json(&json!({ "z/last": ["z"], "a/first": ["a", "b"] })).unwrap();
            let keys: Vec<&str> = mapping.iter().map(|(key, _)| key).collect();
            assert_eq!(keys, ["z/last", "a/first"]);
        }

        #[test]
        fn empty_inputs_are_empty_mappings() {
            assert!(Mapping::from_json(&json!({})).unwrap().is_empty());
            assert!(Mapping::from_json(&json!([])).unwrap().is_empty());
        }

        #[test]
        fn serde_round_trip_through_a_document() {
            let mapping: Mapping = serde_json::from_str(r#"{"custom/mime": ["cst"]}"#).unwrap();
            assert_eq!(serde_json::to_value(&mapping).unwrap(), json!({ "custom/mime": ["cst"] }));

            let err = serde_json::from_str::<Mapping>(r#"{"custom/mime": 1}"#).unwrap_err();
            assert!(err.to_string().contains("extensions must be an array"));
        }
    }
}
