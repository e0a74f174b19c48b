use mime_kit::{dataset, mapping, Error, Mapping, MimeLookup, Resolver};

fn custom_map() -> Mapping {
    mapping! {
        "custom/mime1" => ["ext1"],
        "custom/mime2" => ["ext1", "ext2"],
    }
}

fn assert_custom_lookups(resolver: &impl MimeLookup) {
    assert_eq!(resolver.lookup_extensions("custom/mime1"), ["ext1"]);
    assert_eq!(resolver.lookup_extensions("custom/mime2"), ["ext1", "ext2"]);
    assert_ne!(resolver.lookup_extensions("custom/mime1"), ["ext1", "ext2"]);
    assert_eq!(resolver.lookup_mime_types("ext1"), ["custom/mime1", "custom/mime2"]);
    assert_eq!(resolver.lookup_mime_types("ext2"), ["custom/mime2"]);
    assert_ne!(resolver.lookup_mime_types("ext2"), ["custom/mime1", "custom/mime2"]);
}

#[test]
fn test_get_extensions() {
    let resolver = Resolver::new();
    assert_eq!(resolver.lookup_extensions("image/jpeg"), ["jpeg", "jpg", "jpe"]);
    assert_eq!(
        resolver.lookup_extensions("image/jpeg"),
        dataset::extensions("image/jpeg").unwrap()
    );
    assert!(resolver.lookup_extensions("not/found").is_empty());
}

#[test]
fn test_get_mime_types() {
    let resolver = Resolver::new();
    assert_eq!(resolver.lookup_mime_types("jpeg"), ["image/jpeg", "image/pjpeg"]);
    assert_eq!(
        resolver.lookup_mime_types("jpeg"),
        dataset::mime_types("jpeg").unwrap()
    );
    assert!(resolver.lookup_mime_types("notfound").is_empty());
}

#[test]
fn test_every_builtin_resolves_to_itself() {
    let resolver = Resolver::new();
    for (mime_type, extensions) in dataset::EXTENSIONS {
        assert_eq!(resolver.lookup_extensions(mime_type), *extensions);
    }
    for (extension, mime_types) in dataset::MIME_TYPES {
        assert_eq!(resolver.lookup_mime_types(extension), *mime_types);
    }
}

#[test]
fn test_add_map() {
    let mut resolver = Resolver::new();
    resolver.merge(custom_map());
    assert_custom_lookups(&resolver);
}

#[test]
fn test_add_map_through_constructor() {
    let resolver = Resolver::with_map(custom_map());
    assert_custom_lookups(&resolver);
}

#[test]
fn test_add_map_through_trait() {
    let mut resolver = Resolver::new();
    MimeLookup::merge(&mut resolver, custom_map()).unwrap();
    assert_custom_lookups(&resolver);
}

#[test]
fn test_custom_entries_take_precedence() {
    let resolver = Resolver::with_map(mapping! {
        "image/jpeg" => ["jfif", "jpe"],
        "image/x-mine" => ["jpg"],
    });

    // Custom entries first, built-ins appended once
    assert_eq!(resolver.lookup_extensions("image/jpeg"), ["jfif", "jpe", "jpeg", "jpg"]);
    assert_eq!(
        resolver.lookup_mime_types("jpg"),
        ["image/x-mine", "image/jpeg", "image/pjpeg"]
    );
    // Untouched built-ins are unchanged
    assert_eq!(resolver.lookup_extensions("image/png"), ["png"]);
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    let resolver = Resolver::new();
    assert_eq!(
        resolver.lookup_extensions("  Image/JPEG "),
        resolver.lookup_extensions("image/jpeg")
    );
    assert_eq!(resolver.lookup_mime_types(" JPEG\n"), resolver.lookup_mime_types("jpeg"));
}

#[test]
fn test_only_ascii_padding_is_trimmed() {
    let resolver = Resolver::new();
    assert_eq!(resolver.lookup_extensions("\0image/jpeg\0"), ["jpeg", "jpg", "jpe"]);
    assert!(resolver.lookup_extensions("\u{3000}image/jpeg").is_empty());
}

#[test]
fn test_exact_custom_key_is_reachable() {
    let resolver = Resolver::with_map(mapping! { " Padded/Type " => ["pad"] });

    // The normalized form is absent, so the raw query is tried next
    assert_eq!(resolver.lookup_extensions(" Padded/Type "), ["pad"]);
    assert!(resolver.lookup_extensions("padded/type").is_empty());
}

#[test]
fn test_lookups_have_no_side_effects() {
    let resolver = Resolver::with_map(custom_map());
    let first = resolver.lookup_extensions("custom/mime2");
    let second = resolver.lookup_extensions("custom/mime2");
    assert_eq!(first, second);
    assert_eq!(resolver.lookup_mime_types("ext1"), resolver.lookup_mime_types("ext1"));
}

#[test]
fn test_extension_accumulates_mime_types() {
    let mut resolver = Resolver::new();
    resolver.merge(mapping! { "custom/a" => ["shared"] });
    resolver.merge(mapping! { "custom/b" => ["shared"] });
    resolver.merge(mapping! { "custom/a" => ["other"] });

    assert_eq!(resolver.lookup_mime_types("shared"), ["custom/a", "custom/b"]);
    assert_eq!(resolver.lookup_extensions("custom/a"), ["other"]);
}

#[test]
fn test_provided_methods() {
    let resolver = Resolver::with_map(custom_map());
    assert_eq!(resolver.preferred_extension("custom/mime2"), Some("ext1"));
    assert_eq!(resolver.preferred_mime_type("ext1"), Some("custom/mime1"));
    assert!(resolver.has_extension("image/jpeg", " JPG"));
    assert!(!resolver.has_extension("image/png", "jpg"));
}

#[test]
fn test_error_classification() {
    assert!(Error::EmptyMap.is_argument());
    assert!(Error::AlreadyAdded.is_state());
    assert_eq!(
        Error::AlreadyAdded.to_string(),
        "map with allowed MIME types already added"
    );
}

#[cfg(feature = "json")]
mod json {
    use super::*;
    use mime_kit::ValueKind;
    use serde_json::{json, Value};

    fn invalid_custom_maps() -> Vec<(&'static str, Value)> {
        vec![
            ("Not Declare Mime Type", json!(["ext1", "ext2"])),
            ("Not Array Extensions (string)", json!({ "custom/mime": "ext" })),
            ("Not Array Extensions (integer)", json!({ "custom/mime": 111 })),
            ("Not Array Extensions (boolean)", json!({ "custom/mime": true })),
            ("Not Array Extensions (null)", json!({ "custom/mime": null })),
            ("Not String Extension (array)", json!({ "custom/mime": ["ext1", ["ext2"]] })),
            ("Not String Extension (integer)", json!({ "custom/mime": ["ext1", 111] })),
            ("Not String Extension (boolean)", json!({ "custom/mime": ["ext1", false] })),
            ("Not String Extension (null)", json!({ "custom/mime": ["ext1", null] })),
        ]
    }

    #[test]
    fn test_add_map_rejects_invalid_custom_map() {
        for (case, map) in invalid_custom_maps() {
            let mut resolver = Resolver::new();
            let err = resolver.merge_json(&map).unwrap_err();
            assert!(err.is_argument(), "{case}: {err}");
            assert!(!resolver.is_customized(), "{case}: partially applied");
        }
    }

    #[test]
    fn test_constructor_rejects_invalid_custom_map() {
        for (case, map) in invalid_custom_maps() {
            let err = Resolver::try_from_json(&map).unwrap_err();
            assert!(err.is_argument(), "{case}: {err}");
        }
    }

    #[test]
    fn test_invalid_batch_is_not_partially_applied() {
        let mut resolver = Resolver::new();
        let err = resolver
            .merge_json(&json!({
                "custom/first": ["x-first-only"],
                "custom/second": ["two", 2],
            }))
            .unwrap_err();

        assert_eq!(
            err,
            Error::InvalidExtension {
                mime_type: "custom/second".to_string(),
                kind: ValueKind::Integer,
            }
        );
        assert!(resolver.lookup_extensions("custom/first").is_empty());
        assert!(resolver.lookup_mime_types("x-first-only").is_empty());
        assert!(!resolver.is_customized());
    }

    #[test]
    fn test_add_map_from_json() {
        let resolver = Resolver::try_from_json(&json!({
            "custom/mime1": ["ext1"],
            "custom/mime2": ["ext1", "ext2"],
        }))
        .unwrap();
        assert_custom_lookups(&resolver);
    }

    #[test]
    fn test_mapping_in_a_config_struct() {
        #[derive(serde::Deserialize)]
        struct Config {
            mime_types: Mapping,
        }

        let config: Config = serde_json::from_str(
            r#"{ "mime_types": { "custom/mime1": ["ext1"], "custom/mime2": ["ext1", "ext2"] } }"#,
        )
        .unwrap();
        assert_custom_lookups(&Resolver::with_map(config.mime_types));

        let bad = serde_json::from_str::<Config>(r#"{ "mime_types": { "custom/mime": [1] } }"#);
        assert!(bad.is_err());
    }
}

#[cfg(feature = "mime")]
#[test]
fn test_typed_lookups() {
    use mime_kit::typed::MimeLookupExt;

    let resolver = Resolver::with_map(custom_map());
    let custom: mime::Mime = "custom/mime2; charset=binary".parse().unwrap();
    assert_eq!(resolver.extensions_for(&custom), ["ext1", "ext2"]);
    assert_eq!(resolver.mime_types_for("jpeg"), [mime::IMAGE_JPEG, "image/pjpeg".parse().unwrap()]);
}

#[cfg(feature = "std")]
#[test]
fn test_path_lookups() {
    use std::path::Path;

    let resolver = Resolver::with_map(custom_map());
    assert_eq!(
        mime_kit::path::mime_types_for_path(&resolver, Path::new("dir/file.EXT1")),
        ["custom/mime1", "custom/mime2"]
    );
    assert_eq!(
        mime_kit::path::guess_mime_type(&resolver, Path::new("index.html")),
        Some("text/html")
    );
}

#[cfg(feature = "http")]
#[test]
fn test_content_type_header() {
    use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};
    use mime_kit::header;

    let resolver = Resolver::new();
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("  Image/JPEG "));
    assert_eq!(header::extensions_from_headers(&resolver, &headers), ["jpeg", "jpg", "jpe"]);
}
