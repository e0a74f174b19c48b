/// Builds a [`Mapping`](crate::Mapping) from `MIME type => [extensions]` pairs.
///
/// Entries keep the order they are written in.
///
/// # Examples
///
/// ```rust
/// use mime_kit::{mapping, MimeLookup, Resolver};
///
/// let resolver = Resolver::with_map(mapping! {
///     "custom/mime1" => ["ext1"],
///     "custom/mime2" => ["ext1", "ext2"],
/// });
///
/// assert_eq!(resolver.lookup_mime_types("ext1"), ["custom/mime1", "custom/mime2"]);
/// assert!(mapping! {}.is_empty());
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };
    ($($mime:expr => [$($ext:expr),* $(,)?]),+ $(,)?) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert(
                $mime,
                $crate::__private::Vec::<$crate::__private::String>::from([
                    $($crate::__private::String::from($ext)),*
                ]),
            );
        )+
        mapping
    }};
}
