//! Deep merge of a decoded config document onto an existing value tree.
//!
//! This is what gives the overrides file its semantics: keys present in the
//! overlay win, keys absent from it keep whatever the destination held.

use serde_json::{Map, Value};

/// Merge `overlay` into `base` in place.
///
/// - Mappings are merged key by key, recursively
/// - Everything else in the overlay, including an explicit null, replaces the
///   base value entirely
pub fn merge_into(base: &mut Value, overlay: Value) {
    merge(base, overlay, false);
}

/// Like [`merge_into`], but a single-key mapping whose key differs from a
/// single-key base mapping replaces it instead of joining it.
///
/// That is the shape of an externally tagged enum switching variants
/// (`{local: {..}}` to `{s3: {..}}`), which a plain merge would turn into a
/// two-key mapping no enum accepts.
pub fn merge_variants_into(base: &mut Value, overlay: Value) {
    merge(base, overlay, true);
}

fn merge(base: &mut Value, overlay: Value, replace_variants: bool) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map))
            if !(replace_variants && switches_variant(base_map, &overlay_map)) =>
        {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, overlay_value, replace_variants),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn switches_variant(base: &Map<String, Value>, overlay: &Map<String, Value>) -> bool {
    base.len() == 1 && overlay.len() == 1 && base.keys().ne(overlay.keys())
}

/// Owned variant of [`merge_into`].
///
/// # Example
/// ```
/// use serde_json::json;
/// use yaml_locator::config::deep_merge;
///
/// let primary = json!({ "db": { "host": "localhost", "port": 5432 }, "tags": ["a", "b"] });
/// let overrides = json!({ "db": { "port": 6543 }, "tags": ["c"] });
/// assert_eq!(
///     deep_merge(primary, overrides),
///     json!({ "db": { "host": "localhost", "port": 6543 }, "tags": ["c"] })
/// );
/// ```
pub fn deep_merge(mut base: Value, overlay: Value) -> Value {
    merge_into(&mut base, overlay);
    base
}
