use super::value::{OptionMap, OptionValue};

/// Consolidates the untrimmed maps of a composed option node.
///
/// `layers` is ordered most-derived first. Ancestors are applied first and a
/// more derived layer only replaces a key when its own value is defined, so
/// an unset field never hides an ancestor's setting. Keys keep the position
/// of their first appearance, starting from the most basic ancestor.
#[must_use]
pub fn consolidate<I>(layers: I) -> OptionMap
where
    I: IntoIterator<Item = OptionMap>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut merged = OptionMap::new();
    for layer in layers.into_iter().rev() {
        for (key, value) in layer {
            match merged.get_mut(&key) {
                Some(existing) => {
                    if !value.is_undefined() {
                        *existing = value;
                    }
                }
                None => {
                    merged.insert(key, value);
                }
            }
        }
    }
    merged
}

/// Deep-merges `source` into `target`.
///
/// With `overwrite` set, values from `source` win; otherwise only keys
/// missing from `target` are filled in. Nested objects merge recursively.
pub fn merge_maps(target: &mut OptionMap, source: &OptionMap, overwrite: bool) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(OptionValue::Object(existing)), OptionValue::Object(incoming)) => {
                merge_maps(existing, incoming, overwrite);
            }
            (Some(existing), incoming) => {
                if overwrite || existing.is_undefined() {
                    *existing = incoming.clone();
                }
            }
            (None, incoming) => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}
