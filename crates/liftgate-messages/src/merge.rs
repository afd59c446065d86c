//! Recursive dictionary merge.
//!
//! The merge prefers loaded values over defaults key-by-key: when both
//! sides hold an object the merge recurses, otherwise the loaded value
//! replaces the default as a whole. Arrays and primitives are whole-value
//! overrides: a translated features list stands on its own and is never
//! spliced element-by-element with the English one.

use serde_json::Value;

/// Merge `loaded` over `defaults`, recursing into nested objects.
///
/// Every key present in `loaded` wins, including explicit `null`s. Keys
/// only present in `defaults` survive untouched, which is what keeps a
/// partially translated locale renderable.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use liftgate_messages::deep_merge;
///
/// let merged = deep_merge(
///     json!({"a": {"b": "x", "c": "y"}}),
///     json!({"a": {"b": "z"}}),
/// );
/// assert_eq!(merged, json!({"a": {"b": "z", "c": "y"}}));
/// ```
pub fn deep_merge(defaults: Value, loaded: Value) -> Value {
    match (defaults, loaded) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.remove(&key) {
                    Some(existing) => {
                        base.insert(key, deep_merge(existing, value));
                    }
                    None => {
                        base.insert(key, value);
                    }
                }
            }
            Value::Object(base)
        }
        // Anything but an object-over-object pairing is a whole-value
        // override in favor of the loaded side.
        (_, loaded) => loaded,
    }
}

// ============================================================================
// Tests
// ============================================================================
