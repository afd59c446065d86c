//! Tolerant per-locale message file loading.
//!
//! Each locale directory may provide any subset of the namespace files.
//! Loading never fails: a missing file is normal (thin locales lean on
//! the defaults), and an unreadable or malformed file is logged and
//! skipped so one broken translation file cannot take a page down.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use liftgate_core::Locale;

use crate::defaults::NAMESPACES;
use crate::merge::deep_merge;

/// Load and fold every namespace file for `locale` under `dir`.
///
/// Returns the combined loaded dictionary as a JSON object, ready to be
/// merged over the defaults. Files contribute in [`NAMESPACES`] order,
/// later files deep-merging over earlier ones.
pub fn load_locale_value(dir: &Path, locale: Locale) -> Value {
    let locale_dir = dir.join(locale.as_str());
    let mut loaded = Value::Object(Map::new());

    for ns in NAMESPACES {
        let path = locale_dir.join(format!("{}.json", ns.file_stem));
        let Some(object) = read_namespace_file(&path) else {
            continue;
        };
        let contribution = match ns.wrap_key {
            Some(key) => {
                let mut wrapper = Map::new();
                wrapper.insert(key.to_string(), Value::Object(object));
                Value::Object(wrapper)
            }
            None => Value::Object(object),
        };
        loaded = deep_merge(loaded, contribution);
    }

    loaded
}

/// Read one namespace file as a JSON object.
///
/// Returns `None` on any failure. A missing file is logged at debug
/// level only; read and parse failures are warnings.
fn read_namespace_file(path: &Path) -> Option<Map<String, Value>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No message file at {}", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Failed to read message file {}: {e}", path.display());
            return None;
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            log::warn!(
                "Message file {} does not hold a JSON object, ignoring",
                path.display()
            );
            None
        }
        Err(e) => {
            log::warn!("Failed to parse message file {}: {e}", path.display());
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
