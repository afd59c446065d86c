//! Merged message bundles and dotted-key lookup.
//!
//! A [`MessageBundle`] is the unit handed to page rendering: one locale,
//! one merged dictionary. Lookup never fails: a missing or mistyped key
//! logs a warning and renders as the key itself, which is ugly on the
//! page and loud in the logs, exactly what a missed translation should
//! be.

use std::path::Path;

use serde_json::Value;

use liftgate_core::Locale;

use crate::defaults::default_messages;
use crate::loader::load_locale_value;
use crate::merge::deep_merge;

// ============================================================================
// Interpolation
// ============================================================================

/// Replace `{name}` placeholders in `template` from `args`.
///
/// Single pass, no escaping. Placeholders without a matching argument are
/// left verbatim so a template mismatch stays visible rather than
/// silently vanishing.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        match candidate.find('}') {
            Some(end) => {
                let token = &candidate[1..end];
                match args.iter().find(|(name, _)| *name == token) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&candidate[..=end]),
                }
                rest = &candidate[end + 1..];
            }
            None => {
                // Unterminated brace, emit the remainder untouched.
                out.push_str(candidate);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Walk a dotted key through a JSON tree.
///
/// Numeric segments index into arrays; everything else is object field
/// access.
pub(crate) fn lookup_path<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    let mut node = root;
    for segment in key.split('.') {
        node = match node {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

// ============================================================================
// MessageBundle
// ============================================================================

/// One locale's merged message dictionary.
#[derive(Clone, Debug)]
pub struct MessageBundle {
    locale: Locale,
    root: Value,
}

impl MessageBundle {
    /// Assemble the bundle for `locale` from the files under `dir`.
    ///
    /// Never fails: whatever the locale directory provides is deep-merged
    /// over the built-in English defaults, so every default key resolves.
    pub fn load(dir: &Path, locale: Locale) -> Self {
        let loaded = load_locale_value(dir, locale);
        Self {
            locale,
            root: deep_merge(default_messages(), loaded),
        }
    }

    /// The defaults-only bundle, for rendering without any data directory.
    pub fn defaults(locale: Locale) -> Self {
        Self {
            locale,
            root: default_messages(),
        }
    }

    /// Wrap an already-merged dictionary.
    pub fn from_value(locale: Locale, root: Value) -> Self {
        Self { locale, root }
    }

    /// The locale this bundle was assembled for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The merged dictionary.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Raw lookup of a dotted key. Numeric segments index into arrays.
    pub fn get(&self, key: &str) -> Option<&Value> {
        lookup_path(&self.root, key)
    }

    /// Look up a string, falling back to the key itself.
    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                log::warn!("Message key '{key}' ({}) is not a string", self.locale);
                key.to_string()
            }
            None => {
                log::warn!("Missing message key '{key}' ({})", self.locale);
                key.to_string()
            }
        }
    }

    /// Look up a string, falling back to an explicit default.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Look up a string and interpolate `{name}` placeholders.
    pub fn text_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.text(key), args)
    }

    /// Look up a string array. Missing or mistyped entries are dropped.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => {
                        log::warn!(
                            "Non-string entry under message key '{key}' ({}): {other}",
                            self.locale
                        );
                        None
                    }
                })
                .collect(),
            Some(_) => {
                log::warn!("Message key '{key}' ({}) is not an array", self.locale);
                Vec::new()
            }
            None => {
                log::warn!("Missing message list '{key}' ({})", self.locale);
                Vec::new()
            }
        }
    }

    /// A lookup view scoped under a top-level namespace.
    pub fn section<'a>(&'a self, name: &'a str) -> Section<'a> {
        Section {
            bundle: self,
            prefix: name,
        }
    }
}

// ============================================================================
// Section
// ============================================================================

/// A namespace-scoped view over a bundle.
///
/// Mirrors how pages read their strings: scope once to `Home` or
/// `Contact`, then use short keys like `hero.title`.
#[derive(Clone, Copy, Debug)]
pub struct Section<'a> {
    bundle: &'a MessageBundle,
    prefix: &'a str,
}

impl<'a> Section<'a> {
    fn full_key(&self, key: &str) -> String {
        format!("{}.{key}", self.prefix)
    }

    /// Raw lookup relative to the section prefix.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.bundle.get(&self.full_key(key))
    }

    /// String lookup relative to the section prefix.
    pub fn text(&self, key: &str) -> String {
        self.bundle.text(&self.full_key(key))
    }

    /// String lookup with an explicit fallback.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        self.bundle.text_or(&self.full_key(key), fallback)
    }

    /// Interpolating string lookup.
    pub fn text_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.bundle.text_args(&self.full_key(key), args)
    }

    /// String-array lookup relative to the section prefix.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.bundle.list(&self.full_key(key))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let bundle = MessageBundle::defaults(Locale::En);
        assert_eq!(bundle.text("Home.hero.cta"), "Learn More");
        assert_eq!(bundle.text("Navigation.home"), "Home");
    }

    #[test]
    fn test_array_index_lookup() {
        let bundle = MessageBundle::defaults(Locale::En);
        assert_eq!(
            bundle.text("Products.products.passenger.features.0"),
            "Smooth and quiet operation"
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let bundle = MessageBundle::defaults(Locale::En);
        assert_eq!(bundle.text("Home.hero.nope"), "Home.hero.nope");
        assert_eq!(bundle.text("Nope.at.all"), "Nope.at.all");
    }

    #[test]
    fn test_non_string_terminal_falls_back_to_key() {
        let bundle = MessageBundle::defaults(Locale::En);
        // Home.hero is an object, not a string.
        assert_eq!(bundle.text("Home.hero"), "Home.hero");
    }

    #[test]
    fn test_text_or_uses_explicit_fallback() {
        let bundle = MessageBundle::defaults(Locale::Tr);
        assert_eq!(bundle.text_or("Contact.missing", "Telefon"), "Telefon");
        assert_eq!(
            bundle.text_or("Contact.contact.phone.title", "Telefon"),
            "Phone"
        );
    }

    #[test]
    fn test_list_lookup() {
        let bundle = MessageBundle::defaults(Locale::En);
        let features = bundle.list("Services.services.repair.features");
        assert_eq!(features.len(), 4);
        assert_eq!(features[0], "24/7 emergency callout");
    }

    #[test]
    fn test_list_on_missing_key_is_empty() {
        let bundle = MessageBundle::defaults(Locale::En);
        assert!(bundle.list("Services.services.nope.features").is_empty());
        assert!(bundle.list("Home.hero.title").is_empty());
    }

    #[test]
    fn test_list_drops_non_string_entries() {
        let bundle = MessageBundle::from_value(
            Locale::En,
            json!({"Probe": {"items": ["ok", 42, "also ok"]}}),
        );
        assert_eq!(bundle.list("Probe.items"), vec!["ok", "also ok"]);
    }

    #[test]
    fn test_section_scoping() {
        let bundle = MessageBundle::defaults(Locale::En);
        let home = bundle.section("Home");
        assert_eq!(home.text("hero.title"), "Modern Elevator Solutions");
        assert_eq!(home.text("products.items.cargo.title"), "Cargo Elevators");
        assert!(home.get("services.items").is_some());
    }

    #[test]
    fn test_load_merges_locale_files_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let tr_dir = dir.path().join("tr");
        std::fs::create_dir_all(&tr_dir).unwrap();
        std::fs::write(
            tr_dir.join("navigation.json"),
            r#"{"home": "Anasayfa", "products": "Ürünler"}"#,
        )
        .unwrap();

        let bundle = MessageBundle::load(dir.path(), Locale::Tr);
        assert_eq!(bundle.text("Navigation.home"), "Anasayfa");
        assert_eq!(bundle.text("Navigation.products"), "Ürünler");
        // Untranslated keys fall through to the defaults.
        assert_eq!(bundle.text("Navigation.language"), "Language");
        assert_eq!(bundle.text("Home.hero.cta"), "Learn More");
    }

    #[test]
    fn test_load_with_empty_directory_equals_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = MessageBundle::load(dir.path(), Locale::Ru);
        assert_eq!(bundle.root(), MessageBundle::defaults(Locale::Ru).root());
    }

    // ------------------------------------------------------------------
    // Interpolation
    // ------------------------------------------------------------------

    #[test]
    fn test_interpolate_replaces_known_placeholder() {
        assert_eq!(interpolate("Floor {number}", &[("number", "7")]), "Floor 7");
    }

    #[test]
    fn test_interpolate_multiple_and_repeated() {
        let out = interpolate(
            "{a} and {b} and {a}",
            &[("a", "one"), ("b", "two")],
        );
        assert_eq!(out, "one and two and one");
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholder() {
        assert_eq!(
            interpolate("Floor {number}", &[("floor", "7")]),
            "Floor {number}"
        );
    }

    #[test]
    fn test_interpolate_without_placeholders_is_identity() {
        assert_eq!(interpolate("Call", &[("number", "7")]), "Call");
    }

    #[test]
    fn test_interpolate_unterminated_brace() {
        assert_eq!(interpolate("broken {number", &[("number", "7")]), "broken {number");
    }

    #[test]
    fn test_text_args_end_to_end() {
        let bundle = MessageBundle::defaults(Locale::En);
        let out = bundle.text_args("Elevator.currentFloor", &[("number", "3")]);
        assert_eq!(out, "Current Floor: 3");
    }
}
