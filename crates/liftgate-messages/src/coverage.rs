//! Per-locale key coverage reporting.
//!
//! The merged bundle always covers the default key set by construction,
//! so coverage here is measured against the raw loaded files: which
//! default keys does each locale actually translate, and which are
//! silently riding on the English fallback.

use std::path::Path;

use serde_json::Value;

use liftgate_core::Locale;

use crate::bundle::lookup_path;
use crate::defaults::default_messages;
use crate::loader::load_locale_value;

/// Collect every leaf key of a dictionary as sorted dotted paths.
///
/// Arrays count as single leaves: they override as whole values, so a
/// translated list is either there or not. Element counts may differ
/// between locales by design.
pub fn leaf_keys(value: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    collect_leaves(value, String::new(), &mut keys);
    keys.sort_unstable();
    keys
}

fn collect_leaves(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect_leaves(child, path, out);
            }
        }
        _ => out.push(prefix),
    }
}

/// Default-key translation status for one locale's files.
#[derive(Clone, Debug)]
pub struct LocaleCoverage {
    /// Locale the files belong to
    pub locale: Locale,
    /// Number of default leaf keys
    pub total: usize,
    /// Default leaf keys the locale's files provide
    pub translated: usize,
    /// Default leaf keys the locale's files are missing, sorted
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    /// Translated share as a percentage.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.translated as f64 * 100.0 / self.total as f64
        }
    }

    /// Whether every default key is translated.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Coverage across every supported locale.
#[derive(Clone, Debug)]
pub struct CoverageReport {
    /// Per-locale coverage, in [`Locale::ALL`] order
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// Measure every supported locale's files under `dir` against the
    /// default key set.
    pub fn build(dir: &Path) -> Self {
        let reference = leaf_keys(&default_messages());
        let locales = Locale::ALL
            .iter()
            .map(|&locale| {
                let loaded = load_locale_value(dir, locale);
                let missing: Vec<String> = reference
                    .iter()
                    .filter(|key| lookup_path(&loaded, key).is_none())
                    .cloned()
                    .collect();
                LocaleCoverage {
                    locale,
                    total: reference.len(),
                    translated: reference.len() - missing.len(),
                    missing,
                }
            })
            .collect();
        Self { locales }
    }

    /// Whether every locale translates every default key.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }
}

/// Default leaf keys absent from one locale's files.
pub fn missing_keys(dir: &Path, locale: Locale) -> Vec<String> {
    let loaded = load_locale_value(dir, locale);
    leaf_keys(&default_messages())
        .into_iter()
        .filter(|key| lookup_path(&loaded, key).is_none())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::bundle::MessageBundle;
    use serde_json::json;
    use std::fs;

    #[test]
    fn test_leaf_keys_flattens_nested_objects() {
        let keys = leaf_keys(&json!({"a": {"b": "x", "c": {"d": "y"}}, "e": "z"}));
        assert_eq!(keys, vec!["a.b", "a.c.d", "e"]);
    }

    #[test]
    fn test_leaf_keys_treats_arrays_as_leaves() {
        let keys = leaf_keys(&json!({"features": ["one", "two"], "t": "s"}));
        assert_eq!(keys, vec!["features", "t"]);
    }

    #[test]
    fn test_empty_directory_has_zero_coverage() {
        let dir = tempfile::tempdir().unwrap();
        let report = CoverageReport::build(dir.path());

        assert_eq!(report.locales.len(), Locale::ALL.len());
        assert!(!report.is_complete());
        for coverage in &report.locales {
            assert_eq!(coverage.translated, 0);
            assert_eq!(coverage.percent(), 0.0);
            assert_eq!(coverage.missing.len(), coverage.total);
        }
    }

    #[test]
    fn test_full_dump_reaches_full_coverage() {
        let dir = tempfile::tempdir().unwrap();
        // The index file spreads top-level namespaces, so dumping the
        // whole default dictionary into it covers every key.
        let tr_dir = dir.path().join("tr");
        fs::create_dir_all(&tr_dir).unwrap();
        fs::write(
            tr_dir.join("index.json"),
            serde_json::to_string(&default_messages()).unwrap(),
        )
        .unwrap();

        let report = CoverageReport::build(dir.path());
        let tr = &report.locales[0];
        assert_eq!(tr.locale, Locale::Tr);
        assert!(tr.is_complete(), "missing: {:?}", tr.missing);
        assert_eq!(tr.percent(), 100.0);

        let en = &report.locales[1];
        assert_eq!(en.locale, Locale::En);
        assert!(!en.is_complete());
    }

    #[test]
    fn test_partial_files_report_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let de_dir = dir.path().join("de");
        fs::create_dir_all(&de_dir).unwrap();
        fs::write(de_dir.join("navigation.json"), r#"{"home": "Startseite"}"#).unwrap();

        let missing = missing_keys(dir.path(), Locale::De);
        assert!(!missing.contains(&"Navigation.home".to_string()));
        assert!(missing.contains(&"Navigation.products".to_string()));
        assert!(missing.contains(&"Home.hero.title".to_string()));
    }

    #[test]
    fn test_merged_bundle_covers_defaults_for_every_locale() {
        // After merging, no default key is lost, with or without files
        // on disk.
        let dir = tempfile::tempdir().unwrap();
        let ar_dir = dir.path().join("ar");
        fs::create_dir_all(&ar_dir).unwrap();
        fs::write(ar_dir.join("navigation.json"), r#"{"home": "الرئيسية"}"#).unwrap();

        let reference = leaf_keys(&default_messages());
        for locale in Locale::ALL {
            let bundle = MessageBundle::load(dir.path(), locale);
            for key in &reference {
                assert!(
                    bundle.get(key).is_some(),
                    "locale {locale} lost default key {key}"
                );
            }
        }
    }
}
