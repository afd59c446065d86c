//! Handler for the `check` command.
//!
//! Compares each locale's message files against the built-in defaults
//! and reports untranslated keys. Exits nonzero when coverage is
//! incomplete, so the check can gate a deploy.

use liftgate_core::{Locale, SiteConfig};
use liftgate_messages::CoverageReport;

use crate::error::Error;
use crate::Result;

/// Handle `liftgate check`.
pub fn cmd_check(config_path: Option<&str>, locale: Option<&str>, verbose: bool) -> Result<()> {
    let path = crate::config_handlers::resolve_config_path(config_path);
    let config = SiteConfig::load_or_default(&path);
    let dir = &config.content.messages_dir;

    let only: Option<Locale> = match locale {
        Some(value) => Some(value.parse()?),
        None => None,
    };

    let report = CoverageReport::build(dir);

    let mut checked = 0usize;
    let mut incomplete = 0usize;
    for coverage in &report.locales {
        if let Some(only) = only
            && coverage.locale != only
        {
            continue;
        }
        checked += 1;

        println!(
            "{}: {}/{} keys ({:.1}%)",
            coverage.locale,
            coverage.translated,
            coverage.total,
            coverage.percent()
        );

        if coverage.is_complete() {
            continue;
        }
        incomplete += 1;

        if verbose {
            for key in &coverage.missing {
                println!("  missing {key}");
            }
        } else {
            println!("  {} keys missing (rerun with --verbose to list them)", coverage.missing.len());
        }
    }

    if incomplete > 0 {
        return Err(Error::CoverageFailed {
            incomplete,
            total: checked,
        });
    }

    println!("All checked locales fully translated.");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_pointing_at(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("liftgate.toml");
        let mut config = SiteConfig::default();
        config.content.messages_dir = dir.join("messages");
        config.save(&path).unwrap();
        path
    }

    #[test]
    fn test_check_fails_without_translations() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_pointing_at(dir.path());

        let result = cmd_check(Some(path.to_str().unwrap()), None, false);
        match result {
            Err(Error::CoverageFailed { incomplete, total }) => {
                assert_eq!(incomplete, 5);
                assert_eq!(total, 5);
            }
            other => panic!("expected coverage failure, got {other:?}"),
        }
    }

    #[test]
    fn test_check_rejects_unknown_locale() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_pointing_at(dir.path());

        let result = cmd_check(Some(path.to_str().unwrap()), Some("fr"), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_single_locale_counts_only_that_locale() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_pointing_at(dir.path());

        let result = cmd_check(Some(path.to_str().unwrap()), Some("de"), true);
        match result {
            Err(Error::CoverageFailed { incomplete, total }) => {
                assert_eq!(incomplete, 1);
                assert_eq!(total, 1);
            }
            other => panic!("expected coverage failure, got {other:?}"),
        }
    }
}
