//! Site configuration loaded from TOML.
//!
//! Configuration is deliberately small: where to listen and where the
//! per-locale message files live. Every field has a default, so a missing
//! or partial `liftgate.toml` is never fatal; the server falls back to
//! serving the built-in English defaults from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "liftgate.toml";

/// HTTP listener settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind (0 picks an ephemeral port)
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Content source settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding `{locale}/{namespace}.json` message files
    pub messages_dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            messages_dir: PathBuf::from("messages"),
        }
    }
}

/// Top-level site configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Content source settings
    pub content: ContentConfig,
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is
    /// missing or unreadable.
    ///
    /// A missing file is normal (fresh checkout, container image); any
    /// other failure is logged as a warning and also degrades to the
    /// defaults rather than refusing to start.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "Failed to load config from {}: {e}, using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Write configuration as pretty-printed TOML, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Checks structural constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("server.host must not be empty"));
        }
        if self.content.messages_dir.as_os_str().is_empty() {
            return Err(Error::config("content.messages_dir must not be empty"));
        }
        Ok(())
    }

    /// The `host:port` string the listener binds.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.content.messages_dir, PathBuf::from("messages"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liftgate.toml");

        let mut config = SiteConfig::default();
        config.server.port = 9090;
        config.content.messages_dir = PathBuf::from("data/messages");

        config.save(&path).unwrap();
        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liftgate.toml");
        fs::write(&path, "[server]\nport = 3000\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.content.messages_dir, PathBuf::from("messages"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load_or_default(&dir.path().join("nope.toml"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_or_default_on_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("liftgate.toml");
        fs::write(&path, "this is not toml = = =").unwrap();

        let config = SiteConfig::load_or_default(&path);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let mut config = SiteConfig::default();
        config.server.host = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.host"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/conf/liftgate.toml");
        SiteConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }
}
