//! Handler functions for config CLI commands.
//!
//! Implements the config subcommands (`path`, `get`, `set`, `init`) over
//! [`SiteConfig`], plus the TOML dotted-key helpers they are built on.

use std::path::PathBuf;

use liftgate_core::{Error, SiteConfig, DEFAULT_CONFIG_FILE};

use crate::cli::ConfigAction;
use crate::Result;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => cmd_config_get(config_path, &key),
        ConfigAction::Set { key, value } => cmd_config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

/// The config file the other commands will operate on.
///
/// An explicit path wins; otherwise `liftgate.toml` in the working
/// directory, matching what `serve` reads.
pub fn resolve_config_path(config_path: Option<&str>) -> PathBuf {
    match config_path {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = resolve_config_path(config_path);
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `liftgate config init` to create it)");
    }
    Ok(())
}

/// Get a configuration value by dotted key.
///
/// A missing file is not an error here: the defaults are what `serve`
/// would use, so that is what gets printed.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<()> {
    let path = resolve_config_path(config_path);
    let config = SiteConfig::load_or_default(&path);
    let value =
        toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;

    match get_nested_value(&value, key) {
        Some(val) => {
            println!("{}", format_toml_value(val));
            Ok(())
        }
        None => Err(Error::config(format!("Key '{key}' not found in configuration")).into()),
    }
}

/// Set a configuration value by dotted key in the config file.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<()> {
    let path = resolve_config_path(config_path);
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `liftgate config init` first.",
            path.display()
        ))
        .into());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(&path, toml_str)
        .map_err(|e| Error::config(format!("Failed to write {}: {e}", path.display())))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        ))
        .into());
    }

    SiteConfig::default().save(&path)?;

    println!("Config file created at {}", path.display());
    Ok(())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let mut current = root;

    for (i, part) in parts.iter().enumerate() {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;

        if i == parts.len() - 1 {
            table.insert(part.to_string(), value);
            return Ok(());
        }

        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    Err(Error::config("Empty key path").into())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool, then integer, then float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    if s == "true" {
        return toml::Value::Boolean(true);
    }
    if s == "false" {
        return toml::Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
