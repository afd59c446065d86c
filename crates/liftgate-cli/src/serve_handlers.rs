//! Handler for the `serve` command.

use std::path::PathBuf;

use liftgate_core::SiteConfig;

use crate::config_handlers::resolve_config_path;
use crate::Result;

/// Handle `liftgate serve`.
///
/// Loads the config file (falling back to defaults when absent), applies
/// flag and environment overrides, and runs the server until a shutdown
/// signal arrives.
pub async fn cmd_serve(
    config_path: Option<&str>,
    host: Option<String>,
    port: Option<u16>,
    messages_dir: Option<PathBuf>,
) -> Result<()> {
    let path = resolve_config_path(config_path);
    let config = apply_overrides(SiteConfig::load_or_default(&path), host, port, messages_dir);

    log::info!(
        "serving messages from {} on {}",
        config.content.messages_dir.display(),
        config.bind_addr()
    );

    liftgate_server::serve(config).await?;
    Ok(())
}

/// Flag and environment overrides win over the config file.
fn apply_overrides(
    mut config: SiteConfig,
    host: Option<String>,
    port: Option<u16>,
    messages_dir: Option<PathBuf>,
) -> SiteConfig {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(dir) = messages_dir {
        config.content.messages_dir = dir;
    }
    config
}

// ============================================================================
// Tests
// ============================================================================
