//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Liftgate site server administration
#[derive(Parser, Debug)]
#[command(name = "liftgate", version)]
#[command(about = "Multi-language elevator company site server", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "LIFTGATE_CONFIG")]
    pub config: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the site server
    Serve {
        /// Bind host (overrides the config file)
        #[arg(long, env = "LIFTGATE_HOST")]
        host: Option<String>,

        /// Bind port (overrides the config file)
        #[arg(long, env = "LIFTGATE_PORT")]
        port: Option<u16>,

        /// Message data directory (overrides the config file)
        #[arg(long, env = "LIFTGATE_MESSAGES_DIR")]
        messages_dir: Option<PathBuf>,
    },

    /// Check translation coverage against the built-in defaults
    Check {
        /// Check a single locale instead of all of them
        #[arg(long)]
        locale: Option<String>,

        /// List every missing key instead of a summary
        #[arg(long)]
        verbose: bool,
    },

    /// Inspect or edit the configuration file
    Config {
        /// Config operation
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Operations on the configuration file.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Get a configuration value by dotted key
    Get {
        /// Key such as `server.port`
        key: String,
    },

    /// Set a configuration value by dotted key
    Set {
        /// Key such as `server.port`
        key: String,
        /// New value
        value: String,
    },

    /// Create a default configuration file
    Init {
        /// Target file (defaults to ./liftgate.toml)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let args = Args::try_parse_from([
            "liftgate",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
        ])
        .unwrap();

        match args.command {
            Command::Serve { host, port, .. } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(9090));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_set() {
        let args =
            Args::try_parse_from(["liftgate", "config", "set", "server.port", "8081"]).unwrap();

        match args.command {
            Command::Config {
                action: ConfigAction::Set { key, value },
            } => {
                assert_eq!(key, "server.port");
                assert_eq!(value, "8081");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
