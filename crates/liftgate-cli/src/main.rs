//! Liftgate CLI
//!
//! Entry point for the `liftgate` binary.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use liftgate_cli::cli::{Args, Command};
use liftgate_cli::{check_handlers, config_handlers, serve_handlers};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Serve {
            host,
            port,
            messages_dir,
        } => {
            serve_handlers::cmd_serve(args.config.as_deref(), host, port, messages_dir).await?;
        }
        Command::Check { locale, verbose } => {
            check_handlers::cmd_check(args.config.as_deref(), locale.as_deref(), verbose)?;
        }
        Command::Config { action } => {
            config_handlers::handle_config_command(args.config.as_deref(), action)?;
        }
    }

    Ok(())
}
