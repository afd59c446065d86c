//! # liftgate-cli
//!
//! Command-line tools for the Liftgate site server:
//! - `serve`: run the HTTP server
//! - `check`: verify translation coverage against the built-in defaults
//! - `config`: inspect and edit the TOML configuration file

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod check_handlers;
pub mod cli;
pub mod config_handlers;
pub mod error;
pub mod serve_handlers;

pub use error::{Error, Result};
