//! Shared types across the Liftgate workspace.
//!
//! This crate provides the foundational types used across all Liftgate
//! crates. It has no internal Liftgate dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`locale`]: Supported locales and text direction
//! - [`error`]: Error types and Result alias
//! - [`config`]: Site configuration loaded from TOML

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod locale;

// Re-export key types at crate root for convenience
pub use config::{ContentConfig, ServerConfig, SiteConfig, DEFAULT_CONFIG_FILE};
pub use error::{Error, Result};
pub use locale::{Locale, TextDirection};
