//! HTTP server for the Liftgate site.
//!
//! Wires the page renderers, message bundles, and the demo elevator
//! simulation into one axum application. See [`build_router`] for the
//! routing surface and [`serve`] for the lifecycle.
//!
//! # Modules
//!
//! - [`middleware`]: Locale prefix resolution as a Tower layer
//! - [`routes`]: Router assembly and page handlers
//! - [`demo`]: Demo session table and its JSON API
//! - [`health`]: Health check endpoint
//! - [`assets`]: Compiled-in static assets
//! - [`state`]: Shared application state
//! - [`server`]: Bind, serve, graceful shutdown

#![doc = include_str!("../README.md")]

pub mod assets;
pub mod demo;
pub mod error;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use demo::{SessionTable, MAX_SESSIONS};
pub use health::HealthResponse;
pub use middleware::LocaleLayer;
pub use routes::build_router;
pub use server::serve;
pub use state::AppState;
