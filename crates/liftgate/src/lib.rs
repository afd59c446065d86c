//! Umbrella crate for the Liftgate site server.
//!
//! Re-exports the component crates; use feature flags to pull in the
//! simulation, page rendering, or the full HTTP server.

#![doc = include_str!("../README.md")]

pub use liftgate_core as core;
pub use liftgate_messages as messages;

#[cfg(feature = "sim")]
pub use liftgate_sim as sim;

#[cfg(feature = "pages")]
pub use liftgate_pages as pages;

#[cfg(feature = "server")]
pub use liftgate_server as server;
