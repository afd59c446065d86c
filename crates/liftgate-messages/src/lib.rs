//! Per-locale translation bundles.
//!
//! A bundle is a nested JSON value mapping dotted keys (for example
//! `Products.products.passenger.features.0`) to localized strings or
//! string arrays. Bundles are assembled per request: namespace files are
//! loaded from disk, folded together, and deep-merged over the built-in
//! English defaults. Load failures degrade to the defaults; lookup
//! failures degrade to the key itself. Neither is ever fatal.
//!
//! # Modules
//!
//! - [`merge`]: Recursive dictionary merge
//! - [`defaults`]: Built-in English dictionary and namespace table
//! - [`loader`]: Tolerant per-locale file loading
//! - [`bundle`]: [`MessageBundle`] lookup and interpolation
//! - [`coverage`]: Per-locale key coverage reporting

#![doc = include_str!("../README.md")]

pub mod bundle;
pub mod coverage;
pub mod defaults;
pub mod loader;
pub mod merge;

// Re-export key types at crate root for convenience
pub use bundle::{MessageBundle, Section, interpolate};
pub use coverage::{CoverageReport, LocaleCoverage};
pub use defaults::{NAMESPACES, Namespace, default_messages};
pub use loader::load_locale_value;
pub use merge::deep_merge;
