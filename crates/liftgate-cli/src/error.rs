//! Error types for liftgate-cli

use thiserror::Error;

/// Result type alias for liftgate-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in liftgate-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from liftgate-core
    #[error("Core error: {0}")]
    Core(#[from] liftgate_core::Error),

    /// `liftgate check` found untranslated keys
    #[error("Translation coverage check failed: {incomplete} of {total} locales incomplete")]
    CoverageFailed {
        /// Locales missing at least one key
        incomplete: usize,
        /// Locales checked
        total: usize,
    },
}
