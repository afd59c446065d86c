//! Error types for the Liftgate core library.

/// Errors that can occur while serving or preparing site content.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Locale outside the supported set
    #[error("Unsupported locale: {value}")]
    UnsupportedLocale {
        /// The rejected locale string
        value: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Page rendering error
    #[error("Render error on page '{page}': {message}")]
    Render {
        /// Page that failed to render
        page: String,
        /// What went wrong
        message: String,
    },

    /// Message bundle error (bad shape, unusable tree)
    #[error("Message bundle error: {message}")]
    Messages {
        /// What went wrong
        message: String,
    },

    /// Server error (bind failures, serve loop failures)
    #[error("Server error: {message}")]
    Server {
        /// What went wrong
        message: String,
    },

    /// I/O error (file operations, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML configuration parse error
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// TOML configuration serialization error
    #[error("Configuration write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Convenience `Result` type alias for Liftgate operations.
///
/// This is the standard Result type used throughout the Liftgate codebase.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error should surface as a not-found response.
    ///
    /// Only unsupported locales map to not-found; everything else is an
    /// internal failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UnsupportedLocale { .. })
    }

    /// Creates a new unsupported-locale error.
    pub fn unsupported_locale<S: Into<String>>(value: S) -> Self {
        Error::UnsupportedLocale {
            value: value.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new render error for a named page.
    pub fn render<P, M>(page: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Error::Render {
            page: page.into(),
            message: message.into(),
        }
    }

    /// Creates a new message bundle error.
    pub fn messages<S: Into<String>>(message: S) -> Self {
        Error::Messages {
            message: message.into(),
        }
    }

    /// Creates a new server error.
    pub fn server<S: Into<String>>(message: S) -> Self {
        Error::Server {
            message: message.into(),
        }
    }
}
