//! Shared application state.

use std::sync::Arc;

use liftgate_core::{Locale, SiteConfig};
use liftgate_messages::MessageBundle;

use crate::demo::SessionTable;

/// State shared by every handler.
///
/// Page rendering never mutates it; the demo session table carries its
/// own lock.
pub struct AppState {
    config: SiteConfig,
    sessions: SessionTable,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            sessions: SessionTable::new(),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionTable {
        &self.sessions
    }

    /// The merged message bundle for one request.
    ///
    /// Reads the locale's namespace files fresh from disk; a missing or
    /// broken data directory degrades to the built-in defaults.
    pub fn bundle(&self, locale: Locale) -> MessageBundle {
        MessageBundle::load(&self.config.content.messages_dir, locale)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_falls_back_without_data_dir() {
        let mut config = SiteConfig::default();
        config.content.messages_dir = "/nonexistent/liftgate-msgs".into();
        let state = AppState::new(config);

        let bundle = state.bundle(Locale::En);
        assert_eq!(bundle.text("Home.title"), "BT Elevator");
    }

    #[test]
    fn test_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
