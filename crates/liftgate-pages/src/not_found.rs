//! Localized 404 page.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::MessageBundle;

use crate::chrome::Chrome;
use crate::render_error;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub chrome: Chrome,
    pub title: String,
    pub description: String,
    pub back: String,
    pub back_href: String,
}

impl NotFoundPage {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let locale = bundle.locale();
        let section = bundle.section("NotFound");

        Self {
            chrome: Chrome::build(bundle, ""),
            title: section.text("title"),
            description: section.text("description"),
            back: section.text("back"),
            back_href: format!("/{locale}"),
        }
    }
}

/// Render the 404 page to HTML.
pub fn render_not_found(bundle: &MessageBundle) -> Result<String> {
    NotFoundPage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("not_found", e))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use liftgate_core::Locale;

    #[test]
    fn test_renders_message_and_back_link() {
        let bundle = MessageBundle::defaults(Locale::En);
        let html = render_not_found(&bundle).unwrap();

        assert!(html.contains("Page Not Found"));
        assert!(html.contains("Back to Home"));
        assert!(html.contains("href=\"/en\""));
    }

    #[test]
    fn test_rtl_locale_keeps_direction() {
        let html = render_not_found(&MessageBundle::defaults(Locale::Ar)).unwrap();
        assert!(html.contains("dir=\"rtl\""));
    }
}
