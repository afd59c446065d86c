//! Services page: offerings, the working process, and a service CTA.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::MessageBundle;

use crate::chrome::Chrome;
use crate::model::{Card, Cta, FeatureCard};
use crate::render_error;

/// Offering keys, in display order.
const SERVICE_KEYS: [&str; 3] = ["maintenance", "repair", "installation"];

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesPage {
    pub chrome: Chrome,
    pub hero: Cta,
    pub services: Vec<FeatureCard>,
    pub process_title: String,
    pub steps: Vec<Card>,
    pub cta: Cta,
}

impl ServicesPage {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let locale = bundle.locale();
        let section = bundle.section("Services");

        let services = SERVICE_KEYS
            .iter()
            .map(|key| FeatureCard {
                title: section.text(&format!("services.{key}.title")),
                description: section.text(&format!("services.{key}.description")),
                features: section.list(&format!("services.{key}.features")),
            })
            .collect();

        let steps = (0..4)
            .map(|i| Card {
                title: section.text(&format!("process.steps.{i}.title")),
                description: section.text(&format!("process.steps.{i}.description")),
            })
            .collect();

        Self {
            chrome: Chrome::build(bundle, "/services"),
            hero: Cta {
                title: section.text("hero.title"),
                description: section.text("hero.description"),
                button: String::new(),
                href: String::new(),
            },
            services,
            process_title: section.text("process.title"),
            steps,
            cta: Cta {
                title: section.text("cta.title"),
                description: section.text("cta.description"),
                button: section.text("cta.button"),
                href: format!("/{locale}/contact"),
            },
        }
    }
}

/// Render the services page to HTML.
pub fn render_services(bundle: &MessageBundle) -> Result<String> {
    ServicesPage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("services", e))
}

// ============================================================================
// Tests
// ============================================================================
