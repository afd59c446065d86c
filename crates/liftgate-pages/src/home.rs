//! The landing page: hero, featured products and services, contact CTA.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::MessageBundle;

use crate::chrome::Chrome;
use crate::model::{Card, Cta};
use crate::render_error;

/// Featured item keys, in display order.
const PRODUCT_ITEMS: [&str; 3] = ["passenger", "cargo", "panoramic"];
const SERVICE_ITEMS: [&str; 3] = ["maintenance", "support", "safety"];

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub chrome: Chrome,
    pub hero: Cta,
    pub products_title: String,
    pub products_more: String,
    pub products_href: String,
    pub product_cards: Vec<Card>,
    pub services_title: String,
    pub services_more: String,
    pub services_href: String,
    pub service_cards: Vec<Card>,
    pub contact: Cta,
}

impl HomePage {
    /// Build the home view model from a merged bundle.
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let locale = bundle.locale();
        let home = bundle.section("Home");

        let product_cards = PRODUCT_ITEMS
            .iter()
            .map(|item| Card {
                title: home.text(&format!("products.items.{item}.title")),
                description: home.text(&format!("products.items.{item}.description")),
            })
            .collect();

        let service_cards = SERVICE_ITEMS
            .iter()
            .map(|item| Card {
                title: home.text(&format!("services.items.{item}.title")),
                description: home.text(&format!("services.items.{item}.description")),
            })
            .collect();

        Self {
            chrome: Chrome::build(bundle, ""),
            hero: Cta {
                title: home.text("hero.title"),
                description: home.text("hero.description"),
                button: home.text("hero.cta"),
                href: format!("/{locale}/products"),
            },
            products_title: home.text("products.title"),
            products_more: home.text("products.viewMore"),
            products_href: format!("/{locale}/products"),
            product_cards,
            services_title: home.text("services.title"),
            services_more: home.text("services.viewMore"),
            services_href: format!("/{locale}/services"),
            service_cards,
            contact: Cta {
                title: home.text("contact.title"),
                description: home.text("contact.description"),
                button: home.text("contact.cta"),
                href: format!("/{locale}/contact"),
            },
        }
    }
}

/// Render the home page to HTML.
pub fn render_home(bundle: &MessageBundle) -> Result<String> {
    HomePage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("home", e))
}

// ============================================================================
// Tests
// ============================================================================
