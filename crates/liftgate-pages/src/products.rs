//! Product catalog page.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::MessageBundle;

use crate::chrome::Chrome;
use crate::model::{Cta, FeatureCard};
use crate::render_error;

/// Catalog entry keys, in display order.
const PRODUCT_KEYS: [&str; 4] = ["passenger", "freight", "residential", "commercial"];

#[derive(Template)]
#[template(path = "products.html")]
pub struct ProductsPage {
    pub chrome: Chrome,
    pub hero: Cta,
    pub products: Vec<FeatureCard>,
    pub cta: Cta,
    pub learn_more: String,
    pub learn_more_href: String,
}

impl ProductsPage {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let locale = bundle.locale();
        let section = bundle.section("Products");

        let products = PRODUCT_KEYS
            .iter()
            .map(|key| FeatureCard {
                title: section.text(&format!("products.{key}.title")),
                description: section.text(&format!("products.{key}.description")),
                features: section.list(&format!("products.{key}.features")),
            })
            .collect();

        Self {
            chrome: Chrome::build(bundle, "/products"),
            hero: Cta {
                title: section.text("hero.title"),
                description: section.text("hero.description"),
                button: String::new(),
                href: String::new(),
            },
            products,
            cta: Cta {
                title: section.text("cta.title"),
                description: section.text("cta.description"),
                button: section.text("cta.button"),
                href: format!("/{locale}/contact"),
            },
            learn_more: section.text("cta.learnMore"),
            learn_more_href: format!("/{locale}/about"),
        }
    }
}

/// Render the products page to HTML.
pub fn render_products(bundle: &MessageBundle) -> Result<String> {
    ProductsPage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("products", e))
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
    fn test_renders_catalog() {
        let bundle = MessageBundle::defaults(Locale::En);
        let html = render_products(&bundle).unwrap();

        assert!(html.contains("Elevator Solutions"));
        assert!(html.contains("Passenger Elevators"));
        assert!(html.contains("Freight Elevators"));
        assert!(html.contains("Residential Elevators"));
        assert!(html.contains("Commercial Elevators"));
        assert!(html.contains("Smooth and quiet operation"));
        assert!(html.contains("href=\"/en/contact\""));
        assert!(html.contains("href=\"/en/about\""));
    }

    #[test]
    fn test_every_product_lists_features() {
        let page = ProductsPage::from_bundle(&MessageBundle::defaults(Locale::En));
        assert_eq!(page.products.len(), 4);
        for product in &page.products {
            assert_eq!(product.features.len(), 4);
        }
    }
}
