//! Corporate hub page linking out to company, policy, and career sections.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::MessageBundle;

use crate::chrome::Chrome;
use crate::model::{Card, Cta, LinkCard};
use crate::render_error;

/// Hub section keys, in display order. The company card points at the
/// about page; the rest stay under the corporate prefix.
const SECTION_KEYS: [&str; 6] = [
    "company",
    "policies",
    "careers",
    "investors",
    "sustainability",
    "compliance",
];

#[derive(Template)]
#[template(path = "corporate.html")]
pub struct CorporatePage {
    pub chrome: Chrome,
    pub hero: Cta,
    pub sections: Vec<LinkCard>,
    pub values_title: String,
    pub values: Vec<Card>,
    pub cta: Cta,
}

impl CorporatePage {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let locale = bundle.locale();
        let section = bundle.section("Corporate");

        let sections = SECTION_KEYS
            .iter()
            .map(|key| {
                let href = if *key == "company" {
                    format!("/{locale}/about")
                } else {
                    format!("/{locale}/corporate/{key}")
                };
                LinkCard {
                    title: section.text(&format!("sections.{key}.title")),
                    description: section.text(&format!("sections.{key}.description")),
                    link_text: section.text(&format!("sections.{key}.link")),
                    href,
                }
            })
            .collect();

        let values = (0..4)
            .map(|i| Card {
                title: section.text(&format!("values.items.{i}.title")),
                description: section.text(&format!("values.items.{i}.description")),
            })
            .collect();

        Self {
            chrome: Chrome::build(bundle, "/corporate"),
            hero: Cta {
                title: section.text("hero.title"),
                description: section.text("hero.description"),
                button: String::new(),
                href: String::new(),
            },
            sections,
            values_title: section.text("values.title"),
            values,
            cta: Cta {
                title: section.text("cta.title"),
                description: section.text("cta.description"),
                button: section.text("cta.button"),
                href: format!("/{locale}/contact"),
            },
        }
    }
}

/// Render the corporate page to HTML.
pub fn render_corporate(bundle: &MessageBundle) -> Result<String> {
    CorporatePage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("corporate", e))
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
    fn test_renders_hub_sections() {
        let bundle = MessageBundle::defaults(Locale::En);
        let html = render_corporate(&bundle).unwrap();

        assert!(html.contains("Who we are and how we work"));
        assert!(html.contains("Investor Relations"));
        assert!(html.contains("Sustainability"));
        assert!(html.contains("Integrity"));
        assert!(html.contains("Work With Us"));
    }

    #[test]
    fn test_company_links_to_about() {
        let page = CorporatePage::from_bundle(&MessageBundle::defaults(Locale::En));
        assert_eq!(page.sections.len(), 6);
        assert_eq!(page.sections[0].href, "/en/about");
        assert_eq!(page.sections[1].href, "/en/corporate/policies");
    }
}
