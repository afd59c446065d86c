//! Company page: history, mission, values, team, and headline numbers.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::MessageBundle;

use crate::chrome::Chrome;
use crate::model::{Card, Cta, Prose, Stat};
use crate::render_error;

/// Narrative blocks, in display order.
const PROSE_KEYS: [&str; 3] = ["history", "mission", "team"];

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub chrome: Chrome,
    pub hero: Cta,
    pub prose: Vec<Prose>,
    pub values_title: String,
    pub values: Vec<Card>,
    pub stats_title: String,
    pub stats: Vec<Stat>,
}

impl AboutPage {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let section = bundle.section("About");

        let prose = PROSE_KEYS
            .iter()
            .map(|key| Prose {
                title: section.text(&format!("{key}.title")),
                description: section.text(&format!("{key}.description")),
                content: section.text(&format!("{key}.content")),
            })
            .collect();

        let values = (0..4)
            .map(|i| Card {
                title: section.text(&format!("values.items.{i}.title")),
                description: section.text(&format!("values.items.{i}.description")),
            })
            .collect();

        let stats = (0..3)
            .map(|i| Stat {
                value: section.text(&format!("stats.items.{i}.value")),
                label: section.text(&format!("stats.items.{i}.label")),
            })
            .collect();

        Self {
            chrome: Chrome::build(bundle, "/about"),
            hero: Cta {
                title: section.text("hero.title"),
                description: section.text("hero.description"),
                button: String::new(),
                href: String::new(),
            },
            prose,
            values_title: section.text("values.title"),
            values,
            stats_title: section.text("stats.title"),
            stats,
        }
    }
}

/// Render the about page to HTML.
pub fn render_about(bundle: &MessageBundle) -> Result<String> {
    AboutPage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("about", e))
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
    fn test_renders_narrative_and_numbers() {
        let bundle = MessageBundle::defaults(Locale::En);
        let html = render_about(&bundle).unwrap();

        assert!(html.contains("About BT Elevator"));
        assert!(html.contains("Our History"));
        assert!(html.contains("Our Mission"));
        assert!(html.contains("Our Team"));
        assert!(html.contains("Safety First"));
        assert!(html.contains("30+"));
        assert!(html.contains("Years of Experience"));
    }

    #[test]
    fn test_value_and_stat_counts() {
        let page = AboutPage::from_bundle(&MessageBundle::defaults(Locale::En));
        assert_eq!(page.prose.len(), 3);
        assert_eq!(page.values.len(), 4);
        assert_eq!(page.stats.len(), 3);
    }
}
