//! Interactive elevator demo page.
//!
//! The page renders the shaft and call panel server-side with the car
//! parked at the bottom floor, then hands control to a small script that
//! drives the simulation through the JSON API. Labels and the floor
//! status template travel on `data-*` attributes so the script stays
//! locale-agnostic.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::{interpolate, MessageBundle};
use liftgate_sim::{FLOOR_MAX, FLOOR_MIN};

use crate::chrome::Chrome;
use crate::render_error;

pub struct FloorRow {
    pub number: u8,
    pub label: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "demo.html")]
pub struct DemoPage {
    pub chrome: Chrome,
    pub title: String,
    pub description: String,
    pub controls_title: String,
    pub panel_title: String,
    pub call_label: String,
    pub called_label: String,
    pub current_floor_template: String,
    pub current_floor_text: String,
    pub floors: Vec<FloorRow>,
}

impl DemoPage {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let section = bundle.section("Elevator");

        let floor_template = section.text("floor");
        let current_floor_template = section.text("currentFloor");
        let start = FLOOR_MIN.to_string();

        // Topmost floor first, the way a shaft reads.
        let floors = (FLOOR_MIN..=FLOOR_MAX)
            .rev()
            .map(|number| FloorRow {
                number,
                label: interpolate(&floor_template, &[("number", &number.to_string())]),
                current: number == FLOOR_MIN,
            })
            .collect();

        Self {
            chrome: Chrome::build(bundle, "/demo"),
            title: section.text("title"),
            description: section.text("description"),
            controls_title: section.text("elevatorControls"),
            panel_title: section.text("floorPanel"),
            call_label: section.text("call"),
            called_label: section.text("called"),
            current_floor_text: interpolate(&current_floor_template, &[("number", &start)]),
            current_floor_template,
            floors,
        }
    }
}

/// Render the elevator demo page to HTML.
pub fn render_demo(bundle: &MessageBundle) -> Result<String> {
    DemoPage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("demo", e))
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
    fn test_renders_shaft_and_panel() {
        let bundle = MessageBundle::defaults(Locale::En);
        let html = render_demo(&bundle).unwrap();

        assert!(html.contains("Elevator Demo"));
        assert!(html.contains("Elevator Controls"));
        assert!(html.contains("Floor Panel"));
        assert!(html.contains("Current Floor: 1"));
        assert!(html.contains("data-api-base=\"/api/demo\""));
        assert!(html.contains("data-floor=\"10\""));
        assert!(html.contains("src=\"/assets/demo.js\""));
    }

    #[test]
    fn test_floors_descend_from_top() {
        let page = DemoPage::from_bundle(&MessageBundle::defaults(Locale::En));
        assert_eq!(page.floors.len(), 10);
        assert_eq!(page.floors[0].number, 10);
        assert_eq!(page.floors[9].number, 1);
        assert!(page.floors[9].current);
        assert_eq!(page.floors[0].label, "Floor 10");
    }
}
