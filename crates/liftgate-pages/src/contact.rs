//! Contact page: inquiry form markup, office details, and a map placeholder.
//!
//! The form is presentational; it has no submit endpoint.

use askama::Template;

use liftgate_core::Result;
use liftgate_messages::MessageBundle;

use crate::chrome::Chrome;
use crate::model::Cta;
use crate::render_error;

/// Subject dropdown keys, in display order.
const SUBJECT_KEYS: [&str; 4] = ["general", "sales", "support", "other"];

/// Office detail keys, in display order.
const INFO_KEYS: [&str; 4] = ["phone", "email", "address", "hours"];

pub struct SubjectOption {
    pub value: String,
    pub label: String,
}

pub struct InfoItem {
    pub title: String,
    pub value: String,
}

pub struct ContactForm {
    pub title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub select_subject: String,
    pub subjects: Vec<SubjectOption>,
    pub message: String,
    pub submit: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub chrome: Chrome,
    pub hero: Cta,
    pub form: ContactForm,
    pub info_title: String,
    pub info: Vec<InfoItem>,
    pub map_title: String,
}

impl ContactPage {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        let section = bundle.section("Contact");

        let subjects = SUBJECT_KEYS
            .iter()
            .map(|key| SubjectOption {
                value: (*key).to_string(),
                label: section.text(&format!("form.subjects.{key}")),
            })
            .collect();

        let info = INFO_KEYS
            .iter()
            .map(|key| InfoItem {
                title: section.text(&format!("contact.{key}.title")),
                value: section.text(&format!("contact.{key}.value")),
            })
            .collect();

        Self {
            chrome: Chrome::build(bundle, "/contact"),
            hero: Cta {
                title: section.text("hero.title"),
                description: section.text("hero.description"),
                button: String::new(),
                href: String::new(),
            },
            form: ContactForm {
                title: section.text("form.title"),
                name: section.text("form.name"),
                email: section.text("form.email"),
                phone: section.text("form.phone"),
                subject: section.text("form.subject"),
                select_subject: section.text("form.selectSubject"),
                subjects,
                message: section.text("form.message"),
                submit: section.text("form.submit"),
            },
            info_title: section.text("contact.title"),
            info,
            map_title: section.text("map.title"),
        }
    }
}

/// Render the contact page to HTML.
pub fn render_contact(bundle: &MessageBundle) -> Result<String> {
    ContactPage::from_bundle(bundle)
        .render()
        .map_err(|e| render_error("contact", e))
}

// ============================================================================
// Tests
// ============================================================================
