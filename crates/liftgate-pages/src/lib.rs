//! Server-rendered HTML for every site page.
//!
//! Each page module pairs a view-model struct with an Askama template.
//! View models are built from a [`MessageBundle`] and hold plain owned
//! strings, so a render can only fail inside the template engine itself.
//! The [`Page`] enum is the routing surface: slug in, HTML out.

#![doc = include_str!("../README.md")]

pub mod about;
pub mod chrome;
pub mod contact;
pub mod corporate;
pub mod demo;
pub mod home;
pub mod model;
pub mod not_found;
pub mod products;
pub mod services;

pub use about::{render_about, AboutPage};
pub use chrome::{Chrome, LocaleLink, NavLink};
pub use contact::{render_contact, ContactPage};
pub use corporate::{render_corporate, CorporatePage};
pub use demo::{render_demo, DemoPage};
pub use home::{render_home, HomePage};
pub use model::{Card, Cta, FeatureCard, LinkCard, Prose, Stat};
pub use not_found::{render_not_found, NotFoundPage};
pub use products::{render_products, ProductsPage};
pub use services::{render_services, ServicesPage};

use liftgate_core::{Error, Result};
use liftgate_messages::MessageBundle;

/// Wrap a template failure with the page it came from.
pub(crate) fn render_error(page: &str, err: askama::Error) -> Error {
    Error::render(page, err.to_string())
}

// ============================================================================
// Page catalog
// ============================================================================

/// Every page the site serves under a locale prefix.
///
/// The slug is the path segment after `/{locale}`; the home page has an
/// empty slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
    Products,
    Services,
    Corporate,
    Demo,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Products,
        Page::Services,
        Page::About,
        Page::Contact,
        Page::Corporate,
        Page::Demo,
    ];

    /// The path segment after the locale prefix.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Products => "products",
            Page::Services => "services",
            Page::Corporate => "corporate",
            Page::Demo => "demo",
        }
    }

    /// Resolve a path segment to a page, if it names one.
    pub fn from_slug(slug: &str) -> Option<Page> {
        match slug {
            "" => Some(Page::Home),
            "about" => Some(Page::About),
            "contact" => Some(Page::Contact),
            "products" => Some(Page::Products),
            "services" => Some(Page::Services),
            "corporate" => Some(Page::Corporate),
            "demo" => Some(Page::Demo),
            _ => None,
        }
    }

    /// Render this page from a merged bundle.
    pub fn render(&self, bundle: &MessageBundle) -> Result<String> {
        match self {
            Page::Home => render_home(bundle),
            Page::About => render_about(bundle),
            Page::Contact => render_contact(bundle),
            Page::Products => render_products(bundle),
            Page::Services => render_services(bundle),
            Page::Corporate => render_corporate(bundle),
            Page::Demo => render_demo(bundle),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
