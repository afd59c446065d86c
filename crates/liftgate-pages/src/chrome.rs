//! Shared document chrome: navigation, language switcher, lang/dir.

use liftgate_core::Locale;
use liftgate_messages::MessageBundle;

/// Path suffixes for the main navigation, paired with their
/// `Navigation` label keys. The home entry is the bare locale prefix.
const NAV_ITEMS: [(&str, &str); 6] = [
    ("home", ""),
    ("products", "/products"),
    ("services", "/services"),
    ("about", "/about"),
    ("contact", "/contact"),
    ("corporate", "/corporate"),
];

/// One main-navigation entry.
#[derive(Clone, Debug)]
pub struct NavLink {
    /// Locale-prefixed href, e.g. `/tr/products`
    pub href: String,
    /// Localized label
    pub label: String,
}

/// One language-switcher entry.
#[derive(Clone, Debug)]
pub struct LocaleLink {
    /// Locale code for the `hreflang` attribute
    pub code: &'static str,
    /// Language name in its own language
    pub name: &'static str,
    /// The current page under the other locale's prefix
    pub href: String,
    /// Whether this is the locale being rendered
    pub current: bool,
}

/// Everything the base template needs around the page content.
#[derive(Clone, Debug)]
pub struct Chrome {
    /// HTML `lang` attribute value
    pub lang: &'static str,
    /// HTML `dir` attribute value, `rtl` only for Arabic
    pub dir: &'static str,
    /// Document title
    pub title: String,
    /// Brand text in the header
    pub brand: String,
    /// Href of the brand link (localized home)
    pub home_href: String,
    /// Accessible label for the main navigation
    pub menu_label: String,
    /// Accessible label for the language switcher
    pub language_label: String,
    /// Main navigation entries
    pub nav: Vec<NavLink>,
    /// Language switcher entries, one per supported locale
    pub locales: Vec<LocaleLink>,
}

impl Chrome {
    /// Build the chrome for one rendered page.
    ///
    /// `path_suffix` is the locale-independent part of the current path
    /// (`""` for home, `"/about"`, ...); the language switcher keeps the
    /// visitor on the same page when switching locales.
    pub fn build(bundle: &MessageBundle, path_suffix: &str) -> Self {
        let locale = bundle.locale();
        let nav = bundle.section("Navigation");

        let nav_links = NAV_ITEMS
            .iter()
            .map(|(key, suffix)| NavLink {
                href: format!("/{locale}{suffix}"),
                label: nav.text(key),
            })
            .collect();

        let locales = Locale::ALL
            .iter()
            .map(|&other| LocaleLink {
                code: other.as_str(),
                name: other.native_name(),
                href: format!("/{other}{path_suffix}"),
                current: other == locale,
            })
            .collect();

        Self {
            lang: locale.as_str(),
            dir: locale.text_direction().as_str(),
            title: bundle.text("Home.title"),
            brand: bundle.text("Home.title"),
            home_href: format!("/{locale}"),
            menu_label: nav.text("menu"),
            language_label: nav.text("language"),
            nav: nav_links,
            locales,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
