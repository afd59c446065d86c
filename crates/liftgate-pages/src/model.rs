//! Small view structs shared across page models.

/// A title and description pair for heroes, feature tiles, and info rows.
#[derive(Clone, Debug)]
pub struct Card {
    /// Card heading
    pub title: String,
    /// Card body text
    pub description: String,
}

/// A card with a bullet list of features.
#[derive(Clone, Debug)]
pub struct FeatureCard {
    /// Card heading
    pub title: String,
    /// Card body text
    pub description: String,
    /// Localized feature bullets, rendered in order
    pub features: Vec<String>,
}

/// A card that links somewhere.
#[derive(Clone, Debug)]
pub struct LinkCard {
    /// Card heading
    pub title: String,
    /// Card body text
    pub description: String,
    /// Localized link text
    pub link_text: String,
    /// Locale-prefixed href
    pub href: String,
}

/// A headline figure on the about page.
#[derive(Clone, Debug)]
pub struct Stat {
    /// The figure, e.g. `1500+`
    pub value: String,
    /// What the figure counts
    pub label: String,
}

/// A call-to-action block with one button.
#[derive(Clone, Debug)]
pub struct Cta {
    /// Section heading
    pub title: String,
    /// Section body text
    pub description: String,
    /// Button label
    pub button: String,
    /// Button target
    pub href: String,
}

/// A longer text section (about-page history, mission, team).
#[derive(Clone, Debug)]
pub struct Prose {
    /// Section heading
    pub title: String,
    /// Lead sentence
    pub description: String,
    /// Body paragraph
    pub content: String,
}
