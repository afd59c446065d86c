//! Supported locales and text direction.
//!
//! The site serves a closed set of five locales. Turkish is the default
//! and the target of the bare-path redirect; Arabic is the only
//! right-to-left locale. Anything outside the set is rejected at the
//! routing layer, so downstream code can hold a [`Locale`] value and
//! never re-validate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Text direction
// ============================================================================

/// Horizontal layout direction for a locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right layout
    Ltr,
    /// Right-to-left layout
    Rtl,
}

impl TextDirection {
    /// The value used in the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Locale
// ============================================================================

/// A supported site locale.
///
/// The set is closed by design: adding a locale means adding translations,
/// so new variants only appear together with new message data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Turkish (default)
    Tr,
    /// English
    En,
    /// Arabic (right-to-left)
    Ar,
    /// German
    De,
    /// Russian
    Ru,
}

impl Locale {
    /// All supported locales, in navigation order.
    pub const ALL: [Locale; 5] = [Locale::Tr, Locale::En, Locale::Ar, Locale::De, Locale::Ru];

    /// The locale used when a request carries none.
    pub const DEFAULT: Locale = Locale::Tr;

    /// The lowercase locale code used in URLs and directory names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Tr => "tr",
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::De => "de",
            Locale::Ru => "ru",
        }
    }

    /// The language name in its own language, for the language switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Tr => "Türkçe",
            Locale::En => "English",
            Locale::Ar => "العربية",
            Locale::De => "Deutsch",
            Locale::Ru => "Русский",
        }
    }

    /// Layout direction. Arabic is the only right-to-left locale.
    pub fn text_direction(&self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Shorthand for `text_direction() == Rtl`.
    pub fn is_rtl(&self) -> bool {
        self.text_direction() == TextDirection::Rtl
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tr" => Ok(Locale::Tr),
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            "de" => Ok(Locale::De),
            "ru" => Ok(Locale::Ru),
            other => Err(Error::unsupported_locale(other)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_supported_locales() {
        for locale in Locale::ALL {
            let parsed: Locale = locale.as_str().parse().unwrap();
            assert_eq!(parsed, locale);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_locale() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Unsupported locale: fr");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // URL segments are matched verbatim; "TR" is not a valid prefix.
        assert!("TR".parse::<Locale>().is_err());
        assert!("En".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_locale_is_turkish() {
        assert_eq!(Locale::default(), Locale::Tr);
        assert_eq!(Locale::DEFAULT.as_str(), "tr");
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        for locale in Locale::ALL {
            let expected = locale == Locale::Ar;
            assert_eq!(locale.is_rtl(), expected, "direction for {locale}");
        }
        assert_eq!(Locale::Ar.text_direction().as_str(), "rtl");
        assert_eq!(Locale::Tr.text_direction().as_str(), "ltr");
    }

    #[test]
    fn test_native_names_present() {
        for locale in Locale::ALL {
            assert!(!locale.native_name().is_empty());
        }
        assert_eq!(Locale::De.native_name(), "Deutsch");
        assert_eq!(Locale::Ar.native_name(), "العربية");
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(Locale::Ru.to_string(), "ru");
        assert_eq!(TextDirection::Rtl.to_string(), "rtl");
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&Locale::De).unwrap();
        assert_eq!(json, "\"de\"");
        let back: Locale = serde_json::from_str("\"ar\"").unwrap();
        assert_eq!(back, Locale::Ar);
    }

    #[test]
    fn test_all_covers_every_variant_once() {
        let mut codes: Vec<&str> = Locale::ALL.iter().map(Locale::as_str).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }
}
