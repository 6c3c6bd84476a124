//! Visual theme preference.

use serde::{Deserialize, Serialize};

/// Light or dark skin for the presentation layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Switches to the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// True for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Builds a theme from a stored "dark" flag.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Theme::from_str("Dark").ok(), Some(Theme::Dark));
        assert_eq!(Theme::Light.to_string(), "light");
        assert!(Theme::from_str("purple").is_err());
    }

    #[test]
    fn test_dark_flag() {
        assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
        assert!(!Theme::from_dark_flag(false).is_dark());
    }
}
