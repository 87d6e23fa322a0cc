//! Light and dark color themes.
//!
//! Purely cosmetic: the theme lives in the [`App`](crate::App), never in
//! the game state.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

/// Colors used to draw one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Board and panel background.
    pub surface: Color,
    /// Regular text.
    pub text: Color,
    /// Mark X.
    pub x: Color,
    /// Mark O.
    pub o: Color,
    /// Empty cells and grid lines.
    pub empty: Color,
    /// Cell under the cursor.
    pub cursor: Color,
    /// Cells on the winning line.
    pub highlight: Color,
    /// Theme toggle hint.
    pub accent: Color,
}

impl Theme {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Describes what toggling does, for the title bar.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }

    /// Colors for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(243, 244, 246),
                surface: Color::Rgb(255, 255, 255),
                text: Color::Rgb(31, 41, 55),
                x: Color::Rgb(219, 39, 119),
                o: Color::Rgb(8, 145, 178),
                empty: Color::Rgb(209, 213, 219),
                cursor: Color::Rgb(229, 231, 235),
                highlight: Color::Rgb(59, 130, 246),
                accent: Color::Rgb(31, 41, 55),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(17, 24, 39),
                surface: Color::Rgb(31, 41, 55),
                text: Color::Rgb(255, 255, 255),
                x: Color::Rgb(244, 114, 182),
                o: Color::Rgb(34, 211, 238),
                empty: Color::Rgb(75, 85, 99),
                cursor: Color::Rgb(55, 65, 81),
                highlight: Color::Rgb(37, 99, 235),
                accent: Color::Rgb(253, 224, 71),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    }

    #[test]
    fn test_palettes_differ() {
        let light = Theme::Light.palette();
        let dark = Theme::Dark.palette();
        assert_ne!(light.background, dark.background);
        assert_ne!(light.x, dark.x);
        assert_ne!(light.x, light.o);
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
