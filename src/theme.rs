//! Color themes for the terminal UI.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Selectable theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeName {
    /// Returns the display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Switches to the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The color table for this theme.
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::LIGHT,
            Self::Dark => Theme::DARK,
        }
    }
}

/// Color table used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background.
    pub background: Color,
    /// Default text color.
    pub foreground: Color,
    /// Fill for squares on the winning line.
    pub highlight: Color,
    /// Borders and separators.
    pub border: Color,
    /// Accent for the winning line and result banner.
    pub winner: Color,
}

impl Theme {
    /// Light palette.
    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(0xf8, 0xf9, 0xfa),
        foreground: Color::Rgb(0x21, 0x25, 0x29),
        highlight: Color::Rgb(0xd4, 0xed, 0xda),
        border: Color::Rgb(0x6c, 0x75, 0x7d),
        winner: Color::Rgb(0x28, 0xa7, 0x45),
    };

    /// Dark palette.
    pub const DARK: Theme = Theme {
        background: Color::Rgb(0x21, 0x25, 0x29),
        foreground: Color::Rgb(0xf8, 0xf9, 0xfa),
        highlight: Color::Rgb(0x15, 0x57, 0x24),
        border: Color::Rgb(0xad, 0xb5, 0xbd),
        winner: Color::Rgb(0x28, 0xa7, 0x45),
    };
}
