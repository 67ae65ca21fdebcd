//! Visual presets for the lookup screen
//!
//! Themes only change how things look; every preset renders the same state
//! the same way semantically.

use artbox::Color as ArtColor;
use ratatui::{layout::Alignment, style::Color};

/// How the input and the button are arranged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchLayout {
    /// Input and button side by side
    Row,
    /// Button below the input
    Stacked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemeName {
    #[default]
    Classic,
    Compact,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub title: Color,
    pub input_bg: Color,
    pub text: Color,
    pub muted: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub focus: Color,
    pub spinner: Color,
    pub error: Color,
    pub card_bg: Color,
    pub card_alignment: Alignment,
    pub search_layout: SearchLayout,
    /// Rows reserved for the temperature; 1 falls back to plain text
    pub temperature_rows: u16,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Classic => Self::classic(),
            ThemeName::Compact => Self::compact(),
        }
    }

    pub fn classic() -> Self {
        Self {
            background: Color::Rgb(243, 243, 243),
            title: Color::Rgb(20, 20, 20),
            input_bg: Color::Rgb(232, 232, 232),
            text: Color::Rgb(20, 20, 20),
            muted: Color::Rgb(110, 110, 110),
            button_bg: Color::Rgb(56, 114, 196),
            button_fg: Color::White,
            focus: Color::Rgb(0, 188, 212),
            spinner: Color::Rgb(0, 188, 212),
            error: Color::Red,
            card_bg: Color::Rgb(211, 211, 211),
            card_alignment: Alignment::Center,
            search_layout: SearchLayout::Row,
            temperature_rows: 4,
        }
    }

    pub fn compact() -> Self {
        Self {
            background: Color::Reset,
            title: Color::Cyan,
            input_bg: Color::Rgb(50, 50, 60),
            text: Color::Reset,
            muted: Color::DarkGray,
            button_bg: Color::Rgb(56, 114, 196),
            button_fg: Color::White,
            focus: Color::Yellow,
            spinner: Color::Cyan,
            error: Color::Rgb(220, 80, 80),
            card_bg: Color::Rgb(35, 35, 45),
            card_alignment: Alignment::Left,
            search_layout: SearchLayout::Stacked,
            temperature_rows: 1,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Gradient endpoints for a temperature, cold to hot.
pub fn temperature_colors(celsius: f64) -> (ArtColor, ArtColor) {
    match celsius {
        t if t < 0.0 => (ArtColor::rgb(150, 200, 255), ArtColor::rgb(200, 230, 255)),
        t if t < 15.0 => (ArtColor::rgb(100, 180, 255), ArtColor::rgb(150, 220, 200)),
        t if t < 25.0 => (ArtColor::rgb(100, 200, 150), ArtColor::rgb(255, 220, 100)),
        t if t < 35.0 => (ArtColor::rgb(255, 180, 80), ArtColor::rgb(255, 120, 80)),
        _ => (ArtColor::rgb(255, 100, 80), ArtColor::rgb(255, 60, 60)),
    }
}
