//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Accent color (brand gold).
    pub accent: Color,
    /// Border color.
    pub border: Color,
    /// Focused-field foreground color.
    pub focus_fg: Color,
    /// Focused-field background color.
    pub focus_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Comparison bar fill color.
    pub bar_fill: Color,
    /// Comparison bar fill color for the highlighted row.
    pub bar_highlight: Color,
    /// Comparison bar track color.
    pub bar_bg: Color,
    /// Success message color.
    pub success: Color,
    /// Error message color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::LapachoDark => Self {
                bg: Color::Rgb(10, 10, 15),
                text: Color::Rgb(166, 166, 176),
                heading: Color::Rgb(235, 230, 220),
                label: Color::Rgb(115, 115, 128),
                accent: Color::Rgb(201, 169, 110),
                border: Color::Rgb(45, 45, 56),
                focus_fg: Color::Rgb(10, 10, 15),
                focus_bg: Color::Rgb(201, 169, 110),
                status_fg: Color::Rgb(235, 230, 220),
                status_bg: Color::Rgb(28, 28, 36),
                bar_fill: Color::Rgb(70, 70, 84),
                bar_highlight: Color::Rgb(201, 169, 110),
                bar_bg: Color::Rgb(24, 24, 31),
                success: Color::Rgb(120, 190, 120),
                error: Color::Rgb(212, 80, 80),
            },
            Theme::LapachoLight => Self {
                bg: Color::Rgb(248, 245, 240),
                text: Color::Rgb(70, 70, 78),
                heading: Color::Rgb(32, 32, 40),
                label: Color::Rgb(130, 125, 115),
                accent: Color::Rgb(150, 114, 52),
                border: Color::Rgb(214, 206, 192),
                focus_fg: Color::Rgb(248, 245, 240),
                focus_bg: Color::Rgb(150, 114, 52),
                status_fg: Color::Rgb(32, 32, 40),
                status_bg: Color::Rgb(232, 226, 214),
                bar_fill: Color::Rgb(190, 182, 166),
                bar_highlight: Color::Rgb(150, 114, 52),
                bar_bg: Color::Rgb(236, 231, 221),
                success: Color::Rgb(60, 140, 60),
                error: Color::Rgb(170, 40, 40),
            },
        }
    }
}
