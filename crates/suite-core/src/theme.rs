//! Theme system for CommandSuite.
//!
//! Two slate-based variants mirroring the marketing site palette, with
//! runtime switching driven by the persisted display preference.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variants supported by CommandSuite.
///
/// Serialized as `"dark"` / `"light"`, the exact values of the persisted
/// `theme` preference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Midnight slate palette.
    Dark,
    /// Daylight slate palette (default).
    #[default]
    Light,
}

impl ThemeVariant {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Color palette for a theme variant.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub border: Color,
    pub selection: Color,
    pub muted: Color,
}

/// UI element types for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Normal text content
    Text,
    /// Titles and section headers
    Title,
    /// Borders and frames
    Border,
    /// Highlighted/selected items
    Highlight,
    /// Accent elements (brand, links, primary actions)
    Accent,
    /// Secondary accent (teal badges, highlights in copy)
    Secondary,
    /// Healthy/active indicators
    Success,
    /// Paused/attention indicators
    Warning,
    /// Informational indicators (training, hints)
    Info,
    /// Background fill
    Background,
    /// Active/focused elements (selected tab, selected row)
    Active,
    /// Inactive/dimmed elements
    Inactive,
}

/// Main theme structure managing all UI styling.
#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    /// Create a new theme with the specified variant.
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Dark => ColorPalette {
                background: Color::Rgb(11, 19, 43),    // #0B132B
                foreground: Color::Rgb(226, 232, 240), // slate-200
                accent: Color::Rgb(96, 165, 250),      // blue-400
                secondary: Color::Rgb(45, 212, 191),   // teal-400
                success: Color::Rgb(52, 211, 153),     // emerald-400
                warning: Color::Rgb(251, 191, 36),     // amber-400
                info: Color::Rgb(147, 197, 253),       // blue-300
                border: Color::Rgb(51, 65, 85),        // slate-700
                selection: Color::Rgb(30, 41, 59),     // slate-800
                muted: Color::Rgb(100, 116, 139),      // slate-500
            },
            ThemeVariant::Light => ColorPalette {
                background: Color::Rgb(248, 250, 252), // slate-50
                foreground: Color::Rgb(15, 23, 42),    // slate-900
                accent: Color::Rgb(29, 78, 216),       // blue-700
                secondary: Color::Rgb(13, 148, 136),   // teal-600
                success: Color::Rgb(5, 150, 105),      // emerald-600
                warning: Color::Rgb(217, 119, 6),      // amber-600
                info: Color::Rgb(37, 99, 235),         // blue-600
                border: Color::Rgb(203, 213, 225),     // slate-300
                selection: Color::Rgb(226, 232, 240),  // slate-200
                muted: Color::Rgb(100, 116, 139),      // slate-500
            },
        };

        Self { variant, colors }
    }

    /// Get the current theme variant.
    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Get the color palette.
    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    /// Set specific theme variant.
    pub fn set_variant(&mut self, variant: ThemeVariant) {
        if self.variant != variant {
            *self = Self::new(variant);
        }
    }

    /// Get a ratatui Style for the specified UI element.
    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Text => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Title => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.background),

            Element::Highlight => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Accent => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.background)
                .add_modifier(Modifier::BOLD),

            Element::Secondary => Style::default()
                .fg(self.colors.secondary)
                .bg(self.colors.background),

            Element::Success => Style::default()
                .fg(self.colors.success)
                .bg(self.colors.background),

            Element::Warning => Style::default()
                .fg(self.colors.warning)
                .bg(self.colors.background),

            Element::Info => Style::default()
                .fg(self.colors.info)
                .bg(self.colors.background),

            Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Active => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Inactive => Style::default()
                .fg(self.colors.muted)
                .bg(self.colors.background),
        }
    }

    /// Get style for normal text.
    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    /// Get style for section titles.
    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    /// Get style for block borders.
    pub fn border_style(&self) -> Style {
        self.ratatui_style(Element::Border)
    }

    /// Get style for highlighted/selected items.
    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    /// Get style for muted/dimmed elements.
    pub fn muted_style(&self) -> Style {
        self.ratatui_style(Element::Inactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_defaults_to_light() {
        assert_eq!(ThemeVariant::default(), ThemeVariant::Light);
        assert!(!Theme::default().variant().is_dark());
    }

    #[test]
    fn set_variant_swaps_palette() {
        let mut theme = Theme::default();
        let light_bg = theme.colors().background;
        theme.set_variant(ThemeVariant::Dark);
        assert!(theme.variant().is_dark());
        assert_ne!(theme.colors().background, light_bg);
    }

    #[test]
    fn variant_serializes_as_lowercase_string() {
        assert_eq!(toml::to_string(&Wrapper { theme: ThemeVariant::Dark }).unwrap().trim(), "theme = \"dark\"");
        assert_eq!(toml::to_string(&Wrapper { theme: ThemeVariant::Light }).unwrap().trim(), "theme = \"light\"");
    }

    #[derive(serde::Serialize)]
    struct Wrapper {
        theme: ThemeVariant,
    }
}
