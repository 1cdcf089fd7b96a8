//! Theme support for the saga viewer
//!
//! Built-in color schemes (Nebula, Midnight, Parchment, Dracula) and a manager that
//! applies them to egui visuals. Connection colors come from the dataset as
//! `#rrggbb` strings and are parsed with [`parse_hex_color`].
//!
//! # Examples
//!
//! ```
//! use rsaga::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let nebula = manager.get_theme("Nebula").unwrap();
//! println!("Nebula accent: {:?}", nebula.colors.accent);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when no preference is stored.
pub const DEFAULT_THEME: &str = "Nebula";

/// Complete color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Timeline colors
    pub accent: Color32,
    pub accent_strong: Color32,
    pub marker_fill: Color32,
    pub divider: Color32,
    pub year_label: Color32,
    pub error: Color32,
    /// Used for connections whose color string does not parse
    pub fallback_connection: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [nebula_theme(), midnight_theme(), parchment_theme(), dracula_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            fallback: nebula_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent_strong;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.inactive.weak_bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.selection;
        visuals.widgets.hovered.weak_bg_fill = colors.selection;
        visuals.widgets.active.bg_fill = colors.accent;

        visuals.hyperlink_color = colors.accent_strong;
        visuals.error_fg_color = colors.error;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep space palette: near-black blue background with purple accents
fn nebula_theme() -> Theme {
    Theme {
        name: "Nebula".to_string(),
        description: "Dark gray with purple glow".to_string(),
        dark: true,
        colors: ThemeColors {
            // gray-900 / gray-800
            background: hex_to_color32("#111827"),
            panel_background: hex_to_color32("#111827"),
            extreme_background: hex_to_color32("#0b0f1a"),

            text: hex_to_color32("#f9fafb"),
            // gray-400
            text_dim: hex_to_color32("#9ca3af"),
            text_strong: Color32::WHITE,

            selection: hex_to_color32("#374151"),
            hover: hex_to_color32("#1f2937"),
            border: hex_to_color32("#374151"),

            // purple-600 / purple-400
            accent: hex_to_color32("#9333ea"),
            accent_strong: hex_to_color32("#c084fc"),
            marker_fill: hex_to_color32("#3b0764"),
            divider: with_alpha(hex_to_color32("#a855f7"), 51),
            year_label: hex_to_color32("#9ca3af"),
            error: hex_to_color32("#f87171"),
            fallback_connection: hex_to_color32("#a855f7"),
        },
    }
}

/// Deep blue night sky with gold highlights
fn midnight_theme() -> Theme {
    Theme {
        name: "Midnight".to_string(),
        description: "Navy background with gold accents".to_string(),
        dark: true,
        colors: ThemeColors {
            background: hex_to_color32("#0f172a"),
            panel_background: hex_to_color32("#131c33"),
            extreme_background: hex_to_color32("#080d1a"),

            text: hex_to_color32("#e2e8f0"),
            text_dim: hex_to_color32("#94a3b8"),
            text_strong: hex_to_color32("#f8fafc"),

            selection: hex_to_color32("#1e3a5f"),
            hover: hex_to_color32("#1e293b"),
            border: hex_to_color32("#334155"),

            accent: hex_to_color32("#d4a017"),
            accent_strong: hex_to_color32("#facc15"),
            marker_fill: hex_to_color32("#1e293b"),
            divider: with_alpha(hex_to_color32("#facc15"), 45),
            year_label: hex_to_color32("#94a3b8"),
            error: hex_to_color32("#fb7185"),
            fallback_connection: hex_to_color32("#38bdf8"),
        },
    }
}

/// Light storybook palette: aged paper with ink and sepia
fn parchment_theme() -> Theme {
    Theme {
        name: "Parchment".to_string(),
        description: "Aged paper with sepia ink".to_string(),
        dark: false,
        colors: ThemeColors {
            background: hex_to_color32("#f5ecd7"),
            panel_background: hex_to_color32("#efe3c8"),
            extreme_background: hex_to_color32("#fbf6ea"),

            text: hex_to_color32("#3b2f23"),
            text_dim: hex_to_color32("#7c6a55"),
            text_strong: hex_to_color32("#1f160e"),

            selection: hex_to_color32("#e3cfa4"),
            hover: hex_to_color32("#e8dbbd"),
            border: hex_to_color32("#b59f7b"),

            accent: hex_to_color32("#8b4513"),
            accent_strong: hex_to_color32("#6b2d0b"),
            marker_fill: hex_to_color32("#fbf3e0"),
            divider: with_alpha(hex_to_color32("#8b4513"), 70),
            year_label: hex_to_color32("#6b5a45"),
            error: hex_to_color32("#b91c1c"),
            fallback_connection: hex_to_color32("#8b4513"),
        },
    }
}

/// Creates the Dracula theme
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        dark: true,
        colors: ThemeColors {
            background: hex_to_color32("#282a36"),
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),

            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            text_strong: hex_to_color32("#f8f8f2"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            accent: hex_to_color32("#bd93f9"),
            accent_strong: hex_to_color32("#ff79c6"),
            marker_fill: hex_to_color32("#44475a"),
            divider: with_alpha(hex_to_color32("#bd93f9"), 60),
            year_label: hex_to_color32("#6272a4"),
            error: hex_to_color32("#ff5555"),
            fallback_connection: hex_to_color32("#8be9fd"),
        },
    }
}

/// Parses `#rrggbb` (or `rrggbb`) into a color. Returns `None` for anything else.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Converts a hex color string (like "#282a36") to Color32, black if invalid
pub fn hex_to_color32(hex: &str) -> Color32 {
    parse_hex_color(hex).unwrap_or(Color32::BLACK)
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Returns the color with the given alpha (unmultiplied)
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Returns the color scaled by an opacity in `[0, 1]`
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    with_alpha(color, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#9333ea"), Some(Color32::from_rgb(0x93, 0x33, 0xea)));
        assert_eq!(parse_hex_color("2563EB"), Some(Color32::from_rgb(0x25, 0x63, 0xeb)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_theme_fallback() {
        let manager = ThemeManager::new();
        assert_eq!(manager.theme_or_default("missing").name, DEFAULT_THEME);
        assert_eq!(manager.list_themes(), vec!["Dracula", "Midnight", "Nebula", "Parchment"]);
    }

    #[test]
    fn test_with_opacity() {
        let c = with_opacity(Color32::from_rgb(255, 0, 0), 1.0);
        assert_eq!(c.a(), 255);
        let dim = with_opacity(Color32::from_rgb(255, 0, 0), 0.3);
        assert!(dim.a() > 70 && dim.a() < 80);
    }
}
