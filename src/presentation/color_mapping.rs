//! Color mapping for connectors and markers.

use egui::Color32;
use rsaga::{parse_hex_color, Connection, ThemeColors, ThemeManager};

/// Returns the palette of the named theme, or the default palette.
pub fn theme_colors<'a>(theme_manager: &'a ThemeManager, current_theme_name: &str) -> &'a ThemeColors {
    &theme_manager.theme_or_default(current_theme_name).colors
}

/// Returns the display color of a connection.
///
/// Dataset colors are `#rrggbb`; anything unparsable falls back to the theme's
/// connection color.
pub fn connection_color(color: &str, colors: &ThemeColors) -> Color32 {
    parse_hex_color(color).unwrap_or(colors.fallback_connection)
}

/// Color of a connection label in the detail panel.
pub fn relationship_color(connection: &Connection, colors: &ThemeColors) -> Color32 {
    connection_color(&connection.color, colors)
}
