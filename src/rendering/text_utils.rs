//! Text rendering utilities
//!
//! Shared utilities for text measurement and truncation.

use eframe::egui;

const ELLIPSIS: &str = "..";

/// Truncates text to fit within a given width, adding ".." if truncated
///
/// # Arguments
/// * `text` - The text to potentially truncate
/// * `max_width` - Maximum width available for the text
/// * `font_id` - Font to use for measuring text
/// * `painter` - Painter for text measurement
pub fn truncate_text_to_fit(
    text: &str,
    max_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    let measure = |s: &str| text_width(s, font_id, painter);
    truncate_with(text, max_width, measure)
}

/// Width of `text` laid out on one line.
fn text_width(text: &str, font_id: &egui::FontId, painter: &egui::Painter) -> f32 {
    painter
        .layout_no_wrap(text.to_string(), font_id.clone(), egui::Color32::WHITE)
        .size()
        .x
}

/// Truncation against an arbitrary width measure.
///
/// Binary search over the character count, so at most `log2(n)` measurements.
fn truncate_with(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if max_width <= 0.0 {
        return String::new();
    }
    if measure(text) <= max_width {
        return text.to_string();
    }

    let available_for_text = max_width - measure(ELLIPSIS);
    if available_for_text <= 0.0 {
        return String::new();
    }

    let mut low = 0;
    let mut high = text.chars().count();
    let mut best_fit = 0;

    while low <= high {
        let mid = (low + high) / 2;
        let truncated: String = text.chars().take(mid).collect();
        if measure(&truncated) <= available_for_text {
            best_fit = mid;
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(best_fit).collect();
    result.push_str(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // every char is 10 wide
    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_fits_unchanged() {
        assert_eq!(truncate_with("Nexus-7", 70.0, mono), "Nexus-7");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        assert_eq!(truncate_with("Void Harbinger", 60.0, mono), "Void..");
    }

    #[test]
    fn test_too_narrow() {
        assert_eq!(truncate_with("Chronos Echo", 15.0, mono), "");
        assert_eq!(truncate_with("Chronos Echo", 0.0, mono), "");
    }
}
