//! Timeline input handling for panning and zooming.
//!
//! This module handles all mouse input for the timeline canvas:
//! - Drag panning (primary button + drag, amplified 2x)
//! - Scroll wheel zoom (one zoom step per wheel event)
//! - Ending the pan when the pointer leaves the canvas

use eframe::egui;
use rsaga::{PanGesture, Zoom};

/// Result of timeline input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineInputResult {
    /// No interaction occurred
    None,
    /// Scroll offset or zoom changed
    ViewportUpdated,
}

/// Handles all timeline input events and updates viewport/interaction state.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `canvas_rect` - Visible canvas rectangle on screen
/// * `canvas_response` - The canvas interaction response (drag sense)
/// * `zoom` - Current zoom (mutable)
/// * `scroll_x` - Horizontal scroll offset (mutable)
/// * `max_scroll_x` - Largest valid scroll offset
/// * `pan` - Drag-to-pan gesture (mutable)
pub fn handle_timeline_input(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    canvas_response: &egui::Response,
    zoom: &mut Zoom,
    scroll_x: &mut f32,
    max_scroll_x: f32,
    pan: &mut PanGesture,
) -> TimelineInputResult {
    let mut result = TimelineInputResult::None;

    let hover_pos = ctx.input(|i| i.pointer.hover_pos());
    let pointer_inside = hover_pos.is_some_and(|pos| canvas_rect.contains(pos));

    if canvas_response.drag_started_by(egui::PointerButton::Primary) {
        // Anchor at the press position so the drag threshold is not lost
        let origin = ctx
            .input(|i| i.pointer.press_origin())
            .or(hover_pos)
            .unwrap_or(canvas_rect.center());
        pan.begin(origin.x, *scroll_x);
        tracing::trace!(anchor_x = origin.x, scroll_x = *scroll_x, "Pan started");
    }

    if pan.is_active() {
        if !pointer_inside || canvas_response.drag_stopped() || !canvas_response.dragged() {
            pan.end();
        } else if let Some(pos) = hover_pos {
            if let Some(new_scroll) = pan.drag_to(pos.x, max_scroll_x) {
                if new_scroll != *scroll_x {
                    *scroll_x = new_scroll;
                    result = TimelineInputResult::ViewportUpdated;
                }
            }
        }
    }

    if pointer_inside {
        let wheel_y = ctx.input(|i| i.raw_scroll_delta.y);
        // egui reports wheel-up as positive, zoom expects scroll-down positive
        if zoom.on_wheel(-wheel_y) {
            result = TimelineInputResult::ViewportUpdated;
        }
    }

    result
}
