//! Pan and zoom state machines for the timeline canvas.
//!
//! Both are free of any GUI types so they can be driven from tests as well as
//! from the egui input handler.

/// Scroll distance per pixel of pointer travel while dragging.
pub const PAN_AMPLIFICATION: f32 = 2.0;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom change applied per wheel notch or zoom button press.
pub const ZOOM_STEP: f32 = 0.1;

/// Horizontal drag-to-pan gesture.
///
/// On pointer-down the anchor pointer position and scroll offset are recorded.
/// Every move while active yields a new scroll offset computed from the anchor,
/// so the gesture never accumulates rounding error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanGesture {
    active: bool,
    anchor_x: f32,
    anchor_scroll: f32,
}

impl PanGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a drag at `pointer_x` with the canvas scrolled to `scroll_offset`.
    pub fn begin(&mut self, pointer_x: f32, scroll_offset: f32) {
        self.active = true;
        self.anchor_x = pointer_x;
        self.anchor_scroll = scroll_offset;
    }

    /// Returns the scroll offset for the pointer at `pointer_x`, clamped to
    /// `[0, max_scroll]`, or `None` when no drag is active.
    pub fn drag_to(&self, pointer_x: f32, max_scroll: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let walk = (pointer_x - self.anchor_x) * PAN_AMPLIFICATION;
        Some((self.anchor_scroll - walk).clamp(0.0, max_scroll.max(0.0)))
    }

    /// Ends the drag (pointer released or left the canvas).
    pub fn end(&mut self) {
        self.active = false;
    }
}

/// Uniform scene scale, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    level: f32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { level: DEFAULT_ZOOM }
    }
}

impl Zoom {
    pub fn new(level: f32) -> Self {
        let mut zoom = Self::default();
        zoom.set(level);
        zoom
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Zoom as a rounded percentage, e.g. `110`.
    pub fn percent(&self) -> u32 {
        (self.level * 100.0).round() as u32
    }

    /// Sets the level, snapping to the step grid and clamping to range.
    /// Non-finite input resets to the default.
    pub fn set(&mut self, level: f32) {
        self.level = if level.is_finite() {
            snap(level).clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            DEFAULT_ZOOM
        };
    }

    /// Adds `delta` to the level and clamps. Returns true if the level changed.
    pub fn adjust(&mut self, delta: f32) -> bool {
        let before = self.level;
        self.set(self.level + delta);
        self.level != before
    }

    pub fn zoom_in(&mut self) -> bool {
        self.adjust(ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.adjust(-ZOOM_STEP)
    }

    /// Applies one wheel event: scrolling down (positive delta) zooms out,
    /// scrolling up zooms in, a zero delta does nothing.
    pub fn on_wheel(&mut self, delta_y: f32) -> bool {
        if delta_y > 0.0 {
            self.zoom_out()
        } else if delta_y < 0.0 {
            self.zoom_in()
        } else {
            false
        }
    }
}

fn snap(level: f32) -> f32 {
    (level / ZOOM_STEP).round() * ZOOM_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_amplifies_delta() {
        let mut pan = PanGesture::new();
        pan.begin(100.0, 300.0);
        assert!(pan.is_active());
        // moving right by 50px scrolls left by 100
        assert_eq!(pan.drag_to(150.0, 1000.0), Some(200.0));
        assert_eq!(pan.drag_to(60.0, 1000.0), Some(380.0));
    }

    #[test]
    fn test_pan_clamps_scroll() {
        let mut pan = PanGesture::new();
        pan.begin(0.0, 10.0);
        assert_eq!(pan.drag_to(500.0, 1000.0), Some(0.0));
        assert_eq!(pan.drag_to(-5000.0, 1000.0), Some(1000.0));
        assert_eq!(pan.drag_to(-5000.0, -20.0), Some(0.0));
    }

    #[test]
    fn test_pan_inactive_after_end() {
        let mut pan = PanGesture::new();
        assert_eq!(pan.drag_to(10.0, 100.0), None);
        pan.begin(0.0, 0.0);
        pan.end();
        assert_eq!(pan.drag_to(10.0, 100.0), None);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut zoom = Zoom::default();
        for _ in 0..50 {
            zoom.zoom_in();
        }
        assert_eq!(zoom.level(), MAX_ZOOM);
        assert!(!zoom.zoom_in());

        for _ in 0..50 {
            zoom.on_wheel(120.0);
        }
        assert_eq!(zoom.level(), MIN_ZOOM);

        zoom.adjust(1.0e9);
        assert_eq!(zoom.level(), MAX_ZOOM);
        zoom.adjust(-1.0e9);
        assert_eq!(zoom.level(), MIN_ZOOM);
        zoom.set(f32::NAN);
        assert_eq!(zoom.level(), DEFAULT_ZOOM);
    }

    #[test]
    fn test_zoom_steps_do_not_drift() {
        let mut zoom = Zoom::default();
        for _ in 0..7 {
            zoom.zoom_in();
        }
        for _ in 0..7 {
            zoom.zoom_out();
        }
        assert_eq!(zoom.percent(), 100);
        zoom.on_wheel(-3.0);
        assert_eq!(zoom.percent(), 110);
        assert!(!zoom.on_wheel(0.0));
    }
}
