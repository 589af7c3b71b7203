//! Zoom and pan model for the horizontal timeline track.
//!
//! The track is a virtual horizontal strip whose width is the zoom level,
//! measured in display units. The visible viewport pans across it with a
//! scroll offset. Widths clamp to a fixed range, so repeated zooming at a
//! boundary is idempotent.

/// Minimum track width in display units.
pub const MIN_WIDTH: f64 = 800.0;
/// Maximum track width in display units.
pub const MAX_WIDTH: f64 = 3000.0;
/// Track width on startup and after a reset.
pub const DEFAULT_WIDTH: f64 = 1000.0;
/// Multiplier applied by a zoom-in step.
pub const ZOOM_IN: f64 = 1.2;
/// Multiplier applied by a zoom-out step.
pub const ZOOM_OUT: f64 = 0.8;

/// Zoom/pan state of the timeline track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    /// Current track width in display units.
    width: f64,
    /// Pan offset from the left edge, in display units.
    scroll: f64,
}

impl TrackView {
    /// Create a track at the default width, scrolled to the origin.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            scroll: 0.0,
        }
    }

    /// Current track width in display units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Pan offset from the left edge, in display units.
    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Scale the width by `factor`, clamped to `[MIN_WIDTH, MAX_WIDTH]`.
    pub fn zoom(&mut self, factor: f64) {
        self.width = (self.width * factor).clamp(MIN_WIDTH, MAX_WIDTH);
    }

    /// One zoom-in step.
    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_IN);
    }

    /// One zoom-out step.
    pub fn zoom_out(&mut self) {
        self.zoom(ZOOM_OUT);
    }

    /// Restore the default width and scroll to the origin.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Pan by `delta` display units, clamped to the track for the given
    /// viewport width.
    pub fn scroll_by(&mut self, delta: f64, viewport: f64) {
        self.scroll = (self.scroll + delta).clamp(0.0, self.max_scroll(viewport));
    }

    /// Jump so the viewport is centered on `offset`, clamped to the track.
    pub fn center_on(&mut self, offset: f64, viewport: f64) {
        self.scroll = (offset - viewport / 2.0).clamp(0.0, self.max_scroll(viewport));
    }

    /// Largest valid scroll offset for a viewport of the given width.
    pub fn max_scroll(&self, viewport: f64) -> f64 {
        (self.width - viewport).max(0.0)
    }

    /// Scroll offset actually usable for a viewport of the given width.
    ///
    /// Zooming out can strand the stored offset past the new end of the
    /// track; rendering clamps through this instead of mutating state.
    pub fn effective_scroll(&self, viewport: f64) -> f64 {
        self.scroll.min(self.max_scroll(viewport))
    }
}

impl Default for TrackView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_starts_at_default() {
        let track = TrackView::new();
        assert_close(track.width(), DEFAULT_WIDTH);
        assert_close(track.scroll(), 0.0);
    }

    #[test]
    fn test_zoom_in_steps() {
        let mut track = TrackView::new();
        track.zoom_in();
        assert_close(track.width(), 1200.0);
        track.zoom_in();
        assert_close(track.width(), 1440.0);
    }

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let mut track = TrackView::new();
        for _ in 0..10 {
            track.zoom_in();
        }
        assert_close(track.width(), MAX_WIDTH);

        // Idempotent at the boundary
        track.zoom_in();
        assert_close(track.width(), MAX_WIDTH);
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let mut track = TrackView::new();
        track.zoom_out();
        assert_close(track.width(), MIN_WIDTH);

        track.zoom_out();
        assert_close(track.width(), MIN_WIDTH);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut track = TrackView::new();
        track.zoom_in();
        track.zoom_in();
        track.scroll_by(300.0, 80.0);

        track.reset();
        assert_close(track.width(), DEFAULT_WIDTH);
        assert_close(track.scroll(), 0.0);
    }

    #[test]
    fn test_scroll_clamps_to_track() {
        let mut track = TrackView::new();

        track.scroll_by(-50.0, 100.0);
        assert_close(track.scroll(), 0.0);

        track.scroll_by(5000.0, 100.0);
        assert_close(track.scroll(), 900.0); // 1000 - 100

        track.scroll_by(-200.0, 100.0);
        assert_close(track.scroll(), 700.0);
    }

    #[test]
    fn test_scroll_noop_when_viewport_covers_track() {
        let mut track = TrackView::new();
        track.scroll_by(500.0, 2000.0);
        assert_close(track.scroll(), 0.0);
    }

    #[test]
    fn test_center_on_clamps_at_both_ends() {
        let mut track = TrackView::new();

        track.center_on(500.0, 100.0);
        assert_close(track.scroll(), 450.0);

        track.center_on(10.0, 100.0);
        assert_close(track.scroll(), 0.0);

        track.center_on(990.0, 100.0);
        assert_close(track.scroll(), 900.0);
    }

    #[test]
    fn test_effective_scroll_after_zoom_out() {
        let mut track = TrackView::new();
        track.zoom_in(); // 1200
        track.scroll_by(1100.0, 100.0); // max scroll = 1100
        assert_close(track.scroll(), 1100.0);

        track.zoom_out(); // back to 960
        assert_close(track.effective_scroll(100.0), 860.0);
    }
}
