//! Geometry for the horizontal timeline track.
//!
//! The track lives in abstract units (see [`aeon_core::TrackView`]); this
//! module projects those units onto terminal cells for one frame. Rendering,
//! mouse hit-testing, and auto-centering all go through the same projection
//! so they cannot disagree about where a segment is.

use aeon_core::TrackView;

/// How many track units one terminal cell covers.
pub const UNITS_PER_CELL: f64 = 10.0;

/// Per-frame projection of the track onto a cell viewport.
#[derive(Debug, Clone, Copy)]
pub struct TrackLayout {
    track_width: f64,
    scroll: f64,
    viewport_cells: u16,
    segments: usize,
}

impl TrackLayout {
    /// Capture the projection for a viewport that is `viewport_cells` wide
    /// and divides the track into `segments` equal slots.
    pub fn new(track: &TrackView, viewport_cells: u16, segments: usize) -> Self {
        let viewport_units = f64::from(viewport_cells) * UNITS_PER_CELL;
        Self {
            track_width: track.width(),
            scroll: track.effective_scroll(viewport_units),
            viewport_cells,
            segments,
        }
    }

    /// Width of one segment in track units.
    #[allow(clippy::cast_precision_loss)]
    pub fn segment_width(&self) -> f64 {
        self.track_width / self.segments.max(1) as f64
    }

    /// Unit offset of the center of segment `index`.
    #[allow(clippy::cast_precision_loss)]
    pub fn segment_center(&self, index: usize) -> f64 {
        self.segment_width() * (index as f64 + 0.5)
    }

    /// Visible cell span `[start, end)` of segment `index`, or `None` when
    /// the segment is entirely off-screen.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn segment_span(&self, index: usize) -> Option<(u16, u16)> {
        if index >= self.segments {
            return None;
        }
        let lo = self.segment_width() * index as f64;
        let hi = lo + self.segment_width();
        let start = ((lo - self.scroll) / UNITS_PER_CELL - 0.5).ceil().max(0.0);
        let end = ((hi - self.scroll) / UNITS_PER_CELL - 0.5)
            .ceil()
            .min(f64::from(self.viewport_cells));
        if end <= start {
            return None;
        }
        Some((start as u16, end as u16))
    }

    /// Cell column closest to the center of segment `index`, if visible.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn center_cell(&self, index: usize) -> Option<u16> {
        let cell = ((self.segment_center(index) - self.scroll) / UNITS_PER_CELL - 0.5).round();
        (cell >= 0.0 && cell < f64::from(self.viewport_cells)).then_some(cell as u16)
    }

    /// Segment under viewport cell `cell`, or `None` past the track end.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn hit_test(&self, cell: u16) -> Option<usize> {
        if self.segments == 0 {
            return None;
        }
        let unit = self.scroll + (f64::from(cell) + 0.5) * UNITS_PER_CELL;
        if unit >= self.track_width {
            return None;
        }
        let index = (unit / self.segment_width()).floor() as usize;
        Some(index.min(self.segments - 1))
    }

    /// Whether track extends past the left edge of the viewport.
    pub fn overflow_left(&self) -> bool {
        self.scroll > 0.0
    }

    /// Whether track extends past the right edge of the viewport.
    pub fn overflow_right(&self) -> bool {
        self.scroll + f64::from(self.viewport_cells) * UNITS_PER_CELL < self.track_width
    }
}
