//! The scrollable panel viewport.
//!
//! Owns the scroll transform between panel-local and content-local
//! coordinates and answers visibility queries for culling. Purely geometric;
//! called every redraw tick.

use crate::geometry::{Point, Rect, Size};

/// Viewport state for one graph panel.
#[derive(Debug, Clone)]
pub struct Viewport {
    panel_rect: Rect,
    scroll_position: Point,
    last_scroll_position: Point,
    top_left_padding: Point,
    bottom_right_padding: Point,
}

impl Viewport {
    pub fn new(panel_rect: Rect) -> Self {
        Self {
            panel_rect,
            scroll_position: Point::ZERO,
            last_scroll_position: Point::ZERO,
            top_left_padding: Point::new(8.0, 8.0),
            bottom_right_padding: Point::new(8.0, 8.0),
        }
    }

    pub fn panel_rect(&self) -> Rect {
        self.panel_rect
    }

    pub fn set_panel_rect(&mut self, rect: Rect) {
        self.panel_rect = rect;
    }

    pub fn scroll_position(&self) -> Point {
        self.scroll_position
    }

    /// Visual margins for the background decoration. Not consulted by
    /// hit-testing or visibility.
    pub fn set_padding(&mut self, top_left: Point, bottom_right: Point) {
        self.top_left_padding = top_left;
        self.bottom_right_padding = bottom_right;
    }

    /// Panel rect grown by the decoration padding.
    pub fn decoration_rect(&self) -> Rect {
        self.panel_rect
            .padded(self.top_left_padding, self.bottom_right_padding)
    }

    /// Scroll the panel so the content moves by `delta`.
    pub fn scroll_panel(&mut self, delta: Point) {
        self.scroll_position = self.scroll_position - delta;
    }

    /// The node-position delta for this tick: `-(scroll - last_scroll)`.
    ///
    /// Updates `last_scroll_position` so the delta is consumed; call exactly
    /// once per tick before node positions are adjusted, otherwise the
    /// transform drifts.
    pub fn compute_scroll_delta(&mut self) -> Point {
        let delta = self.last_scroll_position - self.scroll_position;
        self.last_scroll_position = self.scroll_position;
        delta
    }

    /// Boundary-inclusive visibility test against the panel rect.
    pub fn is_visible(&self, point: Point) -> bool {
        self.panel_rect.contains(point)
    }

    /// Default scrollable content bounds: twice the panel size anchored at
    /// the origin. Layout variants may override this per node-type set.
    pub fn view_rect(&self) -> Rect {
        let size = self.panel_rect.size;
        Rect::from_position_size(
            Point::ZERO,
            Size::new(size.width() * 2.0, size.height() * 2.0),
        )
    }
}
