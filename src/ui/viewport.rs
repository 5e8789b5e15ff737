//! Mapping between terminal cells and the logical canvas.

use ratatui::layout::{Position, Rect};

use crate::layout::{Bounds, CANVAS_HEIGHT, CANVAS_WIDTH, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    area: Rect,
}

impl Viewport {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn scale(&self) -> (f32, f32) {
        (
            self.area.width as f32 / CANVAS_WIDTH,
            self.area.height as f32 / CANVAS_HEIGHT,
        )
    }

    /// Logical position of the centre of a terminal cell.
    pub fn to_logical(&self, column: u16, row: u16) -> Option<Point> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let (sx, sy) = self.scale();
        Some(Point::new(
            ((column - self.area.x) as f32 + 0.5) / sx,
            ((row - self.area.y) as f32 + 0.5) / sy,
        ))
    }

    /// Cells whose centres lie strictly inside `bounds`, so every drawn cell
    /// of a box also hit-tests to it.
    pub fn to_cells(&self, bounds: Bounds) -> Rect {
        let (sx, sy) = self.scale();
        let (x0, x1) = cell_span(bounds.x * sx, (bounds.x + bounds.w) * sx, self.area.width);
        let (y0, y1) = cell_span(bounds.y * sy, (bounds.y + bounds.h) * sy, self.area.height);

        Rect::new(
            self.area.x + x0,
            self.area.y + y0,
            x1.saturating_sub(x0),
            y1.saturating_sub(y0),
        )
    }

    /// Full-width single row containing logical height `y`.
    pub fn line_at(&self, y: f32) -> Rect {
        let (_, sy) = self.scale();
        let last = self.area.height.saturating_sub(1);
        let row = ((y * sy).floor().max(0.0) as u16).min(last);
        Rect::new(self.area.x, self.area.y + row, self.area.width, 1.min(self.area.height))
    }
}

/// Half-open cell range `[first, end)` with centres strictly inside
/// `(start, stop)`, clamped to `limit`.
fn cell_span(start: f32, stop: f32, limit: u16) -> (u16, u16) {
    let first = ((start - 0.5).floor() + 1.0).max(0.0) as u16;
    let end = (stop - 0.5).ceil().max(0.0) as u16;
    (first.min(limit), end.min(limit))
}
