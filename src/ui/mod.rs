mod canvas;
mod loading;
mod quiz;
mod result;
mod viewport;

use ratatui::Frame;
use ratatui::text::Line;

use crate::layout::Layout;
use crate::snapshot::Snapshot;

pub use viewport::Viewport;

/// Draws one frame: the canvas layer first, then the phase's widgets.
pub fn render(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.area();
    let viewport = Viewport::new(area);

    canvas::render(frame, area, snapshot);

    match &snapshot.layout {
        Layout::Loading { message } => loading::render(frame, &viewport, *message),
        Layout::Quiz { .. } => quiz::render(frame, &viewport, snapshot),
        Layout::Result { .. } => result::render(frame, &viewport, snapshot),
    }
}

/// Pads `line` with blank lines so it sits on the middle row of a box
/// `height` cells tall.
fn centred(line: Line<'_>, height: u16, bordered: bool) -> Vec<Line<'_>> {
    let middle = height.saturating_sub(1) / 2;
    let blank = if bordered { middle.saturating_sub(1) } else { middle };
    let mut lines = vec![Line::from(""); blank as usize];
    lines.push(line);
    lines
}
