use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Stylize};
use ratatui::widgets::Paragraph;

use crate::layout::Point;

use super::viewport::Viewport;

pub fn render(frame: &mut Frame, viewport: &Viewport, message: Point) {
    let widget = Paragraph::new("Loading questions...")
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, viewport.line_at(message.y));
}
