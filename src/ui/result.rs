use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::draw::PINK;
use crate::layout::{Bounds, Layout, Target};
use crate::snapshot::Snapshot;

use super::canvas::to_color;
use super::centred;
use super::viewport::Viewport;

pub fn render(frame: &mut Frame, viewport: &Viewport, snapshot: &Snapshot) {
    let Layout::Result {
        headline,
        score_line,
        rate_line,
        restart,
        reshuffle,
    } = &snapshot.layout
    else {
        return;
    };

    if let Some(reward) = snapshot.reward {
        let widget = Paragraph::new(reward.headline())
            .alignment(Alignment::Center)
            .fg(to_color(reward.headline_color()))
            .bold();
        frame.render_widget(widget, viewport.line_at(headline.y));
    }

    let widget = Paragraph::new(format!("Score: {} / {}", snapshot.score, snapshot.total))
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, viewport.line_at(score_line.y));

    let widget = Paragraph::new(format!("Rate: {}%", snapshot.rate_percent()))
        .alignment(Alignment::Center)
        .fg(Color::White);
    frame.render_widget(widget, viewport.line_at(rate_line.y));

    let hovered = snapshot.hovered;
    render_button(
        frame,
        viewport,
        *restart,
        "Restart",
        hovered == Some(Target::Restart),
    );
    render_button(
        frame,
        viewport,
        *reshuffle,
        "New questions",
        hovered == Some(Target::Reshuffle),
    );
}

fn render_button(frame: &mut Frame, viewport: &Viewport, bounds: Bounds, label: &str, hovered: bool) {
    let area = viewport.to_cells(bounds);
    let (fill, text) = if hovered {
        (to_color(PINK), Color::Black)
    } else {
        (Color::Rgb(80, 80, 150), Color::White)
    };

    let bordered = hovered && area.height >= 3;
    let block = if bordered {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::White))
    } else {
        Block::default()
    }
    .bg(fill);

    let widget = Paragraph::new(centred(Line::from(label).bold(), area.height, bordered))
        .alignment(Alignment::Center)
        .fg(text)
        .block(block);
    frame.render_widget(widget, area);
}
