use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::draw::{GREEN, PINK, RED};
use crate::layout::{Bounds, Layout, Target};
use crate::snapshot::Snapshot;

use super::canvas::to_color;
use super::centred;
use super::viewport::Viewport;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionState {
    Idle,
    Hovered,
    Correct,
    Chosen,
    Dimmed,
}

pub fn render(frame: &mut Frame, viewport: &Viewport, snapshot: &Snapshot) {
    let Layout::Quiz {
        question: question_bounds,
        progress,
        options,
        feedback,
        hint,
    } = &snapshot.layout
    else {
        return;
    };
    let Some(question) = snapshot.question else {
        return;
    };

    render_question_text(frame, viewport.to_cells(*question_bounds), &question.text);

    let progress_text = format!("Question {} / {}", snapshot.question_number, snapshot.total);
    let widget = Paragraph::new(progress_text)
        .alignment(Alignment::Center)
        .fg(Color::Gray);
    frame.render_widget(widget, viewport.line_at(progress.y));

    for (index, (bounds, text)) in options.iter().zip(question.options.iter()).enumerate() {
        let state = option_state(snapshot, index, question.correct_index);
        render_option(frame, viewport, *bounds, index, text, state);
    }

    if let Some(outcome) = snapshot.feedback {
        let (message, color) = if outcome.correct {
            ("Correct!", GREEN)
        } else {
            ("Wrong...", RED)
        };
        let widget = Paragraph::new(message)
            .alignment(Alignment::Center)
            .fg(to_color(color))
            .bold();
        frame.render_widget(widget, viewport.line_at(feedback.y));

        let widget = Paragraph::new("Click anywhere to continue")
            .alignment(Alignment::Center)
            .fg(Color::Gray);
        frame.render_widget(widget, viewport.line_at(hint.y));
    }
}

fn option_state(snapshot: &Snapshot, index: usize, correct_index: usize) -> OptionState {
    match snapshot.selected {
        None if snapshot.hovered == Some(Target::Option(index)) => OptionState::Hovered,
        None => OptionState::Idle,
        Some(_) if index == correct_index => OptionState::Correct,
        Some(selected) if index == selected => OptionState::Chosen,
        Some(_) => OptionState::Dimmed,
    }
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_option(
    frame: &mut Frame,
    viewport: &Viewport,
    bounds: Bounds,
    index: usize,
    text: &str,
    state: OptionState,
) {
    let area = viewport.to_cells(bounds);
    let (fill, border, text_color) = match state {
        OptionState::Idle => (Color::Rgb(50, 50, 80), None, Color::White),
        OptionState::Hovered => (
            Color::Rgb(100, 100, 150),
            Some(to_color(PINK)),
            to_color(PINK),
        ),
        OptionState::Correct => (Color::Rgb(30, 100, 30), Some(to_color(GREEN)), Color::White),
        OptionState::Chosen => (Color::Rgb(100, 30, 30), Some(to_color(RED)), Color::White),
        OptionState::Dimmed => (Color::Rgb(50, 50, 50), None, Color::White),
    };

    let block = match border {
        Some(border) if area.height >= 3 => Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
        _ => Block::default(),
    }
    .bg(fill);

    let label = Line::from(vec![
        Span::styled(format!(" {}. ", OPTION_LABELS[index]), Style::default().bold()),
        Span::raw(text),
    ]);

    let bordered = border.is_some() && area.height >= 3;
    let widget = Paragraph::new(centred(label, area.height, bordered))
        .fg(text_color)
        .block(block);
    frame.render_widget(widget, area);
}
