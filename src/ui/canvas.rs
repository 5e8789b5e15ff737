//! Background layer: reward animation, effects and the custom cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line, Points};

use crate::draw::{BACKGROUND, DrawCommand, PINK, Rgba};
use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, Point};
use crate::snapshot::Snapshot;

const CURSOR_RADIUS: f64 = 6.0;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let canvas = Canvas::default()
        .background_color(to_color(BACKGROUND))
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH as f64])
        .y_bounds([0.0, CANVAS_HEIGHT as f64])
        .paint(|ctx| {
            for command in &snapshot.reward_scene {
                draw(ctx, command);
            }
            ctx.layer();

            for command in snapshot.particles.iter().chain(&snapshot.ripples) {
                draw(ctx, command);
            }
            ctx.layer();

            if let Some(pointer) = snapshot.pointer {
                let (x, y) = flip(pointer);
                let color = to_color(PINK);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: CURSOR_RADIUS,
                    color,
                });
                ctx.draw(&Points {
                    coords: &[(x, y)],
                    color: Color::White,
                });
            }
        });

    frame.render_widget(canvas, area);
}

/// Blends against the background, since terminal cells have no alpha.
pub fn to_color(rgba: Rgba) -> Color {
    let opaque = rgba.over(BACKGROUND);
    Color::Rgb(opaque.r, opaque.g, opaque.b)
}

/// Canvas y grows upwards; logical y grows downwards.
fn flip(point: Point) -> (f64, f64) {
    (point.x as f64, (CANVAS_HEIGHT - point.y) as f64)
}

fn draw(ctx: &mut Context, command: &DrawCommand) {
    if command.color().a == 0 {
        return;
    }
    let color = to_color(command.color());

    match *command {
        DrawCommand::Disc {
            center, diameter, ..
        } => {
            let (x, y) = flip(center);
            ctx.draw(&Points {
                coords: &[(x, y)],
                color,
            });
            if diameter > 4.0 {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: diameter as f64 / 2.0,
                    color,
                });
            }
        }
        DrawCommand::Ring {
            center,
            radius,
            stroke_width,
            ..
        } => {
            let (x, y) = flip(center);
            ctx.draw(&Circle {
                x,
                y,
                radius: radius as f64,
                color,
            });
            if stroke_width >= 3.0 && radius > stroke_width {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: (radius - stroke_width / 2.0) as f64,
                    color,
                });
            }
        }
        DrawCommand::Quad { corners, .. } => {
            for (i, corner) in corners.iter().enumerate() {
                let (x1, y1) = flip(*corner);
                let (x2, y2) = flip(corners[(i + 1) % corners.len()]);
                ctx.draw(&Line::new(x1, y1, x2, y2, color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::GREEN;

    #[test]
    fn test_to_color_blends_alpha() {
        assert_eq!(to_color(GREEN), Color::Rgb(0, 255, 0));
        assert_eq!(to_color(GREEN.with_alpha(0.0)), Color::Rgb(30, 30, 40));
    }

    #[test]
    fn test_flip() {
        assert_eq!(flip(Point::new(10.0, 0.0)), (10.0, 600.0));
        assert_eq!(flip(Point::new(10.0, 600.0)), (10.0, 0.0));
    }
}
