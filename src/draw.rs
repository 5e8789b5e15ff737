//! Backend-neutral draw commands produced by effects and reward animations.

use crate::layout::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same colour with alpha taken from a float, clamped to `[0, 255]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    /// Composites this colour over an opaque background.
    pub fn over(self, background: Rgba) -> Rgba {
        let t = self.a as f32 / 255.0;
        let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * t).round() as u8;
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
pub const RED: Rgba = Rgba::rgb(255, 0, 0);
pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);
pub const PINK: Rgba = Rgba::rgb(255, 183, 221);
pub const BACKGROUND: Rgba = Rgba::rgb(30, 30, 40);

/// One primitive shape in logical canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Filled circle.
    Disc {
        center: Point,
        diameter: f32,
        color: Rgba,
    },
    /// Circle outline.
    Ring {
        center: Point,
        radius: f32,
        stroke_width: f32,
        color: Rgba,
    },
    /// Filled quadrilateral, corners in drawing order.
    Quad { corners: [Point; 4], color: Rgba },
}

impl DrawCommand {
    pub fn color(&self) -> Rgba {
        match self {
            DrawCommand::Disc { color, .. }
            | DrawCommand::Ring { color, .. }
            | DrawCommand::Quad { color, .. } => *color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(GREEN.with_alpha(-3.0).a, 0);
        assert_eq!(GREEN.with_alpha(400.0).a, 255);
        assert_eq!(GREEN.with_alpha(127.9).a, 127);
    }

    #[test]
    fn test_over_blends_toward_background() {
        assert_eq!(RED.over(BACKGROUND), RED);
        assert_eq!(RED.with_alpha(0.0).over(BACKGROUND), BACKGROUND);

        let half = Rgba::new(255, 255, 255, 128).over(Rgba::rgb(0, 0, 0));
        assert!(half.r > 120 && half.r < 135);
    }
}
