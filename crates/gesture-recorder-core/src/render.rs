//! Per-tick drawing instructions for the host canvas.

use serde::Serialize;

/// One drawing instruction produced by a tick.
///
/// Replaying the commands of a tick has no effect on capture state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    /// Repaint the whole canvas with a gray level.
    Background {
        /// Gray level, 0 (black) to 255 (white).
        gray: u8,
    },
    /// Stroke weight for subsequent points.
    StrokeWeight {
        /// Stroke weight in canvas pixels.
        weight: f32,
    },
    /// Point marker at a canvas position.
    Point {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Text anchored at a canvas position.
    Text {
        /// Text to draw.
        content: String,
        /// Horizontal anchor.
        x: f64,
        /// Baseline.
        y: f64,
    },
}

/// Visual parameters of the sketch.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Background shade while idle.
    pub idle_background: u8,
    /// Background shade while capturing.
    pub capture_background: u8,
    /// Stroke weight for trajectory points.
    pub stroke_weight: f32,
    /// Anchor of the `X:` readout line.
    pub readout_x_anchor: (f64, f64),
    /// Anchor of the `Y:` readout line.
    pub readout_y_anchor: (f64, f64),
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            idle_background: 230,
            capture_background: 240,
            stroke_weight: 3.0,
            readout_x_anchor: (0.0, 12.0),
            readout_y_anchor: (0.0, 24.0),
        }
    }
}

impl RenderStyle {
    /// Diagnostic readout of the raw pointer coordinates.
    pub(crate) fn readout(&self, x: f64, y: f64) -> [RenderCommand; 2] {
        let (xx, xy) = self.readout_x_anchor;
        let (yx, yy) = self.readout_y_anchor;
        [
            RenderCommand::Text {
                content: format!("X: {}", format_coordinate(x)),
                x: xx,
                y: xy,
            },
            RenderCommand::Text {
                content: format!("Y: {}", format_coordinate(y)),
                x: yx,
                y: yy,
            },
        ]
    }
}

/// Whole coordinates print without a trailing `.0`.
pub(crate) fn format_coordinate(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
