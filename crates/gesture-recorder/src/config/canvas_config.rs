use crate::config::{default_canvas_height, default_canvas_width, default_title};

use gesture_recorder_core::CanvasBounds;
use serde::{Deserialize, Serialize};

/// Drawing surface configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in logical pixels.
    #[serde(default = "default_canvas_width")]
    pub width: u32,
    /// Canvas height in logical pixels.
    #[serde(default = "default_canvas_height")]
    pub height: u32,
    /// Window title prefix.
    #[serde(default = "default_title")]
    pub title: String,
}

impl CanvasConfig {
    /// Capture region covering the whole canvas.
    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds::new(f64::from(self.width), f64::from(self.height))
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            title: default_title(),
        }
    }
}
