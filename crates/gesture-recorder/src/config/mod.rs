mod canvas_config;
mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod output_config;

pub(crate) use {
    canvas_config::CanvasConfig,
    capture_config::{CaptureButton, CaptureConfig},
    config::Config,
    output_config::OutputConfig,
};

pub(crate) const DEFAULT_CANVAS_WIDTH: u32 = 300;
pub(crate) const DEFAULT_CANVAS_HEIGHT: u32 = 300;
pub(crate) const DEFAULT_FRAME_RATE: f64 = 12.0;
pub(crate) const MAX_FRAME_RATE: f64 = 240.0;
pub(crate) const DEFAULT_TITLE: &str = "Gesture Recorder";

pub(crate) fn default_canvas_width() -> u32 {
    DEFAULT_CANVAS_WIDTH
}

pub(crate) fn default_canvas_height() -> u32 {
    DEFAULT_CANVAS_HEIGHT
}

pub(crate) fn default_frame_rate() -> f64 {
    DEFAULT_FRAME_RATE
}

pub(crate) fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

pub(crate) fn default_true() -> bool {
    true
}
