use crate::config::default_frame_rate;

use std::time::Duration;

use gesture_recorder_core::ClockKind;
use serde::{Deserialize, Serialize};
use tao::event::MouseButton;

/// Mouse button that arms capture while held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureButton {
    /// Primary button.
    #[default]
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

impl CaptureButton {
    /// Whether a window event's button is this one.
    pub fn matches(self, button: MouseButton) -> bool {
        matches!(
            (self, button),
            (CaptureButton::Left, MouseButton::Left)
                | (CaptureButton::Right, MouseButton::Right)
                | (CaptureButton::Middle, MouseButton::Middle)
        )
    }
}

/// Tick rate and input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Animation ticks per second.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
    /// Button that must be held to capture.
    #[serde(default)]
    pub button: CaptureButton,
    /// Timestamp source for samples.
    #[serde(default)]
    pub clock: ClockKind,
}

impl CaptureConfig {
    /// Time between ticks.
    ///
    /// Only meaningful after [`Config::validate`](crate::config::Config::validate)
    /// has accepted the frame rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate)
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            button: CaptureButton::default(),
            clock: ClockKind::default(),
        }
    }
}
