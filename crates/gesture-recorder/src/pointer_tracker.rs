use crate::config::CaptureButton;

use gesture_recorder_core::PointerSnapshot;
use tao::{
    dpi::LogicalPosition,
    event::{ElementState, MouseButton},
};

/// Folds window input events into the pointer state read at each tick.
///
/// Keeps the last known position after the cursor leaves the window, the way
/// a canvas keeps reporting its last mouse coordinates.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    capture_button: CaptureButton,
    position: LogicalPosition<f64>,
    button_held: bool,
}

impl PointerTracker {
    /// Track `capture_button`, starting at the canvas origin with it released.
    pub fn new(capture_button: CaptureButton) -> Self {
        Self {
            capture_button,
            position: LogicalPosition::new(0.0, 0.0),
            button_held: false,
        }
    }

    /// Cursor moved to `position`, in logical canvas pixels.
    pub fn cursor_moved(&mut self, position: LogicalPosition<f64>) {
        self.position = position;
    }

    /// A mouse button changed state. Other buttons are ignored.
    pub fn button_input(&mut self, button: MouseButton, state: ElementState) {
        if self.capture_button.matches(button) {
            self.button_held = state == ElementState::Pressed;
        }
    }

    /// The window lost focus; a release may never be delivered.
    pub fn focus_lost(&mut self) {
        self.button_held = false;
    }

    /// Pointer state for the next tick.
    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            x: self.position.x,
            y: self.position.y,
            is_active: self.button_held,
        }
    }
}
