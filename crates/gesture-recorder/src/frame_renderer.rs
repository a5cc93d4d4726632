use gesture_recorder_core::RenderCommand;

use tracing::trace;

/// Presents a tick's render commands on the canvas window.
///
/// The window is readout-only: text commands become the window title and
/// drawing commands are counted and traced, never painted.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    base_title: String,
    current_title: String,
}

impl FrameRenderer {
    /// Renderer for a window whose title starts with `base_title`.
    pub fn new(base_title: &str) -> Self {
        Self {
            base_title: base_title.to_string(),
            current_title: base_title.to_string(),
        }
    }

    /// Apply one frame, returning the new window title if it changed.
    pub fn present(&mut self, commands: &[RenderCommand], capturing: bool) -> Option<String> {
        let mut title = self.base_title.clone();
        let mut points = 0usize;

        for command in commands {
            match command {
                RenderCommand::Text { content, .. } => {
                    title.push_str(" | ");
                    title.push_str(content);
                }
                RenderCommand::Point { .. } => points += 1,
                RenderCommand::Background { gray } => trace!(gray, "Background"),
                RenderCommand::StrokeWeight { weight } => trace!(weight, "Stroke weight"),
            }
        }

        if capturing {
            title.push_str(" | recording");
        }

        trace!(points, "Frame presented");

        if title == self.current_title {
            return None;
        }

        self.current_title = title.clone();
        Some(title)
    }
}
