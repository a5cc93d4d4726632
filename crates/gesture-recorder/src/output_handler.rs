//! Text output for completed trajectories.
//!
//! Each export is written as one line to the text output (stdout by
//! default) and optionally copied to the clipboard.

use crate::{AppError, AppResult, config::OutputConfig};

use std::{io::Write, panic::Location};

use arboard::Clipboard;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Output handler for exported trajectory text.
pub struct OutputHandler {
    pub(crate) writer: Option<Box<dyn Write + Send>>,
    pub(crate) clipboard: Option<Clipboard>,
}

impl OutputHandler {
    /// Create an output handler for the configured destinations.
    ///
    /// The clipboard is only opened when copying is enabled.
    #[track_caller]
    #[instrument]
    pub fn new(config: &OutputConfig) -> AppResult<Self> {
        let writer: Option<Box<dyn Write + Send>> = if config.print_to_stdout {
            Some(Box::new(std::io::stdout()))
        } else {
            None
        };

        let clipboard = if config.copy_to_clipboard {
            Some(Clipboard::new().map_err(|e| AppError::ClipboardError {
                reason: format!("Failed to initialize clipboard: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?)
        } else {
            None
        };

        info!(
            stdout = config.print_to_stdout,
            clipboard = clipboard.is_some(),
            "OutputHandler initialized"
        );

        Ok(Self { writer, clipboard })
    }

    /// Output handler writing only to `writer`.
    pub(crate) fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Some(writer),
            clipboard: None,
        }
    }

    /// Write one exported document to every enabled destination.
    #[instrument(skip(self, text))]
    pub async fn output_text(&mut self, text: &str) -> AppResult<()> {
        if let Some(writer) = self.writer.as_mut() {
            writeln!(writer, "{}", text)?;
            writer.flush()?;
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard
                .set_text(text)
                .map_err(|e| AppError::ClipboardError {
                    reason: format!("Failed to set clipboard: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            debug!(text_len = text.len(), "Text copied to clipboard");
        }

        info!(text_len = text.len(), "Text output complete");

        Ok(())
    }
}
