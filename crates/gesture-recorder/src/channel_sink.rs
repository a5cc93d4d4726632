use crate::AppCommand;

use gesture_recorder_core::{CompletedGesture, CoreResult, ExportSink, RecorderError};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

/// Export sink that forwards completed gestures to the async worker.
///
/// Exports are never dropped: a full queue blocks the canvas thread until
/// the worker frees a slot. Only a closed queue is an export failure. Must
/// not be called from inside the tokio runtime.
pub struct ChannelSink {
    command_tx: mpsc::Sender<AppCommand>,
}

impl ChannelSink {
    /// Forward exports over `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }
}

impl ExportSink for ChannelSink {
    #[track_caller]
    fn on_gesture_complete(&mut self, gesture: CompletedGesture) -> CoreResult<()> {
        let gesture_id = gesture.gesture_id();

        match self.command_tx.try_send(AppCommand::GestureComplete(gesture)) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => {
                warn!(gesture_id = %gesture_id, "Export queue full, waiting for worker");
                self.command_tx.blocking_send(command).map_err(|e| {
                    RecorderError::export_failed(format!("Failed to queue gesture export: {}", e))
                })?;
            }
            Err(e @ TrySendError::Closed(_)) => {
                return Err(RecorderError::export_failed(format!(
                    "Failed to queue gesture export: {}",
                    e
                )));
            }
        }

        debug!(gesture_id = %gesture_id, "Gesture queued for output");

        Ok(())
    }
}
