use crate::{AppCommand, AppResult, OutputHandler};

use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Export worker.
///
/// Runs on the async runtime thread and writes completed gestures in the
/// order the canvas thread queued them.
pub struct App {
    pub(crate) output_handler: OutputHandler,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
}

impl App {
    /// Run until `Shutdown` arrives or every sender is dropped.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Export worker starting");

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::GestureComplete(gesture) => {
                            let gesture_id = gesture.gesture_id();
                            if let Err(e) = self.write_gesture(&gesture).await {
                                error!(gesture_id = %gesture_id, error = ?e, "Failed to output gesture");
                            }
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                else => {
                    info!("Command channel closed, shutting down");
                    break;
                }
            }
        }

        info!("Export worker shut down successfully");

        Ok(())
    }

    #[instrument(skip_all, fields(gesture_id = %gesture.gesture_id()))]
    async fn write_gesture(
        &mut self,
        gesture: &gesture_recorder_core::CompletedGesture,
    ) -> AppResult<()> {
        let payload = gesture.to_json()?;
        self.output_handler.output_text(&payload).await?;

        info!(
            sample_count = gesture.sample_count(),
            duration_ms = gesture.duration_ms(),
            "Gesture written"
        );

        Ok(())
    }
}
