use gesture_recorder_core::CompletedGesture;

/// Commands sent from the canvas thread to the export worker.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// A drag ended with at least one sample.
    GestureComplete(CompletedGesture),
    /// Request worker shutdown once queued exports are written.
    Shutdown,
}
