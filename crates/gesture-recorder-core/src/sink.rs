use crate::{CompletedGesture, CoreResult};

/// Receiver of completed gestures.
///
/// Called at most once per gesture, only for gestures with at least one
/// sample. The gesture is moved in; the recorder keeps no copy.
pub trait ExportSink {
    /// Deliver a completed gesture.
    ///
    /// # Errors
    ///
    /// Returns an error if the gesture could not be delivered. The recorder
    /// logs it and resets regardless.
    fn on_gesture_complete(&mut self, gesture: CompletedGesture) -> CoreResult<()>;
}

impl<F> ExportSink for F
where
    F: FnMut(CompletedGesture) -> CoreResult<()>,
{
    fn on_gesture_complete(&mut self, gesture: CompletedGesture) -> CoreResult<()> {
        self(gesture)
    }
}

/// Sink that keeps every exported document in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    exports: Vec<String>,
}

impl MemorySink {
    /// Exported JSON documents, oldest first.
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// Drain the collected documents.
    pub fn take_exports(&mut self) -> Vec<String> {
        std::mem::take(&mut self.exports)
    }
}

impl ExportSink for MemorySink {
    fn on_gesture_complete(&mut self, gesture: CompletedGesture) -> CoreResult<()> {
        self.exports.push(gesture.to_json()?);
        Ok(())
    }
}
