use crate::{ActiveGesture, CoreResult, Trajectory};

use uuid::Uuid;

/// A finished gesture handed to an [`ExportSink`](crate::ExportSink).
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedGesture {
    gesture_id: Uuid,
    started_at_ms: u64,
    trajectory: Trajectory,
}

impl CompletedGesture {
    pub(crate) fn new(active: ActiveGesture, trajectory: Trajectory) -> Self {
        Self {
            gesture_id: active.gesture_id,
            started_at_ms: active.started_at_ms,
            trajectory,
        }
    }

    /// Gesture ID assigned when capture began.
    pub fn gesture_id(&self) -> Uuid {
        self.gesture_id
    }

    /// Clock reading when capture began.
    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    /// Captured samples in capture order.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Take ownership of the captured samples.
    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    /// Number of captured samples.
    pub fn sample_count(&self) -> usize {
        self.trajectory.len()
    }

    /// Elapsed time of the final sample.
    pub fn duration_ms(&self) -> u64 {
        self.trajectory.last_elapsed_ms().unwrap_or(0)
    }

    /// The exported text: `{"trajectory":[[x,y,elapsedMs],...]}`.
    #[track_caller]
    pub fn to_json(&self) -> CoreResult<String> {
        self.trajectory.to_json()
    }
}
