use crate::{CompletedGesture, Sample, Trajectory};

use uuid::Uuid;

/// Bookkeeping for the gesture currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveGesture {
    /// Unique gesture ID for log correlation.
    pub gesture_id: Uuid,
    /// Clock reading when the gesture began.
    pub started_at_ms: u64,
}

/// Capture state threaded through every tick.
///
/// Owned by the tick harness and lent to
/// [`GestureRecorder::on_tick`](crate::GestureRecorder::on_tick). A start
/// time exists exactly while a gesture is being captured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    active: Option<ActiveGesture>,
    trajectory: Trajectory,
}

impl GestureState {
    /// Whether a gesture is currently being captured.
    pub fn is_capturing(&self) -> bool {
        self.active.is_some()
    }

    /// The in-progress gesture, if capturing.
    pub fn active(&self) -> Option<&ActiveGesture> {
        self.active.as_ref()
    }

    /// Samples captured so far in the current gesture.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Start a new gesture at `now_ms` unless one is already active.
    pub(crate) fn begin(&mut self, now_ms: u64) -> (ActiveGesture, bool) {
        match self.active {
            Some(active) => (active, false),
            None => {
                let active = ActiveGesture {
                    gesture_id: Uuid::new_v4(),
                    started_at_ms: now_ms,
                };
                self.active = Some(active);
                (active, true)
            }
        }
    }

    pub(crate) fn append(&mut self, sample: Sample) {
        self.trajectory.push(sample);
    }

    /// End the current gesture, returning it if anything was captured.
    ///
    /// The state is Idle with an empty trajectory afterwards either way.
    pub(crate) fn end(&mut self) -> Option<CompletedGesture> {
        let active = self.active.take();
        let trajectory = std::mem::take(&mut self.trajectory);

        match active {
            Some(active) if !trajectory.is_empty() => Some(CompletedGesture::new(active, trajectory)),
            _ => None,
        }
    }
}
