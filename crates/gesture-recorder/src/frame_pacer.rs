use std::time::{Duration, Instant};

use tracing::debug;

/// Fixed-interval tick deadlines.
///
/// A late tick skips the frames it missed instead of firing them back to
/// back.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    /// First tick one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now + interval,
        }
    }

    /// Time between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due.
    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    /// Whether the next tick is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Schedule the tick after the one just run at `now`.
    pub fn advance(&mut self, now: Instant) {
        self.next_frame += self.interval;

        if self.next_frame <= now {
            let behind = now.duration_since(self.next_frame);
            debug!(
                behind_ms = behind.as_millis(),
                "Tick ran late, skipping missed frames"
            );
            self.next_frame = now + self.interval;
        }
    }
}
