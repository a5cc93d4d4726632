//! Tick-driven capture state machine.
//!
//! Two states, Idle and Capturing, selected every tick by whether the capture
//! button is held with the pointer inside the canvas. The transition back to
//! Idle exports the captured trajectory and resets the state.

use crate::{
    CanvasBounds, Clock, ExportSink, GestureState, PointerSnapshot, RenderCommand, RenderStyle,
    Sample,
};

use tracing::{error, info, instrument, trace};

/// Records pointer trajectories one tick at a time.
///
/// The recorder holds only collaborators (clock, sink, style). Capture state
/// lives in a [`GestureState`] owned by the caller, so a harness can inspect
/// or reset it between ticks.
pub struct GestureRecorder<C, S> {
    clock: C,
    sink: S,
    style: RenderStyle,
}

impl<C: Clock, S: ExportSink> GestureRecorder<C, S> {
    /// Create a recorder with the default [`RenderStyle`].
    pub fn new(clock: C, sink: S) -> Self {
        Self {
            clock,
            sink,
            style: RenderStyle::default(),
        }
    }

    /// Replace the render style.
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Active render style.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// The export sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the export sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the recorder, returning its export sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Advance one animation frame.
    ///
    /// Appends a sample while the button is held inside `bounds`, otherwise
    /// ends any gesture in progress. Returns the frame's drawing commands,
    /// always ending with the coordinate readout.
    #[instrument(
        level = "trace",
        skip_all,
        fields(x = pointer.x, y = pointer.y, active = pointer.is_active)
    )]
    pub fn on_tick(
        &mut self,
        state: &mut GestureState,
        pointer: PointerSnapshot,
        bounds: CanvasBounds,
    ) -> Vec<RenderCommand> {
        let mut commands = Vec::with_capacity(state.trajectory().len() + 6);

        if pointer.is_active && bounds.contains(pointer.x, pointer.y) {
            let now = self.clock.now_ms();
            let (active, started) = state.begin(now);
            if started {
                info!(gesture_id = %active.gesture_id, "Gesture started");
            }

            // A wall clock stepping backwards must not reorder the trajectory.
            let previous_ms = state.trajectory().last_elapsed_ms().unwrap_or(0);
            let elapsed_ms = now.saturating_sub(active.started_at_ms).max(previous_ms);
            state.append(Sample::new(pointer.x, pointer.y, elapsed_ms));

            trace!(
                gesture_id = %active.gesture_id,
                elapsed_ms,
                sample_count = state.trajectory().len(),
                "Sample captured"
            );

            commands.push(RenderCommand::Background {
                gray: self.style.capture_background,
            });
            commands.push(RenderCommand::StrokeWeight {
                weight: self.style.stroke_weight,
            });
            commands.extend(
                state
                    .trajectory()
                    .samples()
                    .iter()
                    .map(|s| RenderCommand::Point { x: s.x, y: s.y }),
            );
            commands.push(RenderCommand::Point {
                x: pointer.x,
                y: pointer.y,
            });
        } else {
            self.export(state);
            commands.push(RenderCommand::Background {
                gray: self.style.idle_background,
            });
        }

        commands.extend(self.style.readout(pointer.x, pointer.y));
        commands
    }

    /// End any gesture in progress as if the button had been released.
    ///
    /// Returns `true` if a trajectory was delivered to the sink.
    #[instrument(skip_all)]
    pub fn finish(&mut self, state: &mut GestureState) -> bool {
        self.export(state)
    }

    fn export(&mut self, state: &mut GestureState) -> bool {
        let Some(gesture) = state.end() else {
            return false;
        };

        let gesture_id = gesture.gesture_id();
        let sample_count = gesture.sample_count();
        let duration_ms = gesture.duration_ms();

        match self.sink.on_gesture_complete(gesture) {
            Ok(()) => {
                info!(
                    gesture_id = %gesture_id,
                    sample_count,
                    duration_ms,
                    "Gesture exported"
                );
                true
            }
            Err(e) => {
                error!(gesture_id = %gesture_id, error = ?e, "Failed to export gesture");
                false
            }
        }
    }
}
