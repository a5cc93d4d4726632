//! Gesture Recorder Core Library
//!
//! Tick-driven pointer trajectory capture: while the capture button is held
//! inside the canvas, every animation tick appends a timestamped sample; when
//! the drag ends the completed trajectory is handed to an [`ExportSink`].
//!
//! # Example
//!
//! ```
//! use gesture_recorder_core::{
//!     CanvasBounds, CoreResult, GestureRecorder, GestureState, ManualClock, MemorySink,
//!     PointerSnapshot,
//! };
//!
//! fn main() -> CoreResult<()> {
//!     let clock = ManualClock::new(0);
//!     let mut recorder = GestureRecorder::new(clock.clone(), MemorySink::default());
//!     let mut state = GestureState::default();
//!     let bounds = CanvasBounds::new(300.0, 300.0);
//!
//!     recorder.on_tick(&mut state, PointerSnapshot::pressed(10.0, 20.0), bounds);
//!     clock.advance(83);
//!     recorder.on_tick(&mut state, PointerSnapshot::pressed(12.0, 22.0), bounds);
//!     recorder.on_tick(&mut state, PointerSnapshot::released(12.0, 22.0), bounds);
//!
//!     assert_eq!(
//!         recorder.sink().exports(),
//!         ["{\"trajectory\":[[10,20,0],[12,22,83]]}"]
//!     );
//!     Ok(())
//! }
//! ```

mod clock;
mod error;
mod gesture;
mod pointer;
mod recorder;
mod render;
mod sink;

pub use {
    clock::{Clock, ClockKind, ManualClock, MonotonicClock, WallClock},
    error::{RecorderError, Result as CoreResult},
    gesture::{ActiveGesture, CompletedGesture, GestureState, Sample, Trajectory},
    pointer::{CanvasBounds, PointerSnapshot},
    recorder::GestureRecorder,
    render::{RenderCommand, RenderStyle},
    sink::{ExportSink, MemorySink},
};
