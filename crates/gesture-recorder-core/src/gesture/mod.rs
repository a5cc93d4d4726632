mod completed;
mod sample;
mod state;
mod trajectory;

pub use {
    completed::CompletedGesture,
    sample::Sample,
    state::{ActiveGesture, GestureState},
    trajectory::Trajectory,
};
