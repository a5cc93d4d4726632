use crate::{App, AppCommand, ChannelSink, OutputHandler, tests::SharedBuffer};

use gesture_recorder_core::{
    CanvasBounds, GestureRecorder, GestureState, ManualClock, PointerSnapshot,
};
use tokio::sync::mpsc;

/// WHAT: Gestures recorded on the canvas thread are written in order
/// WHY: The text output must show every completed drag, oldest first
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_two_gestures_when_worker_runs_then_both_written_in_order() {
    // Given: A recorder forwarding to the worker's channel
    let (command_tx, command_rx) = mpsc::channel(8);
    let clock = ManualClock::new(0);
    let sink = ChannelSink::new(command_tx.clone());
    let mut recorder = GestureRecorder::new(clock.clone(), sink);
    let mut state = GestureState::default();
    let bounds = CanvasBounds::new(300.0, 300.0);

    recorder.on_tick(&mut state, PointerSnapshot::pressed(10.0, 20.0), bounds);
    clock.advance(83);
    recorder.on_tick(&mut state, PointerSnapshot::pressed(12.0, 22.0), bounds);
    recorder.on_tick(&mut state, PointerSnapshot::released(12.0, 22.0), bounds);

    clock.advance(1_000);
    recorder.on_tick(&mut state, PointerSnapshot::pressed(7.5, 1.0), bounds);
    recorder.on_tick(&mut state, PointerSnapshot::released(7.5, 1.0), bounds);

    command_tx.send(AppCommand::Shutdown).await.unwrap();

    // When: Running the worker to completion
    let buffer = SharedBuffer::default();
    let app = App {
        output_handler: OutputHandler::with_writer(Box::new(buffer.clone())),
        command_rx,
    };
    app.run().await.unwrap();

    // Then: One line per gesture, in capture order
    assert_eq!(
        buffer.contents(),
        "{\"trajectory\":[[10,20,0],[12,22,83]]}\n{\"trajectory\":[[7.5,1,0]]}\n"
    );
}

/// WHAT: Worker exits when every sender is dropped
/// WHY: Closing the canvas must not leave the worker hanging
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_senders_dropped_when_worker_runs_then_returns() {
    // Given: A channel whose sender is gone
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>(1);
    drop(command_tx);

    // When: Running the worker
    let buffer = SharedBuffer::default();
    let app = App {
        output_handler: OutputHandler::with_writer(Box::new(buffer.clone())),
        command_rx,
    };
    let result = app.run().await;

    // Then: It returns cleanly without output
    assert!(result.is_ok());
    assert!(buffer.contents().is_empty());
}
