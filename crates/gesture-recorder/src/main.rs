//! Gesture Recorder: captures pointer drags on a canvas window and prints
//! each completed trajectory as JSON.

mod app;
mod app_command;
mod channel_sink;
mod config;
mod error;
mod frame_pacer;
mod frame_renderer;
mod output_handler;
mod pointer_tracker;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    channel_sink::ChannelSink,
    error::{AppError, Result as AppResult},
    frame_pacer::FramePacer,
    frame_renderer::FrameRenderer,
    output_handler::OutputHandler,
    pointer_tracker::PointerTracker,
};

use crate::config::Config;

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use gesture_recorder_core::{GestureRecorder, GestureState};
use tao::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Completed gestures buffered between the canvas and the export worker.
const EXPORT_QUEUE_DEPTH: usize = 32;

/// Application entry point.
fn main() {
    // Logs go to stderr; stdout carries the exported trajectories.
    tracing_subscriber::fmt()
        .with_env_filter("gesture_recorder=debug,gesture_recorder_core=debug")
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Config validation failed: {:?}", e);
        std::process::exit(1);
    }

    let output_handler = match OutputHandler::new(&config.output) {
        Ok(oh) => oh,
        Err(e) => {
            error!("Failed to create OutputHandler: {:?}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new();

    let window = match build_window(&event_loop, &config) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create canvas window: {:?}", e);
            std::process::exit(1);
        }
    };

    let (command_tx, command_rx) = mpsc::channel(EXPORT_QUEUE_DEPTH);

    // Exports are written on a tokio runtime thread so stdout and clipboard
    // writes never stall the frame loop.
    let mut worker = Some(std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {:?}", e);
                std::process::exit(1);
            }
        };

        rt.block_on(async {
            let app = App {
                output_handler,
                command_rx,
            };

            if let Err(e) = app.run().await {
                error!(error = ?e, "Export worker error");
            }
        });
    }));

    let bounds = config.canvas.bounds();
    let mut recorder = GestureRecorder::new(
        config.capture.clock.build(),
        ChannelSink::new(command_tx.clone()),
    );
    let mut gesture_state = GestureState::default();
    let mut pointer = PointerTracker::new(config.capture.button);
    let mut renderer = FrameRenderer::new(&config.canvas.title);
    let mut pacer = FramePacer::new(config.capture.frame_interval(), Instant::now());

    info!(
        width = config.canvas.width,
        height = config.canvas.height,
        frame_interval_ms = pacer.interval().as_millis(),
        "Canvas ready"
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(pacer.deadline());

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CursorMoved { position, .. } => {
                    pointer.cursor_moved(position.to_logical(window.scale_factor()));
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    pointer.button_input(button, state);
                }
                WindowEvent::Focused(false) => pointer.focus_lost(),
                WindowEvent::CloseRequested => {
                    recorder.finish(&mut gesture_state);

                    // Waits for a free slot; fails at once if the worker already exited.
                    if let Err(e) = command_tx.blocking_send(AppCommand::Shutdown) {
                        error!(error = ?e, "Failed to send shutdown command");
                    }

                    // Queued exports are written before the process exits.
                    if let Some(Err(_)) = worker.take().map(|handle| handle.join()) {
                        error!("Export worker panicked");
                    }

                    *control_flow = ControlFlow::Exit;
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if pacer.is_due(now) {
                    let commands = recorder.on_tick(&mut gesture_state, pointer.snapshot(), bounds);
                    if let Some(title) = renderer.present(&commands, gesture_state.is_capturing())
                    {
                        window.set_title(&title);
                    }
                    pacer.advance(now);
                    *control_flow = ControlFlow::WaitUntil(pacer.deadline());
                }
            }
            _ => {}
        }
    });
}

/// Fixed-size canvas window sized to the configured capture region.
#[track_caller]
fn build_window(event_loop: &EventLoop<()>, config: &Config) -> AppResult<Window> {
    WindowBuilder::new()
        .with_title(&config.canvas.title)
        .with_inner_size(LogicalSize::new(
            f64::from(config.canvas.width),
            f64::from(config.canvas.height),
        ))
        .with_resizable(false)
        .build(event_loop)
        .map_err(|e| AppError::WindowError {
            reason: format!("Failed to build window: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
}
