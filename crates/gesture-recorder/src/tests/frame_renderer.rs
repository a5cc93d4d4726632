use crate::FrameRenderer;

use gesture_recorder_core::RenderCommand;

fn readout(x: &str, y: &str) -> Vec<RenderCommand> {
    vec![
        RenderCommand::Background { gray: 230 },
        RenderCommand::Text {
            content: format!("X: {x}"),
            x: 0.0,
            y: 12.0,
        },
        RenderCommand::Text {
            content: format!("Y: {y}"),
            x: 0.0,
            y: 24.0,
        },
    ]
}

/// WHAT: Readout text is shown in the window title
/// WHY: The coordinates are visible regardless of capture state
#[test]
fn given_readout_commands_when_presented_then_title_shows_coordinates() {
    let mut renderer = FrameRenderer::new("Sketch");

    let title = renderer.present(&readout("10", "20"), false);

    assert_eq!(title.as_deref(), Some("Sketch | X: 10 | Y: 20"));
}

/// WHAT: An unchanged frame does not retitle the window
/// WHY: Title updates at every tick would be wasted work
#[test]
fn given_same_frame_twice_when_presented_then_second_is_none() {
    let mut renderer = FrameRenderer::new("Sketch");
    let frame = readout("1", "2");

    assert!(renderer.present(&frame, false).is_some());
    assert!(renderer.present(&frame, false).is_none());
}

/// WHAT: Capturing frames are marked in the title
/// WHY: Users see when a drag is being recorded
#[test]
fn given_capturing_frame_when_presented_then_title_marked() {
    let mut renderer = FrameRenderer::new("Sketch");
    let mut frame = readout("3", "4");
    frame.insert(1, RenderCommand::Point { x: 3.0, y: 4.0 });

    let title = renderer.present(&frame, true);

    assert_eq!(title.as_deref(), Some("Sketch | X: 3 | Y: 4 | recording"));
}
