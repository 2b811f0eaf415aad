//! hinge demo entry point.
//!
//! Replays a short scripted input session -- a touch drag, some button
//! taps, a stick sweep, and one software-keyboard round trip -- through the
//! frame driver, and logs the translated event stream a real UI would
//! receive. Run with `RUST_LOG=debug` to also see the keyboard flow.

use anyhow::Result;

use hinge_core::config::BackendConfig;
use hinge_core::input::UiEvent;
use hinge_core::test_utils::RecordingUi;
use hinge_core::InputDriver;
use hinge_platform::{
    HidFrame, KeyboardButton, PadButtons, ScriptedPlatform, SoftKeyboardReply, StickSample,
    TouchSample,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BackendConfig::default();
    let mut driver = InputDriver::new(config)?;
    let mut platform = ScriptedPlatform::new();
    script_session(&mut platform);

    let mut ui = RecordingUi::new();
    driver.init(&mut ui);

    driver.clipboard().borrow_mut().set("hello from hinge");
    log::info!(
        "clipboard through the UI adapter: {:?}",
        ui.clipboard_get(),
    );

    let mut frame_no = 0u32;
    while platform.frames_remaining() > 0 {
        driver.new_frame(&mut ui, &mut platform);
        report_frame(frame_no, &mut ui);
        frame_no += 1;
    }

    // Simulate a text field grabbing focus: the next frame runs the modal
    // keyboard, then the flow drains and releases focus over two more.
    ui.wants_text_input = true;
    ui.revert_text = "draft".into();
    driver.new_frame(&mut ui, &mut platform);
    ui.wants_text_input = false;
    report_frame(frame_no, &mut ui);
    frame_no += 1;
    for _ in 0..2 {
        driver.new_frame(&mut ui, &mut platform);
        report_frame(frame_no, &mut ui);
        frame_no += 1;
    }

    log::info!("done after {frame_no} frames");
    Ok(())
}

/// Queue the demo's input script.
fn script_session(platform: &mut ScriptedPlatform) {
    let touch = |held, pressed, released, px, py| HidFrame {
        held,
        pressed,
        released,
        touch: TouchSample { px, py },
        ..Default::default()
    };

    // Touch drag across the bottom screen.
    platform.push_frame(touch(
        PadButtons::TOUCH,
        PadButtons::TOUCH,
        PadButtons::empty(),
        60,
        80,
    ));
    platform.push_frame(touch(
        PadButtons::TOUCH,
        PadButtons::empty(),
        PadButtons::empty(),
        90,
        85,
    ));
    platform.push_frame(touch(
        PadButtons::empty(),
        PadButtons::empty(),
        PadButtons::TOUCH,
        0,
        0,
    ));

    // Confirm tap (physical A -> logical face-down).
    platform.push_frame(HidFrame {
        held: PadButtons::A,
        pressed: PadButtons::A,
        ..Default::default()
    });
    platform.push_frame(HidFrame {
        released: PadButtons::A,
        ..Default::default()
    });

    // Stick sweep to the right.
    for dx in [40i16, 90, 156] {
        platform.push_frame(HidFrame {
            stick: StickSample { dx, dy: 0 },
            ..Default::default()
        });
    }

    // One keyboard session, confirmed with text.
    platform.push_reply(SoftKeyboardReply {
        button: KeyboardButton::Right,
        text: "user typed this".into(),
    });
}

/// Log and drain one frame's worth of recorded events.
fn report_frame(frame_no: u32, ui: &mut RecordingUi) {
    let dt = ui.delta_times.last().copied().unwrap_or_default();
    for event in ui.events.drain(..) {
        // Skip the per-frame analog refreshes of a centered stick.
        if let UiEvent::KeyAnalog {
            down: false,
            intensity,
            ..
        } = &event
        {
            if *intensity == 0.0 {
                continue;
            }
        }
        log::info!("frame {frame_no} (dt {dt:.4}s): {event:?}");
    }
}
