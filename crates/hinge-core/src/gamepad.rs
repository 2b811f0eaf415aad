//! Digital button and analog stick translation.

use hinge_platform::{HidFrame, PadButtons, StickSample};
use hinge_types::config::BackendConfig;
use hinge_types::input::Key;
use hinge_types::ui::UiIo;

/// Raw stick deflection at which the sensor saturates.
pub const STICK_RAW_RANGE: f32 = 156.0;

/// Physical-to-logical button table, iterated in order. No physical button
/// appears twice; both shoulder pairs fold onto one logical key per side.
pub const BUTTON_MAP: &[(PadButtons, Key)] = &[
    // A/B cross-mapped: physical A sits where this hardware's users
    // expect confirm.
    (PadButtons::A, Key::GamepadFaceDown),
    (PadButtons::B, Key::GamepadFaceRight),
    (PadButtons::X, Key::GamepadFaceUp),
    (PadButtons::Y, Key::GamepadFaceLeft),
    (PadButtons::L, Key::GamepadL1),
    (PadButtons::ZL, Key::GamepadL1),
    (PadButtons::ZR, Key::GamepadR1),
    (PadButtons::R, Key::GamepadR1),
    (PadButtons::DUP, Key::GamepadDpadUp),
    (PadButtons::DRIGHT, Key::GamepadDpadRight),
    (PadButtons::DDOWN, Key::GamepadDpadDown),
    (PadButtons::DLEFT, Key::GamepadDpadLeft),
];

/// Which raw stick axis a direction reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Stick decomposition table: (axis, logical key, sign). The sign flips the
/// threshold window for the negative-going direction of each axis.
const STICK_MAP: &[(Axis, Key, f32)] = &[
    (Axis::X, Key::GamepadStickLeft, -1.0),
    (Axis::X, Key::GamepadStickRight, 1.0),
    (Axis::Y, Key::GamepadStickUp, 1.0),
    (Axis::Y, Key::GamepadStickDown, -1.0),
];

/// Normalized intensity of one stick direction in [0, 1].
fn stick_intensity(raw: f32, sign: f32, config: &BackendConfig) -> f32 {
    let min = sign * config.stick_deadzone;
    let max = sign * config.stick_full;
    ((raw / STICK_RAW_RANGE - min) / (max - min)).clamp(0.0, 1.0)
}

/// Translate one frame's button edges and stick sample into key events.
///
/// Buttons are edge-triggered: a release edge emits KeyUp, a press edge
/// emits KeyDown. The stick emits an analog event for all four directions
/// every frame, whether or not anything changed.
pub fn update_gamepad(ui: &mut impl UiIo, frame: &HidFrame, config: &BackendConfig) {
    for &(button, key) in BUTTON_MAP {
        if frame.released.contains(button) {
            ui.add_key_event(key, false);
        }
        if frame.pressed.contains(button) {
            ui.add_key_event(key, true);
        }
    }

    let StickSample { dx, dy } = frame.stick;
    for &(axis, key, sign) in STICK_MAP {
        let raw = match axis {
            Axis::X => f32::from(dx),
            Axis::Y => f32::from(dy),
        };
        let intensity = stick_intensity(raw, sign, config);
        ui.add_key_analog_event(key, intensity > config.analog_press_threshold, intensity);
    }
}
