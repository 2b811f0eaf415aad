//! Platform-agnostic input event types.
//!
//! The translators map raw hardware samples to these types. The UI library
//! never sees raw hardware input.

use serde::{Deserialize, Serialize};

/// A logical UI-library key, decoupled from physical button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    GamepadFaceUp,
    GamepadFaceDown,
    GamepadFaceLeft,
    GamepadFaceRight,
    GamepadL1,
    GamepadR1,
    GamepadDpadUp,
    GamepadDpadRight,
    GamepadDpadDown,
    GamepadDpadLeft,
    GamepadStickUp,
    GamepadStickRight,
    GamepadStickDown,
    GamepadStickLeft,
    Backspace,
}

/// A translated input event as delivered to the UI library.
///
/// Events are ephemeral: each one is handed to the UI's event queue the
/// moment it is produced and never stored by hinge itself.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer moved to an absolute position in logical canvas space.
    PointerMove { x: f32, y: f32 },
    /// Pointer button pressed or released.
    PointerButton { index: u8, down: bool },
    /// Pointer source changed (touch panel vs. mouse).
    PointerSource { touch: bool },
    /// Logical key pressed.
    KeyDown(Key),
    /// Logical key released.
    KeyUp(Key),
    /// Per-frame analog key refresh. Repeated identical events are an
    /// idempotent refresh, not new presses.
    KeyAnalog { key: Key, down: bool, intensity: f32 },
    /// UTF-8 text entered via the software keyboard.
    Text(String),
}
