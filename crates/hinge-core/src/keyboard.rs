//! Modal software-keyboard flow.
//!
//! The hardware has no way to type into a focused text field directly: text
//! entry goes through a blocking system overlay. This module owns the small
//! state machine that invokes the overlay when the UI wants text focus and
//! reconciles the result back into the UI's edit state without corrupting
//! the in-flight edit session.

use hinge_platform::{KeyboardButton, SoftKeyboard, SoftKeyboardRequest};
use hinge_types::config::BackendConfig;
use hinge_types::input::Key;
use hinge_types::ui::UiIo;

/// Phase of the keyboard flow. Advances at most one step per frame and
/// cycles forever; there is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardPhase {
    /// No session in flight. Watching for the UI to request text focus.
    #[default]
    Idle,
    /// The overlay has returned and its events are queued; waiting for the
    /// UI to drain them.
    AwaitingDrain,
    /// The queue drained and focus was cleared last frame.
    Completed,
}

/// The keyboard flow state machine.
///
/// Held by the frame driver rather than hidden in function-local state so
/// the transitions are observable in isolation.
#[derive(Debug, Default)]
pub struct KeyboardFlow {
    phase: KeyboardPhase,
}

impl KeyboardFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> KeyboardPhase {
        self.phase
    }

    /// Advance the flow by one frame.
    ///
    /// In `Idle` with text focus requested, this calls the overlay and
    /// BLOCKS until the user dismisses it -- the one exemption from the
    /// per-frame budget. All other phases return immediately.
    pub fn update(
        &mut self,
        ui: &mut impl UiIo,
        keyboard: &mut impl SoftKeyboard,
        config: &BackendConfig,
    ) {
        match self.phase {
            KeyboardPhase::Idle => {
                if !ui.wants_text_input() {
                    return;
                }
                let request = SoftKeyboardRequest {
                    initial_text: ui.edit_revert_text(),
                    left_label: "Cancel".into(),
                    right_label: "OK".into(),
                    password: ui.edit_is_password(),
                    max_bytes: config.keyboard_max_bytes,
                };
                match keyboard.input_text(&request) {
                    Ok(reply) if reply.button == KeyboardButton::Right => {
                        if reply.text.is_empty() {
                            // An explicit OK on an empty buffer: presumed to
                            // mean "clear the field". Encoded as a backspace
                            // tap, not a true clear.
                            ui.add_key_event(Key::Backspace, true);
                            ui.add_key_event(Key::Backspace, false);
                        } else {
                            ui.add_text_utf8(&reply.text);
                        }
                        log::debug!("keyboard confirmed ({} bytes)", reply.text.len());
                    }
                    Ok(_) => {
                        log::debug!("keyboard cancelled");
                    }
                    Err(e) => {
                        // Overlay failure behaves like a cancel.
                        log::warn!("software keyboard failed: {e}");
                    }
                }
                self.phase = KeyboardPhase::AwaitingDrain;
            }
            KeyboardPhase::AwaitingDrain => {
                // Hold focus until the UI has consumed the injected events.
                if ui.pending_event_count() > 0 {
                    return;
                }
                ui.clear_active_widget();
                self.phase = KeyboardPhase::Completed;
                log::trace!("keyboard events drained, focus cleared");
            }
            KeyboardPhase::Completed => {
                self.phase = KeyboardPhase::Idle;
            }
        }
    }
}
