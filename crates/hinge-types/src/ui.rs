//! Abstract interface to the host UI library.
//!
//! hinge dispatches everything through this trait boundary -- it never calls
//! the UI library's concrete API. The trait mirrors the slice of an
//! immediate-mode UI's IO surface that a platform backend needs: event
//! sinks, text-focus queries, and one-time setup hooks.

use crate::input::Key;

/// Capability flags a backend advertises to the UI at init time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiCapabilities {
    /// A gamepad is always present on this hardware.
    pub has_gamepad: bool,
    /// The touch panel is the primary pointing surface (no mouse cursor).
    pub touch_is_primary: bool,
    /// Directional navigation should be driven from the gamepad.
    pub gamepad_nav: bool,
}

/// Logical display geometry: one canvas spanning both physical screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

/// Clipboard read adapter handed to the UI.
pub type ClipboardGetFn = Box<dyn Fn() -> String>;
/// Clipboard write adapter handed to the UI.
pub type ClipboardSetFn = Box<dyn FnMut(&str)>;

/// The UI library's input-side IO surface.
///
/// Event sinks append to the UI's internal queue, which the UI drains
/// exactly once per frame. Queries read the UI's current text-editing
/// state; they are only meaningful while the UI reports wanting text input.
pub trait UiIo {
    // -- event sinks --

    /// Tag the pointer events that follow as touch- or mouse-sourced.
    fn add_pointer_source_event(&mut self, touch: bool);
    /// Absolute pointer position in logical canvas space.
    fn add_pointer_pos_event(&mut self, x: f32, y: f32);
    /// Pointer button state change.
    fn add_pointer_button_event(&mut self, index: u8, down: bool);
    /// Logical key state change.
    fn add_key_event(&mut self, key: Key, down: bool);
    /// Per-frame analog key refresh with intensity in [0, 1].
    fn add_key_analog_event(&mut self, key: Key, down: bool, intensity: f32);
    /// UTF-8 text input.
    fn add_text_utf8(&mut self, text: &str);

    // -- text-editing state queries --

    /// Whether the UI currently wants text-focus input.
    fn wants_text_input(&self) -> bool;
    /// The in-progress edit buffer the user would revert to on cancel.
    fn edit_revert_text(&self) -> String;
    /// Whether the focused field is a secret/password field.
    fn edit_is_password(&self) -> bool;
    /// Drop edit focus from the active widget.
    fn clear_active_widget(&mut self);
    /// Number of queued input events the UI has not yet consumed.
    fn pending_event_count(&self) -> usize;

    // -- per-frame and one-time setup --

    /// Frame delta time in seconds.
    fn set_delta_time(&mut self, seconds: f32);
    /// Logical display size and per-axis scale.
    fn set_display_size(&mut self, size: DisplaySize);
    /// Backend capability flags.
    fn set_capabilities(&mut self, caps: UiCapabilities);
    /// Platform backend name, for the UI's diagnostics.
    fn set_backend_name(&mut self, name: &'static str);
    /// Install clipboard adapters. Last registration wins.
    fn register_clipboard(&mut self, get: ClipboardGetFn, set: ClipboardSetFn);
}
