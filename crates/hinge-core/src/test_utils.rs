//! Shared test utilities.
//!
//! Provides [`RecordingUi`], a `UiIo` implementation that records every
//! event and setup call for assertion. The demo binary uses it too, to print
//! the translated event stream.

use hinge_types::input::{Key, UiEvent};
use hinge_types::ui::{ClipboardGetFn, ClipboardSetFn, DisplaySize, UiCapabilities, UiIo};

/// A UI sink that records everything it is handed.
///
/// The query fields (`wants_text_input`, `revert_text`, `password`,
/// `pending_events`) are plain public fields a test sets to stage the UI
/// state it wants the translators to observe.
#[derive(Default)]
pub struct RecordingUi {
    /// Every event appended, in order.
    pub events: Vec<UiEvent>,
    /// Every per-frame delta time set, in order.
    pub delta_times: Vec<f32>,

    /// Staged answer for `wants_text_input`.
    pub wants_text_input: bool,
    /// Staged answer for `edit_revert_text`.
    pub revert_text: String,
    /// Staged answer for `edit_is_password`.
    pub password: bool,
    /// Staged answer for `pending_event_count`.
    pub pending_events: usize,

    /// Times `clear_active_widget` was invoked.
    pub clear_active_calls: usize,

    /// Last values handed to the setup hooks.
    pub capabilities: Option<UiCapabilities>,
    pub display: Option<DisplaySize>,
    pub backend_name: Option<&'static str>,

    clipboard_get: Option<ClipboardGetFn>,
    clipboard_set: Option<ClipboardSetFn>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read through the registered clipboard adapter, if any.
    pub fn clipboard_get(&self) -> Option<String> {
        self.clipboard_get.as_ref().map(|get| get())
    }

    /// Write through the registered clipboard adapter, if any.
    pub fn clipboard_set(&mut self, text: &str) {
        if let Some(set) = self.clipboard_set.as_mut() {
            set(text);
        }
    }

    /// Count of recorded events matching a predicate.
    pub fn count(&self, pred: impl Fn(&UiEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl UiIo for RecordingUi {
    fn add_pointer_source_event(&mut self, touch: bool) {
        self.events.push(UiEvent::PointerSource { touch });
    }

    fn add_pointer_pos_event(&mut self, x: f32, y: f32) {
        self.events.push(UiEvent::PointerMove { x, y });
    }

    fn add_pointer_button_event(&mut self, index: u8, down: bool) {
        self.events.push(UiEvent::PointerButton { index, down });
    }

    fn add_key_event(&mut self, key: Key, down: bool) {
        self.events.push(if down {
            UiEvent::KeyDown(key)
        } else {
            UiEvent::KeyUp(key)
        });
    }

    fn add_key_analog_event(&mut self, key: Key, down: bool, intensity: f32) {
        self.events.push(UiEvent::KeyAnalog {
            key,
            down,
            intensity,
        });
    }

    fn add_text_utf8(&mut self, text: &str) {
        self.events.push(UiEvent::Text(text.to_owned()));
    }

    fn wants_text_input(&self) -> bool {
        self.wants_text_input
    }

    fn edit_revert_text(&self) -> String {
        self.revert_text.clone()
    }

    fn edit_is_password(&self) -> bool {
        self.password
    }

    fn clear_active_widget(&mut self) {
        self.clear_active_calls += 1;
    }

    fn pending_event_count(&self) -> usize {
        self.pending_events
    }

    fn set_delta_time(&mut self, seconds: f32) {
        self.delta_times.push(seconds);
    }

    fn set_display_size(&mut self, size: DisplaySize) {
        self.display = Some(size);
    }

    fn set_capabilities(&mut self, caps: UiCapabilities) {
        self.capabilities = Some(caps);
    }

    fn set_backend_name(&mut self, name: &'static str) {
        self.backend_name = Some(name);
    }

    fn register_clipboard(&mut self, get: ClipboardGetFn, set: ClipboardSetFn) {
        self.clipboard_get = Some(get);
        self.clipboard_set = Some(set);
    }
}
