//! Per-frame orchestration.

use std::cell::RefCell;
use std::rc::Rc;

use hinge_platform::Platform;
use hinge_types::config::BackendConfig;
use hinge_types::error::Result;
use hinge_types::ui::{DisplaySize, UiCapabilities, UiIo};

use crate::clipboard::{Clipboard, register_clipboard};
use crate::clock::FrameClock;
use crate::keyboard::{KeyboardFlow, KeyboardPhase};
use crate::{gamepad, touch};

/// Name the backend reports to the UI's diagnostics.
const BACKEND_NAME: &str = "hinge";

/// Drives the input translators once per frame, in a fixed order.
///
/// Owns every piece of multi-frame state in the core: the previous clock
/// sample, the keyboard flow, and the clipboard slot.
pub struct InputDriver {
    config: BackendConfig,
    clock: FrameClock,
    keyboard: KeyboardFlow,
    clipboard: Rc<RefCell<Clipboard>>,
}

impl InputDriver {
    /// Create a driver with a validated config.
    pub fn new(config: BackendConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock: FrameClock::new(),
            keyboard: KeyboardFlow::new(),
            clipboard: Rc::new(RefCell::new(Clipboard::new())),
        })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Shared handle to the clipboard slot.
    pub fn clipboard(&self) -> Rc<RefCell<Clipboard>> {
        Rc::clone(&self.clipboard)
    }

    /// Current keyboard flow phase.
    pub fn keyboard_phase(&self) -> KeyboardPhase {
        self.keyboard.phase()
    }

    /// One-time setup: advertise capabilities and display geometry to the
    /// UI and install the clipboard adapters.
    pub fn init(&self, ui: &mut impl UiIo) {
        ui.set_backend_name(BACKEND_NAME);
        ui.set_capabilities(UiCapabilities {
            has_gamepad: true,
            touch_is_primary: true,
            gamepad_nav: true,
        });
        ui.set_display_size(DisplaySize {
            width: self.config.display_width,
            height: self.config.display_height,
            scale_x: self.config.scale_x,
            scale_y: self.config.scale_y,
        });
        register_clipboard(ui, &self.clipboard);
        log::info!(
            "hinge backend initialized: {}x{} logical canvas",
            self.config.display_width,
            self.config.display_height,
        );
    }

    /// Run one frame of input translation.
    ///
    /// Order is fixed: delta time, touch, gamepad, keyboard. The keyboard
    /// runs last because it may block; by then the frame's pointer and pad
    /// state is already flushed into the UI's queue.
    pub fn new_frame(&mut self, ui: &mut impl UiIo, platform: &mut impl Platform) {
        let dt = self.clock.delta_seconds(platform);
        ui.set_delta_time(dt);

        let frame = platform.poll();
        touch::update_touch(ui, &frame, &self.config);
        gamepad::update_gamepad(ui, &frame, &self.config);
        self.keyboard.update(ui, platform, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingUi;
    use hinge_platform::{
        HidFrame, KeyboardButton, PadButtons, ScriptedPlatform, SoftKeyboardReply, TouchSample,
    };
    use hinge_types::input::{Key, UiEvent};

    fn driver() -> InputDriver {
        InputDriver::new(BackendConfig::default()).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BackendConfig {
            pointer_park_x: 50.0,
            pointer_park_y: 50.0,
            ..Default::default()
        };
        assert!(InputDriver::new(config).is_err());
    }

    #[test]
    fn init_configures_the_ui() {
        let driver = driver();
        let mut ui = RecordingUi::new();
        driver.init(&mut ui);

        assert_eq!(ui.backend_name, Some("hinge"));
        let caps = ui.capabilities.unwrap();
        assert!(caps.has_gamepad);
        assert!(caps.touch_is_primary);
        assert!(caps.gamepad_nav);
        let display = ui.display.unwrap();
        assert_eq!(display.width, 400.0);
        assert_eq!(display.height, 480.0);
        // Clipboard adapters installed and wired to the driver's slot.
        driver.clipboard().borrow_mut().set("shared");
        assert_eq!(ui.clipboard_get().as_deref(), Some("shared"));
    }

    #[test]
    fn first_frame_delta_is_zero() {
        let mut driver = driver();
        let mut ui = RecordingUi::new();
        let mut platform = ScriptedPlatform::new();
        driver.new_frame(&mut ui, &mut platform);
        assert_eq!(ui.delta_times, vec![0.0]);
    }

    #[test]
    fn later_frames_have_positive_delta() {
        let mut driver = driver();
        let mut ui = RecordingUi::new();
        let mut platform = ScriptedPlatform::new();
        driver.new_frame(&mut ui, &mut platform);
        driver.new_frame(&mut ui, &mut platform);
        assert!(ui.delta_times[1] > 0.0);
    }

    #[test]
    fn translators_run_in_fixed_order() {
        // A frame with touch + a button press: pointer events must precede
        // key events, and the analog refresh comes after the buttons.
        let mut driver = driver();
        let mut ui = RecordingUi::new();
        let mut platform = ScriptedPlatform::new();
        platform.push_frame(HidFrame {
            held: PadButtons::TOUCH | PadButtons::A,
            pressed: PadButtons::TOUCH | PadButtons::A,
            touch: TouchSample { px: 10, py: 20 },
            ..Default::default()
        });
        driver.new_frame(&mut ui, &mut platform);

        let pos = |pred: fn(&UiEvent) -> bool| ui.events.iter().position(pred).unwrap();
        let move_at = pos(|e| matches!(e, UiEvent::PointerMove { .. }));
        let key_at = pos(|e| matches!(e, UiEvent::KeyDown(Key::GamepadFaceDown)));
        let analog_at = pos(|e| matches!(e, UiEvent::KeyAnalog { .. }));
        assert!(move_at < key_at);
        assert!(key_at < analog_at);
    }

    #[test]
    fn keyboard_cycle_through_the_driver() {
        let mut driver = driver();
        let mut ui = RecordingUi::new();
        ui.wants_text_input = true;
        let mut platform = ScriptedPlatform::new();
        platform.push_reply(SoftKeyboardReply {
            button: KeyboardButton::Right,
            text: "typed".into(),
        });

        driver.new_frame(&mut ui, &mut platform);
        assert_eq!(driver.keyboard_phase(), KeyboardPhase::AwaitingDrain);
        assert!(ui.events.contains(&UiEvent::Text("typed".into())));

        // Events drained (RecordingUi reports an empty queue by default).
        driver.new_frame(&mut ui, &mut platform);
        assert_eq!(driver.keyboard_phase(), KeyboardPhase::Completed);
        assert_eq!(ui.clear_active_calls, 1);

        driver.new_frame(&mut ui, &mut platform);
        assert_eq!(driver.keyboard_phase(), KeyboardPhase::Idle);
        assert_eq!(ui.clear_active_calls, 1);
    }

    #[test]
    fn idle_frame_emits_exactly_the_park_move_and_analog_refresh() {
        let mut driver = driver();
        let mut ui = RecordingUi::new();
        let mut platform = ScriptedPlatform::new();
        driver.new_frame(&mut ui, &mut platform);

        assert_eq!(ui.events[0], UiEvent::PointerMove { x: -10.0, y: -10.0 });
        // Four analog refreshes, nothing else.
        assert_eq!(ui.events.len(), 5);
        assert!(ui.events[1..]
            .iter()
            .all(|e| matches!(e, UiEvent::KeyAnalog { .. })));
    }
}
