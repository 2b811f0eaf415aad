//! Touch-panel to pointer-event translation.

use hinge_platform::{HidFrame, PadButtons};
use hinge_types::config::BackendConfig;
use hinge_types::ui::UiIo;

/// Logical pointer button driven by the touch panel.
const TOUCH_POINTER_BUTTON: u8 = 0;

/// Translate one frame's touch sample into pointer events.
///
/// Exactly one of three branches fires per frame, derived entirely from the
/// edge masks -- no state is kept here:
/// 1. pressed or held: move to the sample (offset into canvas space), then
///    button down;
/// 2. just released: button up, no move;
/// 3. idle: park the pointer off-canvas so hover-sensitive UI lets go of
///    the last touched pixel.
pub fn update_touch(ui: &mut impl UiIo, frame: &HidFrame, config: &BackendConfig) {
    if (frame.held | frame.pressed).contains(PadButtons::TOUCH) {
        ui.add_pointer_source_event(true);
        ui.add_pointer_pos_event(
            f32::from(frame.touch.px) + config.touch_offset_x,
            f32::from(frame.touch.py) + config.touch_offset_y,
        );
        ui.add_pointer_button_event(TOUCH_POINTER_BUTTON, true);
    } else if frame.released.contains(PadButtons::TOUCH) {
        ui.add_pointer_button_event(TOUCH_POINTER_BUTTON, false);
    } else {
        ui.add_pointer_pos_event(config.pointer_park_x, config.pointer_park_y);
    }
}
