//! Hardware service abstractions for hinge.
//!
//! Every piece of hardware the input layer touches sits behind a trait here:
//! the HID block (buttons, touch panel, stick), the monotonic tick counter,
//! and the blocking modal software keyboard. A real console backend
//! implements these over the vendor SDK in a target-specific crate; this
//! workspace ships [`ScriptedPlatform`], which replays canned samples for
//! demos and tests.

pub mod scripted;
pub mod services;

pub use scripted::ScriptedPlatform;
pub use services::{
    HidFrame, HidService, KeyboardButton, PadButtons, Platform, SoftKeyboard,
    SoftKeyboardReply, SoftKeyboardRequest, StickSample, TickSource, TouchSample,
};
