//! Input translation core for hinge.
//!
//! Converts raw hardware input samples (touch panel, pad buttons, analog
//! stick) into the UI library's abstract event stream, and drives the modal
//! software-keyboard flow. Everything runs single-threaded and cooperative:
//! [`frame::InputDriver::new_frame`] executes fully within one frame, with
//! the one documented exception of the blocking keyboard overlay.

// Re-exports from hinge-types (foundation types and traits).
pub use hinge_types::config;
pub use hinge_types::error;
pub use hinge_types::input;
pub use hinge_types::ui;

pub mod clipboard;
pub mod clock;
pub mod frame;
pub mod gamepad;
pub mod keyboard;
pub mod test_utils;
pub mod touch;

pub use frame::InputDriver;
