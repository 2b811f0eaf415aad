//! Hardware service traits and raw sample types.

use hinge_types::error::Result;

/// Tick rate of the hardware's monotonic counter, in ticks per second.
pub const SYSCLOCK_TICKS_PER_SECOND: u64 = 268_111_856;

// ---------------------------------------------------------------------------
// HID sampling
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// Physical button bitmask, in the hardware's native bit layout.
    ///
    /// `TOUCH` is a synthesized bit: the HID block sets it while the touch
    /// panel registers a press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PadButtons: u32 {
        const A      = 1 << 0;
        const B      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const DRIGHT = 1 << 4;
        const DLEFT  = 1 << 5;
        const DUP    = 1 << 6;
        const DDOWN  = 1 << 7;
        const R      = 1 << 8;
        const L      = 1 << 9;
        const X      = 1 << 10;
        const Y      = 1 << 11;
        const ZL     = 1 << 14;
        const ZR     = 1 << 15;
        const TOUCH  = 1 << 20;
    }
}

/// Raw touch-panel coordinate in native (bottom-screen) pixel space.
///
/// Only meaningful while [`PadButtons::TOUCH`] is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchSample {
    pub px: u16,
    pub py: u16,
}

/// Raw 2-axis stick deflection in sensor units (saturates around +/-156).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StickSample {
    pub dx: i16,
    pub dy: i16,
}

/// One poll of the HID block: held state plus per-frame edge bits.
///
/// `pressed` and `released` are edge bits -- set only on the poll where the
/// transition happened. The samples are transient and discarded every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HidFrame {
    pub held: PadButtons,
    pub pressed: PadButtons,
    pub released: PadButtons,
    pub touch: TouchSample,
    pub stick: StickSample,
}

/// Abstraction over the hardware input block.
pub trait HidService {
    /// Scan the hardware and return the current frame's samples.
    fn poll(&mut self) -> HidFrame;
}

// ---------------------------------------------------------------------------
// Tick source
// ---------------------------------------------------------------------------

/// Abstraction over the hardware's monotonic tick counter.
pub trait TickSource {
    /// Current tick count. Non-decreasing across calls.
    fn ticks(&self) -> u64;

    /// Fixed tick rate in ticks per second.
    fn ticks_per_second(&self) -> u64 {
        SYSCLOCK_TICKS_PER_SECOND
    }
}

// ---------------------------------------------------------------------------
// Software keyboard
// ---------------------------------------------------------------------------

/// Which of the overlay's two buttons the user pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardButton {
    /// Left button (the caller labels it, conventionally "Cancel").
    Left,
    /// Right button (conventionally "OK").
    Right,
}

/// Parameters for one modal keyboard session.
#[derive(Debug, Clone)]
pub struct SoftKeyboardRequest {
    /// Text pre-filled into the edit field.
    pub initial_text: String,
    /// Label for the left (cancel) button.
    pub left_label: String,
    /// Label for the right (confirm) button.
    pub right_label: String,
    /// Mask the entered text.
    pub password: bool,
    /// Byte capacity of the output buffer; longer input is truncated.
    pub max_bytes: usize,
}

/// Outcome of a modal keyboard session.
#[derive(Debug, Clone)]
pub struct SoftKeyboardReply {
    pub button: KeyboardButton,
    pub text: String,
}

/// Abstraction over the platform's modal software keyboard.
///
/// `input_text` BLOCKS the calling thread until the user dismisses the
/// overlay. The hardware offers no other input path while it is shown, so
/// there is no cancellation and no timeout.
pub trait SoftKeyboard {
    fn input_text(&mut self, request: &SoftKeyboardRequest) -> Result<SoftKeyboardReply>;
}

// ---------------------------------------------------------------------------
// Aggregate platform trait
// ---------------------------------------------------------------------------

/// Aggregate trait providing access to all hardware services.
pub trait Platform: HidService + TickSource + SoftKeyboard {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_buttons_edge_bits_are_independent() {
        let frame = HidFrame {
            held: PadButtons::A | PadButtons::TOUCH,
            pressed: PadButtons::A,
            released: PadButtons::B,
            ..Default::default()
        };
        assert!(frame.held.contains(PadButtons::TOUCH));
        assert!(frame.pressed.contains(PadButtons::A));
        assert!(!frame.pressed.contains(PadButtons::B));
        assert!(frame.released.contains(PadButtons::B));
    }

    #[test]
    fn pad_buttons_native_bit_layout() {
        assert_eq!(PadButtons::A.bits(), 1);
        assert_eq!(PadButtons::ZR.bits(), 1 << 15);
        assert_eq!(PadButtons::TOUCH.bits(), 1 << 20);
    }

    #[test]
    fn default_frame_is_idle() {
        let frame = HidFrame::default();
        assert!(frame.held.is_empty());
        assert!(frame.pressed.is_empty());
        assert!(frame.released.is_empty());
        assert_eq!(frame.stick, StickSample { dx: 0, dy: 0 });
    }

    #[test]
    fn tick_source_default_rate() {
        struct FixedTicks;
        impl TickSource for FixedTicks {
            fn ticks(&self) -> u64 {
                42
            }
        }
        assert_eq!(FixedTicks.ticks_per_second(), SYSCLOCK_TICKS_PER_SECOND);
    }
}
