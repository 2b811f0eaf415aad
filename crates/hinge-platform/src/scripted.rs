//! Scripted platform implementation for demos and tests.

use std::cell::Cell;
use std::collections::VecDeque;

use hinge_types::error::Result;

use crate::services::{
    HidFrame, HidService, KeyboardButton, Platform, SoftKeyboard, SoftKeyboardReply,
    SoftKeyboardRequest, TickSource,
};

/// Tick step between successive `ticks()` reads: one 60 Hz frame.
const DEFAULT_TICK_STEP: u64 = crate::services::SYSCLOCK_TICKS_PER_SECOND / 60;

/// A platform that replays queued HID frames and keyboard replies.
///
/// Once the frame queue is exhausted, `poll` returns idle frames forever.
/// Keyboard sessions with no queued reply resolve as an instant cancel, so
/// nothing ever actually blocks.
pub struct ScriptedPlatform {
    frames: VecDeque<HidFrame>,
    replies: VecDeque<SoftKeyboardReply>,
    tick: Cell<u64>,
    tick_step: u64,
}

impl ScriptedPlatform {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::new(),
            replies: VecDeque::new(),
            tick: Cell::new(0),
            tick_step: DEFAULT_TICK_STEP,
        }
    }

    /// Override the simulated tick advance between clock reads.
    pub fn with_tick_step(mut self, step: u64) -> Self {
        self.tick_step = step;
        self
    }

    /// Queue one HID frame.
    pub fn push_frame(&mut self, frame: HidFrame) {
        self.frames.push_back(frame);
    }

    /// Queue the outcome of the next keyboard session.
    pub fn push_reply(&mut self, reply: SoftKeyboardReply) {
        self.replies.push_back(reply);
    }

    /// Frames remaining in the script.
    pub fn frames_remaining(&self) -> usize {
        self.frames.len()
    }
}

impl Default for ScriptedPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl HidService for ScriptedPlatform {
    fn poll(&mut self) -> HidFrame {
        self.frames.pop_front().unwrap_or_default()
    }
}

impl TickSource for ScriptedPlatform {
    fn ticks(&self) -> u64 {
        // Each read advances the simulated counter by one frame's worth.
        let now = self.tick.get();
        self.tick.set(now + self.tick_step);
        now
    }
}

impl SoftKeyboard for ScriptedPlatform {
    fn input_text(&mut self, request: &SoftKeyboardRequest) -> Result<SoftKeyboardReply> {
        let mut reply = self.replies.pop_front().unwrap_or(SoftKeyboardReply {
            button: KeyboardButton::Left,
            text: String::new(),
        });
        // The real overlay writes into a fixed-size buffer.
        truncate_utf8(&mut reply.text, request.max_bytes);
        log::debug!(
            "scripted keyboard: initial={:?} password={} -> {:?} {:?}",
            request.initial_text,
            request.password,
            reply.button,
            reply.text,
        );
        Ok(reply)
    }
}

impl Platform for ScriptedPlatform {}

/// Truncate to at most `max_bytes` bytes without splitting a code point.
fn truncate_utf8(text: &mut String, max_bytes: usize) {
    if text.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PadButtons;

    fn request(max_bytes: usize) -> SoftKeyboardRequest {
        SoftKeyboardRequest {
            initial_text: String::new(),
            left_label: "Cancel".into(),
            right_label: "OK".into(),
            password: false,
            max_bytes,
        }
    }

    #[test]
    fn poll_replays_then_idles() {
        let mut platform = ScriptedPlatform::new();
        platform.push_frame(HidFrame {
            pressed: PadButtons::A,
            held: PadButtons::A,
            ..Default::default()
        });
        assert!(platform.poll().pressed.contains(PadButtons::A));
        assert_eq!(platform.poll(), HidFrame::default());
        assert_eq!(platform.poll(), HidFrame::default());
    }

    #[test]
    fn ticks_advance_monotonically() {
        let platform = ScriptedPlatform::new();
        let a = platform.ticks();
        let b = platform.ticks();
        assert!(b > a);
    }

    #[test]
    fn keyboard_defaults_to_cancel() {
        let mut platform = ScriptedPlatform::new();
        let reply = platform.input_text(&request(32)).unwrap();
        assert_eq!(reply.button, KeyboardButton::Left);
        assert!(reply.text.is_empty());
    }

    #[test]
    fn keyboard_truncates_to_buffer_capacity() {
        let mut platform = ScriptedPlatform::new();
        platform.push_reply(SoftKeyboardReply {
            button: KeyboardButton::Right,
            text: "0123456789".into(),
        });
        let reply = platform.input_text(&request(4)).unwrap();
        assert_eq!(reply.text, "0123");
    }

    #[test]
    fn keyboard_truncation_respects_char_boundaries() {
        let mut platform = ScriptedPlatform::new();
        platform.push_reply(SoftKeyboardReply {
            button: KeyboardButton::Right,
            text: "aé".into(), // 'é' is 2 bytes; a 2-byte cap must not split it
        });
        let reply = platform.input_text(&request(2)).unwrap();
        assert_eq!(reply.text, "a");
    }
}
