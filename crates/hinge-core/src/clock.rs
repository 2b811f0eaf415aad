//! Frame delta-time from the hardware tick counter.

use hinge_platform::TickSource;

/// Computes per-frame delta time from consecutive tick samples.
///
/// The previous sample is owned here and overwritten every frame. The first
/// call establishes the baseline, so frame 1 always reports 0.0 seconds.
#[derive(Debug, Default)]
pub struct FrameClock {
    prev: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the tick source and return seconds elapsed since the last call.
    pub fn delta_seconds(&mut self, source: &impl TickSource) -> f32 {
        let now = source.ticks();
        let prev = self.prev.unwrap_or(now);
        self.prev = Some(now);
        elapsed_seconds(prev, now, source.ticks_per_second())
    }
}

/// Seconds between two tick samples.
///
/// The subtraction stays in u64 tick space so counter values near the top of
/// the representable range lose no precision before the float conversion.
pub fn elapsed_seconds(a: u64, b: u64, ticks_per_second: u64) -> f32 {
    let ticks = b.saturating_sub(a);
    (ticks as f64 / ticks_per_second as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_platform::services::SYSCLOCK_TICKS_PER_SECOND;
    use std::cell::Cell;

    struct FakeTicks {
        now: Cell<u64>,
    }

    impl FakeTicks {
        fn new(start: u64) -> Self {
            Self {
                now: Cell::new(start),
            }
        }

        fn advance(&self, ticks: u64) {
            self.now.set(self.now.get() + ticks);
        }
    }

    impl TickSource for FakeTicks {
        fn ticks(&self) -> u64 {
            self.now.get()
        }
    }

    #[test]
    fn first_frame_delta_is_zero() {
        let source = FakeTicks::new(123_456_789);
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_seconds(&source), 0.0);
    }

    #[test]
    fn one_second_of_ticks() {
        let source = FakeTicks::new(0);
        let mut clock = FrameClock::new();
        clock.delta_seconds(&source);
        source.advance(SYSCLOCK_TICKS_PER_SECOND);
        let dt = clock.delta_seconds(&source);
        assert!((dt - 1.0).abs() < 1e-6);
    }

    #[test]
    fn delta_never_negative() {
        // A stalled counter must report zero, not wrap around.
        let source = FakeTicks::new(500);
        let mut clock = FrameClock::new();
        clock.delta_seconds(&source);
        let dt = clock.delta_seconds(&source);
        assert_eq!(dt, 0.0);
    }

    #[test]
    fn precision_near_counter_top() {
        // Two samples one second apart, both near u64::MAX.
        let a = u64::MAX - 2 * SYSCLOCK_TICKS_PER_SECOND;
        let b = a + SYSCLOCK_TICKS_PER_SECOND;
        let dt = elapsed_seconds(a, b, SYSCLOCK_TICKS_PER_SECOND);
        assert!((dt - 1.0).abs() < 1e-6);
    }

    #[test]
    fn successive_frames_track_the_source() {
        let source = FakeTicks::new(0);
        let mut clock = FrameClock::new();
        clock.delta_seconds(&source);
        for _ in 0..3 {
            source.advance(SYSCLOCK_TICKS_PER_SECOND / 60);
            let dt = clock.delta_seconds(&source);
            assert!((dt - 1.0 / 60.0).abs() < 1e-6);
        }
    }
}
