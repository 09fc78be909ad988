//! Frame timing and the cancellable interval that drives relocation.
//!
//! `draw_web()` runs at ~60fps with a variable delta. [`FrameClock`] turns
//! `performance.now()` samples into clamped millisecond deltas, and
//! [`IntervalTimer`] turns deltas into a whole number of firings, so the game
//! loop stays deterministic and testable without a browser.

/// Largest delta accepted per frame. A backgrounded tab resumes with one
/// bounded step instead of a burst of stale work.
pub const MAX_FRAME_DELTA_MS: f64 = 500.0;

pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_timestamp: None }
    }

    /// Feed a wall-clock timestamp in ms; returns the elapsed ms since the
    /// previous call (0 on the first frame).
    pub fn update(&mut self, now_ms: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        delta
    }
}

/// A repeating timer with a fixed period.
///
/// Armed timers accumulate elapsed time and fire once per full period.
/// `rearm` drops any partial progress from the old period; a cancelled timer
/// never fires until re-armed.
#[derive(Debug)]
pub struct IntervalTimer {
    period_ms: Option<u32>,
    accumulator: f64,
    fired: u64,
}

impl IntervalTimer {
    pub fn new(period_ms: u32) -> Self {
        let mut timer = Self::cancelled();
        timer.rearm(period_ms);
        timer
    }

    pub fn cancelled() -> Self {
        Self {
            period_ms: None,
            accumulator: 0.0,
            fired: 0,
        }
    }

    /// Period of the armed timer, or `None` when cancelled.
    pub fn period(&self) -> Option<u32> {
        self.period_ms
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.period_ms.is_some()
    }

    /// Total firings since creation.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Start a fresh period. A zero period is treated as 1 ms.
    pub fn rearm(&mut self, period_ms: u32) {
        self.period_ms = Some(period_ms.max(1));
        self.accumulator = 0.0;
    }

    pub fn cancel(&mut self) {
        self.period_ms = None;
        self.accumulator = 0.0;
    }

    /// Let `delta_ms` pass; returns how many times the timer fired.
    pub fn advance(&mut self, delta_ms: f64) -> u32 {
        let Some(period) = self.period_ms else {
            return 0;
        };
        if delta_ms <= 0.0 {
            return 0;
        }
        let period = period as f64;
        self.accumulator += delta_ms;
        let fires = (self.accumulator / period) as u32;
        self.accumulator -= fires as f64 * period;
        self.fired += fires as u64;
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_no_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.update(1234.0), 0.0);
        assert_eq!(clock.update(1250.0), 16.0);
    }

    #[test]
    fn clock_clamps_large_gaps() {
        let mut clock = FrameClock::new();
        clock.update(0.0);
        assert_eq!(clock.update(10_000.0), MAX_FRAME_DELTA_MS);
    }

    #[test]
    fn clock_ignores_time_going_backwards() {
        let mut clock = FrameClock::new();
        clock.update(100.0);
        assert_eq!(clock.update(50.0), 0.0);
    }

    #[test]
    fn fires_once_per_period() {
        let mut t = IntervalTimer::new(100);
        assert_eq!(t.advance(99.0), 0);
        assert_eq!(t.advance(1.0), 1);
        assert_eq!(t.advance(350.0), 3);
        assert_eq!(t.fired(), 4);
    }

    #[test]
    fn sub_period_frames_accumulate() {
        let mut t = IntervalTimer::new(100);
        let mut total = 0;
        for _ in 0..6 {
            total += t.advance(16.0);
        }
        assert_eq!(total, 0);
        assert_eq!(t.advance(16.0), 1); // 112ms
    }

    #[test]
    fn rearm_drops_old_progress() {
        let mut t = IntervalTimer::new(100);
        t.advance(90.0);
        t.rearm(50);
        assert_eq!(t.period(), Some(50));
        assert_eq!(t.advance(40.0), 0);
        assert_eq!(t.advance(10.0), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut t = IntervalTimer::new(10);
        t.cancel();
        assert!(!t.is_armed());
        assert_eq!(t.advance(1_000.0), 0);
        assert_eq!(t.fired(), 0);
    }

    #[test]
    fn zero_period_is_one_ms() {
        let t = IntervalTimer::new(0);
        assert_eq!(t.period(), Some(1));
    }
}
