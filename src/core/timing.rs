// ===== FILE: src/core/timing.rs =====
use std::time::{Duration, Instant};

/// Fixed-timestep frame deadline. The event loop sleeps until `next_frame()`
/// instead of spinning, then advances the deadline by one period.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        let fps = fps.max(1);
        Self {
            period: Duration::from_secs(1) / fps,
            next_frame: now,
        }
    }

    #[inline(always)]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[inline(always)]
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    #[inline(always)]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Moves the deadline one period forward. The result is always after
    /// `now`: if the loop fell behind, the deadline restarts from `now` so
    /// missed frames are dropped rather than replayed in a burst.
    pub fn advance(&mut self, now: Instant) {
        self.next_frame += self.period;
        if self.next_frame <= now {
            self.next_frame = now + self.period;
        }
    }
}

/// Frames-per-second sampler for the window title; reports about once a second.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { window_start: now, frames: 0 }
    }

    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacer_steps_one_period_at_a_time() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(60, t0);
        assert!(pacer.is_due(t0));
        pacer.advance(t0);
        assert_eq!(pacer.next_frame(), t0 + pacer.period());
        assert!(!pacer.is_due(t0 + Duration::from_millis(5)));
        assert!(pacer.is_due(t0 + Duration::from_millis(17)));
    }

    #[test]
    fn pacer_resynchronises_after_a_stall() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(60, t0);
        let late = t0 + Duration::from_secs(2);
        pacer.advance(late);
        assert_eq!(pacer.next_frame(), late + pacer.period());
    }

    #[test]
    fn deadline_stays_ahead_when_frames_are_skipped() {
        let t0 = Instant::now();
        let mut pacer = FramePacer::new(60, t0);
        // Redraws requested but never delivered: each wake-up lands late by
        // a fraction of a period and still has to push the deadline forward.
        let mut now = t0;
        for late_ms in [1u64, 20, 25, 40, 3, 100] {
            now += Duration::from_millis(late_ms);
            if pacer.is_due(now) {
                pacer.advance(now);
            }
            assert!(pacer.next_frame() > now, "deadline {:?} not after {:?}", pacer.next_frame(), now);
        }
        // Late by one and a half periods.
        let mut pacer = FramePacer::new(60, t0);
        let late = t0 + pacer.period() * 3 / 2;
        pacer.advance(late);
        assert_eq!(pacer.next_frame(), late + pacer.period());
    }

    #[test]
    fn zero_fps_is_clamped() {
        let pacer = FramePacer::new(0, Instant::now());
        assert_eq!(pacer.period(), Duration::from_secs(1));
    }

    #[test]
    fn fps_counter_reports_once_per_second() {
        let t0 = Instant::now();
        let mut counter = FpsCounter::new(t0);
        for i in 1..60 {
            assert_eq!(counter.tick(t0 + Duration::from_millis(i * 16)), None);
        }
        let fps = counter.tick(t0 + Duration::from_secs(1)).expect("sample after one second");
        assert!((fps - 60.0).abs() < 0.01);
    }
}
