// src/ui/anim.rs
//! Appear / hold / fade opacity timeline for text panels.
//!
//! The timeline is a pure function of elapsed time:
//! ```text
//!   255 |      ________
//!       |     /        \
//!     0 |____/          \____ Done
//!         appear  hold  fade
//! ```

/// Opacity for a frame, or the signal that the timeline has run out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    Alpha(u8),
    Done,
}

impl Fade {
    /// Opacity to draw with; a finished timeline draws nothing.
    #[inline(always)]
    pub fn opacity(self) -> u8 {
        match self {
            Fade::Alpha(a) => a,
            Fade::Done => 0,
        }
    }

    #[inline(always)]
    pub fn is_done(self) -> bool {
        matches!(self, Fade::Done)
    }
}

/// Phase durations in milliseconds for one text-bearing stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeline {
    pub appear_ms: u64,
    pub hold_ms: u64,
    pub fade_ms: u64,
}

impl Timeline {
    pub const fn new(appear_ms: u64, hold_ms: u64, fade_ms: u64) -> Self {
        Self { appear_ms, hold_ms, fade_ms }
    }

    /// Total lifespan of the stage.
    #[inline(always)]
    pub const fn total_ms(&self) -> u64 {
        self.appear_ms
            .saturating_add(self.hold_ms)
            .saturating_add(self.fade_ms)
    }

    #[inline(always)]
    pub fn alpha(&self, elapsed_ms: u64) -> Fade {
        alpha(elapsed_ms, self.appear_ms, self.hold_ms, self.fade_ms)
    }
}

/// `round(255 * num / den)` in integer arithmetic; `num <= den`.
#[inline(always)]
fn scaled_255(num: u64, den: u64) -> u8 {
    let (num, den) = (num as u128, den as u128);
    ((255 * num * 2 + den) / (2 * den)) as u8
}

/// Linear 0→255 ramp that stays at 255 once `appear_ms` has passed.
#[inline(always)]
pub fn fade_in(elapsed_ms: u64, appear_ms: u64) -> u8 {
    if elapsed_ms >= appear_ms {
        255
    } else {
        scaled_255(elapsed_ms, appear_ms)
    }
}

/// Opacity at `elapsed_ms` into an appear / hold / fade timeline.
///
/// Non-decreasing while appearing, 255 while holding, non-increasing while
/// fading, and [`Fade::Done`] from `appear_ms + hold_ms + fade_ms` onwards.
pub fn alpha(elapsed_ms: u64, appear_ms: u64, hold_ms: u64, fade_ms: u64) -> Fade {
    let hold_end = appear_ms.saturating_add(hold_ms);
    let fade_end = hold_end.saturating_add(fade_ms);
    if elapsed_ms < appear_ms {
        Fade::Alpha(scaled_255(elapsed_ms, appear_ms))
    } else if elapsed_ms < hold_end {
        Fade::Alpha(255)
    } else if elapsed_ms < fade_end {
        let remaining = fade_end - elapsed_ms;
        Fade::Alpha(scaled_255(remaining, fade_ms))
    } else {
        Fade::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn phase_boundaries() {
        let t = Timeline::new(1000, 2000, 1000);
        assert_eq!(t.alpha(0), Fade::Alpha(0));
        assert_eq!(t.alpha(500), Fade::Alpha(128));
        assert_eq!(t.alpha(999), Fade::Alpha(255));
        assert_eq!(t.alpha(1000), Fade::Alpha(255));
        assert_eq!(t.alpha(2999), Fade::Alpha(255));
        assert_eq!(t.alpha(3000), Fade::Alpha(255));
        assert_eq!(t.alpha(3500), Fade::Alpha(128));
        assert_eq!(t.alpha(3999), Fade::Alpha(0));
        assert_eq!(t.alpha(4000), Fade::Done);
        assert_eq!(t.total_ms(), 4000);
    }

    #[test]
    fn zero_length_phases_are_skipped() {
        assert_eq!(alpha(0, 0, 100, 0), Fade::Alpha(255));
        assert_eq!(alpha(100, 0, 100, 0), Fade::Done);
        assert_eq!(alpha(0, 0, 0, 0), Fade::Done);
    }

    #[test]
    fn exact_halves_round_up() {
        // 255 * 3 / 10 = 76.5
        assert_eq!(fade_in(3, 10), 77);
        assert_eq!(alpha(3, 10, 0, 0), Fade::Alpha(77));
    }

    #[test]
    fn fade_in_saturates() {
        assert_eq!(fade_in(0, 400), 0);
        assert_eq!(fade_in(200, 400), 128);
        assert_eq!(fade_in(10_000, 400), 255);
        assert_eq!(fade_in(0, 0), 255);
    }

    #[test]
    fn done_draws_nothing() {
        assert_eq!(Fade::Done.opacity(), 0);
        assert!(Fade::Done.is_done());
        assert!(!Fade::Alpha(0).is_done());
    }

    proptest! {
        #[test]
        fn appear_phase_is_monotone(appear in 1u64..10_000, a in 0u64..10_000, b in 0u64..10_000) {
            let (lo, hi) = (a.min(b) % appear, a.max(b) % appear);
            let (lo, hi) = (lo.min(hi), lo.max(hi));
            prop_assert!(alpha(lo, appear, 500, 500).opacity() <= alpha(hi, appear, 500, 500).opacity());
        }

        #[test]
        fn hold_phase_is_opaque(appear in 0u64..5_000, hold in 1u64..5_000, off in 0u64..5_000) {
            let elapsed = appear + off % hold;
            prop_assert_eq!(alpha(elapsed, appear, hold, 700), Fade::Alpha(255));
        }

        #[test]
        fn fade_phase_is_non_increasing(fade in 1u64..10_000, a in 0u64..10_000, b in 0u64..10_000) {
            let start = 300 + 200;
            let (lo, hi) = (start + a.min(b) % fade, start + a.max(b) % fade);
            let (lo, hi) = (lo.min(hi), lo.max(hi));
            prop_assert!(alpha(lo, 300, 200, fade).opacity() >= alpha(hi, 300, 200, fade).opacity());
        }

        #[test]
        fn past_the_end_is_done(appear in 0u64..5_000, hold in 0u64..5_000, fade in 0u64..5_000, extra in 0u64..100_000) {
            let t = Timeline::new(appear, hold, fade);
            prop_assert_eq!(t.alpha(t.total_ms() + extra), Fade::Done);
        }
    }
}
