use std::time::Instant;

/// Cut-scene stages in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    IntroA,
    Gap,
    IntroB,
    Choice,
    Epilogue,
}

impl Stage {
    /// Forward edge out of each stage. `Epilogue` is terminal.
    pub const fn next(self) -> Stage {
        match self {
            Stage::IntroA => Stage::Gap,
            Stage::Gap => Stage::IntroB,
            Stage::IntroB => Stage::Choice,
            Stage::Choice => Stage::Epilogue,
            Stage::Epilogue => Stage::Epilogue,
        }
    }
}

/// Current stage and the instant it was entered.
#[derive(Clone, Copy, Debug)]
pub struct StageClock {
    stage: Stage,
    entered_at: Instant,
}

impl StageClock {
    pub fn new(now: Instant) -> Self {
        Self { stage: Stage::IntroA, entered_at: now }
    }

    #[inline(always)]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.entered_at).as_millis() as u64
    }

    /// Switches to `stage` and restarts the clock at `now`.
    pub fn enter(&mut self, stage: Stage, now: Instant) {
        log::info!("Start screen: {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
        self.entered_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn forward_edges_reach_epilogue() {
        let mut s = Stage::IntroA;
        let mut seen = vec![s];
        while s != Stage::Epilogue {
            s = s.next();
            seen.push(s);
        }
        assert_eq!(seen, [Stage::IntroA, Stage::Gap, Stage::IntroB, Stage::Choice, Stage::Epilogue]);
        assert_eq!(Stage::Epilogue.next(), Stage::Epilogue);
    }

    #[test]
    fn entering_resets_elapsed() {
        let t0 = Instant::now();
        let mut clock = StageClock::new(t0);
        assert_eq!(clock.elapsed_ms(t0 + Duration::from_millis(250)), 250);

        let t1 = t0 + Duration::from_secs(1);
        clock.enter(Stage::Gap, t1);
        assert_eq!(clock.stage(), Stage::Gap);
        assert_eq!(clock.elapsed_ms(t1), 0);
        // A stale timestamp never underflows.
        assert_eq!(clock.elapsed_ms(t0), 0);
    }
}
