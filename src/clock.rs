use std::time::{Duration, Instant};

/// Paces the game loop
pub(crate) trait Clock {
    /// Block until at least `1s / rate` has passed since the previous call
    fn tick_wait(&mut self, rate: u32);
}

/// A frame-rate cap backed by the system clock.  The first call returns
/// immediately.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub(crate) fn new() -> FrameClock {
        FrameClock::default()
    }
}

impl Clock for FrameClock {
    fn tick_wait(&mut self, rate: u32) {
        if let Some(last) = self.last_tick {
            let wait = tick_period(rate).saturating_sub(last.elapsed());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

/// Length of one tick at `rate` ticks per second.  A rate of zero is treated
/// as one.
pub(crate) fn tick_period(rate: u32) -> Duration {
    Duration::from_secs(1) / rate.max(1)
}
