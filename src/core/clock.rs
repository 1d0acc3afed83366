use std::time::{Duration, Instant};

/// Tracks delta time between calls
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Seconds since the previous call
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-rate tick scheduler.
///
/// At most one tick is due at a time. A stall drops the missed ticks
/// instead of replaying them in a burst.
#[derive(Debug)]
pub struct FixedRate {
    interval: Duration,
    next_due: Instant,
}

impl FixedRate {
    pub fn new(hz: u32) -> Self {
        Self::starting_at(hz, Instant::now())
    }

    pub fn starting_at(hz: u32, start: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / hz.max(1) as f64),
            next_due: start,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deadline of the next tick, for `ControlFlow::WaitUntil`
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// True if a tick is due at `now`. Consumes the tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();
        assert!(delta >= 0.009);
    }

    #[test]
    fn fixed_rate_fires_once_per_interval() {
        let start = Instant::now();
        let mut rate = FixedRate::starting_at(60, start);
        assert!(rate.poll(start));
        assert!(!rate.poll(start));
        assert!(rate.poll(start + rate.interval()));
    }

    #[test]
    fn fixed_rate_drops_backlog_after_stall() {
        let start = Instant::now();
        let mut rate = FixedRate::starting_at(60, start);
        let late = start + Duration::from_secs(1);
        assert!(rate.poll(late));
        assert!(!rate.poll(late));
        assert!(rate.next_due() > late);
    }
}
