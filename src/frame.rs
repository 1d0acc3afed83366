/// Timing for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since start. Keeps running while animation is paused.
    pub time: f32,
    /// Seconds of animated motion so far
    pub animation_time: f32,
}

/// Fixed-step frame and animation counters.
///
/// Time is derived from tick counts rather than wall time, so a given tick
/// always sees the same scene.
#[derive(Debug, Clone)]
pub struct FrameCounter {
    tick_rate: f32,
    frames: u64,
    animation_frames: u64,
}

impl FrameCounter {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate: tick_rate.max(1) as f32,
            frames: 0,
            animation_frames: 0,
        }
    }

    /// Advance one tick. The animation counter moves after its time is read,
    /// so the first animated tick sees `animation_time == 0`.
    pub fn advance(&mut self, animate: bool) -> FrameInfo {
        self.frames += 1;
        let info = FrameInfo {
            number: self.frames,
            time: self.frames as f32 / self.tick_rate,
            animation_time: self.animation_frames as f32 / self.tick_rate,
        };
        if animate {
            self.animation_frames += 1;
        }
        info
    }

    pub fn frame_number(&self) -> u64 {
        self.frames
    }

    pub fn tick_rate(&self) -> f32 {
        self.tick_rate
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_advances_per_tick() {
        let mut counter = FrameCounter::new(60);
        let first = counter.advance(true);
        assert_eq!(first.number, 1);
        assert!((first.time - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(first.animation_time, 0.0);
        let second = counter.advance(true);
        assert!((second.animation_time - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_paused_animation_freezes() {
        let mut counter = FrameCounter::new(60);
        for _ in 0..10 {
            counter.advance(true);
        }
        let frozen = counter.advance(false).animation_time;
        for _ in 0..20 {
            let info = counter.advance(false);
            assert_eq!(info.animation_time, frozen);
        }
        assert_eq!(counter.frame_number(), 31);
    }

    #[test]
    fn test_zero_rate_is_guarded() {
        let mut counter = FrameCounter::new(0);
        assert!(counter.advance(true).time.is_finite());
    }
}
