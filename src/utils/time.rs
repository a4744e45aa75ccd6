use std::time::{Duration, Instant};

/// Wall-clock source of the `dt` passed to [`GameState::update`].
///
/// [`GameState::update`]: crate::game::GameState::update
#[derive(Debug, Clone)]
pub struct Timer {
    origin: Instant,
    previous: Instant,
    frame_delta: Duration,
    frames: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            previous: now,
            frame_delta: Duration::ZERO,
            frames: 0,
        }
    }

    /// Closes the current frame and returns its length in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.frame_delta = now.saturating_duration_since(self.previous);
        self.previous = now;
        self.frames += 1;
        self.frame_delta.as_secs_f32()
    }

    /// Length of the last completed frame.
    #[must_use]
    pub fn frame_delta(&self) -> Duration {
        self.frame_delta
    }

    #[must_use]
    pub fn since_start(&self) -> Duration {
        self.origin.elapsed()
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
