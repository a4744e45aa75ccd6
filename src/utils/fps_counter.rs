use std::time::{Duration, Instant};

/// Averages frame rate over one-second windows.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            current_fps: 0.0,
        }
    }

    /// Counts a frame. Returns the average once per elapsed window.
    pub fn update(&mut self) -> Option<f32> {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed < Self::WINDOW {
            return None;
        }

        self.current_fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = Instant::now();
        self.frames = 0;
        Some(self.current_fps)
    }
}
