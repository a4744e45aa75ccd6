use std::sync::Arc;

use crate::animation::{
    binding::PropertyBinding,
    clip::AnimationClip,
    tracks::KeyframeCursor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and hold the last frame.
    Once,
    Loop,
}

/// A linear weight ramp in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightFade {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl WeightFade {
    fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// A playable instance of a clip: its own time cursor, rate and weight.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    pub bindings: Vec<PropertyBinding>,

    fade: Option<WeightFade>,
    pub(crate) track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: true,
            bindings: Vec::new(),
            fade: None,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn fade(&self) -> Option<&WeightFade> {
        self.fade.as_ref()
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Weight the mixer blends with: zero while disabled.
    #[must_use]
    pub fn effective_weight(&self) -> f32 {
        if self.enabled { self.weight } else { 0.0 }
    }

    /// Rewinds to the first frame and re-enables playback.
    /// Any running fade is dropped and the weight is left untouched.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
        self.fade = None;
        for cursor in &mut self.track_cursors {
            *cursor = KeyframeCursor::default();
        }
    }

    /// Ramps the weight from 0 to 1 over `duration` seconds.
    pub fn fade_in(&mut self, duration: f32) {
        self.fade_in_from(0.0, duration);
    }

    /// Ramps the weight from `start` to 1 over `duration` seconds.
    pub fn fade_in_from(&mut self, start: f32, duration: f32) {
        self.enabled = true;
        self.schedule_fade(start.clamp(0.0, 1.0), 1.0, duration);
    }

    /// Ramps the weight from its current value to 0 over `duration` seconds.
    /// The action disables itself once the ramp completes.
    pub fn fade_out(&mut self, duration: f32) {
        let from = self.effective_weight();
        self.schedule_fade(from, 0.0, duration);
    }

    fn schedule_fade(&mut self, from: f32, to: f32, duration: f32) {
        let fade = WeightFade {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        };
        self.weight = fade.value();
        self.fade = Some(fade);
    }

    /// Advances the weight ramp and the playback time by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.enabled {
            return;
        }

        if let Some(fade) = &mut self.fade {
            fade.elapsed += dt;
            self.weight = fade.value();
            if fade.finished() {
                self.fade = None;
                if self.weight <= 0.0 {
                    self.enabled = false;
                }
            }
        }

        if self.paused {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                self.time = self.time.rem_euclid(duration);
            }
        }
    }
}
