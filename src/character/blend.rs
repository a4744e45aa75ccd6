use crate::animation::mixer::{ActionHandle, AnimationMixer};
use crate::app::input::MovementKeys;
use crate::settings::BlendSettings;

/// Owns the idle/run action pair and decides which one is active.
///
/// `current` always names a live action: it starts on idle and only
/// [`cross_fade_to`](Self::cross_fade_to) reassigns it. The run action is
/// attached later, once its clip has loaded, and every use checks for it.
#[derive(Debug, Clone)]
pub struct AnimationBlendController {
    settings: BlendSettings,
    idle: ActionHandle,
    run: Option<ActionHandle>,
    current: ActionHandle,
}

impl AnimationBlendController {
    #[must_use]
    pub fn new(idle: ActionHandle, settings: BlendSettings) -> Self {
        Self {
            settings,
            idle,
            run: None,
            current: idle,
        }
    }

    #[inline]
    #[must_use]
    pub fn idle(&self) -> ActionHandle {
        self.idle
    }

    #[inline]
    #[must_use]
    pub fn run(&self) -> Option<ActionHandle> {
        self.run
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> ActionHandle {
        self.current
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run == Some(self.current)
    }

    /// Registers the run action once its clip is available.
    pub fn attach_run(&mut self, run: ActionHandle) {
        if let Some(previous) = self.run.replace(run) {
            log::warn!("run action {previous:?} replaced by {run:?}");
        }
    }

    /// Starts a cross-fade from the current action to `target`.
    ///
    /// No-op when `target` is absent, unknown to `mixer`, or already
    /// current; in particular a running fade is never restarted.
    /// Returns whether a fade was started.
    pub fn cross_fade_to(
        &mut self,
        mixer: &mut AnimationMixer,
        target: Option<ActionHandle>,
        duration: f32,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        if target == self.current {
            return false;
        }
        if !mixer.cross_fade(self.current, target, duration) {
            return false;
        }

        log::debug!("cross-fade {:?} -> {:?} over {duration}s", self.current, target);
        self.current = target;
        true
    }

    /// Per-frame policy: run while forward/backward is held, idle otherwise,
    /// and slow the run down while backing up.
    pub fn apply(&mut self, mixer: &mut AnimationMixer, keys: MovementKeys) {
        let fade = self.settings.fade_duration;

        if keys.is_moving() {
            if self.run.is_some_and(|run| run != self.current) {
                self.cross_fade_to(mixer, self.run, fade);
            }

            let rate = if keys.is_backing_up() {
                self.settings.backward_rate
            } else {
                self.settings.forward_rate
            };
            if let Some(run) = self.run.and_then(|run| mixer.action_mut(run)) {
                run.time_scale = rate;
            }
        } else if self.current != self.idle {
            self.cross_fade_to(mixer, Some(self.idle), fade);
        }
    }
}
