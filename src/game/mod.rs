//! Game State & Frame Driver
//!
//! [`GameState`] holds everything the per-frame loop touches: input, camera,
//! the character once it exists, and the outstanding asset loads. The host
//! calls [`GameState::update`] once per rendered frame with the elapsed time
//! and then renders [`GameState::frame_view`].
//!
//! # Phases
//!
//! - [`ScenePhase::Unloaded`]: no character; only the static scene renders.
//! - [`ScenePhase::Loaded`]: the idle asset arrived and the character
//!   exists. The run clip may still be on its way.
//!
//! The switch to `Loaded` happens at most once. If the idle asset fails to
//! load the scene stays `Unloaded` for good.

pub mod loading;

use crate::app::input::Input;
use crate::assets::{CharacterAsset, LoadTicket};
use crate::character::{Character, LocomotionIntegrator};
use crate::renderer::{CharacterView, FrameView};
use crate::scene::camera::Camera;
use crate::settings::Settings;
use crate::utils::FollowCamera;

pub use loading::PendingLoads;

#[derive(Debug)]
pub enum ScenePhase {
    Unloaded,
    Loaded(Box<Character>),
}

#[derive(Debug)]
pub struct GameState {
    pub settings: Settings,
    pub input: Input,
    pub camera: Camera,
    follow: FollowCamera,
    locomotion: LocomotionIntegrator,
    phase: ScenePhase,
    loads: PendingLoads,
    frame: u64,
}

impl GameState {
    #[must_use]
    pub fn new(settings: Settings, aspect: f32) -> Self {
        Self {
            input: Input::with_bindings(settings.keys.clone()),
            camera: Camera::from_settings(&settings.camera, aspect),
            follow: FollowCamera::from_settings(&settings.camera),
            locomotion: LocomotionIntegrator::new(settings.locomotion),
            phase: ScenePhase::Unloaded,
            loads: PendingLoads::default(),
            frame: 0,
            settings,
        }
    }

    /// Registers the idle and run loads. Either may resolve at any time.
    pub fn begin_loading(&mut self, idle: LoadTicket<CharacterAsset>, run: LoadTicket<CharacterAsset>) {
        self.loads = PendingLoads::new(idle, run);
    }

    #[must_use]
    pub fn phase(&self) -> &ScenePhase {
        &self.phase
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, ScenePhase::Loaded(_))
    }

    #[must_use]
    pub fn character(&self) -> Option<&Character> {
        match &self.phase {
            ScenePhase::Loaded(character) => Some(&**character),
            ScenePhase::Unloaded => None,
        }
    }

    pub fn character_mut(&mut self) -> Option<&mut Character> {
        match &mut self.phase {
            ScenePhase::Loaded(character) => Some(&mut **character),
            ScenePhase::Unloaded => None,
        }
    }

    #[must_use]
    pub fn loads(&self) -> &PendingLoads {
        &self.loads
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Collects finished loads. Never blocks.
    ///
    /// The run ticket is only looked at once the character exists; a run
    /// asset that finishes first waits in its channel.
    pub fn poll_loads(&mut self) {
        if !self.is_loaded()
            && let Some(result) = self.loads.poll_idle()
        {
            match result.and_then(|asset| Character::from_asset(asset, &self.settings)) {
                Ok(character) => {
                    log::info!("Character ready, playing '{}'", character.current_clip_name());
                    self.phase = ScenePhase::Loaded(Box::new(character));
                }
                Err(err) => {
                    log::error!("Error loading idle asset: {err}");
                    self.loads.abandon_run();
                }
            }
        }

        if let ScenePhase::Loaded(character) = &mut self.phase
            && let Some(result) = self.loads.poll_run()
        {
            match result.and_then(|asset| asset.first_clip().cloned()) {
                Ok(clip) => {
                    let handle = character.attach_run_clip(&clip);
                    log::info!("Run clip '{}' attached as {handle:?}", clip.name);
                }
                Err(err) => log::error!("Error loading run asset: {err}"),
            }
        }
    }

    /// One frame: collect loads, then animate, move and follow.
    pub fn update(&mut self, dt: f32) {
        self.frame += 1;
        self.poll_loads();

        let ScenePhase::Loaded(character) = &mut self.phase else {
            return;
        };

        let keys = self.input.keys();
        character.tick(dt, keys, &self.locomotion);
        self.follow.update(&mut self.camera.transform, &character.transform);
    }

    /// Applies a new viewport size to the camera. Game state is unaffected.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    #[must_use]
    pub fn frame_view(&self) -> FrameView<'_> {
        FrameView {
            frame: self.frame,
            environment: &self.settings.environment,
            camera_position: self.camera.transform.position,
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            character: self.character().map(|character| CharacterView {
                model_matrix: character.model_matrix(),
                skeleton: &character.skeleton,
                joint_matrices: character.pose.world_matrices(&character.skeleton),
                active_clip: character.current_clip_name(),
                running: character.blend.is_running(),
            }),
        }
    }
}
