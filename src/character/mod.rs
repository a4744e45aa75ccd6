//! Player Character
//!
//! [`Character`] bundles the skinned model's transform, skeleton and pose
//! with the animation mixer and the idle/run [`AnimationBlendController`].
//! It is created once, when the idle asset arrives; the run clip is
//! attached whenever its own load completes.
//!
//! One frame of character simulation, in order:
//!
//! 1. advance the mixer by the elapsed time and blend the pose
//! 2. pick idle or run from the held keys
//! 3. move and turn the transform

pub mod blend;
pub mod locomotion;

use std::sync::Arc;

use glam::{Affine3A, Vec3};

use crate::animation::binding::TargetPath;
use crate::animation::clip::AnimationClip;
use crate::animation::mixer::{ActionHandle, AnimationMixer};
use crate::app::input::MovementKeys;
use crate::assets::CharacterAsset;
use crate::errors::Result;
use crate::scene::skeleton::{Pose, Skeleton};
use crate::scene::transform::Transform;
use crate::settings::Settings;

pub use blend::AnimationBlendController;
pub use locomotion::LocomotionIntegrator;

#[derive(Debug)]
pub struct Character {
    pub transform: Transform,
    pub skeleton: Skeleton,
    pub pose: Pose,
    pub mixer: AnimationMixer,
    pub blend: AnimationBlendController,
}

impl Character {
    /// Builds the character from the idle asset and starts its first clip.
    ///
    /// Fails with [`AssetError::NoAnimations`](crate::errors::AssetError::NoAnimations)
    /// when the asset has no clip to idle with.
    pub fn from_asset(asset: CharacterAsset, settings: &Settings) -> Result<Self> {
        let idle_clip = asset.first_clip()?.clone();
        let CharacterAsset { skeleton, .. } = asset;

        let mut mixer = AnimationMixer::new();
        let idle = mixer.clip_action(Arc::new(idle_clip), &skeleton);
        let pose = skeleton.rest_pose();

        let mut transform = Transform::new();
        transform.scale = Vec3::splat(settings.assets.model_scale);

        Ok(Self {
            transform,
            skeleton,
            pose,
            mixer,
            blend: AnimationBlendController::new(idle, settings.blend),
        })
    }

    /// Adds the run action from `clip`, with its translation tracks removed
    /// so the clip animates in place. The action starts silent.
    pub fn attach_run_clip(&mut self, clip: &AnimationClip) -> ActionHandle {
        let in_place = clip.without_target(TargetPath::Translation);
        let handle = self.mixer.clip_action(Arc::new(in_place), &self.skeleton);
        if let Some(action) = self.mixer.action_mut(handle) {
            action.weight = 0.0;
            action.enabled = false;
        }
        self.blend.attach_run(handle);
        handle
    }

    /// One frame of animation and movement.
    pub fn tick(&mut self, dt: f32, keys: MovementKeys, locomotion: &LocomotionIntegrator) {
        self.mixer.update(dt, &self.skeleton, &mut self.pose);
        self.blend.apply(&mut self.mixer, keys);
        locomotion.integrate(&mut self.transform, keys);
    }

    /// Name of the clip behind the current action.
    #[must_use]
    pub fn current_clip_name(&self) -> &str {
        self.mixer
            .action(self.blend.current())
            .map_or("", |action| action.clip().name.as_str())
    }

    #[must_use]
    pub fn model_matrix(&self) -> Affine3A {
        self.transform.local_matrix()
    }
}
