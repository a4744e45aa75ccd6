use std::sync::Arc;

use glam::{Quat, Vec3};
use slotmap::{SlotMap, new_key_type};

use crate::animation::action::AnimationAction;
use crate::animation::binder::Binder;
use crate::animation::binding::TargetPath;
use crate::animation::clip::{AnimationClip, TrackData};
use crate::animation::values::Interpolatable;
use crate::scene::skeleton::{Pose, Skeleton};
use crate::scene::transform::Transform;

new_key_type! {
    pub struct ActionHandle;
}

/// Running weighted average of every contribution to one joint property.
#[derive(Debug, Clone, Copy)]
struct Accumulator<T: Interpolatable> {
    value: Option<T>,
    weight: f32,
}

impl<T: Interpolatable> Default for Accumulator<T> {
    fn default() -> Self {
        Self {
            value: None,
            weight: 0.0,
        }
    }
}

impl<T: Interpolatable> Accumulator<T> {
    fn add(&mut self, sample: T, weight: f32) {
        self.value = Some(match self.value {
            None => {
                self.weight = weight;
                sample
            }
            Some(acc) => {
                self.weight += weight;
                T::interpolate_linear(acc, sample, weight / self.weight)
            }
        });
    }

    /// Blends with `rest` for whatever weight is missing up to 1.
    fn resolve(&self, rest: T) -> T {
        match self.value {
            None => rest,
            Some(value) if self.weight < 1.0 => T::interpolate_linear(value, rest, 1.0 - self.weight),
            Some(value) => value,
        }
    }
}

/// Advances every action of one character and blends them into a pose.
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: SlotMap<ActionHandle, AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_action(&mut self, action: AnimationAction) -> ActionHandle {
        self.actions.insert(action)
    }

    /// Creates an action for `clip` bound to `skeleton`. The action starts
    /// enabled at full weight; callers fade it in or out as needed.
    pub fn clip_action(&mut self, clip: Arc<AnimationClip>, skeleton: &Skeleton) -> ActionHandle {
        let bindings = Binder::bind(skeleton, &clip);
        let mut action = AnimationAction::new(clip);
        action.bindings = bindings;
        self.add_action(action)
    }

    #[must_use]
    pub fn action(&self, handle: ActionHandle) -> Option<&AnimationAction> {
        self.actions.get(handle)
    }

    pub fn action_mut(&mut self, handle: ActionHandle) -> Option<&mut AnimationAction> {
        self.actions.get_mut(handle)
    }

    #[must_use]
    pub fn contains(&self, handle: ActionHandle) -> bool {
        self.actions.contains_key(handle)
    }

    pub fn actions(&self) -> impl Iterator<Item = (ActionHandle, &AnimationAction)> {
        self.actions.iter()
    }

    /// Rewinds `to`, fades it in and fades `from` out, both over `duration`.
    ///
    /// `from` ramps down from its current weight and `to` ramps up from the
    /// complement, so the pair always sums to 1 even when a previous fade
    /// was interrupted.
    ///
    /// Returns `false` without touching anything when either handle is
    /// unknown or both are the same action.
    pub fn cross_fade(&mut self, from: ActionHandle, to: ActionHandle, duration: f32) -> bool {
        if from == to || !self.contains(from) || !self.contains(to) {
            return false;
        }

        let outgoing_weight = self
            .actions
            .get(from)
            .map_or(0.0, AnimationAction::effective_weight);

        if let Some(incoming) = self.actions.get_mut(to) {
            incoming.reset();
            incoming.fade_in_from(1.0 - outgoing_weight, duration);
        }
        if let Some(outgoing) = self.actions.get_mut(from) {
            outgoing.fade_out(duration);
        }
        true
    }

    /// Advances all actions by `dt` and writes the blended result to `pose`.
    pub fn update(&mut self, dt: f32, skeleton: &Skeleton, pose: &mut Pose) {
        for action in self.actions.values_mut() {
            action.update(dt);
        }

        let joint_count = skeleton.joints.len();
        let mut translations = vec![Accumulator::<Vec3>::default(); joint_count];
        let mut rotations = vec![Accumulator::<Quat>::default(); joint_count];
        let mut scales = vec![Accumulator::<Vec3>::default(); joint_count];

        for action in self.actions.values_mut() {
            let weight = action.effective_weight();
            if weight <= 0.0 {
                continue;
            }

            let time = action.time;
            let clip = Arc::clone(action.clip());

            for binding in &action.bindings {
                let joint = binding.joint;
                if joint >= joint_count {
                    continue;
                }
                let (Some(track), Some(cursor)) = (
                    clip.tracks.get(binding.track_index),
                    action.track_cursors.get_mut(binding.track_index),
                ) else {
                    continue;
                };

                match (&track.data, binding.target) {
                    (TrackData::Vector3(t), TargetPath::Translation) => {
                        if let Some(v) = t.sample_with_cursor(time, cursor) {
                            translations[joint].add(v, weight);
                        }
                    }
                    (TrackData::Vector3(t), TargetPath::Scale) => {
                        if let Some(v) = t.sample_with_cursor(time, cursor) {
                            scales[joint].add(v, weight);
                        }
                    }
                    (TrackData::Quaternion(t), TargetPath::Rotation) => {
                        if let Some(q) = t.sample_with_cursor(time, cursor) {
                            rotations[joint].add(q, weight);
                        }
                    }
                    _ => {}
                }
            }
        }

        pose.locals.resize(joint_count, Transform::IDENTITY);
        for (index, joint) in skeleton.joints.iter().enumerate() {
            let rest = joint.rest;
            pose.locals[index] = Transform::from_trs(
                translations[index].resolve(rest.position),
                rotations[index].resolve(rest.rotation).normalize(),
                scales[index].resolve(rest.scale),
            );
        }
    }
}
