use crate::animation::binding::PropertyBinding;
use crate::animation::clip::AnimationClip;
use crate::scene::skeleton::Skeleton;

pub struct Binder;

impl Binder {
    /// Resolves each track of `clip` to a joint of `skeleton` by name.
    /// Tracks naming a joint the skeleton does not have are skipped.
    #[must_use]
    pub fn bind(skeleton: &Skeleton, clip: &AnimationClip) -> Vec<PropertyBinding> {
        let mut bindings = Vec::with_capacity(clip.tracks.len());

        for (track_index, track) in clip.tracks.iter().enumerate() {
            match skeleton.find_joint(&track.meta.node_name) {
                Some(joint) => bindings.push(PropertyBinding {
                    track_index,
                    joint,
                    target: track.meta.target,
                }),
                None => log::debug!(
                    "clip '{}': no joint named '{}' in skeleton '{}', track skipped",
                    clip.name,
                    track.meta.node_name,
                    skeleton.name
                ),
            }
        }

        bindings
    }
}
