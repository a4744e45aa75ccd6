//! Hand-built character assets shared by the integration tests.
#![allow(dead_code)]

use glam::{Quat, Vec3};

use strider::animation::binding::TargetPath;
use strider::animation::clip::{AnimationClip, Track, TrackData, TrackMeta};
use strider::animation::tracks::{InterpolationMode, KeyframeTrack};
use strider::assets::CharacterAsset;
use strider::scene::skeleton::{Joint, Skeleton};
use strider::scene::transform::Transform;

pub const EPSILON: f32 = 1e-4;

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

pub fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    a.abs_diff_eq(b, EPSILON)
}

/// Root "Armature" with a "Hips" child and a "Spine" grandchild.
pub fn skeleton() -> Skeleton {
    Skeleton::new(
        "Armature",
        vec![
            Joint {
                name: "Armature".into(),
                parent: None,
                rest: Transform::IDENTITY,
            },
            Joint {
                name: "Hips".into(),
                parent: Some(0),
                rest: Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)),
            },
            Joint {
                name: "Spine".into(),
                parent: Some(1),
                rest: Transform::from_translation(Vec3::new(0.0, 0.5, 0.0)),
            },
        ],
    )
}

pub fn vec3_track(node: &str, target: TargetPath, times: Vec<f32>, values: Vec<Vec3>) -> Track {
    Track {
        meta: TrackMeta {
            node_name: node.into(),
            target,
        },
        data: TrackData::Vector3(KeyframeTrack::new(times, values, InterpolationMode::Linear)),
    }
}

pub fn rotation_track(node: &str, times: Vec<f32>, values: Vec<Quat>) -> Track {
    Track {
        meta: TrackMeta {
            node_name: node.into(),
            target: TargetPath::Rotation,
        },
        data: TrackData::Quaternion(KeyframeTrack::new(times, values, InterpolationMode::Linear)),
    }
}

/// One-second breathing loop on the spine.
pub fn idle_clip() -> AnimationClip {
    AnimationClip::new(
        "Idle",
        vec![rotation_track(
            "Spine",
            vec![0.0, 0.5, 1.0],
            vec![Quat::IDENTITY, Quat::from_rotation_x(0.1), Quat::IDENTITY],
        )],
    )
}

/// Run cycle with root motion on the hips.
pub fn run_clip() -> AnimationClip {
    AnimationClip::new(
        "Run",
        vec![
            vec3_track(
                "Hips",
                TargetPath::Translation,
                vec![0.0, 0.8],
                vec![Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 2.0)],
            ),
            rotation_track(
                "Spine",
                vec![0.0, 0.4, 0.8],
                vec![Quat::IDENTITY, Quat::from_rotation_x(0.3), Quat::IDENTITY],
            ),
        ],
    )
}

pub fn idle_asset() -> CharacterAsset {
    CharacterAsset {
        name: "Idle".into(),
        skeleton: skeleton(),
        clips: vec![idle_clip()],
    }
}

pub fn run_asset() -> CharacterAsset {
    CharacterAsset {
        name: "Running".into(),
        skeleton: skeleton(),
        clips: vec![run_clip()],
    }
}

/// Clip that holds the spine at a fixed rotation for `duration` seconds.
pub fn spine_hold_clip(name: &str, rotation: Quat, duration: f32) -> AnimationClip {
    AnimationClip::new(name, vec![rotation_track("Spine", vec![0.0, duration], vec![rotation, rotation])])
}
