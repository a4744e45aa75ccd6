use glam::{Quat, Vec3};

use crate::animation::binding::TargetPath;
use crate::animation::tracks::KeyframeTrack;

#[derive(Debug, Clone)]
pub struct TrackMeta {
    /// Name of the joint this track animates.
    pub node_name: String,
    pub target: TargetPath,
}

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    #[must_use]
    pub fn end_time(&self) -> f32 {
        match self {
            TrackData::Vector3(track) => track.end_time(),
            TrackData::Quaternion(track) => track.end_time(),
        }
    }
}

/// A track: which joint property it drives, plus its keyframes.
#[derive(Debug, Clone)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Builds a clip whose duration is the latest keyframe of any track.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);
        Self::with_duration(name, duration, tracks)
    }

    #[must_use]
    pub fn with_duration(name: impl Into<String>, duration: f32, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// Copy of this clip without any track driving `target`.
    ///
    /// Name and duration are kept, so the filtered clip loops exactly like
    /// the source. Used to strip root motion from locomotion clips whose
    /// translation is supplied by the character controller instead.
    #[must_use]
    pub fn without_target(&self, target: TargetPath) -> Self {
        let tracks = self
            .tracks
            .iter()
            .filter(|t| t.meta.target != target)
            .cloned()
            .collect();
        Self::with_duration(self.name.clone(), self.duration, tracks)
    }
}
