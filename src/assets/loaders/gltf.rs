//! glTF character loader
//!
//! Reads the node hierarchy of a glTF 2.0 asset as a [`Skeleton`] and its
//! animations as [`AnimationClip`]s. Meshes and materials are left to the
//! renderer.
//!
//! Buffers may live in the GLB binary chunk, in base64 `data:` URIs, or in
//! files next to the asset (read through the same [`AssetReaderVariant`]).

use std::path::Path;

use base64::Engine as _;
use glam::{Quat, Vec3};
use gltf::animation::util::ReadOutputs;

use crate::animation::binding::TargetPath;
use crate::animation::clip::{AnimationClip, Track, TrackData, TrackMeta};
use crate::animation::tracks::{InterpolationMode, KeyframeTrack};
use crate::animation::values::Interpolatable;
use crate::assets::io::AssetReaderVariant;
use crate::errors::{AssetError, Result};
use crate::scene::skeleton::{Joint, Skeleton};
use crate::scene::transform::Transform;

/// Everything the scene needs from one character asset.
#[derive(Debug, Clone)]
pub struct CharacterAsset {
    pub name: String,
    pub skeleton: Skeleton,
    pub clips: Vec<AnimationClip>,
}

impl CharacterAsset {
    /// The asset's first clip, which is the one the scene plays.
    pub fn first_clip(&self) -> Result<&AnimationClip> {
        self.clips
            .first()
            .ok_or_else(|| AssetError::NoAnimations(self.name.clone()).into())
    }
}

/// Where a buffer's bytes come from, captured before any await point.
enum BufferSource {
    Bin,
    DataUri(String),
    Relative(String),
}

pub struct GltfLoader;

impl GltfLoader {
    /// Reads `uri` and any external buffers through `reader`, then parses.
    pub async fn load(reader: &AssetReaderVariant, uri: &str) -> Result<CharacterAsset> {
        let bytes = reader.read_bytes(uri).await?;
        let gltf = gltf::Gltf::from_slice_without_validation(&bytes)?;

        let sources: Vec<BufferSource> = gltf
            .buffers()
            .map(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => BufferSource::Bin,
                gltf::buffer::Source::Uri(u) if u.starts_with("data:") => BufferSource::DataUri(u.to_string()),
                gltf::buffer::Source::Uri(u) => BufferSource::Relative(u.to_string()),
            })
            .collect();

        let base = Path::new(uri).parent().unwrap_or(Path::new(""));
        let mut buffers = Vec::with_capacity(sources.len());
        for source in sources {
            let data = match source {
                BufferSource::Bin => Self::binary_chunk(&gltf)?,
                BufferSource::DataUri(u) => Self::decode_data_uri(&u)?,
                BufferSource::Relative(u) => {
                    let path = base.join(&u);
                    reader.read_bytes(&path.to_string_lossy()).await?
                }
            };
            buffers.push(data);
        }

        Self::parse(&asset_name(uri), &gltf, &buffers)
    }

    /// Parses a self-contained asset (GLB or embedded `data:` buffers).
    pub fn from_slice(name: &str, bytes: &[u8]) -> Result<CharacterAsset> {
        let gltf = gltf::Gltf::from_slice_without_validation(bytes)?;
        let mut buffers = Vec::new();
        for buffer in gltf.buffers() {
            let data = match buffer.source() {
                gltf::buffer::Source::Bin => Self::binary_chunk(&gltf)?,
                gltf::buffer::Source::Uri(u) if u.starts_with("data:") => Self::decode_data_uri(u)?,
                gltf::buffer::Source::Uri(u) => {
                    return Err(AssetError::InvalidData(format!(
                        "'{name}' references external buffer '{u}'; load it through an asset reader"
                    ))
                    .into());
                }
            };
            buffers.push(data);
        }
        Self::parse(name, &gltf, &buffers)
    }

    pub fn parse(name: &str, gltf: &gltf::Gltf, buffers: &[Vec<u8>]) -> Result<CharacterAsset> {
        let skeleton = Self::load_skeleton(name, gltf);
        let clips = Self::load_animations(gltf, buffers);
        log::debug!(
            "parsed '{name}': {} joints, {} clips",
            skeleton.len(),
            clips.len()
        );
        Ok(CharacterAsset {
            name: name.to_string(),
            skeleton,
            clips,
        })
    }

    fn binary_chunk(gltf: &gltf::Gltf) -> Result<Vec<u8>> {
        gltf.blob
            .clone()
            .ok_or_else(|| AssetError::InvalidData("missing GLB binary chunk".into()).into())
    }

    fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
        let (header, payload) = uri
            .split_once(',')
            .ok_or_else(|| AssetError::InvalidData("malformed data URI".into()))?;
        if !header.ends_with(";base64") {
            return Err(AssetError::InvalidData(format!("unsupported data URI encoding: {header}")).into());
        }
        Ok(base64::engine::general_purpose::STANDARD.decode(payload)?)
    }

    /// Every node becomes a joint, indexed like the glTF node array.
    fn load_skeleton(name: &str, gltf: &gltf::Gltf) -> Skeleton {
        let mut parents = vec![None; gltf.nodes().count()];
        for node in gltf.nodes() {
            for child in node.children() {
                parents[child.index()] = Some(node.index());
            }
        }

        let joints = gltf
            .nodes()
            .map(|node| {
                let (t, r, s) = node.transform().decomposed();
                Joint {
                    name: node_name(&node),
                    parent: parents[node.index()],
                    rest: Transform::from_trs(Vec3::from_array(t), Quat::from_array(r), Vec3::from_array(s)),
                }
            })
            .collect();

        let skeleton_name = gltf
            .skins()
            .find_map(|skin| skin.name().map(str::to_string))
            .unwrap_or_else(|| name.to_string());

        Skeleton::new(skeleton_name, joints)
    }

    fn load_animations(gltf: &gltf::Gltf, buffers: &[Vec<u8>]) -> Vec<AnimationClip> {
        let mut animations = Vec::new();

        for anim in gltf.animations() {
            let clip_name = anim
                .name()
                .map_or_else(|| format!("Animation_{}", anim.index()), str::to_string);
            let mut tracks = Vec::new();

            for channel in anim.channels() {
                let reader = channel.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));
                let node_name = node_name(&channel.target().node());

                let (Some(inputs), Some(outputs)) = (reader.read_inputs(), reader.read_outputs()) else {
                    log::warn!("clip '{clip_name}': channel for '{node_name}' has unreadable data, skipped");
                    continue;
                };
                let times: Vec<f32> = inputs.collect();

                let interpolation = match channel.sampler().interpolation() {
                    gltf::animation::Interpolation::Linear => InterpolationMode::Linear,
                    gltf::animation::Interpolation::Step => InterpolationMode::Step,
                    gltf::animation::Interpolation::CubicSpline => InterpolationMode::CubicSpline,
                };

                let (target, data) = match outputs {
                    ReadOutputs::Translations(iter) => (
                        TargetPath::Translation,
                        TrackData::Vector3(checked_track(times, iter.map(Vec3::from_array).collect(), interpolation)),
                    ),
                    ReadOutputs::Rotations(iter) => (
                        TargetPath::Rotation,
                        TrackData::Quaternion(checked_track(
                            times,
                            iter.into_f32().map(Quat::from_array).collect(),
                            interpolation,
                        )),
                    ),
                    ReadOutputs::Scales(iter) => (
                        TargetPath::Scale,
                        TrackData::Vector3(checked_track(times, iter.map(Vec3::from_array).collect(), interpolation)),
                    ),
                    ReadOutputs::MorphTargetWeights(_) => {
                        log::debug!("clip '{clip_name}': morph target weights on '{node_name}' ignored");
                        continue;
                    }
                };

                let empty = match &data {
                    TrackData::Vector3(t) => t.is_empty(),
                    TrackData::Quaternion(t) => t.is_empty(),
                };
                if empty {
                    log::warn!("clip '{clip_name}': {target:?} track for '{node_name}' has mismatched keyframes, skipped");
                    continue;
                }

                tracks.push(Track {
                    meta: TrackMeta { node_name, target },
                    data,
                });
            }

            animations.push(AnimationClip::new(clip_name, tracks));
        }

        animations
    }
}

fn node_name(node: &gltf::Node) -> String {
    node.name()
        .map_or_else(|| format!("Node_{}", node.index()), str::to_string)
}

/// File stem of `uri`, used as the asset's display name.
fn asset_name(uri: &str) -> String {
    Path::new(uri)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(uri)
        .to_string()
}

/// Builds a track, or an empty one when the value count does not fit the
/// keyframe count for `interpolation`.
fn checked_track<T: Interpolatable>(
    times: Vec<f32>,
    values: Vec<T>,
    interpolation: InterpolationMode,
) -> KeyframeTrack<T> {
    let expected = match interpolation {
        InterpolationMode::CubicSpline => times.len() * 3,
        InterpolationMode::Linear | InterpolationMode::Step => times.len(),
    };
    if values.len() == expected {
        KeyframeTrack::new(times, values, interpolation)
    } else {
        KeyframeTrack::new(Vec::new(), Vec::new(), interpolation)
    }
}
