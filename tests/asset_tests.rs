//! Asset Loading Tests
//!
//! Tests for:
//! - glTF node hierarchy -> Skeleton
//! - glTF animations -> AnimationClip (translation and rotation channels)
//! - Embedded base64 buffers and external buffers resolved through a reader
//! - AssetLoader tickets for memory and file readers
//! - Error reporting for missing assets and assets without animations

use base64::Engine as _;
use glam::{Quat, Vec3};
use serde_json::json;

use strider::animation::binding::TargetPath;
use strider::animation::clip::TrackData;
use strider::assets::{
    AssetLoader, AssetReaderVariant, GltfLoader, LoadStatus, LoadTicket, MemoryAssetReader,
};
use strider::errors::{AssetError, Error};

/// Keyframe times, hip translations and spine rotations, packed little-endian.
fn animation_buffer() -> Vec<u8> {
    let mut bytes = Vec::new();
    let floats: [f32; 2 + 6 + 8] = [
        0.0, 1.0, // times
        0.0, 1.0, 0.0, 0.0, 1.0, 2.0, // hips translation
        0.0, 0.0, 0.0, 1.0, // spine rotation at t=0
        0.0, 0.707_106_8, 0.0, 0.707_106_8, // 90 degrees about Y at t=1
    ];
    for f in floats {
        bytes.extend_from_slice(&f.to_le_bytes());
    }
    bytes
}

fn gltf_document(buffer_uri: &str, with_animation: bool) -> Vec<u8> {
    let mut doc = json!({
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "nodes": [0] }],
        "nodes": [
            { "name": "Armature", "children": [1] },
            { "name": "Hips", "translation": [0.0, 1.0, 0.0], "children": [2] },
            { "translation": [0.0, 0.5, 0.0] }
        ],
        "buffers": [{ "byteLength": 64, "uri": buffer_uri }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 8 },
            { "buffer": 0, "byteOffset": 8, "byteLength": 24 },
            { "buffer": 0, "byteOffset": 32, "byteLength": 32 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [1.0] },
            { "bufferView": 1, "componentType": 5126, "count": 2, "type": "VEC3" },
            { "bufferView": 2, "componentType": 5126, "count": 2, "type": "VEC4" }
        ]
    });

    if with_animation {
        doc["animations"] = json!([{
            "name": "Idle",
            "samplers": [
                { "input": 0, "output": 1, "interpolation": "LINEAR" },
                { "input": 0, "output": 2, "interpolation": "LINEAR" }
            ],
            "channels": [
                { "sampler": 0, "target": { "node": 1, "path": "translation" } },
                { "sampler": 1, "target": { "node": 2, "path": "rotation" } }
            ]
        }]);
    }

    serde_json::to_vec(&doc).unwrap()
}

fn embedded_gltf() -> Vec<u8> {
    let payload = base64::engine::general_purpose::STANDARD.encode(animation_buffer());
    gltf_document(&format!("data:application/octet-stream;base64,{payload}"), true)
}

#[test]
fn nodes_become_joints() {
    let asset = GltfLoader::from_slice("Idle", &embedded_gltf()).unwrap();
    let skeleton = &asset.skeleton;

    assert_eq!(skeleton.len(), 3);
    assert_eq!(skeleton.joints[0].parent, None);
    assert_eq!(skeleton.joints[1].parent, Some(0));
    assert_eq!(skeleton.joints[2].parent, Some(1));
    assert_eq!(skeleton.joints[2].name, "Node_2");
    assert_eq!(skeleton.find_joint("Hips"), Some(1));
    assert!(skeleton.joints[1].rest.position.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn rest_pose_world_matrices_follow_hierarchy() {
    let asset = GltfLoader::from_slice("Idle", &embedded_gltf()).unwrap();
    let world = asset.skeleton.rest_pose().world_matrices(&asset.skeleton);

    assert_eq!(world.len(), 3);
    assert!(Vec3::from(world[2].translation).abs_diff_eq(Vec3::new(0.0, 1.5, 0.0), 1e-5));
}

#[test]
fn animations_become_clips() {
    let asset = GltfLoader::from_slice("Idle", &embedded_gltf()).unwrap();
    let clip = asset.first_clip().unwrap();

    assert_eq!(clip.name, "Idle");
    assert!((clip.duration - 1.0).abs() < 1e-6);
    assert_eq!(clip.tracks.len(), 2);

    let hips = &clip.tracks[0];
    assert_eq!(hips.meta.node_name, "Hips");
    assert_eq!(hips.meta.target, TargetPath::Translation);
    let TrackData::Vector3(track) = &hips.data else {
        panic!("expected a vector track");
    };
    assert!(track.sample(0.5).unwrap().abs_diff_eq(Vec3::new(0.0, 1.0, 1.0), 1e-5));

    let spine = &clip.tracks[1];
    assert_eq!(spine.meta.node_name, "Node_2");
    let TrackData::Quaternion(track) = &spine.data else {
        panic!("expected a quaternion track");
    };
    let end = track.sample(1.0).unwrap();
    assert!(end.abs_diff_eq(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2), 1e-4));
}

#[test]
fn asset_without_animations_has_no_first_clip() {
    let payload = base64::engine::general_purpose::STANDARD.encode(animation_buffer());
    let bytes = gltf_document(&format!("data:application/octet-stream;base64,{payload}"), false);
    let asset = GltfLoader::from_slice("Static", &bytes).unwrap();

    assert!(asset.clips.is_empty());
    let err = asset.first_clip().unwrap_err();
    assert!(matches!(err, Error::Asset(AssetError::NoAnimations(name)) if name == "Static"));
}

#[test]
fn from_slice_rejects_external_buffers() {
    let err = GltfLoader::from_slice("Run", &gltf_document("run.bin", true)).unwrap_err();
    assert!(matches!(err, Error::Asset(AssetError::InvalidData(_))));
}

#[test]
fn garbage_is_a_gltf_error() {
    let err = GltfLoader::from_slice("Broken", b"not a gltf file").unwrap_err();
    assert!(matches!(err, Error::Gltf(_)));
}

#[test]
fn loader_resolves_external_buffers_next_to_the_asset() {
    let reader = MemoryAssetReader::new()
        .with("characters/Running.gltf", gltf_document("run.bin", true))
        .with("characters/run.bin", animation_buffer());
    let loader = AssetLoader::new(AssetReaderVariant::memory(reader)).unwrap();

    let asset = loader.load("characters/Running.gltf").wait().unwrap();
    assert_eq!(asset.name, "Running");
    assert_eq!(asset.clips.len(), 1);
}

#[test]
fn loader_reports_missing_assets() {
    let loader = AssetLoader::new(AssetReaderVariant::memory(MemoryAssetReader::new())).unwrap();
    let ticket = loader.load("Idle.glb");
    assert_eq!(ticket.label(), "Idle.glb");

    let err = ticket.wait().unwrap_err();
    assert!(matches!(err, Error::Asset(AssetError::NotFound(_))));
}

#[test]
fn loader_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Idle.gltf"), embedded_gltf()).unwrap();

    let loader = AssetLoader::new(AssetReaderVariant::file(dir.path())).unwrap();
    let asset = loader.load("Idle.gltf").wait().unwrap();
    assert_eq!(asset.skeleton.len(), 3);

    let err = loader.load("Running.gltf").wait().unwrap_err();
    assert!(matches!(err, Error::Asset(AssetError::NotFound(_))));
}

#[test]
fn ticket_polls_without_blocking() {
    let (completer, ticket) = LoadTicket::<u32>::channel("answer");
    assert!(matches!(ticket.poll(), LoadStatus::Pending));

    completer.complete(Ok(42));
    assert!(matches!(ticket.poll(), LoadStatus::Ready(Ok(42))));
}

#[test]
fn dropped_completer_resolves_with_error() {
    let (completer, ticket) = LoadTicket::<u32>::channel("orphan");
    drop(completer);
    assert!(matches!(
        ticket.poll(),
        LoadStatus::Ready(Err(Error::Asset(AssetError::LoaderDropped(_))))
    ));
}
