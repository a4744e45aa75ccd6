//! Scene Settings
//!
//! Every tunable of the scene lives here, grouped by the component that
//! consumes it. All groups implement [`Default`] with the values the scene
//! ships with, and every field is `#[serde(default)]`, so a JSON settings
//! file only needs to name what it changes:
//!
//! ```json
//! {
//!   "locomotion": { "move_speed": 0.2 },
//!   "keys": { "forward": "z", "turn_left": "q" }
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Top-level settings for the scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub assets: AssetSettings,
    pub locomotion: LocomotionSettings,
    pub blend: BlendSettings,
    pub camera: CameraSettings,
    pub keys: KeyBindings,
    pub environment: EnvironmentSettings,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Strider".into(),
            width: 1280,
            height: 720,
        }
    }
}

/// Where the two character assets come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory the asset names are resolved against.
    pub root: String,
    /// Asset providing the skinned model and its idle clip.
    pub idle: String,
    /// Asset providing the run clip.
    pub run: String,
    /// Uniform scale applied to the character model.
    pub model_scale: f32,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: "assets".into(),
            idle: "Idle.glb".into(),
            run: "Running.glb".into(),
            model_scale: 1.0,
        }
    }
}

/// Per-frame movement constants. Not scaled by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionSettings {
    /// Distance moved per frame while forward/backward is held.
    pub move_speed: f32,
    /// Yaw change per frame, in radians, while a turn key is held.
    pub rotation_speed: f32,
    /// Half-extent of the square the character may walk in (X and Z).
    pub world_boundary: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            rotation_speed: 0.05,
            world_boundary: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendSettings {
    /// Cross-fade length in seconds between idle and run.
    pub fade_duration: f32,
    /// Run playback rate while only backward is held.
    pub backward_rate: f32,
    /// Run playback rate in every other moving state.
    pub forward_rate: f32,
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            fade_duration: 0.5,
            backward_rate: 0.5,
            forward_rate: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Camera position before the character appears.
    pub initial_position: Vec3,
    /// Offset from the character in its local frame (behind and above).
    pub follow_offset: Vec3,
    /// Fraction of the remaining distance covered each frame.
    pub smoothing: f32,
    /// Height above the character's origin the camera looks at.
    pub look_height: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            initial_position: Vec3::new(0.0, 2.0, 5.0),
            follow_offset: Vec3::new(0.0, 2.0, -4.0),
            smoothing: 0.1,
            look_height: 1.0,
        }
    }
}

/// Single-character key identifiers, matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub turn_left: String,
    pub turn_right: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".into(),
            backward: "s".into(),
            turn_left: "a".into(),
            turn_right: "d".into(),
        }
    }
}

/// Static scene dressing handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Linear RGB background colour.
    pub background: Vec3,
    pub ambient_color: Vec3,
    pub ambient_intensity: f32,
    pub sun_color: Vec3,
    pub sun_intensity: f32,
    pub sun_position: Vec3,
    /// Side length of the square ground plane.
    pub ground_size: f32,
    pub ground_color: Vec3,
    /// Grid lines per side drawn over the ground.
    pub grid_divisions: u32,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            background: rgb(0x87_ce_eb),
            ambient_color: Vec3::ONE,
            ambient_intensity: 0.8,
            sun_color: Vec3::ONE,
            sun_intensity: 1.5,
            sun_position: Vec3::new(5.0, 10.0, 5.0),
            ground_size: 200.0,
            ground_color: rgb(0x22_8b_22),
            grid_divisions: 50,
        }
    }
}

/// Converts a `0xRRGGBB` literal into a colour with components in `[0, 1]`.
#[must_use]
pub fn rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| f32::from(((hex >> shift) & 0xff) as u8) / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}
