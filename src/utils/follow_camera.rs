use glam::Vec3;

use crate::scene::transform::Transform;
use crate::settings::CameraSettings;

/// Trailing third-person camera.
///
/// Each frame the camera covers a fixed fraction of the distance to a point
/// behind and above the target, then looks at the target's chest height.
/// The fraction is per frame, not per second.
#[derive(Debug, Clone, Copy)]
pub struct FollowCamera {
    /// Offset in the target's local frame.
    pub offset: Vec3,
    pub smoothing: f32,
    pub look_height: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

impl FollowCamera {
    #[must_use]
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self {
            offset: settings.follow_offset,
            smoothing: settings.smoothing,
            look_height: settings.look_height,
        }
    }

    /// Where the camera wants to be for `target`.
    #[must_use]
    pub fn desired_position(&self, target: &Transform) -> Vec3 {
        target.position + target.rotation * self.offset
    }

    /// The point the camera aims at.
    #[must_use]
    pub fn look_target(&self, target: &Transform) -> Vec3 {
        target.position + Vec3::Y * self.look_height
    }

    pub fn update(&self, camera: &mut Transform, target: &Transform) {
        let desired = self.desired_position(target);
        camera.position = camera.position.lerp(desired, self.smoothing);
        camera.look_at(self.look_target(target), Vec3::Y);
    }
}
