use glam::{Mat4, Vec3};

use crate::scene::transform::Transform;
use crate::settings::CameraSettings;

/// Perspective camera. Looks down its local -Z axis.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,

    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    projection_matrix: Mat4,
}

impl Camera {
    /// `fov` is given in degrees.
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            transform: Transform::new(),
            fov: fov.to_radians(),
            aspect,
            near,
            far,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    #[must_use]
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        let mut cam = Self::new_perspective(settings.fov, aspect, settings.near, settings.far);
        cam.transform.position = settings.initial_position;
        cam.transform.look_at(Vec3::ZERO, Vec3::Y);
        cam
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// Adapts the aspect ratio to a new viewport size.
    /// Returns `false` and keeps the old projection for a zero-area size.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        self.update_projection_matrix();
        true
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Inverse of the camera's world transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.transform.rotation, self.transform.position).inverse()
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }
}
