use glam::{Affine3A, EulerRot, Mat3, Quat, Vec3};

/// Position, orientation and scale of an object.
///
/// Orientation is a quaternion; objects in this scene only ever yaw around
/// +Y, and [`Transform::rotate_y`] / [`Transform::yaw`] cover that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Canonical forward axis in local space.
    pub const FORWARD: Vec3 = Vec3::Z;

    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new() -> Self {
        Self::IDENTITY
    }

    #[must_use]
    pub fn from_translation(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn from_trs(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Local +Z rotated into world space.
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Self::FORWARD
    }

    /// Rotates about world +Y by `angle` radians.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = (Quat::from_rotation_y(angle) * self.rotation).normalize();
    }

    /// Rotation about +Y, in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(EulerRot::YXZ);
        yaw
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.rotation = Quat::from_rotation_y(yaw);
    }

    /// Orients -Z toward `target` (camera convention).
    ///
    /// Degenerate directions (target on the `up` axis or at `position`)
    /// leave the rotation unchanged.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };

        let Some(right) = forward.cross(up).try_normalize() else {
            return;
        };
        let new_up = right.cross(forward).normalize();

        let basis = Mat3::from_cols(right, new_up, -forward);
        self.rotation = Quat::from_mat3(&basis).normalize();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
