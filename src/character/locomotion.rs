use crate::app::input::MovementKeys;
use crate::scene::transform::Transform;
use crate::settings::LocomotionSettings;

/// Turns held keys into per-frame translation and yaw.
///
/// Steps are fixed per frame and deliberately ignore elapsed time, so
/// movement speed follows the display refresh rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocomotionIntegrator {
    pub settings: LocomotionSettings,
}

impl LocomotionIntegrator {
    #[must_use]
    pub fn new(settings: LocomotionSettings) -> Self {
        Self { settings }
    }

    /// Applies one frame of movement to `transform`.
    ///
    /// Translation uses the orientation from before this frame's turn.
    /// Forward and backward held together cancel out.
    pub fn integrate(&self, transform: &mut Transform, keys: MovementKeys) {
        let forward = transform.forward();
        let step = forward * self.settings.move_speed;

        if keys.forward {
            transform.position += step;
        }
        if keys.backward {
            transform.position -= step;
        }
        if keys.turn_left {
            transform.rotate_y(self.settings.rotation_speed);
        }
        if keys.turn_right {
            transform.rotate_y(-self.settings.rotation_speed);
        }

        self.clamp_to_world(transform);
    }

    /// Clamps X and Z independently into `[-boundary, boundary]`.
    pub fn clamp_to_world(&self, transform: &mut Transform) {
        let bound = self.settings.world_boundary.abs();
        transform.position.x = transform.position.x.clamp(-bound, bound);
        transform.position.z = transform.position.z.clamp(-bound, bound);
    }
}
