//! Scene primitives
//!
//! - [`Transform`]: position, rotation and scale
//! - [`Camera`]: perspective camera
//! - [`Skeleton`] / [`Pose`]: joint hierarchy and its animated state

pub mod camera;
pub mod skeleton;
pub mod transform;

pub use camera::Camera;
pub use skeleton::{Joint, Pose, Skeleton};
pub use transform::Transform;
