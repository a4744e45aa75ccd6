//! Utility Module
//!
//! - [`FollowCamera`]: trailing third-person camera
//! - [`FpsCounter`]: frame rate measurement
//! - [`Timer`]: per-frame delta time

pub mod follow_camera;
pub mod fps_counter;
pub mod time;

pub use follow_camera::FollowCamera;
pub use fps_counter::FpsCounter;
pub use time::Timer;
