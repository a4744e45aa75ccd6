//! Renderer seam
//!
//! Drawing is delegated to a [`SceneRenderer`]. Each frame it receives a
//! [`FrameView`]: a read-only snapshot of what to draw, built by
//! [`GameState::frame_view`](crate::game::GameState::frame_view).
//!
//! [`HeadlessRenderer`] draws nothing; it reports frame rate and character
//! status through the log once per second.

use glam::{Affine3A, Mat4, Vec3};

use crate::scene::skeleton::Skeleton;
use crate::settings::EnvironmentSettings;
use crate::utils::FpsCounter;

/// Everything a renderer needs for one frame.
#[derive(Debug)]
pub struct FrameView<'a> {
    pub frame: u64,
    pub environment: &'a EnvironmentSettings,
    pub camera_position: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    /// `None` until the character has loaded.
    pub character: Option<CharacterView<'a>>,
}

#[derive(Debug)]
pub struct CharacterView<'a> {
    pub model_matrix: Affine3A,
    pub skeleton: &'a Skeleton,
    /// Model-space joint matrices of the blended pose.
    pub joint_matrices: Vec<Affine3A>,
    pub active_clip: &'a str,
    pub running: bool,
}

pub trait SceneRenderer {
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, frame: &FrameView<'_>);
}

#[derive(Default)]
pub struct HeadlessRenderer {
    fps: FpsCounter,
    viewport: (u32, u32),
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        log::debug!("viewport resized to {width}x{height}");
    }

    fn render(&mut self, frame: &FrameView<'_>) {
        let Some(fps) = self.fps.update() else {
            return;
        };

        match &frame.character {
            Some(character) => {
                let p = character.model_matrix.translation;
                log::info!(
                    "{fps:.1} fps | clip '{}' | position ({:.2}, {:.2}, {:.2})",
                    character.active_clip,
                    p.x,
                    p.y,
                    p.z
                );
            }
            None => log::info!("{fps:.1} fps | waiting for character"),
        }
    }
}
