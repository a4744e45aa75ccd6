#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod assets;
pub mod character;
pub mod errors;
pub mod game;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod utils;

pub use animation::{ActionHandle, AnimationAction, AnimationClip, AnimationMixer, LoopMode};
pub use app::App;
pub use app::input::{Input, MovementKey, MovementKeys};
pub use assets::{AssetLoader, CharacterAsset, LoadTicket};
pub use character::{AnimationBlendController, Character, LocomotionIntegrator};
pub use errors::{AssetError, Error, Result};
pub use game::{GameState, ScenePhase};
pub use renderer::{FrameView, HeadlessRenderer, SceneRenderer};
pub use scene::{Camera, Skeleton, Transform};
pub use settings::Settings;
pub use utils::FollowCamera;
