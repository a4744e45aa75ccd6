pub mod gltf;

pub use self::gltf::{CharacterAsset, GltfLoader};
