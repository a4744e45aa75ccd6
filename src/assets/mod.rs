//! Asset Loading
//!
//! Character assets are glTF files read through an [`AssetReaderVariant`]
//! and decoded on a background runtime by [`AssetLoader`]. Each load hands
//! back a [`LoadTicket`] that the frame loop polls without blocking.

pub mod io;
pub mod loaders;
pub mod server;

pub use io::{AssetReader, AssetReaderVariant, FileAssetReader, MemoryAssetReader};
pub use loaders::{CharacterAsset, GltfLoader};
pub use server::{AssetLoader, LoadCompleter, LoadStatus, LoadTicket};
