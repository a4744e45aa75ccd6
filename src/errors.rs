//! Error Types
//!
//! [`Error`] covers every failure the crate reports: settings parsing,
//! asset reading and glTF decoding, and event-loop startup.
//! Asset-specific conditions live in [`AssetError`] so load failures can be
//! matched without string inspection.
//!
//! None of these are fatal to the frame loop. Load failures are logged and
//! the scene keeps running with whatever it has.

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // I/O & Parsing
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (settings files, embedded glTF JSON).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// glTF parsing or accessor error.
    #[error("glTF error: {0}")]
    Gltf(String),

    /// Base64 decoding error (glTF `data:` URIs).
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    // ========================================================================
    // Assets
    // ========================================================================
    #[error(transparent)]
    Asset(#[from] AssetError),

    // ========================================================================
    // Windowing
    // ========================================================================
    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// Asset loading failures.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The asset was read but its content is unusable.
    #[error("Invalid asset data: {0}")]
    InvalidData(String),

    /// The asset decoded fine but carries no animation clip.
    #[error("Asset '{0}' contains no animations")]
    NoAnimations(String),

    /// The loading task went away without reporting a result.
    #[error("Loader for '{0}' dropped before completing")]
    LoaderDropped(String),
}

impl From<gltf::Error> for Error {
    fn from(err: gltf::Error) -> Self {
        Error::Gltf(err.to_string())
    }
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
