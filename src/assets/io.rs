use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::{AssetError, Error, Result};

/// Asynchronous byte source for assets.
pub trait AssetReader: Send + Sync {
    fn read_bytes(&self, uri: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Reads assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileAssetReader {
    root_path: PathBuf,
}

impl FileAssetReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let root_path = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root_path }
    }

    #[inline]
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }
}

impl AssetReader for FileAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        let path = self.root_path.join(uri);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path.display().to_string()).into())
            }
            Err(err) => Err(Error::Io(err)),
        }
    }
}

/// Serves assets from memory. Handy for embedded assets and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetReader {
    entries: HashMap<String, Arc<[u8]>>,
}

impl MemoryAssetReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uri: impl Into<String>, bytes: impl Into<Arc<[u8]>>) {
        self.entries.insert(uri.into(), bytes.into());
    }

    #[must_use]
    pub fn with(mut self, uri: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        self.insert(uri, bytes);
        self
    }
}

impl AssetReader for MemoryAssetReader {
    async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        self.entries
            .get(uri)
            .map(|bytes| bytes.to_vec())
            .ok_or_else(|| AssetError::NotFound(uri.to_string()).into())
    }
}

/// Closed set of readers, dispatched without trait objects.
#[derive(Debug, Clone)]
pub enum AssetReaderVariant {
    File(Arc<FileAssetReader>),
    Memory(Arc<MemoryAssetReader>),
}

impl AssetReaderVariant {
    pub fn file(root: impl AsRef<Path>) -> Self {
        Self::File(Arc::new(FileAssetReader::new(root)))
    }

    #[must_use]
    pub fn memory(reader: MemoryAssetReader) -> Self {
        Self::Memory(Arc::new(reader))
    }

    pub async fn read_bytes(&self, uri: &str) -> Result<Vec<u8>> {
        match self {
            Self::File(r) => r.read_bytes(uri).await,
            Self::Memory(r) => r.read_bytes(uri).await,
        }
    }
}
