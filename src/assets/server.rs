use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::assets::io::AssetReaderVariant;
use crate::assets::loaders::{CharacterAsset, GltfLoader};
use crate::errors::{AssetError, Result};

/// Outcome of polling a [`LoadTicket`].
#[derive(Debug)]
pub enum LoadStatus<T> {
    Pending,
    Ready(Result<T>),
}

/// Receiving half of a one-shot load.
///
/// The frame loop calls [`poll`](Self::poll) once per frame and never
/// blocks. Once `Ready` has been returned the ticket is spent and should be
/// dropped.
#[derive(Debug)]
pub struct LoadTicket<T> {
    label: String,
    rx: flume::Receiver<Result<T>>,
}

/// Sending half of a one-shot load.
#[derive(Debug)]
pub struct LoadCompleter<T> {
    label: String,
    tx: flume::Sender<Result<T>>,
}

impl<T> LoadTicket<T> {
    /// A linked completer/ticket pair.
    pub fn channel(label: impl Into<String>) -> (LoadCompleter<T>, LoadTicket<T>) {
        let label = label.into();
        let (tx, rx) = flume::bounded(1);
        (
            LoadCompleter {
                label: label.clone(),
                tx,
            },
            LoadTicket { label, rx },
        )
    }

    /// A ticket that is already resolved.
    pub fn ready(label: impl Into<String>, result: Result<T>) -> Self {
        let (completer, ticket) = Self::channel(label);
        completer.complete(result);
        ticket
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Non-blocking check. A completer dropped without a result reports
    /// [`AssetError::LoaderDropped`].
    pub fn poll(&self) -> LoadStatus<T> {
        match self.rx.try_recv() {
            Ok(result) => LoadStatus::Ready(result),
            Err(flume::TryRecvError::Empty) => LoadStatus::Pending,
            Err(flume::TryRecvError::Disconnected) => {
                LoadStatus::Ready(Err(AssetError::LoaderDropped(self.label.clone()).into()))
            }
        }
    }

    /// Blocks until the load finishes. Not for use on the frame loop.
    pub fn wait(self) -> Result<T> {
        self.rx
            .recv()
            .map_err(|_| AssetError::LoaderDropped(self.label.clone()))?
    }
}

impl<T> LoadCompleter<T> {
    pub fn complete(self, result: Result<T>) {
        if self.tx.send(result).is_err() {
            log::debug!("result for '{}' discarded: nobody is waiting", self.label);
        }
    }
}

/// Loads character assets on a background runtime.
#[derive(Clone)]
pub struct AssetLoader {
    reader: AssetReaderVariant,
    runtime: Arc<Runtime>,
}

impl AssetLoader {
    pub fn new(reader: AssetReaderVariant) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("strider-assets")
            .build()?;
        Ok(Self {
            reader,
            runtime: Arc::new(runtime),
        })
    }

    #[must_use]
    pub fn reader(&self) -> &AssetReaderVariant {
        &self.reader
    }

    /// Starts loading `uri`; the returned ticket resolves when it finishes.
    #[must_use]
    pub fn load(&self, uri: &str) -> LoadTicket<CharacterAsset> {
        let (completer, ticket) = LoadTicket::channel(uri);
        let reader = self.reader.clone();
        let uri = uri.to_string();

        log::info!("Loading '{uri}'");
        self.runtime.spawn(async move {
            let result = GltfLoader::load(&reader, &uri).await;
            if let Ok(asset) = &result {
                log::info!(
                    "Loaded '{uri}': {} joints, {} clips",
                    asset.skeleton.len(),
                    asset.clips.len()
                );
            }
            completer.complete(result);
        });

        ticket
    }
}
