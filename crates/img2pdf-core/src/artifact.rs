//! Finished documents and the addressable handles that expose them.

use crate::constants::{DEFAULT_OUTPUT_NAME, HANDLE_SCHEME};
use crate::types::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct RegistryInner {
    next_id: AtomicU64,
    live: Mutex<HashMap<String, Arc<[u8]>>>,
}

/// Store of live artifact handles.
///
/// Clones share the same store. A handle stays resolvable until the
/// [`ArtifactHandle`] that created it is dropped.
#[derive(Clone, Default)]
pub struct ArtifactRegistry {
    inner: Arc<RegistryInner>,
}

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn live(&self) -> MutexGuard<'_, HashMap<String, Arc<[u8]>>> {
        self.inner.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register bytes under a fresh URI
    pub fn create(&self, bytes: Arc<[u8]>) -> ArtifactHandle {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let uri = format!("{HANDLE_SCHEME}{id}");
        self.live().insert(uri.clone(), bytes);
        log::debug!("Created handle {}", uri);

        ArtifactHandle {
            uri,
            registry: self.clone(),
        }
    }

    /// Bytes behind a live URI
    pub fn resolve(&self, uri: &str) -> Option<Arc<[u8]>> {
        self.live().get(uri).cloned()
    }

    /// Number of handles not yet released
    pub fn live_handles(&self) -> usize {
        self.live().len()
    }

    fn revoke(&self, uri: &str) {
        if self.live().remove(uri).is_some() {
            log::debug!("Revoked handle {}", uri);
        }
    }
}

impl std::fmt::Debug for ArtifactRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactRegistry")
            .field("live_handles", &self.live_handles())
            .finish()
    }
}

/// A registered URI, revoked when dropped
#[derive(Debug)]
pub struct ArtifactHandle {
    uri: String,
    registry: ArtifactRegistry,
}

impl ArtifactHandle {
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Drop for ArtifactHandle {
    fn drop(&mut self) {
        self.registry.revoke(&self.uri);
    }
}

/// A finalized PDF together with its handle
#[derive(Debug)]
pub struct Artifact {
    bytes: Arc<[u8]>,
    page_count: usize,
    file_name: String,
    handle: ArtifactHandle,
}

impl Artifact {
    /// Register `bytes` with `registry` and wrap them
    pub fn register(
        registry: &ArtifactRegistry,
        bytes: Vec<u8>,
        page_count: usize,
        file_name: impl Into<String>,
    ) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        let mut file_name = file_name.into();
        if file_name.trim().is_empty() {
            file_name = DEFAULT_OUTPUT_NAME.to_string();
        }

        Self {
            handle: registry.create(bytes.clone()),
            bytes,
            page_count,
            file_name,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn shared_bytes(&self) -> Arc<[u8]> {
        self.bytes.clone()
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Suggested file name for saving
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn uri(&self) -> &str {
        self.handle.uri()
    }

    /// Size of the encoded document in bytes
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Write the document to `path`
    pub async fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        tokio::fs::write(path, &self.bytes).await?;
        Ok(())
    }

    /// Write the document into `dir` under its suggested name
    pub async fn save_in_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        self.save_to(&path).await?;
        Ok(path)
    }
}
