//! Conversion session: owns the current selection and the current artifact.

use crate::artifact::{Artifact, ArtifactRegistry};
use crate::assemble::{PdfPageSink, ProgressCallback, assemble_into};
use crate::intake::{filter_images, generate_previews, intake_paths};
use crate::options::ConvertOptions;
use crate::share::{ShareTarget, share_artifact};
use crate::types::*;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Where a session is in its conversion cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// Checking that there is something to convert
    Validating,
    /// `completed` of `total` pages placed
    Processing { completed: usize, total: usize },
    /// Encoding the document
    Finalizing,
    /// An artifact is available
    Ready,
}

/// Forwards progress to the caller while tracking it in the session state
struct StateTracker<'a> {
    state: &'a Mutex<SessionState>,
    inner: &'a dyn ProgressCallback,
}

impl StateTracker<'_> {
    fn set(&self, state: SessionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

impl ProgressCallback for StateTracker<'_> {
    fn on_start(&self, total: usize) {
        self.set(SessionState::Processing {
            completed: 0,
            total,
        });
        self.inner.on_start(total);
    }

    fn on_image_placed(&self, index: usize, total: usize, fraction: f64) {
        self.set(SessionState::Processing {
            completed: index + 1,
            total,
        });
        self.inner.on_image_placed(index, total, fraction);
    }

    fn on_finalizing(&self) {
        self.set(SessionState::Finalizing);
        self.inner.on_finalizing();
    }
}

/// The state behind one user: the selected images and the latest artifact.
///
/// A new selection replaces the previous one. Starting a conversion or
/// dismissing the result releases the previous artifact's handle.
#[derive(Debug)]
pub struct ConversionSession {
    options: ConvertOptions,
    registry: ArtifactRegistry,
    images: ImageSet,
    artifact: Option<Artifact>,
    state: Mutex<SessionState>,
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

impl ConversionSession {
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_registry(options, ArtifactRegistry::new())
    }

    pub fn with_registry(options: ConvertOptions, registry: ArtifactRegistry) -> Self {
        Self {
            options,
            registry,
            images: Vec::new(),
            artifact: None,
            state: Mutex::new(SessionState::Idle),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ConvertOptions) {
        self.options = options;
    }

    pub fn registry(&self) -> &ArtifactRegistry {
        &self.registry
    }

    pub fn images(&self) -> &[ImageFile] {
        &self.images
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    pub fn state(&self) -> SessionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&mut self, state: SessionState) {
        *self.state.get_mut().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Replace the selection with the images among `files`
    pub fn select(&mut self, files: impl IntoIterator<Item = ImageFile>) -> &[ImageFile] {
        self.images = filter_images(files);
        log::info!("Selected {} images", self.images.len());
        &self.images
    }

    /// Replace the selection with the images among `paths`
    pub async fn select_paths(&mut self, paths: &[impl AsRef<Path>]) -> Result<&[ImageFile]> {
        let images = intake_paths(paths).await?;
        Ok(self.select(images))
    }

    /// Previews of the current selection, in selection order
    pub async fn previews(&self) -> Result<Vec<Preview>> {
        generate_previews(&self.images).await
    }

    /// Convert the current selection into a new artifact.
    ///
    /// Fails with [`ConvertError::EmptySelection`] when nothing is selected;
    /// a rejected request leaves any previous artifact in place. Once
    /// processing starts the previous artifact is released, and any failure
    /// returns the session to idle without an artifact.
    pub async fn convert(&mut self, progress: &dyn ProgressCallback) -> Result<&Artifact> {
        let previous = self.state();
        self.set_state(SessionState::Validating);
        let validated = if self.images.is_empty() {
            Err(ConvertError::EmptySelection)
        } else {
            self.options.validate()
        };
        if let Err(e) = validated {
            self.set_state(previous);
            return Err(e);
        }

        if self.artifact.take().is_some() {
            log::debug!("Released previous artifact");
        }

        let sink = PdfPageSink::new(&self.options);
        let tracker = StateTracker {
            state: &self.state,
            inner: progress,
        };
        let bytes = match assemble_into(sink, &self.images, &tracker).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.set_state(SessionState::Idle);
                return Err(e);
            }
        };

        let artifact = Artifact::register(
            &self.registry,
            bytes,
            self.images.len(),
            self.options.output_name.clone(),
        );
        log::info!("Artifact ready at {}", artifact.uri());
        self.set_state(SessionState::Ready);

        Ok(self.artifact.insert(artifact))
    }

    /// Drop the current artifact and return to idle
    pub fn dismiss(&mut self) {
        if let Some(artifact) = self.artifact.take() {
            log::debug!("Dismissed {}", artifact.uri());
        }
        self.set_state(SessionState::Idle);
    }

    /// Write the current artifact to `path`
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let artifact = self.artifact.as_ref().ok_or(ConvertError::NoArtifact)?;
        artifact.save_to(path).await
    }

    /// Share the current artifact through `target`
    pub fn share(&self, target: &dyn ShareTarget) -> Result<()> {
        let artifact = self
            .artifact
            .as_ref()
            .ok_or(ConvertError::SharingUnsupported)?;
        share_artifact(target, artifact)
    }
}
