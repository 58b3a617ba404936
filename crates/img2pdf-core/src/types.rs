use std::sync::Arc;
use thiserror::Error;

use crate::constants::{
    EMPTY_SELECTION_MESSAGE, FILE_SHARING_UNSUPPORTED_MESSAGE, SHARING_UNSUPPORTED_MESSAGE,
};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{}", EMPTY_SELECTION_MESSAGE)]
    EmptySelection,
    #[error("{}", SHARING_UNSUPPORTED_MESSAGE)]
    SharingUnsupported,
    #[error("{}", FILE_SHARING_UNSUPPORTED_MESSAGE)]
    FileSharingUnsupported,
    #[error("Sharing failed: {0}")]
    ShareFailed(String),
    #[error("No converted PDF is available")]
    NoArtifact,
    #[error("Image {name} has no pixels")]
    EmptyImage { name: String },
    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ConvertError {
    /// Errors that end up in front of the user as a plain alert rather than
    /// a failure report.
    pub fn is_alert(&self) -> bool {
        matches!(
            self,
            ConvertError::EmptySelection
                | ConvertError::SharingUnsupported
                | ConvertError::FileSharingUnsupported
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// A user-supplied file together with its declared media type.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub media_type: String,
    pub data: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}

/// Accepted images in selection order.
pub type ImageSet = Vec<ImageFile>;

/// Thumbnail of an accepted image, ready to be uploaded as a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub name: String,
    /// Intrinsic size of the source image in pixels
    pub source_width: u32,
    pub source_height: u32,
    /// Size of the thumbnail in `rgba`
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decoded image pixels, 8-bit RGB with any alpha flattened onto white.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl DecodedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
