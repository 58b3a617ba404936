//! Handing a finished document to a platform share facility.

use crate::artifact::Artifact;
use crate::constants::{PDF_MEDIA_TYPE, SHARE_TEXT, SHARE_TITLE};
use crate::types::*;
use std::sync::Arc;

/// What gets handed to a share target
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub file_name: String,
    pub media_type: String,
    pub title: String,
    pub text: String,
    pub bytes: Arc<[u8]>,
}

impl SharePayload {
    pub fn from_artifact(artifact: &Artifact) -> Self {
        Self {
            file_name: artifact.file_name().to_string(),
            media_type: PDF_MEDIA_TYPE.to_string(),
            title: SHARE_TITLE.to_string(),
            text: SHARE_TEXT.to_string(),
            bytes: artifact.shared_bytes(),
        }
    }
}

/// A platform share facility
pub trait ShareTarget: Send + Sync {
    /// Whether the platform offers sharing at all
    fn is_available(&self) -> bool;

    /// Whether this particular file can be shared
    fn can_share(&self, payload: &SharePayload) -> bool;

    fn share(&self, payload: SharePayload) -> Result<()>;
}

/// Share target for platforms without a native share sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedShare;

impl ShareTarget for UnsupportedShare {
    fn is_available(&self) -> bool {
        false
    }

    fn can_share(&self, _payload: &SharePayload) -> bool {
        false
    }

    fn share(&self, _payload: SharePayload) -> Result<()> {
        Err(ConvertError::SharingUnsupported)
    }
}

/// Share `artifact` through `target`, checking capabilities first
pub fn share_artifact(target: &dyn ShareTarget, artifact: &Artifact) -> Result<()> {
    if !target.is_available() {
        return Err(ConvertError::SharingUnsupported);
    }

    let payload = SharePayload::from_artifact(artifact);
    if !target.can_share(&payload) {
        return Err(ConvertError::FileSharingUnsupported);
    }

    match target.share(payload) {
        Ok(()) => {
            log::info!("Share was successful");
            Ok(())
        }
        Err(e) => {
            log::warn!("Sharing failed: {}", e);
            Err(e)
        }
    }
}
