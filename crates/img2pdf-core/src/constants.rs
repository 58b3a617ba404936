//! Shared constants for image-to-PDF conversion
//!
//! Fixed names and user-facing messages live here so every surface
//! (CLI, GUI, worker) reports the same text.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Images are embedded at 72 DPI so one pixel maps to one point before scaling
pub const EMBED_DPI: f32 = 72.0;

// =============================================================================
// Output
// =============================================================================

/// Suggested file name for the converted document
pub const DEFAULT_OUTPUT_NAME: &str = "converted-images.pdf";

/// Default document title
pub const DEFAULT_TITLE: &str = "Converted Images";

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Prefix of every artifact handle URI
pub const HANDLE_SCHEME: &str = "blob:img2pdf/";

// =============================================================================
// Intake
// =============================================================================

/// Media type prefix an input must carry to be accepted
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Longest edge of a preview thumbnail (pixels)
pub const PREVIEW_MAX_EDGE: u32 = 256;

// =============================================================================
// Sharing
// =============================================================================

pub const SHARE_TITLE: &str = "PDF from Images";

pub const SHARE_TEXT: &str = "Check out this PDF I created from my images!";

// =============================================================================
// Alerts
// =============================================================================

pub const EMPTY_SELECTION_MESSAGE: &str = "Please upload one or more images first.";

pub const SHARING_UNSUPPORTED_MESSAGE: &str =
    "Sharing is not supported on this platform or device. Please download the file.";

pub const FILE_SHARING_UNSUPPORTED_MESSAGE: &str =
    "This platform does not support sharing files. Please download the file first.";
