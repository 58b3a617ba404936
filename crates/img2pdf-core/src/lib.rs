pub mod artifact;
pub mod assemble;
pub mod constants;
pub mod intake;
mod layout;
mod options;
pub mod session;
pub mod share;
mod types;

pub use artifact::{Artifact, ArtifactHandle, ArtifactRegistry};
pub use assemble::{
    NoProgress, PageSink, PdfPageSink, ProgressCallback, assemble_into, convert_images,
    convert_to_file, decode_image,
};
pub use intake::{
    filter_images, generate_preview, generate_previews, intake_paths, is_image_media_type,
    media_type_for_path, read_image_file, read_image_files,
};
pub use layout::PageLayout;
pub use options::*;
pub use session::{ConversionSession, SessionState};
pub use share::{SharePayload, ShareTarget, UnsupportedShare, share_artifact};
pub use types::*;
