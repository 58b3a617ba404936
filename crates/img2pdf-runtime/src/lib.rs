use std::path::PathBuf;

// Re-export types from library crates
pub use img2pdf_core::{ConvertOptions, ImageFile, Preview};

mod worker;

pub use worker::{ChannelProgress, worker_task};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum ConvertCommand {
    /// Replace the selection with files picked from disk
    SelectPaths { paths: Vec<PathBuf> },
    /// Replace the selection with already-loaded files (drag-and-drop)
    SelectFiles { files: Vec<ImageFile> },
    SetOptions { options: ConvertOptions },
    LoadConfig { path: PathBuf },
    Convert,
    /// Write the current artifact to disk
    Save { path: PathBuf },
    Share,
    /// Close the result and release its handle
    Dismiss,
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum ConvertUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    /// A new selection replaced the previous one
    Selected { accepted: usize, rejected: usize },
    PreviewReady { index: usize, preview: Preview },
    OptionsLoaded { options: ConvertOptions },
    Ready {
        uri: String,
        file_name: String,
        page_count: usize,
        byte_len: usize,
    },
    Saved { path: PathBuf },
    Shared,
    Dismissed,
    /// A message the user must acknowledge
    Alert { message: String },
    Error { message: String },
}
