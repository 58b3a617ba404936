use crate::{ConvertCommand, ConvertUpdate};
use img2pdf_core::{
    ConversionSession, ConvertError, ConvertOptions, ProgressCallback, ShareTarget,
    generate_preview,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Forwards conversion progress to the UI
pub struct ChannelProgress {
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
}

impl ChannelProgress {
    pub fn new(update_tx: mpsc::UnboundedSender<ConvertUpdate>) -> Self {
        Self { update_tx }
    }
}

impl ProgressCallback for ChannelProgress {
    fn on_start(&self, total: usize) {
        let _ = self.update_tx.send(ConvertUpdate::Progress {
            operation: "Converting images".to_string(),
            current: 0,
            total,
        });
    }

    fn on_image_placed(&self, index: usize, total: usize, _fraction: f64) {
        let _ = self.update_tx.send(ConvertUpdate::Progress {
            operation: "Converting images".to_string(),
            current: index + 1,
            total,
        });
    }
}

fn report(update_tx: &mpsc::UnboundedSender<ConvertUpdate>, context: &str, err: ConvertError) {
    let update = if err.is_alert() {
        ConvertUpdate::Alert {
            message: err.to_string(),
        }
    } else {
        log::error!("{context}: {err}");
        ConvertUpdate::Error {
            message: format!("{context}: {err}"),
        }
    };
    let _ = update_tx.send(update);
}

/// Async worker task that owns the conversion session and processes commands
/// one at a time
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<ConvertCommand>,
    update_tx: mpsc::UnboundedSender<ConvertUpdate>,
    options: ConvertOptions,
    share_target: Arc<dyn ShareTarget>,
) {
    let mut session = ConversionSession::new(options);

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut session, share_target.as_ref(), &update_tx).await;
    }

    log::debug!("Worker stopped");
}

async fn process_command(
    cmd: ConvertCommand,
    session: &mut ConversionSession,
    share_target: &dyn ShareTarget,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    match cmd {
        ConvertCommand::SelectPaths { paths } => {
            let total = paths.len();
            match session.select_paths(&paths).await {
                Ok(accepted) => {
                    let accepted = accepted.len();
                    handle_selected(session, total - accepted, update_tx).await;
                }
                Err(e) => report(update_tx, "Failed to load images", e),
            }
        }
        ConvertCommand::SelectFiles { files } => {
            let total = files.len();
            let accepted = session.select(files).len();
            handle_selected(session, total - accepted, update_tx).await;
        }
        ConvertCommand::SetOptions { options } => {
            session.set_options(options);
        }
        ConvertCommand::LoadConfig { path } => handle_load_config(path, session, update_tx).await,
        ConvertCommand::Convert => {
            let progress = ChannelProgress::new(update_tx.clone());
            match session.convert(&progress).await {
                Ok(artifact) => {
                    let _ = update_tx.send(ConvertUpdate::Ready {
                        uri: artifact.uri().to_string(),
                        file_name: artifact.file_name().to_string(),
                        page_count: artifact.page_count(),
                        byte_len: artifact.byte_len(),
                    });
                }
                Err(e) => report(update_tx, "Failed to convert images", e),
            }
        }
        ConvertCommand::Save { path } => match session.save(&path).await {
            Ok(()) => {
                log::info!("Saved PDF to {}", path.display());
                let _ = update_tx.send(ConvertUpdate::Saved { path });
            }
            Err(e) => report(update_tx, "Failed to save PDF", e),
        },
        ConvertCommand::Share => match session.share(share_target) {
            Ok(()) => {
                let _ = update_tx.send(ConvertUpdate::Shared);
            }
            Err(e) => report(update_tx, "Failed to share PDF", e),
        },
        ConvertCommand::Dismiss => {
            session.dismiss();
            let _ = update_tx.send(ConvertUpdate::Dismissed);
        }
    }
}

/// Announce a new selection, then stream its previews in order
async fn handle_selected(
    session: &ConversionSession,
    rejected: usize,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    let images = session.images();
    let _ = update_tx.send(ConvertUpdate::Selected {
        accepted: images.len(),
        rejected,
    });

    for (index, file) in images.iter().enumerate() {
        match generate_preview(file).await {
            Ok(preview) => {
                let _ = update_tx.send(ConvertUpdate::PreviewReady { index, preview });
            }
            Err(e) => {
                report(update_tx, "Failed to preview image", e);
                return;
            }
        }
    }
}

async fn handle_load_config(
    path: PathBuf,
    session: &mut ConversionSession,
    update_tx: &mpsc::UnboundedSender<ConvertUpdate>,
) {
    match ConvertOptions::load(&path).await {
        Ok(options) => {
            session.set_options(options.clone());
            let _ = update_tx.send(ConvertUpdate::OptionsLoaded { options });
        }
        Err(e) => report(update_tx, "Failed to load config", e),
    }
}
