use eframe::egui;
use img2pdf_core::{ConvertOptions, ImageFile, UnsupportedShare, media_type_for_path};
use img2pdf_runtime::{ConvertCommand, ConvertUpdate};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{
    PreviewTile, ResultAction, ResultInfo, SelectionState, show_alert, show_config_buttons,
    show_log_panel, show_previews, show_result, show_settings, show_upload,
};

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct Img2PdfApp {
    options: ConvertOptions,
    selection: SelectionState,
    status: String,
    alert: Option<String>,
    result: Option<ResultInfo>,
    logger: AppLogger,
    show_log: bool,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<ConvertCommand>,
    update_rx: mpsc::UnboundedReceiver<ConvertUpdate>,

    // Progress tracking
    progress: Option<ProgressState>,

    _tokio_handle: tokio::runtime::Handle,
}

impl Img2PdfApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let options = ConvertOptions::default();

        // Desktop platforms have no share sheet
        tokio_handle.spawn(img2pdf_runtime::worker_task(
            command_rx,
            update_tx,
            options.clone(),
            Arc::new(UnsupportedShare),
        ));

        Self {
            options,
            selection: SelectionState::default(),
            status: String::new(),
            alert: None,
            result: None,
            logger,
            show_log: false,
            command_tx,
            update_rx,
            progress: None,
            _tokio_handle: tokio_handle,
        }
    }

    fn send(&mut self, command: ConvertCommand) {
        if self.command_tx.send(command).is_err() {
            self.status = "Worker stopped".to_string();
        }
    }

    /// Turn a drop event into a selection command
    fn handle_dropped_files(&mut self, dropped: Vec<egui::DroppedFile>) {
        if dropped.is_empty() {
            return;
        }

        // Dropped bytes carry their own media type; on native only paths arrive
        if dropped.iter().any(|file| file.bytes.is_some()) {
            let files = dropped
                .into_iter()
                .filter_map(|file| {
                    let bytes = file.bytes?;
                    let media_type = if file.mime.is_empty() {
                        media_type_for_path(&file.name)
                    } else {
                        file.mime
                    };
                    Some(ImageFile::new(file.name, media_type, bytes))
                })
                .collect();
            self.send(ConvertCommand::SelectFiles { files });
        } else {
            let paths = dropped.into_iter().filter_map(|file| file.path).collect();
            self.send(ConvertCommand::SelectPaths { paths });
        }
        self.status = "Loading images...".to_string();
    }

    fn handle_update(&mut self, ctx: &egui::Context, update: ConvertUpdate) {
        match update {
            ConvertUpdate::Progress {
                operation,
                current,
                total,
            } => {
                self.progress = Some(ProgressState {
                    operation,
                    current,
                    total,
                });
            }
            ConvertUpdate::Selected { accepted, rejected } => {
                self.selection.reset(accepted);
                self.progress = None;
                self.status = match (accepted, rejected) {
                    (0, _) => "No images selected".to_string(),
                    (n, 0) => format!("Selected {n} images"),
                    (n, r) => format!("Selected {n} images, skipped {r} other files"),
                };
            }
            ConvertUpdate::PreviewReady { index, preview } => {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [preview.width as usize, preview.height as usize],
                    &preview.rgba,
                );
                let texture = ctx.load_texture(
                    format!("preview-{index}"),
                    color_image,
                    egui::TextureOptions::LINEAR,
                );
                self.selection.set_preview(
                    index,
                    PreviewTile {
                        name: preview.name,
                        source_size: [preview.source_width, preview.source_height],
                        texture,
                    },
                );
            }
            ConvertUpdate::OptionsLoaded { options } => {
                self.options = options;
                self.status = "Loaded options".to_string();
            }
            ConvertUpdate::Ready {
                uri,
                file_name,
                page_count,
                byte_len,
            } => {
                self.progress = None;
                self.status = format!("Converted {page_count} images");
                self.result = Some(ResultInfo {
                    uri,
                    file_name,
                    page_count,
                    byte_len,
                });
            }
            ConvertUpdate::Saved { path } => {
                self.status = format!("Saved PDF → {}", path.display());
            }
            ConvertUpdate::Shared => {
                self.status = "Shared PDF".to_string();
            }
            ConvertUpdate::Dismissed => {
                self.result = None;
            }
            ConvertUpdate::Alert { message } => {
                self.progress = None;
                self.alert = Some(message);
            }
            ConvertUpdate::Error { message } => {
                self.progress = None;
                self.status = format!("Error: {message}");
                self.alert = Some(message);
            }
        }
    }
}

impl eframe::App for Img2PdfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle drag-and-drop
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.handle_dropped_files(dropped);

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.handle_update(ctx, update);
            ctx.request_repaint();
        }
        // Poll the worker even when the user is idle
        ctx.request_repaint_after(std::time::Duration::from_millis(100));

        egui::TopBottomPanel::top("settings").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if show_settings(ui, &mut self.options) {
                    let options = self.options.clone();
                    self.send(ConvertCommand::SetOptions { options });
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.show_log, "Log");
                    show_config_buttons(ui, &self.command_tx);
                });
            });
        });

        if self.show_log {
            egui::TopBottomPanel::bottom("log")
                .resizable(true)
                .show(ctx, |ui| show_log_panel(ui, &self.logger));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(paths) = show_upload(ui, hovering) {
                self.send(ConvertCommand::SelectPaths { paths });
                self.status = "Loading images...".to_string();
            }

            if !self.selection.is_empty() {
                ui.separator();
                let busy = self.progress.is_some();
                if ui
                    .add_enabled(!busy, egui::Button::new("Convert to PDF"))
                    .clicked()
                {
                    self.send(ConvertCommand::Convert);
                }
                egui::ScrollArea::vertical()
                    .max_height((ui.available_height() - 80.0).max(120.0))
                    .show(ui, |ui| show_previews(ui, &self.selection));
            }

            // Show progress bar
            if let Some(ref progress) = self.progress {
                ui.separator();
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .show_percentage(),
                );
                ctx.request_repaint(); // Keep updating during operations
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }
        });

        let action = self
            .result
            .as_ref()
            .and_then(|result| show_result(ctx, result).map(|a| (a, result.file_name.clone())));
        match action {
            Some((ResultAction::Save, file_name)) => {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(&file_name)
                    .add_filter("PDF", &["pdf"])
                    .save_file()
                {
                    self.send(ConvertCommand::Save { path });
                }
            }
            Some((ResultAction::Share, _)) => self.send(ConvertCommand::Share),
            Some((ResultAction::Close, _)) => self.send(ConvertCommand::Dismiss),
            None => {}
        }

        show_alert(ctx, &mut self.alert);
    }
}
