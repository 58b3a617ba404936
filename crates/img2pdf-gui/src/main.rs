#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod logger;
mod ui_components;
mod views;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(200);
    logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("Image to PDF")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Image to PDF",
        options,
        Box::new(move |cc| Ok(Box::new(app::Img2PdfApp::new(cc, handle, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(())
}
