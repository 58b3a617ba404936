use eframe::egui;
use img2pdf_core::ConvertOptions;
use img2pdf_runtime::ConvertCommand;
use tokio::sync::mpsc;

use crate::ui_components::{ORIENTATION_OPTIONS, PAPER_OPTIONS, enum_selector};

/// Page settings row. Returns true when anything changed.
pub fn show_settings(ui: &mut egui::Ui, options: &mut ConvertOptions) -> bool {
    let mut changed = enum_selector(ui, "paper", "Paper:", &mut options.paper_size, PAPER_OPTIONS);
    changed |= enum_selector(
        ui,
        "orientation",
        "Orientation:",
        &mut options.orientation,
        ORIENTATION_OPTIONS,
    );

    let (width, height) = options.page_dimensions_mm();
    ui.weak(format!("{width:.0} × {height:.0} mm"));

    changed
}

/// Options file buttons
pub fn show_config_buttons(
    ui: &mut egui::Ui,
    command_tx: &mpsc::UnboundedSender<ConvertCommand>,
) {
    if ui.button("📂 Load Configuration").clicked() {
        load_configuration(command_tx);
    }
}

fn load_configuration(command_tx: &mpsc::UnboundedSender<ConvertCommand>) {
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
    {
        let _ = command_tx.send(ConvertCommand::LoadConfig { path });
    }
}
