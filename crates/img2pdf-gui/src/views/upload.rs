use eframe::egui;
use std::path::PathBuf;

use crate::ui_components::drop_zone;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico", "tga", "qoi",
];

/// Upload area: a picker button that doubles as the drop target.
///
/// Returns the picked paths when the user confirms the dialog.
pub fn show_upload(ui: &mut egui::Ui, hovering: bool) -> Option<Vec<PathBuf>> {
    drop_zone(ui, hovering, |ui| {
        ui.heading("Image to PDF");
        ui.label("Drop images here, or");

        let picked = if ui.button("📁 Select images...").clicked() {
            rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_files()
        } else {
            None
        };

        if hovering {
            ui.label("Release to select these files");
        }

        picked
    })
}
