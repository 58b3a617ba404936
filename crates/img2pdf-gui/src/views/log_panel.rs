use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log_panel(ui: &mut egui::Ui, logger: &AppLogger) {
    ui.horizontal(|ui| {
        ui.strong("Log");
        if ui.small_button("Clear").clicked() {
            logger.clear();
        }
    });

    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .max_height(160.0)
        .show(ui, |ui| {
            for entry in logger.recent(100) {
                let color = match entry.level {
                    Level::Error => egui::Color32::LIGHT_RED,
                    Level::Warn => egui::Color32::YELLOW,
                    _ => ui.visuals().text_color(),
                };
                ui.colored_label(
                    color,
                    format!("{} {}", entry.timestamp.format("%H:%M:%S"), entry.message),
                );
            }
        });
}
