use eframe::egui;

/// Blocking message box; cleared when acknowledged
pub fn show_alert(ctx: &egui::Context, alert: &mut Option<String>) {
    let Some(message) = alert.as_deref() else {
        return;
    };

    let mut acknowledged = false;
    let response = egui::Modal::new(egui::Id::new("alert_modal")).show(ctx, |ui| {
        ui.set_max_width(360.0);
        ui.label(message);
        ui.separator();
        if ui.button("OK").clicked() {
            acknowledged = true;
        }
    });

    if acknowledged || response.should_close() {
        *alert = None;
    }
}
