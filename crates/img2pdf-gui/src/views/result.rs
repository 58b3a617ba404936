use eframe::egui;

/// The finished document as reported by the worker
pub struct ResultInfo {
    pub uri: String,
    pub file_name: String,
    pub page_count: usize,
    pub byte_len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultAction {
    Save,
    Share,
    Close,
}

/// Modal shown once a PDF is ready. Clicking outside closes it.
pub fn show_result(ctx: &egui::Context, result: &ResultInfo) -> Option<ResultAction> {
    let mut action = None;

    let response = egui::Modal::new(egui::Id::new("result_modal")).show(ctx, |ui| {
        ui.heading("Your PDF is ready");
        ui.label(format!(
            "{} pages, {:.1} KiB",
            result.page_count,
            result.byte_len as f64 / 1024.0
        ));
        ui.small(&result.uri);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(format!("💾 Save {}", result.file_name)).clicked() {
                action = Some(ResultAction::Save);
            }
            if ui.button("📤 Share").clicked() {
                action = Some(ResultAction::Share);
            }
            if ui.button("Close").clicked() {
                action = Some(ResultAction::Close);
            }
        });
    });

    if action.is_none() && response.should_close() {
        action = Some(ResultAction::Close);
    }
    action
}
