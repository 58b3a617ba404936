use eframe::egui;
use img2pdf_core::{Orientation, PaperSize};

/// Generic enum selector using ComboBox
pub fn enum_selector<T>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[(T, &str)],
) -> bool
where
    T: PartialEq + Clone,
{
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);

        let current_text = options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, text)| *text)
            .unwrap_or("Custom");

        egui::ComboBox::from_id_salt(id)
            .selected_text(current_text)
            .show_ui(ui, |ui| {
                for (option_value, option_text) in options {
                    if ui
                        .selectable_value(value, option_value.clone(), *option_text)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });
    changed
}

pub const PAPER_OPTIONS: &[(PaperSize, &str)] = &[
    (PaperSize::A3, "A3"),
    (PaperSize::A4, "A4"),
    (PaperSize::A5, "A5"),
    (PaperSize::Letter, "Letter"),
    (PaperSize::Legal, "Legal"),
    (PaperSize::Tabloid, "Tabloid"),
];

pub const ORIENTATION_OPTIONS: &[(Orientation, &str)] = &[
    (Orientation::Portrait, "Portrait"),
    (Orientation::Landscape, "Landscape"),
];

/// Dimmed panel that lights up while files hover over the window
pub fn drop_zone<R>(
    ui: &mut egui::Ui,
    highlighted: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let visuals = ui.visuals();
    let (fill, stroke) = if highlighted {
        (
            visuals.selection.bg_fill.gamma_multiply(0.3),
            visuals.selection.stroke,
        )
    } else {
        (
            visuals.faint_bg_color,
            visuals.widgets.noninteractive.bg_stroke,
        )
    };

    egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(stroke)
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.vertical_centered(add_contents).inner
        })
        .inner
}
