use eframe::egui;

const TILE_SIZE: f32 = 160.0;

pub struct PreviewTile {
    pub name: String,
    pub source_size: [u32; 2],
    pub texture: egui::TextureHandle,
}

/// Previews of the current selection, slotted by selection index
#[derive(Default)]
pub struct SelectionState {
    tiles: Vec<Option<PreviewTile>>,
}

impl SelectionState {
    /// Start over with `count` empty slots
    pub fn reset(&mut self, count: usize) {
        self.tiles.clear();
        self.tiles.resize_with(count, || None);
    }

    pub fn set_preview(&mut self, index: usize, tile: PreviewTile) {
        if let Some(slot) = self.tiles.get_mut(index) {
            *slot = Some(tile);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

fn fit_tile(texture: &egui::TextureHandle) -> egui::Vec2 {
    let size = texture.size_vec2();
    let scale = (TILE_SIZE / size.x).min(TILE_SIZE / size.y);
    size * scale
}

pub fn show_previews(ui: &mut egui::Ui, selection: &SelectionState) {
    ui.horizontal_wrapped(|ui| {
        for (index, tile) in selection.tiles.iter().enumerate() {
            ui.vertical(|ui| {
                ui.set_width(TILE_SIZE);
                match tile {
                    Some(tile) => {
                        ui.image((tile.texture.id(), fit_tile(&tile.texture)))
                            .on_hover_text(format!(
                                "{} ({} × {} px)",
                                tile.name, tile.source_size[0], tile.source_size[1]
                            ));
                        ui.small(format!("{}. {}", index + 1, tile.name));
                    }
                    None => {
                        ui.add_sized([TILE_SIZE, TILE_SIZE], egui::Spinner::new());
                        ui.small(format!("{}.", index + 1));
                    }
                }
            });
        }
    });
}
