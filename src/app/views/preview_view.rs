use egui::TextureOptions;
use tracing::debug;

use crate::app::controller::Preview;
use crate::app::views::View;

/// The in-window image panel. Holds at most one texture; a newer preview overwrites it.
pub struct PreviewView {
    texture: Option<egui::TextureHandle>,
    revision: u64,
    size: egui::Vec2,
}

impl PreviewView {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            texture: None,
            revision: 0,
            size: egui::vec2(width as f32, height as f32),
        }
    }

    /// Uploads `preview` when it is newer than what is on screen.
    pub fn sync(&mut self, ctx: &egui::Context, preview: Option<&Preview>) {
        let Some(preview) = preview else {
            return;
        };
        if preview.revision == self.revision && self.texture.is_some() {
            return;
        }

        let color_image = egui::ColorImage::from_rgb(
            [preview.image.width() as usize, preview.image.height() as usize],
            preview.image.as_raw().as_slice(),
        );
        match self.texture.as_mut() {
            Some(texture) => texture.set(color_image, TextureOptions::default()),
            None => {
                self.texture =
                    Some(ctx.load_texture("preview", color_image, TextureOptions::default()));
            }
        }
        debug!("Preview replaced with revision {}", preview.revision);
        self.revision = preview.revision;
    }
}

impl View for PreviewView {
    fn draw(&mut self, ui: &mut egui::Ui) {
        if let Some(texture) = &self.texture {
            ui.add_space(10.0);
            ui.add(egui::Image::new(texture).fit_to_exact_size(self.size));
        }
    }
}
