use eframe::egui::{self, Color32, Rect, TextureHandle, TextureOptions};

use crate::state::EditorState;
use crate::surface::Surface;

/// Owns the on-screen raster: a CPU surface the compositor draws into and
/// the egui texture it is uploaded to. Recomposites only when the editor
/// reports a change or the canvas was resized (pull-based, not reactive).
pub struct Renderer {
    surface: Surface,
    texture: Option<TextureHandle>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            surface: Surface::new(0, 0),
            texture: None,
        }
    }

    pub fn surface_size(&self) -> [usize; 2] {
        [self.surface.width(), self.surface.height()]
    }

    /// Composite the editor state if needed and paint the result into
    /// `rect` on top of a white canvas background.
    pub fn paint(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        state: &mut EditorState,
    ) {
        let width = rect.width().max(0.0) as usize;
        let height = rect.height().max(0.0) as usize;
        if width == 0 || height == 0 {
            return;
        }

        let resized = [width, height] != self.surface_size();
        if resized {
            self.surface = Surface::new(width, height);
        }

        if state.take_needs_render() || resized || self.texture.is_none() {
            state.composite_into(&mut self.surface);
            let image = self.surface.to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
        }

        // White canvas background; erased regions of the texture are
        // transparent and show it through.
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}
