use std::time::{SystemTime, UNIX_EPOCH};

use eframe::egui;

use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::EditorState;

/// We derive Deserialize/Serialize so we can persist tool settings on
/// shutdown; the drawing itself is never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchApp {
    state: EditorState,
    // Skip serializing the renderer since it contains GPU resources
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            state: EditorState::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    /// Export the committed drawing at the current canvas size and write
    /// it next to the working directory.
    pub fn export_to_file(&mut self) {
        let [width, height] = self.renderer.surface_size();
        match self.state.export_png(width, height) {
            Ok(png) => {
                let stamp = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                let path = format!("sketch-{stamp}.png");
                match std::fs::write(&path, &png) {
                    Ok(()) => log::info!("Saved export to {path}"),
                    Err(err) => log::error!("Failed to write {path}: {err}"),
                }
            }
            Err(err) => log::error!("Export failed: {err}"),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
        let redo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Y);
        ctx.input_mut(|input| {
            if input.consume_shortcut(&undo) {
                self.state.undo();
            }
            if input.consume_shortcut(&redo) {
                self.state.redo();
            }
        });
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::tools_panel(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
            let rect = response.rect;

            self.input.set_canvas_rect(rect);
            for event in self.input.process_input(ctx) {
                self.state.handle_event(event);
            }

            self.renderer.paint(ctx, &painter, rect, &mut self.state);
        });
    }
}
