use eframe::egui::{self, Slider};

use crate::app::SketchApp;
use crate::stroke::{ToolKind, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            // Tool selection buttons
            let active_tool = app.state().settings().tool;
            ui.horizontal(|ui| {
                for tool in [ToolKind::Pen, ToolKind::Eraser] {
                    if ui.selectable_label(active_tool == tool, tool.name()).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.state_mut().set_tool(tool);
                    }
                }
            });

            ui.separator();

            // Color picker
            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.state().settings().color;
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.state_mut().set_color(color);
                }
            });

            // Brush width slider
            ui.horizontal(|ui| {
                ui.label("Width:");
                let mut width = app.state().settings().brush_width;
                if ui
                    .add(Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH))
                    .changed()
                {
                    app.state_mut().set_brush_width(width);
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.state().can_undo();
                let can_redo = app.state().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.state_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.state_mut().redo();
                }
            });

            if ui.button("Clear").clicked() {
                app.state_mut().clear();
            }

            ui.separator();

            if ui.button("Export PNG").clicked() {
                app.export_to_file();
            }

            ui.separator();

            let history = app.state().history();
            ui.horizontal(|ui| {
                ui.label(format!("Undo stack size: {}", history.undo_depth()));
                ui.label(format!("Redo stack size: {}", history.redo_depth()));
            });
        });
}
