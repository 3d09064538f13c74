use egui::{Color32, Pos2};

use crate::capture::StrokeCapture;
use crate::compositor;
use crate::export::{self, ExportError};
use crate::history::HistoryStore;
use crate::input::InputEvent;
use crate::stroke::{ToolKind, ToolSettings};
use crate::surface::Surface;

/// The core editor state: tool settings, the stroke capture machine, and
/// the drawing history. The surrounding UI drives it exclusively through
/// this interface and pulls the redraw signal with [`take_needs_render`].
///
/// Only the tool settings are persisted between runs; the drawing itself
/// is session-scoped.
///
/// [`take_needs_render`]: EditorState::take_needs_render
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditorState {
    settings: ToolSettings,
    #[serde(skip)]
    capture: StrokeCapture,
    #[serde(skip)]
    history: HistoryStore,
    #[serde(skip)]
    needs_render: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    // --- pointer input -----------------------------------------------------

    pub fn pointer_down(&mut self, pos: Pos2) {
        self.capture.pointer_down(pos, self.settings);
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if self.capture.pointer_move(pos) {
            self.needs_render = true;
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(stroke) = self.capture.pointer_up() {
            self.history.commit(stroke);
            self.needs_render = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some(stroke) = self.capture.pointer_leave() {
            self.history.commit(stroke);
            self.needs_render = true;
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_active()
    }

    // --- tool settings -----------------------------------------------------

    pub fn settings(&self) -> ToolSettings {
        self.settings
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.settings.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
    }

    /// Width is clamped here, at the settings boundary, so capture never
    /// sees an out-of-range value.
    pub fn set_brush_width(&mut self, width: f32) {
        self.settings.set_brush_width(width);
    }

    // --- history -----------------------------------------------------------

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.needs_render = true;
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.needs_render = true;
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.needs_render = true;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    // --- rendering and export ----------------------------------------------

    /// Pull-based redraw signal: true once after any change that affects
    /// the composited output.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Composite the current drawing (plus the in-progress stroke, on top)
    /// into `surface`.
    pub fn composite_into(&self, surface: &mut Surface) {
        let preview = self.capture.preview().map(|pending| pending.to_stroke());
        compositor::render(surface, self.history.current(), preview.as_ref());
    }

    /// Flattened opaque-white PNG of the committed drawing. The live
    /// surface and history are left untouched.
    pub fn export_png(&self, width: usize, height: usize) -> Result<Vec<u8>, ExportError> {
        export::export_png(self.history.current(), width, height)
    }
}
