#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod capture;
pub mod compositor;
pub mod document;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;

pub use app::SketchApp;
pub use capture::StrokeCapture;
pub use compositor::PaintOp;
pub use document::Document;
pub use export::{export_png, ExportError};
pub use history::HistoryStore;
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use state::EditorState;
pub use stroke::{
    MutableStroke, Stroke, StrokeRef, ToolKind, ToolSettings, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH,
};
pub use surface::Surface;
