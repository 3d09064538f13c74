use egui::{Color32, Pos2};
use std::sync::Arc;

/// Brush width bounds enforced at the settings boundary.
pub const MIN_BRUSH_WIDTH: f32 = 1.0;
pub const MAX_BRUSH_WIDTH: f32 = 50.0;

/// Which compositing behavior a stroke uses when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ToolKind {
    /// Normal source-over painting.
    Pen,
    /// Erases covered pixels back to transparent.
    Eraser,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Pen => "Pen",
            Self::Eraser => "Eraser",
        }
    }
}

/// Ambient tool configuration. Snapshotted into a stroke at capture start;
/// changing settings mid-stroke never affects the stroke being drawn.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolSettings {
    pub color: Color32,
    pub brush_width: f32,
    pub tool: ToolKind,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            brush_width: 3.0,
            tool: ToolKind::Pen,
        }
    }
}

impl ToolSettings {
    /// Set the brush width, clamped to [MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH].
    /// Out-of-range values are clamped here, never inside capture.
    pub fn set_brush_width(&mut self, width: f32) {
        self.brush_width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    tool: ToolKind,
}

// Mutable stroke for capture
#[derive(Debug)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
    tool: ToolKind,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    // Create a new immutable stroke
    pub fn new(color: Color32, width: f32, tool: ToolKind, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            width,
            tool,
        }
    }

    // Create a new reference-counted Stroke
    pub fn new_ref(color: Color32, width: f32, tool: ToolKind, points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(color, width, tool, points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }
}

impl MutableStroke {
    /// Start a new stroke from a snapshot of the current tool settings.
    pub fn new(settings: ToolSettings) -> Self {
        Self {
            points: Vec::new(),
            color: settings.color,
            width: settings.brush_width,
            tool: settings.tool,
        }
    }

    // Add a point to the mutable stroke
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    // Convert to an immutable Stroke
    pub fn to_stroke(&self) -> Stroke {
        Stroke::new(self.color, self.width, self.tool, self.points.clone())
    }

    // Convert to a reference-counted StrokeRef
    pub fn to_stroke_ref(&self) -> StrokeRef {
        Arc::new(self.to_stroke())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_clamp_brush_width() {
        let mut settings = ToolSettings::default();

        settings.set_brush_width(0.2);
        assert_eq!(settings.brush_width, MIN_BRUSH_WIDTH);

        settings.set_brush_width(99.0);
        assert_eq!(settings.brush_width, MAX_BRUSH_WIDTH);

        settings.set_brush_width(12.5);
        assert_eq!(settings.brush_width, 12.5);
    }

    #[test]
    fn mutable_stroke_snapshots_settings() {
        let settings = ToolSettings {
            color: Color32::RED,
            brush_width: 5.0,
            tool: ToolKind::Eraser,
        };
        let mut stroke = MutableStroke::new(settings);
        stroke.add_point(Pos2::new(1.0, 2.0));

        let finalized = stroke.to_stroke();
        assert_eq!(finalized.color(), Color32::RED);
        assert_eq!(finalized.width(), 5.0);
        assert_eq!(finalized.tool(), ToolKind::Eraser);
        assert_eq!(finalized.points(), &[Pos2::new(1.0, 2.0)]);
    }
}
