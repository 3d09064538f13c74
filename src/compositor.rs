use egui::{Color32, Pos2};

use crate::document::Document;
use crate::stroke::{Stroke, ToolKind};
use crate::surface::Surface;

/// Per-call compositing mode for the stroke primitive. Threaded explicitly
/// through every draw call; there is no ambient mode flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    /// Source-over painting with an opaque color.
    Paint(Color32),
    /// Replace covered pixels with transparency, revealing what is beneath.
    Erase,
}

impl PaintOp {
    fn for_stroke(stroke: &Stroke) -> Self {
        match stroke.tool() {
            ToolKind::Pen => Self::Paint(stroke.color()),
            ToolKind::Eraser => Self::Erase,
        }
    }
}

/// Replay a drawing onto `surface`: clear to transparent, then draw every
/// committed stroke in commit order, then the in-progress stroke (if any)
/// on top.
///
/// Pure function of the drawing and the surface dimensions: identical
/// inputs produce byte-identical pixels.
pub fn render(surface: &mut Surface, document: &Document, preview: Option<&Stroke>) {
    surface.clear();
    for stroke in document.strokes() {
        draw_stroke(surface, stroke);
    }
    if let Some(stroke) = preview {
        draw_stroke(surface, stroke);
    }
}

/// Draw one stroke as a continuous connected path with round caps and
/// joins. Strokes with fewer than two points are not drawn.
pub(crate) fn draw_stroke(surface: &mut Surface, stroke: &Stroke) {
    let points = stroke.points();
    if points.len() < 2 || surface.width() == 0 || surface.height() == 0 {
        return;
    }

    let radius = stroke.width() / 2.0;
    let op = PaintOp::for_stroke(stroke);
    for window in points.windows(2) {
        fill_capsule(surface, window[0], window[1], radius, op);
    }
}

// A pixel is covered iff its center lies within `radius` of the segment.
// Adjacent segments overlap at their shared endpoint, which is what gives
// the path round joins; round caps fall out of the endpoint distance.
fn fill_capsule(surface: &mut Surface, start: Pos2, end: Pos2, radius: f32, op: PaintOp) {
    let min_x = (start.x.min(end.x) - radius).floor().max(0.0) as usize;
    let min_y = (start.y.min(end.y) - radius).floor().max(0.0) as usize;
    let max_x = (start.x.max(end.x) + radius).ceil() as usize;
    let max_y = (start.y.max(end.y) + radius).ceil() as usize;
    let max_x = max_x.min(surface.width().saturating_sub(1));
    let max_y = max_y.min(surface.height().saturating_sub(1));

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_to_line_segment(center, start, end) <= radius {
                match op {
                    PaintOp::Paint(color) => surface.set_pixel(x, y, color),
                    PaintOp::Erase => surface.set_pixel(x, y, Color32::TRANSPARENT),
                }
            }
        }
    }
}

/// Calculate distance from a point to a line segment
fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}
