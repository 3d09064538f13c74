use egui::Pos2;

use crate::stroke::{MutableStroke, StrokeRef, ToolSettings};

/// Turns a sequence of pointer samples into a finalized stroke.
///
/// Two states: idle (`current == None`) and capturing. Pointer-move and
/// pointer-up are ignored while idle, which defends against spurious
/// events such as a leave without a preceding down.
#[derive(Debug, Default)]
pub struct StrokeCapture {
    // Transient state: the stroke being drawn (if any)
    current: Option<MutableStroke>,
}

impl StrokeCapture {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Begin capturing at `pos`, snapshotting the current tool settings
    /// into the pending stroke. Ignored if a capture is already active.
    pub fn pointer_down(&mut self, pos: Pos2, settings: ToolSettings) {
        if self.current.is_some() {
            return;
        }
        let mut stroke = MutableStroke::new(settings);
        stroke.add_point(pos);
        self.current = Some(stroke);
    }

    /// Append a movement sample to the pending stroke. Every reported
    /// sample becomes a point; there is no de-duplication or distance
    /// thresholding. Returns true if a point was recorded (the preview
    /// needs a redraw).
    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        match &mut self.current {
            Some(stroke) => {
                stroke.add_point(pos);
                true
            }
            None => false,
        }
    }

    /// End the capture. A pending stroke with at least two points is
    /// finalized and returned for commit; a single-point stroke (a tap
    /// with no movement) is discarded silently.
    pub fn pointer_up(&mut self) -> Option<StrokeRef> {
        let stroke = self.current.take()?;
        if stroke.points().len() >= 2 {
            Some(stroke.to_stroke_ref())
        } else {
            None
        }
    }

    /// The pointer left the surface: same transition as pointer-up.
    pub fn pointer_leave(&mut self) -> Option<StrokeRef> {
        self.pointer_up()
    }

    /// The in-progress stroke, for topmost preview rendering.
    pub fn preview(&self) -> Option<&MutableStroke> {
        self.current.as_ref()
    }
}
