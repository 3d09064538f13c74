use crate::stroke::StrokeRef;

/// The composed drawing: committed strokes in commit order.
/// Render order equals commit order; later strokes (including erasures)
/// layer on top of earlier ones.
///
/// Cloning a `Document` is a snapshot with value semantics: strokes are
/// immutable once committed, so the Arc-shared points can never change
/// under a snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    strokes: Vec<StrokeRef>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    pub fn add_stroke(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }
}
