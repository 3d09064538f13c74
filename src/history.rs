use crate::document::Document;
use crate::stroke::StrokeRef;

/// Snapshot-based undo/redo history over the composed drawing.
///
/// Every mutating action pushes the pre-mutation document onto the undo
/// stack and clears the redo stack. Undo/redo move whole snapshots between
/// the stacks; both are defined no-ops when their source stack is empty.
pub struct HistoryStore {
    current: Document,
    /// Snapshots that can be restored by undo
    undo_stack: Vec<Document>,
    /// Snapshots that can be restored by redo
    redo_stack: Vec<Document>,
    /// Optional stack depth cap with oldest-first eviction. Not required
    /// for correctness; `None` keeps unbounded session history.
    max_depth: Option<usize>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// Creates a new empty history with unbounded depth
    pub fn new() -> Self {
        Self {
            current: Document::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: None,
        }
    }

    /// Creates a history whose stacks evict their oldest snapshot once
    /// `max_depth` is reached
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::new()
        }
    }

    pub fn current(&self) -> &Document {
        &self.current
    }

    /// Append a finalized stroke to the drawing, recording an undo snapshot
    pub fn commit(&mut self, stroke: StrokeRef) {
        self.push_undo(self.current.clone());
        self.redo_stack.clear();
        self.current.add_stroke(stroke);
        log::debug!(
            "Committed stroke; drawing now has {} strokes",
            self.current.len()
        );
    }

    /// Empty the drawing, recording an undo snapshot. Clearing an already
    /// empty drawing still records a snapshot, so it is undoable like any
    /// other action.
    pub fn clear(&mut self) {
        self.push_undo(self.current.clone());
        self.redo_stack.clear();
        self.current = Document::new();
        log::info!("Cleared drawing");
    }

    /// Restore the most recent undo snapshot. Returns false (and does
    /// nothing) if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                let displaced = std::mem::replace(&mut self.current, snapshot);
                self.redo_stack.push(displaced);
                true
            }
            None => false,
        }
    }

    /// Restore the most recent redo snapshot. Returns false (and does
    /// nothing) if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                let displaced = std::mem::replace(&mut self.current, snapshot);
                self.undo_stack.push(displaced);
                true
            }
            None => false,
        }
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn push_undo(&mut self, snapshot: Document) {
        if let Some(max) = self.max_depth {
            if self.undo_stack.len() >= max {
                self.undo_stack.remove(0);
            }
        }
        self.undo_stack.push(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{Stroke, ToolKind};
    use egui::{Color32, Pos2};

    fn stroke(x: f32) -> crate::stroke::StrokeRef {
        Stroke::new_ref(
            Color32::BLACK,
            3.0,
            ToolKind::Pen,
            vec![Pos2::new(x, 0.0), Pos2::new(x, 10.0)],
        )
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_are_noops() {
        let mut history = HistoryStore::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.current().is_empty());
    }

    #[test]
    fn max_depth_evicts_oldest_snapshot() {
        let mut history = HistoryStore::with_max_depth(2);
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        history.commit(stroke(3.0));

        assert_eq!(history.undo_depth(), 2);
        // The two retained snapshots unwind the two most recent commits.
        assert!(history.undo());
        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.current().len(), 1);
    }
}
