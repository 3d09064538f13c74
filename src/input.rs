use egui::{Context, PointerButton, Pos2, Rect};

/// Domain-level pointer events that drive stroke capture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while inside the canvas
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp,
    /// Pointer left the canvas (or the window entirely)
    PointerLeave,
}

/// Handles converting raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Translate a screen position into surface-local coordinates.
    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// Positions are emitted in surface-local coordinates. Only the
    /// primary button draws. Leaving the canvas area (or losing the hover
    /// position entirely) emits `PointerLeave`, which ends any active
    /// capture; the capture machine ignores the event while idle.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    if self.canvas_rect.contains(pos) {
                        events.push(InputEvent::PointerMove {
                            position: self.to_canvas(pos),
                        });
                    } else {
                        events.push(InputEvent::PointerLeave);
                    }
                }
                self.last_pointer_pos = Some(pos);

                if input.pointer.button_pressed(PointerButton::Primary)
                    && self.canvas_rect.contains(pos)
                {
                    events.push(InputEvent::PointerDown {
                        position: self.to_canvas(pos),
                    });
                }
                if input.pointer.button_released(PointerButton::Primary) {
                    events.push(InputEvent::PointerUp);
                }
            } else if self.last_pointer_pos.take().is_some() {
                // Pointer left the window
                events.push(InputEvent::PointerLeave);
            }
        });

        events
    }
}
