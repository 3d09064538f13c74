use eframe_sketch::{EditorState, InputEvent, ToolKind, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};
use egui::{Color32, Pos2};

#[test]
fn drag_commits_a_stroke_with_every_move_sample() {
    let mut state = EditorState::new();
    state.pointer_down(Pos2::new(0.0, 0.0));
    state.pointer_move(Pos2::new(1.0, 0.0));
    state.pointer_move(Pos2::new(1.0, 0.0)); // duplicate samples are kept
    state.pointer_move(Pos2::new(2.0, 1.0));
    state.pointer_up();

    let strokes = state.history().current().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(
        strokes[0].points(),
        &[
            Pos2::new(0.0, 0.0),
            Pos2::new(1.0, 0.0),
            Pos2::new(1.0, 0.0),
            Pos2::new(2.0, 1.0),
        ]
    );
}

#[test]
fn tap_mutates_nothing() {
    let mut state = EditorState::new();
    state.pointer_down(Pos2::new(5.0, 5.0));
    state.pointer_up();

    assert!(state.history().current().is_empty());
    assert_eq!(state.history().undo_depth(), 0);
    assert_eq!(state.history().redo_depth(), 0);
}

#[test]
fn spurious_events_while_idle_are_ignored() {
    let mut state = EditorState::new();
    state.handle_event(InputEvent::PointerMove {
        position: Pos2::new(3.0, 3.0),
    });
    state.handle_event(InputEvent::PointerUp);
    state.handle_event(InputEvent::PointerLeave);

    assert!(!state.is_capturing());
    assert!(state.history().current().is_empty());
}

#[test]
fn leaving_the_surface_finalizes_the_stroke() {
    let mut state = EditorState::new();
    state.handle_event(InputEvent::PointerDown {
        position: Pos2::new(0.0, 0.0),
    });
    state.handle_event(InputEvent::PointerMove {
        position: Pos2::new(8.0, 8.0),
    });
    state.handle_event(InputEvent::PointerLeave);

    assert!(!state.is_capturing());
    assert_eq!(state.history().current().len(), 1);
}

#[test]
fn stroke_attributes_come_from_settings_at_capture_start() {
    let mut state = EditorState::new();
    state.set_tool(ToolKind::Eraser);
    state.set_color(Color32::GREEN);
    state.set_brush_width(20.0);

    state.pointer_down(Pos2::new(0.0, 0.0));
    // Mid-stroke adjustments must not leak into the pending stroke.
    state.set_tool(ToolKind::Pen);
    state.set_brush_width(2.0);
    state.pointer_move(Pos2::new(10.0, 0.0));
    state.pointer_up();

    let strokes = state.history().current().strokes();
    assert_eq!(strokes[0].tool(), ToolKind::Eraser);
    assert_eq!(strokes[0].width(), 20.0);
}

#[test]
fn brush_width_is_clamped_at_the_settings_boundary() {
    let mut state = EditorState::new();

    state.set_brush_width(-4.0);
    assert_eq!(state.settings().brush_width, MIN_BRUSH_WIDTH);

    state.set_brush_width(500.0);
    assert_eq!(state.settings().brush_width, MAX_BRUSH_WIDTH);
}

#[test]
fn needs_render_signal_follows_visible_changes() {
    let mut state = EditorState::new();
    assert!(!state.take_needs_render());

    // Pointer down alone has no observable effect yet.
    state.pointer_down(Pos2::new(0.0, 0.0));
    assert!(!state.take_needs_render());

    state.pointer_move(Pos2::new(5.0, 5.0));
    assert!(state.take_needs_render());
    assert!(!state.take_needs_render());

    state.pointer_up();
    assert!(state.take_needs_render());

    // Undo on an undoable history marks a redraw; a no-op undo does not.
    state.undo();
    assert!(state.take_needs_render());
    state.undo();
    assert!(!state.take_needs_render());
}
