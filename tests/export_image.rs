use eframe_sketch::{export_png, Document, ExportError, Stroke, ToolKind};
use egui::{Color32, Pos2};

fn document_with_erasure() -> Document {
    let mut document = Document::new();
    document.add_stroke(Stroke::new_ref(
        Color32::RED,
        8.0,
        ToolKind::Pen,
        vec![Pos2::new(4.0, 16.0), Pos2::new(28.0, 16.0)],
    ));
    document.add_stroke(Stroke::new_ref(
        Color32::WHITE,
        8.0,
        ToolKind::Eraser,
        vec![Pos2::new(14.0, 16.0), Pos2::new(18.0, 16.0)],
    ));
    document
}

#[test]
fn erased_regions_flatten_to_opaque_white() {
    let png = export_png(&document_with_erasure(), 32, 32).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().into_rgba8();

    assert_eq!(decoded.dimensions(), (32, 32));

    // Erased sub-region: opaque white, never transparent.
    assert_eq!(decoded.get_pixel(16, 16).0, [255, 255, 255, 255]);

    // Untouched background is also opaque white.
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);

    // Painted pixels survive flattening.
    assert_eq!(decoded.get_pixel(5, 16).0, [255, 0, 0, 255]);
}

#[test]
fn every_exported_pixel_is_opaque() {
    let png = export_png(&document_with_erasure(), 32, 32).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().into_rgba8();

    assert!(decoded.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn zero_dimensions_fail_loudly() {
    let document = Document::new();
    assert!(matches!(
        export_png(&document, 0, 0),
        Err(ExportError::InvalidDimensions { .. })
    ));
}

#[test]
fn export_does_not_mutate_live_state() {
    use eframe_sketch::EditorState;

    let mut state = EditorState::new();
    state.pointer_down(Pos2::new(0.0, 0.0));
    state.pointer_move(Pos2::new(10.0, 10.0));
    state.pointer_up();
    state.take_needs_render();

    let before = state.history().current().clone();
    let _png = state.export_png(32, 32).unwrap();

    assert_eq!(*state.history().current(), before);
    assert_eq!(state.history().undo_depth(), 1);
    assert_eq!(state.history().redo_depth(), 0);
    assert!(!state.take_needs_render());
}
