use std::io::Cursor;

use egui::Color32;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::compositor;
use crate::document::Document;
use crate::surface::Surface;

#[derive(Debug, Error)]
pub enum ExportError {
    /// A zero-sized surface would silently produce a degenerate image,
    /// which is worse than a visible failure.
    #[error("export dimensions must be non-zero (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Render the drawing onto a fresh surface, flatten it over opaque white,
/// and encode it as PNG bytes.
///
/// The live editing surface may hold transparent erased regions; export
/// flattens onto white so erasures come out as clean white rather than
/// transparency. Never touches live state; the in-progress stroke is not
/// included.
pub fn export_png(document: &Document, width: usize, height: usize) -> Result<Vec<u8>, ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidDimensions { width, height });
    }

    let mut surface = Surface::new(width, height);
    compositor::render(&mut surface, document, None);
    surface.flatten_over(Color32::WHITE);

    let mut rgba = Vec::with_capacity(width * height * 4);
    for px in surface.pixels() {
        rgba.extend_from_slice(&px.to_array());
    }

    let mut png = Vec::new();
    PngEncoder::new(Cursor::new(&mut png)).write_image(
        &rgba,
        width as u32,
        height as u32,
        ExtendedColorType::Rgba8,
    )?;

    log::info!(
        "Exported {}x{} PNG ({} strokes, {} bytes)",
        width,
        height,
        document.len(),
        png.len()
    );
    Ok(png)
}
