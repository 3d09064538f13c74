use egui::{Color32, ColorImage};

/// An owned RGBA raster surface the compositor draws into.
///
/// Pixels are `Color32` (premultiplied alpha), row-major. The compositor
/// only ever writes fully opaque or fully transparent pixels, so the
/// buffer compares bitwise for the determinism guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl Surface {
    /// Allocate a fully transparent surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color32::TRANSPARENT; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(Color32::TRANSPARENT);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color32 {
        self.pixels[y * self.width + x]
    }

    pub(crate) fn set_pixel(&mut self, x: usize, y: usize, color: Color32) {
        self.pixels[y * self.width + x] = color;
    }

    /// Composite every pixel over an opaque background, flattening
    /// transparent (erased) regions. Used by export so erasures become
    /// clean background color instead of transparency.
    pub fn flatten_over(&mut self, background: Color32) {
        for px in &mut self.pixels {
            *px = blend_over(*px, background);
        }
    }

    /// Copy into an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        let mut image = ColorImage::new([self.width, self.height], Color32::TRANSPARENT);
        image.pixels.copy_from_slice(&self.pixels);
        image
    }
}

// Source-over with premultiplied components.
fn blend_over(src: Color32, dst: Color32) -> Color32 {
    let a = src.a() as u32;
    if a == 255 {
        return src;
    }
    if a == 0 {
        return dst;
    }
    let inv = 255 - a;
    Color32::from_rgba_premultiplied(
        (src.r() as u32 + dst.r() as u32 * inv / 255) as u8,
        (src.g() as u32 + dst.g() as u32 * inv / 255) as u8,
        (src.b() as u32 + dst.b() as u32 * inv / 255) as u8,
        (a + dst.a() as u32 * inv / 255) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_transparent() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.pixels().len(), 12);
        assert!(surface.pixels().iter().all(|p| *p == Color32::TRANSPARENT));
    }

    #[test]
    fn flatten_over_replaces_transparent_with_background() {
        let mut surface = Surface::new(2, 1);
        surface.set_pixel(0, 0, Color32::RED);
        surface.flatten_over(Color32::WHITE);

        assert_eq!(surface.pixel(0, 0), Color32::RED);
        assert_eq!(surface.pixel(1, 0), Color32::WHITE);
    }
}
