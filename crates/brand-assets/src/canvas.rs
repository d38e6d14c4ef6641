use image::{DynamicImage, GrayImage, Luma, Rgb, Rgba, RgbaImage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Exported as 8-bit RGB
    Opaque,
    /// Exported as 8-bit RGBA
    Transparent,
}

/// In-memory raster that text and masks are drawn into before export
pub struct Canvas {
    pixels: RgbaImage,
    format: PixelFormat,
}

impl Canvas {
    /// Create a canvas filled edge to edge with `fill`
    pub fn opaque(width: u32, height: u32, fill: Rgb<u8>) -> Self {
        let [r, g, b] = fill.0;
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255])),
            format: PixelFormat::Opaque,
        }
    }

    /// Create a fully transparent canvas
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
            format: PixelFormat::Transparent,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Composite `color` at `coverage` (0.0..=1.0) over the pixel at (x, y).
    /// Coordinates outside the canvas are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let src_a = coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);
        let dst_a = dst.0[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        for c in 0..3 {
            let s = color.0[c] as f32;
            let d = dst.0[c] as f32;
            let v = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
            dst.0[c] = v.round().clamp(0.0, 255.0) as u8;
        }
        dst.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Multiply the canvas alpha by `mask`. The canvas exports with an alpha
    /// channel afterwards.
    pub fn apply_mask(&mut self, mask: &GrayImage) {
        for (x, y, px) in self.pixels.enumerate_pixels_mut() {
            let m = if x < mask.width() && y < mask.height() {
                mask.get_pixel(x, y).0[0]
            } else {
                0
            };
            px.0[3] = ((px.0[3] as u16 * m as u16 + 127) / 255) as u8;
        }
        self.format = PixelFormat::Transparent;
    }

    pub fn into_image(self) -> DynamicImage {
        let image = DynamicImage::ImageRgba8(self.pixels);
        match self.format {
            PixelFormat::Opaque => DynamicImage::ImageRgb8(image.to_rgb8()),
            PixelFormat::Transparent => image,
        }
    }
}

/// Build a `width`×`height` mask that is 255 inside a rounded rectangle
/// spanning the whole area and 0 in the cut corners.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let radius = radius.min(width / 2).min(height / 2) as f32;
    let w = width as f32;
    let h = height as f32;

    GrayImage::from_fn(width, height, |x, y| {
        // Sample at the pixel center
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        let cx = px.clamp(radius, w - radius);
        let cy = py.clamp(radius, h - radius);
        let dx = px - cx;
        let dy = py - cy;

        if dx * dx + dy * dy <= radius * radius {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

// ============================================
// Canvas Tests
// ============================================
