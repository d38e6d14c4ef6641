use crate::canvas::Canvas;
use ab_glyph::{point, Font, FontArc, OutlinedGlyph, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::Rgb;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Width and height of a built-in bitmap glyph cell, in dots
const BITMAP_CELL: i32 = 8;

#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("failed to read font file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a usable font: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}

/// Inked extent of a laid-out string, relative to the draw origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    fn union(self, other: TextBounds) -> TextBounds {
        if self.is_empty() {
            return other;
        }
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A font ready to measure and draw text at one size
#[derive(Clone)]
pub enum FontHandle {
    /// TrueType/OpenType face loaded from disk
    Outline { font: FontArc, scale: PxScale },
    /// Built-in 8x8 bitmap face, each dot drawn as a `dot`×`dot` square
    Builtin { dot: u32 },
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontHandle::Outline { scale, .. } => f
                .debug_struct("Outline")
                .field("scale_x", &scale.x)
                .field("scale_y", &scale.y)
                .finish(),
            FontHandle::Builtin { dot } => f.debug_struct("Builtin").field("dot", dot).finish(),
        }
    }
}

/// Load the font at `path` sized to `px_size` pixels per em. Any failure
/// falls back to the built-in bitmap face; this never errors.
pub fn load_font_with_fallback(path: &Path, px_size: u32) -> FontHandle {
    match FontHandle::from_file(path, px_size) {
        Ok(handle) => {
            debug!("Loaded font {} at {}px", path.display(), px_size);
            handle
        }
        Err(e) => {
            warn!("{}; using built-in font", e);
            FontHandle::builtin(px_size)
        }
    }
}

impl FontHandle {
    pub fn from_file(path: &Path, px_size: u32) -> Result<Self, FontLoadError> {
        let data = std::fs::read(path).map_err(|source| FontLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontArc::try_from_vec(data).map_err(|source| FontLoadError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        let scale = em_to_px_scale(&font, px_size as f32);
        Ok(FontHandle::Outline { font, scale })
    }

    /// The bitmap face renders at about half the requested em size so that
    /// long strings still fit their canvas.
    pub fn builtin(px_size: u32) -> Self {
        FontHandle::Builtin {
            dot: (px_size / 16).max(1),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontHandle::Builtin { .. })
    }

    /// Measure the inked box of `text` drawn with its origin at (0, 0)
    pub fn text_bounds(&self, text: &str) -> TextBounds {
        match self {
            FontHandle::Outline { font, scale } => layout_outline(font, *scale, text)
                .iter()
                .map(|g| {
                    let bb = g.px_bounds();
                    TextBounds {
                        left: bb.min.x as i32,
                        top: bb.min.y as i32,
                        right: bb.max.x as i32,
                        bottom: bb.max.y as i32,
                    }
                })
                .fold(TextBounds::default(), TextBounds::union),
            FontHandle::Builtin { dot } => {
                let mut bounds = TextBounds::default();
                for_each_bitmap_dot(*dot, text, |x, y, size| {
                    bounds = bounds.union(TextBounds {
                        left: x,
                        top: y,
                        right: x + size,
                        bottom: y + size,
                    });
                });
                bounds
            }
        }
    }

    /// Draw `text` with its origin at `origin`. The inked box lands at
    /// `origin + text_bounds(text)`.
    pub fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        let (ox, oy) = origin;
        match self {
            FontHandle::Outline { font, scale } => {
                for glyph in layout_outline(font, *scale, text) {
                    let bb = glyph.px_bounds();
                    let gx0 = ox + bb.min.x as i32;
                    let gy0 = oy + bb.min.y as i32;
                    glyph.draw(|x, y, coverage| {
                        canvas.blend(gx0 + x as i32, gy0 + y as i32, color, coverage);
                    });
                }
            }
            FontHandle::Builtin { dot } => {
                for_each_bitmap_dot(*dot, text, |x, y, size| {
                    for dy in 0..size {
                        for dx in 0..size {
                            canvas.blend(ox + x + dx, oy + y + dy, color, 1.0);
                        }
                    }
                });
            }
        }
    }
}

/// Font size in pixels per em, converted to ab_glyph's ascent-to-descent scale
fn em_to_px_scale(font: &FontArc, px_size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(px_size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(px_size),
    }
}

/// Lay glyphs out on a baseline at the ascent line, starting at x = 0
fn layout_outline(font: &FontArc, scale: PxScale, text: &str) -> Vec<OutlinedGlyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut previous = None;
    let mut glyphs = Vec::new();

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            glyphs.push(outlined);
        }
    }

    glyphs
}

/// Call `f(x, y, size)` for every set dot of `text` in the bitmap face
fn for_each_bitmap_dot(dot: u32, text: &str, mut f: impl FnMut(i32, i32, i32)) {
    let dot = dot as i32;
    for (i, c) in text.chars().enumerate() {
        let Some(rows) = BASIC_FONTS.get(c) else {
            continue;
        };
        let cell_x = i as i32 * BITMAP_CELL * dot;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..BITMAP_CELL {
                if bits & (1u8 << col) != 0 {
                    f(cell_x + col * dot, row as i32 * dot, dot);
                }
            }
        }
    }
}

// ============================================
// Font Tests
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::DEFAULT_BOLD_FONT;

    fn ink_bounds(canvas: &Canvas) -> Option<TextBounds> {
        let mut bounds: Option<TextBounds> = None;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y).0[3] > 0 {
                    let px = TextBounds {
                        left: x as i32,
                        top: y as i32,
                        right: x as i32 + 1,
                        bottom: y as i32 + 1,
                    };
                    bounds = Some(bounds.map_or(px, |b| b.union(px)));
                }
            }
        }
        bounds
    }

    #[test]
    fn test_missing_font_falls_back_to_builtin() {
        let handle = load_font_with_fallback(Path::new("/nonexistent/NoSuchFont.ttf"), 64);
        assert!(handle.is_builtin());
    }

    #[test]
    fn test_invalid_font_file_falls_back_to_builtin() {
        let temp_dir = std::env::temp_dir().join("brand_assets_test_invalid_font");
        let _ = std::fs::remove_dir_all(&temp_dir);
        std::fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        assert!(matches!(
            FontHandle::from_file(&path, 32),
            Err(FontLoadError::Invalid { .. })
        ));
        assert!(load_font_with_fallback(&path, 32).is_builtin());

        // Cleanup
        let _ = std::fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_read_error_names_the_path() {
        let err = FontHandle::from_file(Path::new("/nonexistent/Missing.ttf"), 12).unwrap_err();
        assert!(matches!(err, FontLoadError::Read { .. }));
        assert!(err.to_string().contains("Missing.ttf"));
    }

    #[test]
    fn test_builtin_dot_size() {
        assert!(matches!(FontHandle::builtin(0), FontHandle::Builtin { dot: 1 }));
        assert!(matches!(FontHandle::builtin(15), FontHandle::Builtin { dot: 1 }));
        assert!(matches!(FontHandle::builtin(341), FontHandle::Builtin { dot: 21 }));
    }

    #[test]
    fn test_builtin_bounds_scale_with_dot_size() {
        let small = FontHandle::Builtin { dot: 1 }.text_bounds("IW");
        let large = FontHandle::Builtin { dot: 3 }.text_bounds("IW");
        assert!(!small.is_empty());
        assert_eq!(large.left, small.left * 3);
        assert_eq!(large.top, small.top * 3);
        assert_eq!(large.width(), small.width() * 3);
        assert_eq!(large.height(), small.height() * 3);
        assert!(small.height() <= BITMAP_CELL);
    }

    #[test]
    fn test_builtin_bounds_advance_per_character() {
        let font = FontHandle::Builtin { dot: 2 };
        let one = font.text_bounds("I");
        let two = font.text_bounds("II");
        assert_eq!(two.left, one.left);
        assert_eq!(two.width(), one.width() + BITMAP_CELL * 2);
    }

    #[test]
    fn test_empty_and_blank_text_has_empty_bounds() {
        let font = FontHandle::Builtin { dot: 4 };
        assert!(font.text_bounds("").is_empty());
        assert!(font.text_bounds("   ").is_empty());
        assert_eq!(font.text_bounds(""), TextBounds::default());
    }

    #[test]
    fn test_builtin_draw_matches_measured_bounds() {
        let font = FontHandle::Builtin { dot: 2 };
        let text = "IW";
        let measured = font.text_bounds(text);

        let mut canvas = Canvas::transparent(80, 40);
        font.draw_text(&mut canvas, (10, 5), text, Rgb([255, 255, 255]));

        let inked = ink_bounds(&canvas).expect("text should leave ink");
        assert_eq!(inked.left, measured.left + 10);
        assert_eq!(inked.top, measured.top + 5);
        assert_eq!(inked.right, measured.right + 10);
        assert_eq!(inked.bottom, measured.bottom + 5);
    }

    #[test]
    fn test_outline_font_size_is_em_based() {
        let Ok(font) = FontHandle::from_file(Path::new(DEFAULT_BOLD_FONT), 96) else {
            return;
        };
        // Capital letters are roughly 0.73 em tall in DejaVu Sans Bold
        let height = font.text_bounds("IW").height();
        assert!((65..=76).contains(&height), "cap height {}", height);

        // Doubling the em size doubles the measured box
        let Ok(large) = FontHandle::from_file(Path::new(DEFAULT_BOLD_FONT), 192) else {
            return;
        };
        let large_height = large.text_bounds("IW").height();
        assert!((large_height - 2 * height).abs() <= 3, "{} vs {}", large_height, height);
    }

    #[test]
    fn test_outline_advance_between_glyphs() {
        let Ok(font) = FontHandle::from_file(Path::new(DEFAULT_BOLD_FONT), 64) else {
            return;
        };
        let one = font.text_bounds("I");
        let two = font.text_bounds("II");
        // Second glyph sits one advance to the right, same vertical extent
        assert_eq!(two.left, one.left);
        assert_eq!(two.top, one.top);
        assert_eq!(two.bottom, one.bottom);
        assert!(two.width() > one.width() * 2);
    }

    #[test]
    fn test_outline_font_bounds_when_available() {
        // Only meaningful where DejaVu is installed
        let Ok(font) = FontHandle::from_file(Path::new(DEFAULT_BOLD_FONT), 96) else {
            return;
        };
        let bounds = font.text_bounds("IW");
        assert!(!bounds.is_empty());
        assert!(bounds.height() <= 96);
        assert!(bounds.top >= 0);

        let mut canvas = Canvas::transparent(300, 150);
        font.draw_text(&mut canvas, (20, 10), "IW", Rgb([255, 255, 255]));
        let inked = ink_bounds(&canvas).expect("text should leave ink");
        assert!(inked.left >= bounds.left + 20);
        assert!(inked.right <= bounds.right + 20);
        assert!(inked.top >= bounds.top + 10);
        assert!(inked.bottom <= bounds.bottom + 10);
    }
}
