use crate::canvas::{rounded_rect_mask, Canvas};
use crate::font::load_font_with_fallback;
use crate::style::Brand;
use image::DynamicImage;
use tracing::debug;

/// Draw origin along one axis that centers a measured box of `extent`
/// pixels (starting `offset` pixels past the origin) in `container` pixels.
pub fn centered_origin(container: u32, extent: i32, offset: i32) -> i32 {
    (container as i32 - extent).div_euclid(2) - offset
}

/// Square app icon: primary-color background with the initials centered
/// and lifted by `brand.icon_text_lift`.
pub fn create_app_icon(size: u32, brand: &Brand) -> DynamicImage {
    let mut canvas = Canvas::opaque(size, size, brand.primary);
    let font = load_font_with_fallback(&brand.bold_font, size / 3);

    let bounds = font.text_bounds(&brand.initials);
    let origin = (
        centered_origin(size, bounds.width(), bounds.left),
        centered_origin(size, bounds.height(), bounds.top) - brand.icon_text_lift,
    );
    debug!("App icon {}x{}: initials at {:?}", size, size, origin);
    font.draw_text(&mut canvas, origin, &brand.initials, brand.on_primary);

    if brand.round_icon_corners {
        canvas.apply_mask(&rounded_rect_mask(size, size, size / 8));
    }

    canvas.into_image()
}

/// Adaptive icon foreground: the initials alone on a transparent square
pub fn create_app_icon_foreground(size: u32, brand: &Brand) -> DynamicImage {
    let mut canvas = Canvas::transparent(size, size);
    let font = load_font_with_fallback(&brand.bold_font, size / 3);

    let bounds = font.text_bounds(&brand.initials);
    let origin = (
        centered_origin(size, bounds.width(), bounds.left),
        centered_origin(size, bounds.height(), bounds.top),
    );
    debug!("Foreground {}x{}: initials at {:?}", size, size, origin);
    font.draw_text(&mut canvas, origin, &brand.initials, brand.on_primary);

    canvas.into_image()
}

/// Splash logo on a transparent `2*size` × `size` canvas: the title with its
/// top at `size/3`, the subtitle under it.
pub fn create_splash_logo(size: u32, brand: &Brand) -> DynamicImage {
    let width = size * 2;
    let mut canvas = Canvas::transparent(width, size);
    let title_font = load_font_with_fallback(&brand.bold_font, size / 4);
    let subtitle_font = load_font_with_fallback(&brand.regular_font, size / 10);

    let title_top = (size / 3) as i32;
    let title = title_font.text_bounds(&brand.title);
    let title_origin = (
        centered_origin(width, title.width(), title.left),
        title_top - title.top,
    );
    title_font.draw_text(&mut canvas, title_origin, &brand.title, brand.primary);

    let subtitle_top = title_top + title.height() + brand.title_gap;
    let subtitle = subtitle_font.text_bounds(&brand.subtitle);
    let subtitle_origin = (
        centered_origin(width, subtitle.width(), subtitle.left),
        subtitle_top - subtitle.top,
    );
    subtitle_font.draw_text(&mut canvas, subtitle_origin, &brand.subtitle, brand.secondary_text);

    debug!(
        "Splash {}x{}: title at {:?}, subtitle at {:?}",
        width, size, title_origin, subtitle_origin
    );
    canvas.into_image()
}

// ============================================
// Generator Tests
// ============================================
