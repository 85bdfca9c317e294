//! Rasterizes a carved grid onto a blank page

use image::{Rgba, RgbaImage};

use crate::maze::grid::Grid;
use crate::render::layout::{PageLayout, Rect};

/// Page background
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Wall colour
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Draw every present wall of `grid` in black on a white page
pub fn render_page(grid: &Grid, layout: &PageLayout) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(layout.canvas_width, layout.canvas_height, BACKGROUND);

    for wall in layout.wall_rects(grid) {
        fill_rect(&mut img, &wall.rect, INK);
    }

    img
}

/// Fill every pixel the rectangle touches, clipped to the image
pub fn fill_rect(img: &mut RgbaImage, rect: &Rect, color: Rgba<u8>) {
    let cols = pixel_span(rect.x0, rect.x1, img.width());
    let rows = pixel_span(rect.y0, rect.y1, img.height());

    for py in rows.0..rows.1 {
        for px in cols.0..cols.1 {
            img.put_pixel(px, py, color);
        }
    }
}

// Half-open pixel range [floor(lo), ceil(hi)) clamped to [0, limit)
fn pixel_span(lo: f64, hi: f64, limit: u32) -> (u32, u32) {
    let clamp = |v: f64| v.clamp(0.0, f64::from(limit)) as u32;
    (clamp(lo.floor()), clamp(hi.ceil()))
}
