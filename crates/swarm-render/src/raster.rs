//! Pixel-level drawing primitives on `RgbaImage`.
//!
//! Every primitive clips silently at the image border.

use glam::DVec2;
use image::{Rgba, RgbaImage};

/// Set one pixel if it lies inside the image.
pub fn plot(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}

/// Round a screen position to the pixel grid.
pub fn to_pixel(p: DVec2) -> (i64, i64) {
    (p.x.round() as i64, p.y.round() as i64)
}

/// Bresenham line between two screen positions, endpoints included.
pub fn draw_line(image: &mut RgbaImage, from: DVec2, to: DVec2, color: Rgba<u8>) {
    let (mut x0, mut y0) = to_pixel(from);
    let (x1, y1) = to_pixel(to);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(image, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Filled disc centred on a screen position.
pub fn fill_disc(image: &mut RgbaImage, center: DVec2, radius: u32, color: Rgba<u8>) {
    let (cx, cy) = to_pixel(center);
    let r = radius as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                plot(image, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Diagonal cross centred on a screen position.
pub fn draw_cross(image: &mut RgbaImage, center: DVec2, radius: u32, color: Rgba<u8>) {
    let (cx, cy) = to_pixel(center);
    let r = radius as i64;
    for d in -r..=r {
        plot(image, cx + d, cy + d, color);
        plot(image, cx + d, cy - d, color);
    }
}
