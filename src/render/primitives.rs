//! Primitive rasterization helpers.
//!
//! Axis lines and tick marks are drawn with Bresenham's algorithm; gridlines
//! are alpha-blended so they sit behind the ink without overpowering it.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Draw a line using Bresenham's algorithm.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Alpha-blend a horizontal line from `x0` to `x1` at row `y`.
pub fn blend_hline(fb: &mut Framebuffer, x0: i32, x1: i32, y: i32, color: Rgba) {
    if y < 0 {
        return;
    }
    let (a, b) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    for x in a.max(0)..=b.max(0) {
        fb.blend_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        draw_line(&mut fb, 0, 5, 9, 5, Rgba::BLACK);
        for x in 0..10 {
            assert_eq!(fb.get_pixel(x, 5), Some(Rgba::BLACK));
        }
    }

    #[test]
    fn test_draw_line_vertical() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        draw_line(&mut fb, 3, 0, 3, 9, Rgba::BLACK);
        for y in 0..10 {
            assert_eq!(fb.get_pixel(3, y), Some(Rgba::BLACK));
        }
    }

    #[test]
    fn test_draw_line_diagonal_endpoints() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        draw_line(&mut fb, 0, 0, 9, 9, Rgba::BLACK);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(9, 9), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_clips_negative() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        draw_line(&mut fb, -5, 5, 5, 5, Rgba::BLACK);
        assert_eq!(fb.get_pixel(0, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_blend_hline() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        blend_hline(&mut fb, 0, 9, 4, Rgba::BLACK.with_alpha(128));
        let px = fb.get_pixel(5, 4).unwrap();
        assert!(px.r < 255 && px.r > 0);
    }
}
