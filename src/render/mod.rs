//! Rasterization of chart descriptions.
//!
//! Consumes a [`ChartDescription`] and draws bars, gridlines, axis lines,
//! and tick marks into a [`Framebuffer`]. Text labels are carried by the
//! description and rendered by text-capable backends (SVG); the rasterizer
//! draws marks only, like the other plot backends here.

pub mod primitives;

use crate::axis::{AxisSpec, Orientation};
use crate::chart::ChartDescription;
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use primitives::{blend_hline, draw_line};

/// Length of an axis tick mark in pixels.
const TICK_LEN: i32 = 6;

/// Rasterize a chart description into a fresh framebuffer.
///
/// # Errors
///
/// Returns an error if the framebuffer cannot be allocated.
pub fn render_chart(desc: &ChartDescription) -> Result<Framebuffer> {
    let mut fb = Framebuffer::new(desc.width, desc.height)?;
    fb.clear(Rgba::WHITE);

    draw_gridlines(&mut fb, desc);
    draw_bars(&mut fb, desc);
    draw_axis(&mut fb, &desc.x_axis);
    draw_axis(&mut fb, &desc.y_axis);

    Ok(fb)
}

/// Horizontal gridlines at each y tick, faded across the plot area.
fn draw_gridlines(fb: &mut Framebuffer, desc: &ChartDescription) {
    let x0 = desc.plot_area.x as i32;
    let x1 = (desc.plot_area.x + desc.plot_area.width) as i32;
    for tick in &desc.y_axis.ticks {
        blend_hline(fb, x0, x1, tick.position.round() as i32, Rgba::GRID);
    }
}

fn draw_bars(fb: &mut Framebuffer, desc: &ChartDescription) {
    for bar in &desc.bars {
        let w = bar.rect.width.round();
        let h = bar.rect.height.round();
        if w < 1.0 || h < 1.0 || bar.rect.x < 0.0 || bar.rect.y < 0.0 {
            continue;
        }
        fb.fill_rect(
            bar.rect.x.round() as u32,
            bar.rect.y.round() as u32,
            w as u32,
            h as u32,
            desc.color,
        );
    }
}

/// Axis line along its span plus a tick mark per tick, pointing away from
/// the plot area.
fn draw_axis(fb: &mut Framebuffer, axis: &AxisSpec) {
    let offset = axis.offset.round() as i32;
    let (s0, s1) = (axis.span.0.round() as i32, axis.span.1.round() as i32);

    match axis.orientation {
        Orientation::Bottom => {
            draw_line(fb, s0, offset, s1, offset, Rgba::INK);
            for tick in &axis.ticks {
                let x = tick.position.round() as i32;
                draw_line(fb, x, offset, x, offset + TICK_LEN, Rgba::INK);
            }
        }
        Orientation::Left => {
            draw_line(fb, offset, s0, offset, s1, Rgba::INK);
            for tick in &axis.ticks {
                let y = tick.position.round() as i32;
                draw_line(fb, offset - TICK_LEN, y, offset, y, Rgba::INK);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::Histogram;

    const RATES: [f32; 20] = [
        5.1, 4.9, 8.6, 6.2, 5.1, 7.1, 6.7, 6.1, 5.0, 5.0, 5.2, 7.9, 11.1, 5.9, 5.5, 5.6, 6.5,
        7.7, 5.7, 6.7,
    ];

    #[test]
    fn test_render_puts_ink_on_canvas() {
        let desc = Histogram::new()
            .data(&RATES)
            .color(Rgba::STEEL_BLUE)
            .build()
            .unwrap();
        let fb = render_chart(&desc).unwrap();

        // A blank white canvas has mean luminance 255
        let (min, _, mean) = fb.luminance_stats();
        assert!(mean < 255.0);
        assert!(min < 250.0);
    }

    #[test]
    fn test_render_dimensions_match_config() {
        let desc = Histogram::new().data(&RATES).dimensions(320, 200).build().unwrap();
        let fb = render_chart(&desc).unwrap();
        assert_eq!((fb.width(), fb.height()), (320, 200));
    }

    #[test]
    fn test_render_empty_series_draws_axes_only() {
        let desc = Histogram::new().data(&[]).build().unwrap();
        let fb = render_chart(&desc).unwrap();
        // Axis ink is present even without bars
        let (min, _, _) = fb.luminance_stats();
        assert!(min < 250.0);
    }

    #[test]
    fn test_bar_pixels_use_configured_color() {
        let desc = Histogram::new()
            .data(&RATES)
            .color(Rgba::STEEL_BLUE)
            .build()
            .unwrap();
        let fb = render_chart(&desc).unwrap();

        let tallest = desc
            .bars
            .iter()
            .max_by(|a, b| a.rect.height.total_cmp(&b.rect.height))
            .unwrap();
        let cx = (tallest.rect.x + tallest.rect.width / 2.0) as u32;
        let cy = (tallest.rect.y + tallest.rect.height / 2.0) as u32;
        assert_eq!(fb.get_pixel(cx, cy), Some(Rgba::STEEL_BLUE));
    }
}
