//! Render-backend-agnostic chart description.
//!
//! The histogram builder emits a [`ChartDescription`]; rendering it to a
//! framebuffer, SVG, or PNG is a separate step, so the same description can
//! drive any backend.

use crate::axis::AxisSpec;
use crate::bins::Bin;
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::output::{PngEncoder, SvgEncoder};
use crate::render;
use std::path::Path;

/// One histogram bar: pixel rectangle, source bin, aggregated frequency,
/// and hover tooltip text.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Pixel-space rectangle inside the canvas.
    pub rect: Rect,
    /// The bin this bar represents.
    pub bin: Bin,
    /// Aggregated (possibly normalized) weight of the bin.
    pub frequency: f32,
    /// Tooltip text: the bin interval plus the formatted frequency.
    pub tooltip: String,
}

/// Complete description of a histogram chart, ready for any render backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescription {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Plot area inside the margins.
    pub plot_area: Rect,
    /// Bars in ascending bin order.
    pub bars: Vec<Bar>,
    /// Bottom axis.
    pub x_axis: AxisSpec,
    /// Left axis.
    pub y_axis: AxisSpec,
    /// Effective x-range (explicit or inferred from bins).
    pub x_domain: (f32, f32),
    /// Effective y-range (explicit or inferred from frequencies).
    pub y_domain: (f32, f32),
    /// Frequency per bar, aligned by index.
    pub frequencies: Vec<f32>,
    /// Whether frequencies were normalized to sum to 1.
    pub normalized: bool,
    /// Bar fill color.
    pub color: Rgba,
}

impl ChartDescription {
    /// Number of bars (equals the bin count).
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Sum of the frequency vector.
    #[must_use]
    pub fn frequency_sum(&self) -> f32 {
        self.frequencies.iter().sum()
    }

    /// Rasterize into a fresh framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be allocated.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        render::render_chart(self)
    }

    /// Render as an SVG document string.
    #[must_use]
    pub fn to_svg(&self) -> String {
        SvgEncoder::from_chart(self).render()
    }

    /// Rasterize and write a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let fb = self.to_framebuffer()?;
        PngEncoder::write_to_file(&fb, path)
    }

    /// Write the SVG rendering to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        SvgEncoder::from_chart(self).write_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plots::Histogram;

    #[test]
    fn test_bar_count_matches_frequencies() {
        let desc = Histogram::new()
            .data(&[1.0, 2.0, 2.0, 3.0])
            .build()
            .unwrap();
        assert_eq!(desc.bar_count(), desc.frequencies.len());
    }

    #[test]
    fn test_frequency_sum() {
        let desc = Histogram::new()
            .data(&[1.0, 2.0, 2.0, 3.0])
            .build()
            .unwrap();
        assert!((desc.frequency_sum() - 4.0).abs() < 1e-4);
    }
}
