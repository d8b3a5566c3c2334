//! SVG output encoder.
//!
//! Vector output for chart descriptions, with optional embedded-raster
//! framebuffer export. Bars carry `<title>` children so browsers show the
//! bin tooltip on hover.

use crate::chart::ChartDescription;
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::output::PngEncoder;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Font size for tick labels, in pixels.
const TICK_FONT: f32 = 10.0;
/// Font size for axis captions, in pixels.
const CAPTION_FONT: f32 = 11.0;
/// Length of an axis tick mark in pixels.
const TICK_LEN: f32 = 6.0;

/// SVG encoder for chart and framebuffer output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width.
    width: u32,
    /// SVG height.
    height: u32,
    /// Background color (None for transparent).
    background: Option<Rgba>,
    /// SVG elements in paint order.
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle, with an optional `<title>` tooltip child.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgba,
        title: Option<String>,
    },
    /// Line.
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Text.
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
    /// Embedded raster image (base64 PNG).
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        data: String,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR).
    #[default]
    Start,
    /// Center text at position.
    Middle,
    /// Align text end at position (right-aligned for LTR).
    End,
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: None, elements: Vec::new() }
    }

    /// Build the full SVG scene for a chart description: background,
    /// gridlines, bars with tooltips, axis lines, ticks, and captions.
    #[must_use]
    pub fn from_chart(desc: &ChartDescription) -> Self {
        let mut svg = Self::new(desc.width, desc.height).background(Some(Rgba::WHITE));

        // Gridlines behind the bars, one per y tick
        let gx0 = desc.plot_area.x;
        let gx1 = desc.plot_area.x + desc.plot_area.width;
        for tick in &desc.y_axis.ticks {
            svg = svg.line(gx0, tick.position, gx1, tick.position, Rgba::GRID, 1.0);
        }

        for bar in &desc.bars {
            svg.elements.push(SvgElement::Rect {
                x: bar.rect.x,
                y: bar.rect.y,
                width: bar.rect.width,
                height: bar.rect.height,
                fill: desc.color,
                title: Some(bar.tooltip.clone()),
            });
        }

        // Bottom axis
        let xa = &desc.x_axis;
        svg = svg.line(xa.span.0, xa.offset, xa.span.1, xa.offset, Rgba::INK, 1.0);
        for tick in &xa.ticks {
            svg = svg
                .line(tick.position, xa.offset, tick.position, xa.offset + TICK_LEN, Rgba::INK, 1.0)
                .text_anchored(
                    tick.position,
                    xa.offset + TICK_LEN + TICK_FONT,
                    &tick.label,
                    TICK_FONT,
                    Rgba::INK,
                    TextAnchor::Middle,
                );
        }
        if let Some(label) = &xa.label {
            svg = svg.text_anchored(
                xa.span.1,
                xa.offset + TICK_LEN + 2.0 * TICK_FONT + 1.0,
                label,
                CAPTION_FONT,
                Rgba::INK,
                TextAnchor::End,
            );
        }

        // Left axis
        let ya = &desc.y_axis;
        svg = svg.line(ya.offset, ya.span.0, ya.offset, ya.span.1, Rgba::INK, 1.0);
        for tick in &ya.ticks {
            svg = svg
                .line(ya.offset - TICK_LEN, tick.position, ya.offset, tick.position, Rgba::INK, 1.0)
                .text_anchored(
                    ya.offset - TICK_LEN - 2.0,
                    tick.position + TICK_FONT / 3.0,
                    &tick.label,
                    TICK_FONT,
                    Rgba::INK,
                    TextAnchor::End,
                );
        }
        if let Some(label) = &ya.label {
            // Caption sits above the plot, flush with the canvas edge
            svg = svg.text_anchored(
                2.0,
                ya.span.1.min(ya.span.0) - 6.0,
                label,
                CAPTION_FONT,
                Rgba::INK,
                TextAnchor::Start,
            );
        }

        svg
    }

    /// Embed a framebuffer as a base64 PNG image element.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn from_framebuffer(fb: &Framebuffer) -> Result<Self> {
        let mut svg = Self::new(fb.width(), fb.height());
        let data = STANDARD.encode(PngEncoder::to_bytes(fb)?);
        svg.elements.push(SvgElement::Image {
            x: 0.0,
            y: 0.0,
            width: fb.width() as f32,
            height: fb.height() as f32,
            data,
        });
        Ok(svg)
    }

    /// Set the background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Rgba, width: f32) -> Self {
        self.elements.push(SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width: width });
        self
    }

    /// Add anchored text.
    #[must_use]
    pub fn text_anchored(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                bg.to_css()
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect { x, y, width, height, fill, title } => {
            let open = format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}""#,
                fill.to_css()
            );
            match title {
                Some(t) => format!("{open}><title>{}</title></rect>", escape_text(t)),
                None => format!("{open}/>"),
            }
        }
        SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Text { x, y, text, font_size, fill, anchor } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" font-family="sans-serif" fill="{}" text-anchor="{anchor}">{}</text>"#,
                fill.to_css(),
                escape_text(text)
            )
        }
        SvgElement::Image { x, y, width, height, data } => {
            format!(
                r#"<image x="{x}" y="{y}" width="{width}" height="{height}" xlink:href="data:image/png;base64,{data}"/>"#
            )
        }
    }
}

/// Escape text content for XML.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
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
    fn test_from_chart_one_rect_per_bar() {
        let desc = Histogram::new().data(&RATES).build().unwrap();
        let svg = SvgEncoder::from_chart(&desc).render();
        let rects = svg.matches("<title>").count();
        assert_eq!(rects, desc.bar_count());
    }

    #[test]
    fn test_from_chart_has_axis_labels() {
        let desc = Histogram::new()
            .data(&RATES)
            .label("Unemployment rate (%) →")
            .build()
            .unwrap();
        let svg = SvgEncoder::from_chart(&desc).render();
        assert!(svg.contains("Unemployment rate"));
        assert!(svg.contains("↑ Frequency"));
    }

    #[test]
    fn test_tooltip_escaped() {
        let mut svg = SvgEncoder::new(10, 10);
        svg.add_element(SvgElement::Rect {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
            fill: Rgba::INK,
            title: Some("a < b & c".to_string()),
        });
        let out = svg.render();
        assert!(out.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_svg_document_shape() {
        let desc = Histogram::new().data(&RATES).build().unwrap();
        let svg = desc.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 640 400""#));
    }

    #[test]
    fn test_from_framebuffer_embeds_png() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(Rgba::STEEL_BLUE);
        let svg = SvgEncoder::from_framebuffer(&fb).unwrap().render();
        assert!(svg.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_empty_chart_renders_axes() {
        let desc = Histogram::new().data(&[]).build().unwrap();
        let svg = desc.to_svg();
        assert!(svg.contains("<line"));
        assert!(!svg.contains("<title>"));
    }
}
