//! Histogram chart builder.
//!
//! Projects a data series through value/weight accessors, bins the values,
//! aggregates frequencies, and emits a [`ChartDescription`]. The generic
//! option names (`value`, `domain`, `label`, `format`, `scale_type`) are
//! convenience aliases for the x-specific ones; when both members of a pair
//! are supplied, the x-specific name wins. Aliases are resolved exactly once
//! at build time.

use crate::axis::{make_axis, tick_increment, Orientation, TickFormat};
use crate::bins::{bin_values, Thresholds};
use crate::chart::{Bar, ChartDescription};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Margins, Rect};
use crate::scale::{Scale, ScaleKind};

/// Datum projection: maps a borrowed datum to a number.
pub type Accessor<D> = fn(&D) -> f32;

/// Builder for histogram charts.
///
/// `D` is the datum type of the input series. For a plain numeric series use
/// [`Histogram::new`] with [`data`](Histogram::data); for record types use
/// [`Histogram::from_series`] and supply a value accessor.
#[derive(Debug, Clone)]
pub struct Histogram<D = f32> {
    series: Vec<D>,
    value: Option<Accessor<D>>,
    x: Option<Accessor<D>>,
    weight: Option<Accessor<D>>,
    y: Option<Accessor<D>>,
    thresholds: Thresholds,
    domain: Option<(f32, f32)>,
    x_domain: Option<(f32, f32)>,
    normalize: bool,
    scale_type: Option<ScaleKind>,
    x_type: Option<ScaleKind>,
    y_domain: Option<(f32, f32)>,
    label: Option<String>,
    x_label: Option<String>,
    y_label: String,
    format: Option<TickFormat>,
    x_format: Option<TickFormat>,
    y_format: Option<TickFormat>,
    margins: Margins,
    width: u32,
    height: u32,
    inset_left: f32,
    inset_right: f32,
    color: Rgba,
}

/// Alias-free options, produced once per build.
struct ResolvedOptions<D> {
    x: Accessor<D>,
    y: Option<Accessor<D>>,
    x_domain: Option<(f32, f32)>,
    x_type: ScaleKind,
    x_label: Option<String>,
    x_format: TickFormat,
    y_format: TickFormat,
}

impl<D> Histogram<D> {
    fn base() -> Self {
        Self {
            series: Vec::new(),
            value: None,
            x: None,
            weight: None,
            y: None,
            thresholds: Thresholds::default(),
            domain: None,
            x_domain: None,
            normalize: false,
            scale_type: None,
            x_type: None,
            y_domain: None,
            label: None,
            x_label: None,
            y_label: "↑ Frequency".to_string(),
            format: None,
            x_format: None,
            y_format: None,
            margins: Margins::default(),
            width: 640,
            height: 400,
            inset_left: 0.5,
            inset_right: 0.5,
            color: Rgba::INK,
        }
    }

    /// Set the value accessor (convenience alias for [`x`](Histogram::x)).
    #[must_use]
    pub fn value(mut self, accessor: Accessor<D>) -> Self {
        self.value = Some(accessor);
        self
    }

    /// Set the x-value accessor. Wins over `value` when both are set.
    #[must_use]
    pub fn x(mut self, accessor: Accessor<D>) -> Self {
        self.x = Some(accessor);
        self
    }

    /// Set the weight accessor (convenience alias for [`y`](Histogram::y)).
    /// Defaults to a constant weight of 1 per datum.
    #[must_use]
    pub fn weight(mut self, accessor: Accessor<D>) -> Self {
        self.weight = Some(accessor);
        self
    }

    /// Set the y-weight accessor. Wins over `weight` when both are set.
    #[must_use]
    pub fn y(mut self, accessor: Accessor<D>) -> Self {
        self.y = Some(accessor);
        self
    }

    /// Set the bin hint: target count, statistical rule, or explicit edges.
    #[must_use]
    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the x-range (convenience alias for [`x_domain`](Histogram::x_domain)).
    #[must_use]
    pub fn domain(mut self, min: f32, max: f32) -> Self {
        self.domain = Some((min, max));
        self
    }

    /// Set the explicit x-range, overriding inference from bins.
    /// Wins over `domain` when both are set.
    #[must_use]
    pub fn x_domain(mut self, min: f32, max: f32) -> Self {
        self.x_domain = Some((min, max));
        self
    }

    /// Normalize the frequency vector to sum to 1.
    #[must_use]
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the x scale kind (convenience alias for [`x_type`](Histogram::x_type)).
    #[must_use]
    pub fn scale_type(mut self, kind: ScaleKind) -> Self {
        self.scale_type = Some(kind);
        self
    }

    /// Set the x scale kind. Wins over `scale_type` when both are set.
    #[must_use]
    pub fn x_type(mut self, kind: ScaleKind) -> Self {
        self.x_type = Some(kind);
        self
    }

    /// Set the explicit y-range. Defaults to `[0, max frequency]`.
    #[must_use]
    pub fn y_domain(mut self, min: f32, max: f32) -> Self {
        self.y_domain = Some((min, max));
        self
    }

    /// Set the x axis caption (convenience alias for [`x_label`](Histogram::x_label)).
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the x axis caption. Wins over `label` when both are set.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the y axis caption.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Set the x tick format (convenience alias for [`x_format`](Histogram::x_format)).
    #[must_use]
    pub fn format(mut self, format: TickFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the x tick format. Wins over `format` when both are set.
    #[must_use]
    pub fn x_format(mut self, format: TickFormat) -> Self {
        self.x_format = Some(format);
        self
    }

    /// Set the y tick format. Defaults to percent when normalizing.
    #[must_use]
    pub fn y_format(mut self, format: TickFormat) -> Self {
        self.y_format = Some(format);
        self
    }

    /// Set the margins reserved for axes and labels.
    #[must_use]
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the output canvas dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the per-bar pixel insets that keep adjacent bars from merging.
    #[must_use]
    pub fn insets(mut self, left: f32, right: f32) -> Self {
        self.inset_left = left;
        self.inset_right = right;
        self
    }

    /// Set the bar fill color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Resolve aliases and defaults. Applied exactly once, in [`build`](Histogram::build).
    fn resolve(&self) -> Result<ResolvedOptions<D>> {
        let x = self.x.or(self.value).ok_or_else(|| {
            Error::InvalidConfig("no value accessor configured for this datum type".to_string())
        })?;
        let y_format = self.y_format.unwrap_or(if self.normalize {
            TickFormat::Percent
        } else {
            TickFormat::Auto
        });
        Ok(ResolvedOptions {
            x,
            y: self.y.or(self.weight),
            x_domain: self.x_domain.or(self.domain),
            x_type: self.x_type.or(self.scale_type).unwrap_or_default(),
            x_label: self.x_label.clone().or_else(|| self.label.clone()),
            x_format: self.x_format.or(self.format).unwrap_or_default(),
            y_format,
        })
    }

    /// Compute the chart description.
    ///
    /// Pure with respect to its inputs: repeated calls on an identical
    /// builder yield structurally identical descriptions.
    ///
    /// # Errors
    ///
    /// Returns an error for zero canvas dimensions, margins that consume the
    /// canvas, an inverted or non-finite explicit domain, malformed explicit
    /// bin edges, or a log scale over a non-positive domain.
    pub fn build(&self) -> Result<ChartDescription> {
        let opts = self.resolve()?;

        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }
        let plot_area = self
            .margins
            .plot_area(self.width, self.height)
            .ok_or(Error::InvalidDimensions { width: self.width, height: self.height })?;
        validate_domain("x", opts.x_domain)?;
        validate_domain("y", self.y_domain)?;

        // Project the series; a datum with a non-finite value or weight is
        // excluded from binning by masking its x as NaN.
        let weights: Vec<f32> = match opts.y {
            Some(y) => self.series.iter().map(y).collect(),
            None => vec![1.0; self.series.len()],
        };
        let xs: Vec<f32> = self
            .series
            .iter()
            .map(opts.x)
            .zip(&weights)
            .map(|(v, w)| if w.is_finite() { v } else { f32::NAN })
            .collect();

        let bins = bin_values(&xs, &self.thresholds)?;

        let mut frequencies: Vec<f32> =
            bins.iter().map(|b| b.indices.iter().map(|&i| weights[i]).sum()).collect();
        if self.normalize {
            let total: f32 = frequencies.iter().sum();
            // Zero total weight stays all-zero rather than dividing to NaN
            if total > 0.0 {
                for f in &mut frequencies {
                    *f /= total;
                }
            }
        }

        let x_domain = opts.x_domain.unwrap_or_else(|| match (bins.first(), bins.last()) {
            (Some(first), Some(last)) => (first.x0, last.x1),
            _ => (0.0, 1.0),
        });
        let y_domain = self.y_domain.unwrap_or_else(|| {
            let max = frequencies.iter().copied().fold(0.0f32, f32::max);
            if max > 0.0 { (0.0, max) } else { (0.0, 1.0) }
        });

        let x_range = (plot_area.x, plot_area.x + plot_area.width);
        let y_range = (plot_area.y + plot_area.height, plot_area.y);
        let x_scale = opts.x_type.build(x_domain, x_range)?;
        let y_scale = ScaleKind::Linear.build(y_domain, y_range)?;

        // Tick density follows canvas size over approximate label width
        let x_hint = (self.width / 80).max(1) as usize;
        let y_hint = (self.height / 40).max(1) as usize;
        let x_axis = make_axis(
            &x_scale,
            x_hint,
            opts.x_format,
            opts.x_label,
            Orientation::Bottom,
            plot_area.y + plot_area.height,
        );
        let y_axis = make_axis(
            &y_scale,
            y_hint,
            opts.y_format,
            Some(self.y_label.clone()),
            Orientation::Left,
            plot_area.x,
        );

        let baseline = y_scale.scale(0.0);
        let freq_step = tick_increment(y_domain.0, y_domain.1, 100);
        let bars = bins
            .into_iter()
            .zip(&frequencies)
            .map(|(bin, &freq)| {
                let left = x_scale.scale(bin.x0) + self.inset_left;
                let right = x_scale.scale(bin.x1) - self.inset_right;
                let top = y_scale.scale(freq);
                let rect = Rect::new(
                    left,
                    top,
                    (right - left).max(0.0),
                    (baseline - top).max(0.0),
                );
                let tooltip = format!(
                    "{} ≤ x < {}\n{}",
                    opts.x_format.format(bin.x0, bin.width()),
                    opts.x_format.format(bin.x1, bin.width()),
                    opts.y_format.format(freq, freq_step),
                );
                Bar { rect, bin, frequency: freq, tooltip }
            })
            .collect();

        Ok(ChartDescription {
            width: self.width,
            height: self.height,
            plot_area,
            bars,
            x_axis,
            y_axis,
            x_domain,
            y_domain,
            frequencies,
            normalized: self.normalize,
            color: self.color,
        })
    }
}

impl<D: Clone> Histogram<D> {
    /// Create a builder over a series of records. A value accessor must be
    /// supplied via [`value`](Histogram::value) or [`x`](Histogram::x).
    #[must_use]
    pub fn from_series(series: &[D]) -> Self {
        let mut h = Self::base();
        h.series = series.to_vec();
        h
    }
}

impl Histogram<f32> {
    /// Create a builder over a plain numeric series. The value accessor
    /// defaults to the identity.
    #[must_use]
    pub fn new() -> Self {
        let mut h = Self::base();
        h.value = Some(|d: &f32| *d);
        h
    }

    /// Set the data series.
    #[must_use]
    pub fn data(mut self, values: &[f32]) -> Self {
        self.series = values.to_vec();
        self
    }
}

impl Default for Histogram<f32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> batuta_common::display::WithDimensions for Histogram<D> {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

fn validate_domain(axis: &str, domain: Option<(f32, f32)>) -> Result<()> {
    if let Some((min, max)) = domain {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidConfig(format!("{axis} domain must be finite")));
        }
        if min >= max {
            return Err(Error::InvalidConfig(format!(
                "{axis} domain min {min} must be below max {max}"
            )));
        }
    }
    Ok(())
}
