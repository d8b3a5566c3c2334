//! Axis tick generation and label formatting.
//!
//! Ticks land on 1/2/5-decade increments so labels read cleanly. The axis
//! builder consumes a position scale and a tick-count hint and produces a
//! render-backend-agnostic [`AxisSpec`].

use crate::scale::{PositionScale, Scale};

/// Nice step size for roughly `count` intervals over `[start, stop]`.
///
/// Steps are constrained to 1, 2, or 5 times a power of ten. Returns 0.0
/// for a degenerate extent.
#[must_use]
pub fn tick_increment(start: f32, stop: f32, count: usize) -> f32 {
    let step = (stop - start) / count.max(1) as f32;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f32.powf(power);
    let factor = if error >= 50f32.sqrt() {
        10.0
    } else if error >= 10f32.sqrt() {
        5.0
    } else if error >= 2f32.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f32.powf(power)
}

/// Nice tick values inside `[start, stop]`, roughly `count` of them.
#[must_use]
pub fn ticks(start: f32, stop: f32, count: usize) -> Vec<f32> {
    let step = tick_increment(start, stop, count);
    if step <= 0.0 {
        return vec![start];
    }
    let i0 = (start / step).ceil();
    let i1 = (stop / step).floor();
    if i1 < i0 {
        return vec![start];
    }
    let n = (i1 - i0) as usize;
    (0..=n).map(|i| (i0 + i as f32) * step).collect()
}

/// Powers of ten inside `[start, stop]` for log-scale ticks.
///
/// Falls back to the domain endpoints when no power of ten lies inside.
#[must_use]
pub fn log_ticks(start: f32, stop: f32) -> Vec<f32> {
    if start <= 0.0 || stop <= start {
        return vec![start, stop];
    }
    let e0 = start.log10().ceil() as i32;
    let e1 = stop.log10().floor() as i32;
    if e1 < e0 {
        return vec![start, stop];
    }
    (e0..=e1).map(|e| 10f32.powi(e)).collect()
}

/// Tick label formatting specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickFormat {
    /// Decimal places derived from the tick step.
    #[default]
    Auto,
    /// Value rendered as a percentage (`0.15` becomes `15%`).
    Percent,
    /// Fixed number of decimal places.
    Fixed(u8),
}

impl TickFormat {
    /// Format a tick value. `step` is the spacing between adjacent ticks,
    /// used to pick a precision that distinguishes neighbors.
    #[must_use]
    pub fn format(self, value: f32, step: f32) -> String {
        match self {
            Self::Auto => format!("{value:.prec$}", prec = decimals_for_step(step)),
            Self::Percent => {
                let prec = decimals_for_step(step * 100.0);
                format!("{:.prec$}%", value * 100.0, prec = prec)
            }
            Self::Fixed(d) => format!("{value:.prec$}", prec = usize::from(d)),
        }
    }
}

/// Decimal places needed to distinguish values `step` apart.
///
/// Smallest precision at which the step itself prints exactly (capped at 6).
fn decimals_for_step(step: f32) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let mut scaled = step;
    let mut decimals = 0;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-3 * scaled.max(1.0) {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// A single axis tick: domain value, pixel position along the axis, and
/// preformatted label text.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Domain value.
    pub value: f32,
    /// Pixel position along the axis.
    pub position: f32,
    /// Label text.
    pub label: String,
}

/// Which side of the plot the axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal axis below the plot area.
    Bottom,
    /// Vertical axis left of the plot area.
    Left,
}

/// Render-backend-agnostic axis description.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    /// Side of the plot this axis occupies.
    pub orientation: Orientation,
    /// Pixel coordinate of the axis line on the cross axis
    /// (y for a bottom axis, x for a left axis).
    pub offset: f32,
    /// Pixel extent of the axis line along its own direction.
    pub span: (f32, f32),
    /// Ticks with positions and labels.
    pub ticks: Vec<Tick>,
    /// Axis caption, if any.
    pub label: Option<String>,
}

/// Build an axis description from a scale, a tick-count hint, and a format.
#[must_use]
pub fn make_axis(
    scale: &PositionScale,
    hint: usize,
    format: TickFormat,
    label: Option<String>,
    orientation: Orientation,
    offset: f32,
) -> AxisSpec {
    let (d0, d1) = scale.domain();
    let (values, step) = match scale {
        PositionScale::Linear(_) => {
            (ticks(d0, d1, hint), tick_increment(d0, d1, hint))
        }
        PositionScale::Log10(_) => (log_ticks(d0, d1), 0.0),
    };

    let ticks = values
        .into_iter()
        .map(|v| {
            // Log ticks are formatted against their own magnitude
            let s = if step > 0.0 { step } else { v.abs() };
            Tick { value: v, position: scale.scale(v), label: format.format(v, s) }
        })
        .collect();

    let (r0, r1) = scale.range();
    AxisSpec { orientation, offset, span: (r0, r1), ticks, label }
}
