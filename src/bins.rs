//! Value binning for histogram construction.
//!
//! Produces contiguous, ascending, half-open bins from a numeric series.
//! Bin boundaries land on nice 1/2/5-decade increments so tick labels read
//! cleanly; the boundary step is shared with the axis module.

use crate::axis::tick_increment;
use crate::error::{Error, Result};

/// A half-open numeric interval `[x0, x1)` plus the indices of the data
/// points falling inside it.
///
/// The last bin of a histogram is closed at the top edge so the series
/// maximum is never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Inclusive lower edge.
    pub x0: f32,
    /// Exclusive upper edge (inclusive for the last bin).
    pub x1: f32,
    /// Indices into the source series, in insertion order.
    pub indices: Vec<usize>,
}

impl Bin {
    /// Number of data points in this bin.
    #[must_use]
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    /// Width of the bin interval.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }
}

/// Bin-boundary hint controlling how many bins are generated.
#[derive(Debug, Clone, PartialEq)]
pub enum Thresholds {
    /// Target bin count. The effective count is capped at `ceil(sqrt(n))`
    /// so sparse series do not shatter into near-empty slivers.
    Count(usize),
    /// Sturges' rule: `ceil(log2(n) + 1)`.
    Sturges,
    /// Scott's rule: bin width `3.5 * std / n^(1/3)`.
    Scott,
    /// Freedman-Diaconis rule: bin width `2 * IQR / n^(1/3)`.
    FreedmanDiaconis,
    /// Explicit bin boundaries, strictly ascending. Values outside the
    /// covered interval are excluded.
    Edges(Vec<f32>),
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::Count(40)
    }
}

impl Thresholds {
    /// Resolve the hint to a target bin count for `values`.
    ///
    /// Only meaningful for the rule variants; `Edges` carries its own
    /// boundaries.
    #[must_use]
    pub fn bin_count(&self, values: &[f32]) -> usize {
        let n = values.len();
        if n == 0 {
            return 1;
        }

        match self {
            Self::Count(hint) => {
                let cap = (n as f32).sqrt().ceil() as usize;
                (*hint).min(cap).max(1)
            }
            Self::Sturges => sturges(n),
            Self::Scott => {
                let std = std_dev(values);
                let width = 3.5 * std / (n as f32).powf(1.0 / 3.0);
                count_from_width(values, width).unwrap_or_else(|| sturges(n))
            }
            Self::FreedmanDiaconis => {
                let iqr = iqr(values);
                let width = 2.0 * iqr / (n as f32).powf(1.0 / 3.0);
                count_from_width(values, width).unwrap_or_else(|| sturges(n))
            }
            Self::Edges(edges) => edges.len().saturating_sub(1).max(1),
        }
    }
}

/// Bin a numeric series.
///
/// Non-finite values are excluded. An empty series (or one with no finite
/// values) yields zero bins. Bins are contiguous and ascending; adjacent
/// bins share their boundary value exactly.
///
/// # Errors
///
/// Returns an error if explicit edges are fewer than two or not strictly
/// ascending.
pub fn bin_values(values: &[f32], thresholds: &Thresholds) -> Result<Vec<Bin>> {
    let finite: Vec<usize> = (0..values.len()).filter(|&i| values[i].is_finite()).collect();
    if finite.is_empty() {
        // Still surface malformed edge configuration
        if let Thresholds::Edges(edges) = thresholds {
            validate_edges(edges)?;
        }
        return Ok(Vec::new());
    }

    let edges = match thresholds {
        Thresholds::Edges(edges) => validate_edges(edges)?,
        _ => {
            let min = finite.iter().map(|&i| values[i]).fold(f32::INFINITY, f32::min);
            let max = finite.iter().map(|&i| values[i]).fold(f32::NEG_INFINITY, f32::max);
            nice_edges(min, max, thresholds.bin_count(values))
        }
    };

    let mut bins = empty_bins(edges);
    for &i in &finite {
        if let Some(b) = locate(&bins, values[i]) {
            bins[b].indices.push(i);
        }
    }
    Ok(bins)
}

/// Nice bin edges covering `[min, max]` with roughly `count` bins.
///
/// Edges land on multiples of a 1/2/5-decade step. A degenerate extent
/// (all values equal) produces a single unit-width bin centered on the value.
fn nice_edges(min: f32, max: f32, count: usize) -> Vec<f32> {
    let step = tick_increment(min, max, count);
    if step <= 0.0 || !step.is_finite() {
        return vec![min - 0.5, min + 0.5];
    }

    let i0 = (min / step).floor();
    let mut i1 = (max / step).ceil();
    // Guard against max landing exactly on the lower edge count
    if i1 <= i0 {
        i1 = i0 + 1.0;
    }
    let n = (i1 - i0) as usize;
    let edges: Vec<f32> = (0..=n).map(|i| (i0 + i as f32) * step).collect();

    // A step below float resolution at this magnitude collapses edges;
    // fall back to a single bin over the extent
    if edges.len() < 2 || edges.windows(2).any(|w| w[0] >= w[1]) {
        return if min < max { vec![min, max] } else { vec![min - 0.5, min + 0.5] };
    }
    edges
}

fn empty_bins(edges: Vec<f32>) -> Vec<Bin> {
    edges
        .windows(2)
        .map(|w| Bin { x0: w[0], x1: w[1], indices: Vec::new() })
        .collect()
}

/// Locate the bin holding `x`, honoring half-open intervals with a closed
/// top edge on the last bin. Returns `None` when `x` falls outside the
/// covered interval (possible with explicit edges).
fn locate(bins: &[Bin], x: f32) -> Option<usize> {
    let last = bins.len().checked_sub(1)?;
    if x < bins[0].x0 || x > bins[last].x1 {
        return None;
    }
    let mut idx = bins.partition_point(|b| b.x1 <= x).min(last);
    // Float guard: step multiples may place a boundary value one slot off
    while idx > 0 && x < bins[idx].x0 {
        idx -= 1;
    }
    while idx < last && x >= bins[idx].x1 {
        idx += 1;
    }
    Some(idx)
}

fn validate_edges(edges: &[f32]) -> Result<Vec<f32>> {
    if edges.len() < 2 {
        return Err(Error::InvalidConfig(
            "explicit bin edges require at least two boundaries".to_string(),
        ));
    }
    if edges.windows(2).any(|w| w[0] >= w[1]) || edges.iter().any(|e| !e.is_finite()) {
        return Err(Error::InvalidConfig(
            "explicit bin edges must be finite and strictly ascending".to_string(),
        ));
    }
    Ok(edges.to_vec())
}

fn sturges(n: usize) -> usize {
    ((n as f32).log2().ceil() + 1.0).max(1.0) as usize
}

fn count_from_width(values: &[f32], width: f32) -> Option<usize> {
    if width <= 0.0 || !width.is_finite() {
        return None;
    }
    let min = values.iter().copied().filter(|v| v.is_finite()).fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().filter(|v| v.is_finite()).fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;
    if range <= 0.0 {
        return None;
    }
    Some(((range / width).ceil() as usize).max(1))
}

fn std_dev(values: &[f32]) -> f32 {
    let finite: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.len() < 2 {
        return 0.0;
    }
    let mean = finite.iter().sum::<f32>() / finite.len() as f32;
    let variance =
        finite.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (finite.len() - 1) as f32;
    variance.sqrt()
}

fn iqr(values: &[f32]) -> f32 {
    let mut sorted: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.len() < 4 {
        return sorted.iter().copied().fold(f32::NEG_INFINITY, f32::max)
            - sorted.iter().copied().fold(f32::INFINITY, f32::min);
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q1 = sorted[sorted.len() / 4];
    let q3 = sorted[3 * sorted.len() / 4];
    q3 - q1
}
