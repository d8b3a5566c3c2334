//! Scale functions for data-to-pixel mappings.
//!
//! Scales transform domain values to positions inside the plot area. The
//! histogram builder depends only on the [`Scale`] trait, so alternative
//! scale implementations can be substituted without touching builder logic.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Scale kind selectable in the chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleKind {
    /// Linear continuous mapping.
    #[default]
    Linear,
    /// Base-10 logarithmic mapping. Requires a strictly positive domain.
    Log10,
}

impl ScaleKind {
    /// Construct a position scale of this kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is degenerate, or non-positive for a
    /// log scale.
    pub fn build(self, domain: (f32, f32), range: (f32, f32)) -> Result<PositionScale> {
        match self {
            Self::Linear => Ok(PositionScale::Linear(LinearScale::new(domain, range)?)),
            Self::Log10 => Ok(PositionScale::Log10(LogScale::new(domain, range)?)),
        }
    }
}

/// A concrete position scale of any supported kind.
#[derive(Debug, Clone, Copy)]
pub enum PositionScale {
    /// Linear scale.
    Linear(LinearScale),
    /// Base-10 logarithmic scale.
    Log10(LogScale),
}

impl Scale<f32, f32> for PositionScale {
    fn scale(&self, value: f32) -> f32 {
        match self {
            Self::Linear(s) => s.scale(value),
            Self::Log10(s) => s.scale(value),
        }
    }

    fn domain(&self) -> (f32, f32) {
        match self {
            Self::Linear(s) => s.domain(),
            Self::Log10(s) => s.domain(),
        }
    }

    fn range(&self) -> (f32, f32) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Log10(s) => s.range(),
        }
    }
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain min equals domain max.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Create a scale from data extent.
    #[must_use]
    pub fn from_data(data: &[f32], range: (f32, f32)) -> Option<Self> {
        if data.is_empty() {
            return None;
        }

        let min = data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Self::new((min, max), range).ok()
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Logarithmic scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LogScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
    base: f32,
}

impl LogScale {
    /// Create a new logarithmic scale with base 10.
    ///
    /// # Errors
    ///
    /// Returns an error if domain contains non-positive values.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        Self::with_base(domain, range, 10.0)
    }

    /// Create a logarithmic scale with a custom base.
    ///
    /// # Errors
    ///
    /// Returns an error if domain contains non-positive values or base is invalid.
    pub fn with_base(domain: (f32, f32), range: (f32, f32), base: f32) -> Result<Self> {
        if domain.0 <= 0.0 || domain.1 <= 0.0 {
            return Err(Error::ScaleDomain("Log scale domain must be positive".to_string()));
        }

        if base <= 0.0 || (base - 1.0).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain(
                "Log scale base must be positive and not 1".to_string(),
            ));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
            base,
        })
    }
}

impl Scale<f32, f32> for LogScale {
    fn scale(&self, value: f32) -> f32 {
        let log_base = self.base.ln();
        let log_min = self.domain_min.ln() / log_base;
        let log_max = self.domain_max.ln() / log_base;
        let log_val = value.max(f32::MIN_POSITIVE).ln() / log_base;

        let t = (log_val - log_min) / (log_max - log_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("operation should succeed");
        assert!((scale.scale(0.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(50.0) - 0.5).abs() < 0.001);
        assert!((scale.scale(100.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // y pixel ranges run bottom-to-top
        let scale =
            LinearScale::new((0.0, 10.0), (370.0, 20.0)).expect("operation should succeed");
        assert!((scale.scale(0.0) - 370.0).abs() < 0.001);
        assert!((scale.scale(10.0) - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("operation should succeed");
        assert!((scale.invert(0.5) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_log_scale() {
        let scale = LogScale::new((1.0, 1000.0), (0.0, 3.0)).expect("operation should succeed");
        assert!((scale.scale(1.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(10.0) - 1.0).abs() < 0.001);
        assert!((scale.scale(100.0) - 2.0).abs() < 0.001);
        assert!((scale.scale(1000.0) - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_log_scale_invalid_domain() {
        assert!(LogScale::new((-1.0, 100.0), (0.0, 1.0)).is_err());
        assert!(LogScale::new((0.0, 100.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_log_scale_invalid_base() {
        assert!(LogScale::with_base((1.0, 100.0), (0.0, 1.0), -1.0).is_err());
        assert!(LogScale::with_base((1.0, 100.0), (0.0, 1.0), 0.0).is_err());
        assert!(LogScale::with_base((1.0, 100.0), (0.0, 1.0), 1.0).is_err());
    }

    #[test]
    fn test_linear_scale_from_data() {
        let scale = LinearScale::from_data(&[0.0, 50.0, 100.0], (0.0, 1.0))
            .expect("operation should succeed");
        assert!((scale.scale(50.0) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_from_data_empty() {
        assert!(LinearScale::from_data(&[], (0.0, 1.0)).is_none());
    }

    #[test]
    fn test_linear_scale_equal_domain_error() {
        let result = LinearScale::new((5.0, 5.0), (0.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_scale_kind_build_linear() {
        let scale = ScaleKind::Linear.build((0.0, 10.0), (0.0, 100.0)).unwrap();
        assert!((scale.scale(5.0) - 50.0).abs() < 0.001);
        assert_eq!(scale.domain(), (0.0, 10.0));
        assert_eq!(scale.range(), (0.0, 100.0));
    }

    #[test]
    fn test_scale_kind_build_log() {
        let scale = ScaleKind::Log10.build((1.0, 100.0), (0.0, 2.0)).unwrap();
        assert!((scale.scale(10.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_scale_kind_log_rejects_zero_domain() {
        assert!(ScaleKind::Log10.build((0.0, 100.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_scale_kind_default() {
        assert_eq!(ScaleKind::default(), ScaleKind::Linear);
    }
}
