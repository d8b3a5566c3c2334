//! # binviz
//!
//! Histogram chart construction and rendering for in-memory data series.
//!
//! The builder projects a series through value/weight accessors, bins the
//! values on nice boundaries, aggregates frequencies, and emits a
//! render-backend-agnostic [`chart::ChartDescription`]. Rendering is a
//! separate step: the same description drives the software rasterizer
//! (PNG via the `png` crate), the SVG encoder, or any backend you write
//! against it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use binviz::prelude::*;
//!
//! let rates = [5.1, 4.9, 8.6, 6.2, 5.1, 7.1];
//! let chart = Histogram::new()
//!     .data(&rates)
//!     .label("Unemployment rate (%) →")
//!     .color(Rgba::STEEL_BLUE)
//!     .build()?;
//!
//! chart.write_png("rates.png")?;
//! chart.write_svg("rates.svg")?;
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for chart styling and pixel rendering.
pub mod color;

/// RGBA pixel canvas for chart rasterization.
pub mod framebuffer;

/// Geometric primitives for chart layout.
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

// ============================================================================
// Chart Construction
// ============================================================================

/// Value binning for histogram construction.
pub mod bins;

/// Axis tick generation and label formatting.
pub mod axis;

/// Render-backend-agnostic chart description.
pub mod chart;

/// High-level plot types (the histogram builder).
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of chart descriptions.
pub mod render;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for binviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use binviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::{AxisSpec, Orientation, Tick, TickFormat};
    pub use crate::bins::{Bin, Thresholds};
    pub use crate::chart::{Bar, ChartDescription};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Margins, Point, Rect};
    pub use crate::output::{PngEncoder, SvgEncoder};
    pub use crate::plots::Histogram;
    pub use crate::scale::{LinearScale, LogScale, Scale, ScaleKind};
    pub use batuta_common::display::WithDimensions;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
