//! High-level plot types.
//!
//! Provides ready-to-use visualization types with builder APIs.

mod histogram;

pub use histogram::{Accessor, Histogram};
