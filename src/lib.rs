//! lineseries-rs: line-series dataset configuration model.
//!
//! This crate provides the per-series styling surface a chart renderer
//! queries when painting one plotted line: interpolation mode, circle
//! markers, gradients, dash patterns and fill baseline policy. The rendering
//! pipeline itself lives in the host; this crate only holds and exposes
//! configuration through read-only capability traits.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use crate::core::{LineSeriesCapability, LineSeriesConfig, LineSeriesMode};
pub use error::{ChartError, ChartResult};
