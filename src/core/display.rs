use crate::error::{ChartError, ChartResult};

/// Display-density collaborator converting device-independent units to pixels.
///
/// Radius setters on [`crate::core::LineSeriesConfig`] take dp input and
/// store pixel values through this converter, so one configuration renders at
/// the same physical size across screen densities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    density: f64,
}

impl DisplayMetrics {
    pub fn new(density: f64) -> ChartResult<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ChartError::InvalidDisplayDensity { density });
        }
        Ok(Self { density })
    }

    #[must_use]
    pub fn density(self) -> f64 {
        self.density
    }

    #[must_use]
    pub fn dp_to_px(self, dp: f64) -> f64 {
        dp * self.density
    }
}

impl Default for DisplayMetrics {
    /// Density 1.0: dp and px coincide until a host supplies real metrics.
    fn default() -> Self {
        Self { density: 1.0 }
    }
}
