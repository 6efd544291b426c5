use serde::{Deserialize, Serialize};

/// One sample of a plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub x: f64,
    pub y: f64,
}

impl Entry {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Returns `(y_min, y_max)` over all finite-y entries, or `None` when the
/// slice has no usable sample.
#[must_use]
pub fn y_bounds(entries: &[Entry]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for entry in entries {
        if !entry.y.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(entry.y), max.max(entry.y)),
            None => (entry.y, entry.y),
        });
    }
    bounds
}
