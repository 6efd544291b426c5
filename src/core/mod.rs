pub mod axis;
pub mod capability;
pub mod display;
pub mod fill;
pub mod line_series;
pub mod types;

pub use axis::{
    AxisConfig, AxisStyleFormatter, DefaultAxisStyleFormatter, FontSlant, FontWeight, Typeface,
};
pub use capability::{
    CircleStyleCapability, FillStyleCapability, LineSeriesCapability, LineStyleCapability,
};
pub use display::DisplayMetrics;
pub use fill::{DefaultFillFormatter, FillFormatter, FillSurfaceContext};
pub use line_series::{DashPattern, LineSeriesConfig, LineSeriesMode};
pub use types::{Entry, y_bounds};
