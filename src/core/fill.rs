use std::fmt;

use crate::core::LineSeriesConfig;

/// Vertical bounds the filling renderer sees: the chart's y-axis range plus
/// the combined range of all line data on that axis.
///
/// Implemented by the host chart; this crate only consumes it.
pub trait FillSurfaceContext {
    fn chart_y_min(&self) -> f64;
    fn chart_y_max(&self) -> f64;
    fn data_y_min(&self) -> f64;
    fn data_y_max(&self) -> f64;
}

/// Strategy computing the baseline y-value used when shading the area under
/// a line series.
///
/// `Debug` is required so configurations holding a formatter stay printable.
pub trait FillFormatter: fmt::Debug {
    fn fill_line_position(&self, series: &LineSeriesConfig, ctx: &dyn FillSurfaceContext) -> f64;
}

/// Default fill baseline policy.
///
/// A series straddling zero fills to the zero line. Otherwise a non-negative
/// series fills down to the chart minimum and a negative series fills up to
/// the chart maximum, with either bound snapped to zero when the combined
/// data range crosses zero on that side.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFillFormatter;

impl FillFormatter for DefaultFillFormatter {
    fn fill_line_position(&self, series: &LineSeriesConfig, ctx: &dyn FillSurfaceContext) -> f64 {
        let Some((series_min, series_max)) = series.y_bounds() else {
            return ctx.chart_y_min();
        };

        if series_max > 0.0 && series_min < 0.0 {
            return 0.0;
        }

        let max = if ctx.data_y_max() > 0.0 {
            0.0
        } else {
            ctx.chart_y_max()
        };
        let min = if ctx.data_y_min() < 0.0 {
            0.0
        } else {
            ctx.chart_y_min()
        };

        if series_min >= 0.0 { min } else { max }
    }
}
