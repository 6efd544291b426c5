use std::rc::Rc;

use approx::assert_relative_eq;
use lineseries_rs::core::{
    DefaultFillFormatter, Entry, FillFormatter, FillSurfaceContext, LineSeriesConfig,
};

struct Surface {
    chart_y_min: f64,
    chart_y_max: f64,
    data_y_min: f64,
    data_y_max: f64,
}

impl FillSurfaceContext for Surface {
    fn chart_y_min(&self) -> f64 {
        self.chart_y_min
    }

    fn chart_y_max(&self) -> f64 {
        self.chart_y_max
    }

    fn data_y_min(&self) -> f64 {
        self.data_y_min
    }

    fn data_y_max(&self) -> f64 {
        self.data_y_max
    }
}

fn series(values: &[f64]) -> LineSeriesConfig {
    let entries = values
        .iter()
        .enumerate()
        .map(|(i, &y)| Entry::new(i as f64, y))
        .collect();
    LineSeriesConfig::new(entries, "fill")
}

#[test]
fn series_straddling_zero_fills_to_zero() {
    let config = series(&[-5.0, 3.0, 8.0]);
    let surface = Surface {
        chart_y_min: -10.0,
        chart_y_max: 10.0,
        data_y_min: -5.0,
        data_y_max: 8.0,
    };

    let baseline = DefaultFillFormatter.fill_line_position(&config, &surface);
    assert_relative_eq!(baseline, 0.0);
}

#[test]
fn non_negative_series_fills_to_chart_minimum() {
    let config = series(&[2.0, 4.0, 6.0]);
    let surface = Surface {
        chart_y_min: 1.0,
        chart_y_max: 7.0,
        data_y_min: 1.5,
        data_y_max: 6.5,
    };

    let baseline = DefaultFillFormatter.fill_line_position(&config, &surface);
    assert_relative_eq!(baseline, 1.0);
}

#[test]
fn non_negative_series_snaps_to_zero_when_data_range_dips_below() {
    let config = series(&[2.0, 4.0]);
    let surface = Surface {
        chart_y_min: -3.0,
        chart_y_max: 7.0,
        // Another series on the same axis goes negative.
        data_y_min: -2.0,
        data_y_max: 6.5,
    };

    let baseline = DefaultFillFormatter.fill_line_position(&config, &surface);
    assert_relative_eq!(baseline, 0.0);
}

#[test]
fn negative_series_fills_to_chart_maximum() {
    let config = series(&[-6.0, -2.0]);
    let surface = Surface {
        chart_y_min: -8.0,
        chart_y_max: -1.0,
        data_y_min: -7.0,
        data_y_max: -1.5,
    };

    let baseline = DefaultFillFormatter.fill_line_position(&config, &surface);
    assert_relative_eq!(baseline, -1.0);
}

#[test]
fn negative_series_snaps_to_zero_when_data_range_rises_above() {
    let config = series(&[-6.0, -2.0]);
    let surface = Surface {
        chart_y_min: -8.0,
        chart_y_max: 5.0,
        data_y_min: -7.0,
        data_y_max: 4.0,
    };

    let baseline = DefaultFillFormatter.fill_line_position(&config, &surface);
    assert_relative_eq!(baseline, 0.0);
}

#[test]
fn empty_series_falls_back_to_chart_minimum() {
    let config = series(&[]);
    let surface = Surface {
        chart_y_min: -4.0,
        chart_y_max: 4.0,
        data_y_min: -4.0,
        data_y_max: 4.0,
    };

    let baseline = DefaultFillFormatter.fill_line_position(&config, &surface);
    assert_relative_eq!(baseline, -4.0);
}

#[derive(Debug)]
struct FixedBaseline(f64);

impl FillFormatter for FixedBaseline {
    fn fill_line_position(&self, _series: &LineSeriesConfig, _ctx: &dyn FillSurfaceContext) -> f64 {
        self.0
    }
}

#[test]
fn unsetting_the_formatter_restores_the_default_policy() {
    let mut config = series(&[2.0, 4.0]);
    let surface = Surface {
        chart_y_min: 1.0,
        chart_y_max: 7.0,
        data_y_min: 1.5,
        data_y_max: 6.5,
    };

    config.set_fill_formatter(Some(Rc::new(FixedBaseline(42.0))));
    let custom = config.fill_formatter();
    assert_relative_eq!(custom.fill_line_position(&config, &surface), 42.0);

    config.set_fill_formatter(None);
    let restored = config.fill_formatter();
    assert!(!Rc::ptr_eq(&restored, &custom));
    assert_relative_eq!(restored.fill_line_position(&config, &surface), 1.0);
}
