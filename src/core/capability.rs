//! Read-only capability surfaces a renderer uses to query series
//! configurations polymorphically.
//!
//! One concrete config type implements a small set of composable traits
//! instead of an inheritance chain: stroke styling, circle-marker styling and
//! fill styling are independent concerns a renderer can depend on separately.

use std::rc::Rc;

use crate::core::fill::FillFormatter;
use crate::core::line_series::{DashPattern, LineSeriesConfig, LineSeriesMode};
use crate::render::Color;

/// Stroke styling queries: interpolation mode, curvature, dash pattern.
pub trait LineStyleCapability {
    fn mode(&self) -> LineSeriesMode;

    /// Curvature strength for the bezier modes, always in `[0.05, 1.0]`.
    fn cubic_intensity(&self) -> f64;

    /// `None` means a solid stroke.
    fn dash_pattern(&self) -> Option<DashPattern>;

    fn is_dashed_line_enabled(&self) -> bool {
        self.dash_pattern().is_some()
    }

    /// Legacy derived flag, equal to `mode() == CubicBezier`. Computed, never
    /// stored, so it cannot drift from the mode.
    #[deprecated(note = "query `mode` instead")]
    fn is_draw_cubic_enabled(&self) -> bool {
        self.mode() == LineSeriesMode::CubicBezier
    }

    /// Legacy derived flag, equal to `mode() == Stepped`.
    #[deprecated(note = "query `mode` instead")]
    fn is_draw_stepped_enabled(&self) -> bool {
        self.mode() == LineSeriesMode::Stepped
    }
}

/// Circle-marker styling queries.
pub trait CircleStyleCapability {
    /// Marker radius in pixels.
    fn circle_radius(&self) -> f64;

    /// Inner-hole radius in pixels.
    fn circle_hole_radius(&self) -> f64;

    /// Color for the marker at `index`, wrapping by `index % count`.
    ///
    /// Calling this with an empty color list is a caller error; guard on
    /// `circle_color_count` first.
    fn circle_color(&self, index: usize) -> Color;

    fn circle_color_count(&self) -> usize;

    fn circle_hole_color(&self) -> Color;

    fn is_draw_circles_enabled(&self) -> bool;

    fn is_draw_circle_hole_enabled(&self) -> bool;
}

/// Fill and gradient styling queries.
pub trait FillStyleCapability {
    fn is_gradient_enabled(&self) -> bool;

    /// Custom gradient colors, or `None` when unset. No length agreement with
    /// the positions array is guaranteed here; that is the renderer's
    /// precondition.
    fn gradient_colors(&self) -> Option<Rc<[Color]>>;

    /// Custom gradient positions in `[0.0, 1.0]`, or `None` when unset.
    fn gradient_positions(&self) -> Option<Rc<[f64]>>;

    /// The active fill formatter. Never absent; defaults are restored on
    /// unset.
    fn fill_formatter(&self) -> Rc<dyn FillFormatter>;
}

/// Full query surface for one line series, as consumed by the line renderer.
pub trait LineSeriesCapability:
    LineStyleCapability + CircleStyleCapability + FillStyleCapability
{
    fn label(&self) -> &str;

    fn entry_count(&self) -> usize;
}

impl LineStyleCapability for LineSeriesConfig {
    fn mode(&self) -> LineSeriesMode {
        LineSeriesConfig::mode(self)
    }

    fn cubic_intensity(&self) -> f64 {
        LineSeriesConfig::cubic_intensity(self)
    }

    fn dash_pattern(&self) -> Option<DashPattern> {
        LineSeriesConfig::dash_pattern(self)
    }
}

impl CircleStyleCapability for LineSeriesConfig {
    fn circle_radius(&self) -> f64 {
        LineSeriesConfig::circle_radius(self)
    }

    fn circle_hole_radius(&self) -> f64 {
        LineSeriesConfig::circle_hole_radius(self)
    }

    fn circle_color(&self, index: usize) -> Color {
        LineSeriesConfig::circle_color(self, index)
    }

    fn circle_color_count(&self) -> usize {
        LineSeriesConfig::circle_color_count(self)
    }

    fn circle_hole_color(&self) -> Color {
        LineSeriesConfig::circle_hole_color(self)
    }

    fn is_draw_circles_enabled(&self) -> bool {
        LineSeriesConfig::is_draw_circles_enabled(self)
    }

    fn is_draw_circle_hole_enabled(&self) -> bool {
        LineSeriesConfig::is_draw_circle_hole_enabled(self)
    }
}

impl FillStyleCapability for LineSeriesConfig {
    fn is_gradient_enabled(&self) -> bool {
        LineSeriesConfig::is_gradient_enabled(self)
    }

    fn gradient_colors(&self) -> Option<Rc<[Color]>> {
        LineSeriesConfig::gradient_colors(self)
    }

    fn gradient_positions(&self) -> Option<Rc<[f64]>> {
        LineSeriesConfig::gradient_positions(self)
    }

    fn fill_formatter(&self) -> Rc<dyn FillFormatter> {
        LineSeriesConfig::fill_formatter(self)
    }
}

impl LineSeriesCapability for LineSeriesConfig {
    fn label(&self) -> &str {
        LineSeriesConfig::label(self)
    }

    fn entry_count(&self) -> usize {
        LineSeriesConfig::entry_count(self)
    }
}
