use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Allocation-free typeface description returned per axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Typeface {
    pub weight: FontWeight,
    pub slant: FontSlant,
}

impl Typeface {
    #[must_use]
    pub const fn new(weight: FontWeight, slant: FontSlant) -> Self {
        Self { weight, slant }
    }
}

/// Axis descriptor handed to per-value style formatters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub axis_minimum: f64,
    pub axis_maximum: f64,
    pub label_text_size_px: f64,
    pub label_color: Color,
}

impl AxisConfig {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.axis_minimum.is_finite()
            || !self.axis_maximum.is_finite()
            || self.axis_minimum >= self.axis_maximum
        {
            return Err(ChartError::InvalidData(format!(
                "axis range must be finite with minimum < maximum, got [{}, {}]",
                self.axis_minimum, self.axis_maximum
            )));
        }
        if !self.label_text_size_px.is_finite() || self.label_text_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis label text size must be finite and > 0".to_owned(),
            ));
        }
        self.label_color.validate()
    }
}

/// Per-value style callback queried by the axis renderer for each drawn label.
///
/// Called once per label on the render hot path; implementations must stay
/// side-effect free and avoid allocation.
pub trait AxisStyleFormatter {
    fn typeface_for_value(&self, value: f64, axis: &AxisConfig) -> Typeface;
    fn text_color_for_value(&self, value: f64, axis: &AxisConfig) -> Color;
}

/// Uniform styling: every label gets the axis's configured color and a plain
/// typeface.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAxisStyleFormatter;

impl AxisStyleFormatter for DefaultAxisStyleFormatter {
    fn typeface_for_value(&self, _value: f64, _axis: &AxisConfig) -> Typeface {
        Typeface::default()
    }

    fn text_color_for_value(&self, _value: f64, axis: &AxisConfig) -> Color {
        axis.label_color
    }
}
