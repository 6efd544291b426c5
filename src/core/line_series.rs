use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::display::DisplayMetrics;
use crate::core::fill::{DefaultFillFormatter, FillFormatter};
use crate::core::types::{Entry, y_bounds};
use crate::render::{CircleColorList, Color, ColorResolver, create_colors};

/// Interpolation strategy used when connecting the points of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineSeriesMode {
    /// Straight segments between adjacent points.
    #[default]
    Linear,
    /// Horizontal/vertical step segments.
    Stepped,
    /// Smoothed curve with free control points.
    CubicBezier,
    /// Smoothed curve with horizontally constrained control points.
    HorizontalBezier,
}

/// Repeating dashed-stroke description in pixel units.
///
/// Presence of a pattern on a series is what makes the line dashed; there is
/// no separate enabled flag to fall out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub segment_px: f64,
    pub gap_px: f64,
    pub phase_px: f64,
}

impl DashPattern {
    #[must_use]
    pub const fn new(segment_px: f64, gap_px: f64, phase_px: f64) -> Self {
        Self {
            segment_px,
            gap_px,
            phase_px,
        }
    }
}

const MIN_CUBIC_INTENSITY: f64 = 0.05;
const MAX_CUBIC_INTENSITY: f64 = 1.0;
const MIN_CIRCLE_RADIUS_DP: f64 = 1.0;
const MIN_CIRCLE_HOLE_RADIUS_DP: f64 = 0.5;

const DEFAULT_CUBIC_INTENSITY: f64 = 0.2;
const DEFAULT_CIRCLE_RADIUS_PX: f64 = 8.0;
const DEFAULT_CIRCLE_HOLE_RADIUS_PX: f64 = 4.0;

/// Mutable per-series rendering configuration for one plotted line.
///
/// The struct is a plain configuration record: chart-setup code mutates it
/// through the setters below and the renderer reads it back through the
/// capability traits in [`crate::core::capability`].
///
/// Access is single-threaded by contract, matching a UI-thread-bound render
/// pipeline. Shared fields (circle colors, gradient arrays, fill formatter)
/// are `Rc` handles and [`LineSeriesConfig::copy`] aliases them instead of
/// cloning, so a copy observes later in-place mutation of the original's
/// shared state. That aliasing is part of the contract, not an accident.
#[derive(Debug)]
pub struct LineSeriesConfig {
    entries: Vec<Entry>,
    label: String,
    display: DisplayMetrics,
    mode: LineSeriesMode,
    cubic_intensity: f64,
    gradient_enabled: bool,
    gradient_colors: Option<Rc<[Color]>>,
    gradient_positions: Option<Rc<[f64]>>,
    circle_colors: Rc<RefCell<CircleColorList>>,
    circle_hole_color: Color,
    circle_radius: f64,
    circle_hole_radius: f64,
    dash_pattern: Option<DashPattern>,
    fill_formatter: Rc<dyn FillFormatter>,
    draw_circles: bool,
    draw_circle_hole: bool,
}

impl LineSeriesConfig {
    #[must_use]
    pub fn new(entries: Vec<Entry>, label: impl Into<String>) -> Self {
        Self {
            entries,
            label: label.into(),
            display: DisplayMetrics::default(),
            mode: LineSeriesMode::default(),
            cubic_intensity: DEFAULT_CUBIC_INTENSITY,
            gradient_enabled: false,
            gradient_colors: None,
            gradient_positions: None,
            circle_colors: Rc::new(RefCell::new(create_colors(&[Color::rgb8(140, 234, 255)]))),
            circle_hole_color: Color::WHITE,
            circle_radius: DEFAULT_CIRCLE_RADIUS_PX,
            circle_hole_radius: DEFAULT_CIRCLE_HOLE_RADIUS_PX,
            dash_pattern: None,
            fill_formatter: Rc::new(DefaultFillFormatter),
            draw_circles: true,
            draw_circle_hole: true,
        }
    }

    /// Replaces the display-density collaborator used by radius setters.
    ///
    /// Already-stored pixel radii are not rescaled.
    #[must_use]
    pub fn with_display_metrics(mut self, display: DisplayMetrics) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn display_metrics(&self) -> DisplayMetrics {
        self.display
    }

    /// Returns `(y_min, y_max)` over the finite-y entries of this series.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        y_bounds(&self.entries)
    }

    pub fn set_mode(&mut self, mode: LineSeriesMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn mode(&self) -> LineSeriesMode {
        self.mode
    }

    /// Sets the curvature strength for the bezier modes.
    ///
    /// Input is clamped into `[0.05, 1.0]`; out-of-range values are adjusted
    /// silently rather than rejected.
    pub fn set_cubic_intensity(&mut self, intensity: f64) {
        self.cubic_intensity = intensity.clamp(MIN_CUBIC_INTENSITY, MAX_CUBIC_INTENSITY);
    }

    #[must_use]
    pub fn cubic_intensity(&self) -> f64 {
        self.cubic_intensity
    }

    /// Sets the radius of the drawn circle markers, in dp. Minimum 1.0 dp.
    ///
    /// Values below the minimum are logged and ignored; the previous radius
    /// stays in effect. Accepted values are stored converted to pixels.
    pub fn set_circle_radius(&mut self, radius_dp: f64) {
        if radius_dp >= MIN_CIRCLE_RADIUS_DP && radius_dp.is_finite() {
            self.circle_radius = self.display.dp_to_px(radius_dp);
        } else {
            warn!(
                radius_dp,
                minimum_dp = MIN_CIRCLE_RADIUS_DP,
                "circle radius below minimum; keeping previous value"
            );
        }
    }

    #[must_use]
    pub fn circle_radius(&self) -> f64 {
        self.circle_radius
    }

    /// Sets the hole radius of the drawn circle markers, in dp. Minimum 0.5 dp.
    ///
    /// Same reject policy as [`LineSeriesConfig::set_circle_radius`].
    pub fn set_circle_hole_radius(&mut self, hole_radius_dp: f64) {
        if hole_radius_dp >= MIN_CIRCLE_HOLE_RADIUS_DP && hole_radius_dp.is_finite() {
            self.circle_hole_radius = self.display.dp_to_px(hole_radius_dp);
        } else {
            warn!(
                hole_radius_dp,
                minimum_dp = MIN_CIRCLE_HOLE_RADIUS_DP,
                "circle hole radius below minimum; keeping previous value"
            );
        }
    }

    #[must_use]
    pub fn circle_hole_radius(&self) -> f64 {
        self.circle_hole_radius
    }

    #[deprecated(note = "unclear naming; use `set_circle_radius`")]
    pub fn set_circle_size(&mut self, size_dp: f64) {
        self.set_circle_radius(size_dp);
    }

    #[deprecated(note = "unclear naming; use `circle_radius`")]
    #[must_use]
    pub fn circle_size(&self) -> f64 {
        self.circle_radius()
    }

    /// Enables dashed drawing for this line, e.g. "- - - - -".
    pub fn enable_dashed_line(&mut self, segment_px: f64, gap_px: f64, phase_px: f64) {
        self.dash_pattern = Some(DashPattern::new(segment_px, gap_px, phase_px));
    }

    pub fn disable_dashed_line(&mut self) {
        self.dash_pattern = None;
    }

    #[must_use]
    pub fn is_dashed_line_enabled(&self) -> bool {
        self.dash_pattern.is_some()
    }

    #[must_use]
    pub fn dash_pattern(&self) -> Option<DashPattern> {
        self.dash_pattern
    }

    pub fn set_gradient_enabled(&mut self, enabled: bool) {
        self.gradient_enabled = enabled;
    }

    #[must_use]
    pub fn is_gradient_enabled(&self) -> bool {
        self.gradient_enabled
    }

    /// Stores custom gradient colors, or clears them with `None`.
    ///
    /// Stored as given: length agreement with the gradient positions is the
    /// caller's responsibility and is checked by the renderer contract, not
    /// here.
    pub fn set_gradient_colors(&mut self, colors: Option<Rc<[Color]>>) {
        self.gradient_colors = colors;
    }

    #[must_use]
    pub fn gradient_colors(&self) -> Option<Rc<[Color]>> {
        self.gradient_colors.clone()
    }

    /// Stores custom gradient color positions in `[0.0, 1.0]`, or clears them
    /// with `None`. Stored as given, like the colors.
    pub fn set_gradient_positions(&mut self, positions: Option<Rc<[f64]>>) {
        self.gradient_positions = positions;
    }

    #[must_use]
    pub fn gradient_positions(&self) -> Option<Rc<[f64]>> {
        self.gradient_positions.clone()
    }

    /// Returns the shared circle-color list handle.
    #[must_use]
    pub fn circle_colors(&self) -> Rc<RefCell<CircleColorList>> {
        Rc::clone(&self.circle_colors)
    }

    /// Returns the circle color for the given point index, wrapping by
    /// `index % count` so colors are reused cyclically when the series has
    /// more points than colors.
    ///
    /// # Panics
    /// Panics when the color list is empty. Circle drawing with an empty list
    /// is a caller error; the renderer must guard on
    /// [`LineSeriesConfig::circle_color_count`] first.
    #[must_use]
    pub fn circle_color(&self, index: usize) -> Color {
        let colors = self.circle_colors.borrow();
        colors[index % colors.len()]
    }

    #[must_use]
    pub fn circle_color_count(&self) -> usize {
        self.circle_colors.borrow().len()
    }

    /// Replaces the circle-color list with a new shared handle.
    ///
    /// Copies made earlier keep the previous list; this is the one circle
    /// color operation that breaks aliasing instead of mutating in place.
    pub fn set_circle_colors(&mut self, colors: CircleColorList) {
        self.circle_colors = Rc::new(RefCell::new(colors));
    }

    /// Builds a fresh circle-color list from the given colors and replaces
    /// the shared handle with it.
    ///
    /// Like [`LineSeriesConfig::set_circle_colors`], this rebinds the list
    /// rather than mutating it, so copies made earlier keep the previous
    /// colors.
    pub fn set_circle_color_values(&mut self, colors: &[Color]) {
        self.circle_colors = Rc::new(RefCell::new(create_colors(colors)));
    }

    /// Resolves host resource identifiers into the shared circle-color list,
    /// in place. Unresolvable ids are logged and skipped.
    pub fn set_circle_colors_from_resources(&mut self, ids: &[u32], resolver: &dyn ColorResolver) {
        let mut list = self.circle_colors.borrow_mut();
        list.clear();
        for &id in ids {
            match resolver.resolve(id) {
                Some(color) => list.push(color),
                None => {
                    warn!(resource_id = id, "unresolved circle color resource id; skipping");
                }
            }
        }
    }

    /// Sets the one and only circle color, clearing the shared list in place
    /// and pushing a single entry.
    pub fn set_circle_color(&mut self, color: Color) {
        let mut list = self.circle_colors.borrow_mut();
        list.clear();
        list.push(color);
    }

    /// Clears the shared circle-color list in place. Idempotent.
    pub fn reset_circle_colors(&mut self) {
        self.circle_colors.borrow_mut().clear();
    }

    pub fn set_circle_hole_color(&mut self, color: Color) {
        self.circle_hole_color = color;
    }

    #[must_use]
    pub fn circle_hole_color(&self) -> Color {
        self.circle_hole_color
    }

    pub fn set_draw_circles(&mut self, enabled: bool) {
        self.draw_circles = enabled;
    }

    #[must_use]
    pub fn is_draw_circles_enabled(&self) -> bool {
        self.draw_circles
    }

    pub fn set_draw_circle_hole(&mut self, enabled: bool) {
        self.draw_circle_hole = enabled;
    }

    #[must_use]
    pub fn is_draw_circle_hole_enabled(&self) -> bool {
        self.draw_circle_hole
    }

    /// Sets a custom fill formatter deciding where the filled area under the
    /// line ends. `None` restores the default policy; the formatter slot is
    /// never left empty.
    pub fn set_fill_formatter(&mut self, formatter: Option<Rc<dyn FillFormatter>>) {
        self.fill_formatter = formatter.unwrap_or_else(|| Rc::new(DefaultFillFormatter));
    }

    #[must_use]
    pub fn fill_formatter(&self) -> Rc<dyn FillFormatter> {
        Rc::clone(&self.fill_formatter)
    }

    /// Produces a copy with its own cloned entries and label.
    ///
    /// Circle colors, gradient arrays and the fill formatter remain shared
    /// handles between original and copy; scalars, flags and the dash pattern
    /// are copied by value.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            label: self.label.clone(),
            display: self.display,
            mode: self.mode,
            cubic_intensity: self.cubic_intensity,
            gradient_enabled: self.gradient_enabled,
            gradient_colors: self.gradient_colors.clone(),
            gradient_positions: self.gradient_positions.clone(),
            circle_colors: Rc::clone(&self.circle_colors),
            circle_hole_color: self.circle_hole_color,
            circle_radius: self.circle_radius,
            circle_hole_radius: self.circle_hole_radius,
            dash_pattern: self.dash_pattern,
            fill_formatter: Rc::clone(&self.fill_formatter),
            draw_circles: self.draw_circles,
            draw_circle_hole: self.draw_circle_hole,
        }
    }
}
